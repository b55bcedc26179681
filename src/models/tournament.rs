//! Tournament aggregate and TournamentStatus.

use crate::models::game::Round;
use crate::models::participant::{EntryId, LeagueId, Participant};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors raised when a loaded tournament breaks the bracket invariants.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// `rounds.len()` disagrees with `total_rounds`.
    RoundCountMismatch { expected: u32, found: usize },
    /// Round numbers or gameweeks are not strictly increasing.
    RoundsOutOfOrder { round_number: u32 },
    /// No round with this number.
    UnknownRound(u32),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::RoundCountMismatch { expected, found } => {
                write!(f, "Expected {} rounds but found {}", expected, found)
            }
            TournamentError::RoundsOutOfOrder { round_number } => {
                write!(f, "Round {} is out of order", round_number)
            }
            TournamentError::UnknownRound(n) => write!(f, "Round {} not found", n),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

fn default_match_size() -> usize {
    2
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    #[default]
    Active,
    Completed,
}

/// Full tournament: participants and the round/match skeleton with scores so far.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    /// League the entrants were drawn from.
    pub league_id: LeagueId,
    /// Entrants per match (2 = head-to-head).
    #[serde(default = "default_match_size")]
    pub match_size: usize,
    pub current_round: u32,
    pub current_gameweek: u32,
    pub total_rounds: u32,
    #[serde(default)]
    pub status: TournamentStatus,
    pub participants: Vec<Participant>,
    /// Ascending by round number.
    pub rounds: Vec<Round>,
    #[serde(default)]
    pub winner_id: Option<EntryId>,
}

impl Tournament {
    /// Create an active tournament positioned at round 1.
    pub fn new(
        name: impl Into<String>,
        league_id: LeagueId,
        match_size: usize,
        participants: Vec<Participant>,
        rounds: Vec<Round>,
    ) -> Self {
        let current_gameweek = rounds.first().map(|r| r.gameweek).unwrap_or_default();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            league_id,
            match_size,
            current_round: 1,
            current_gameweek,
            total_rounds: rounds.len() as u32,
            status: TournamentStatus::Active,
            participants,
            rounds,
            winner_id: None,
        }
    }

    pub fn participant(&self, entry_id: EntryId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.entry_id == entry_id)
    }

    pub fn round(&self, round_number: u32) -> Option<&Round> {
        self.rounds.iter().find(|r| r.round_number == round_number)
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.round(self.current_round)
    }

    pub fn final_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    pub fn is_final_round(&self, round_number: u32) -> bool {
        round_number >= self.total_rounds
    }

    pub fn is_completed(&self) -> bool {
        self.status == TournamentStatus::Completed
    }

    /// Check the round skeleton against `total_rounds` and chronological ordering.
    pub fn check_invariants(&self) -> Result<(), TournamentError> {
        if self.rounds.len() != self.total_rounds as usize {
            return Err(TournamentError::RoundCountMismatch {
                expected: self.total_rounds,
                found: self.rounds.len(),
            });
        }
        for pair in self.rounds.windows(2) {
            if pair[1].round_number <= pair[0].round_number
                || pair[1].gameweek <= pair[0].gameweek
            {
                return Err(TournamentError::RoundsOutOfOrder {
                    round_number: pair[1].round_number,
                });
            }
        }
        if !self.is_completed() {
            let current = self
                .current_round()
                .ok_or(TournamentError::UnknownRound(self.current_round))?;
            if current.gameweek != self.current_gameweek {
                log::warn!(
                    "Tournament {}: current gameweek {} does not match round {} gameweek {}",
                    self.id,
                    self.current_gameweek,
                    current.round_number,
                    current.gameweek
                );
            }
        }
        Ok(())
    }
}
