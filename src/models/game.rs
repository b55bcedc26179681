//! Match, MatchPlayer and Round: one round per gameweek, N-way matches.

use crate::models::participant::EntryId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Unique identifier for a round.
pub type RoundId = Uuid;

/// One occupied slot in a match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchPlayer {
    pub entry_id: EntryId,
    /// None until the gameweek has started.
    #[serde(default)]
    pub score: Option<i32>,
}

impl MatchPlayer {
    pub fn new(entry_id: EntryId) -> Self {
        Self {
            entry_id,
            score: None,
        }
    }

    pub fn with_score(entry_id: EntryId, score: i32) -> Self {
        Self {
            entry_id,
            score: Some(score),
        }
    }
}

/// A single match: 2..N players (2 = head-to-head), or one player on a bye.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub players: Vec<MatchPlayer>,
    /// None until the match is decided.
    #[serde(default)]
    pub winner_id: Option<EntryId>,
    #[serde(default)]
    pub is_bye: bool,
}

impl GameMatch {
    pub fn new(players: Vec<MatchPlayer>) -> Self {
        Self {
            id: Uuid::new_v4(),
            players,
            winner_id: None,
            is_bye: false,
        }
    }

    /// A bye: one real entrant, who advances automatically.
    pub fn bye(entry_id: EntryId) -> Self {
        Self {
            id: Uuid::new_v4(),
            players: vec![MatchPlayer::new(entry_id)],
            winner_id: Some(entry_id),
            is_bye: true,
        }
    }

    pub fn with_winner(mut self, entry_id: EntryId) -> Self {
        self.winner_id = Some(entry_id);
        self
    }

    pub fn has_player(&self, entry_id: EntryId) -> bool {
        self.players.iter().any(|p| p.entry_id == entry_id)
    }

    pub fn occupant(&self, entry_id: EntryId) -> Option<&MatchPlayer> {
        self.players.iter().find(|p| p.entry_id == entry_id)
    }

    /// Everyone in the match except `entry_id`, in slot order.
    pub fn opponents_of(&self, entry_id: EntryId) -> impl Iterator<Item = &MatchPlayer> {
        self.players.iter().filter(move |p| p.entry_id != entry_id)
    }

    /// Single occupant, regardless of how the flag was stored.
    pub fn is_single_occupant(&self) -> bool {
        self.players.len() == 1
    }
}

/// One round of the bracket, played over exactly one gameweek.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub id: RoundId,
    /// 1-indexed.
    pub round_number: u32,
    pub name: String,
    pub gameweek: u32,
    /// Set once every match in the round has a determined outcome.
    #[serde(default)]
    pub is_complete: bool,
    /// Bracket order: consecutive blocks of `match_size` matches feed one next-round match.
    pub matches: Vec<GameMatch>,
}

impl Round {
    pub fn new(
        round_number: u32,
        name: impl Into<String>,
        gameweek: u32,
        matches: Vec<GameMatch>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            round_number,
            name: name.into(),
            gameweek,
            is_complete: false,
            matches,
        }
    }

    pub fn completed(mut self) -> Self {
        self.is_complete = true;
        self
    }

    pub fn find_match(&self, match_id: MatchId) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.id == match_id)
    }

    /// The match `entry_id` plays in this round, if any.
    pub fn match_for(&self, entry_id: EntryId) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.has_player(entry_id))
    }
}
