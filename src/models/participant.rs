//! Participant and ParticipantStanding data structures.

use serde::{Deserialize, Serialize};

/// External fantasy team ("entry") id. Identifies a participant, and the querying user.
pub type EntryId = u64;

/// External league id.
pub type LeagueId = u64;

/// A participant in the tournament. Fixed once the bracket is created.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub entry_id: EntryId,
    /// Fantasy team name (display name).
    pub team_name: String,
    pub manager_name: String,
    /// 1 = strongest.
    pub seed: u32,
}

impl Participant {
    pub fn new(
        entry_id: EntryId,
        team_name: impl Into<String>,
        manager_name: impl Into<String>,
        seed: u32,
    ) -> Self {
        Self {
            entry_id,
            team_name: team_name.into(),
            manager_name: manager_name.into(),
            seed,
        }
    }
}

/// Whether a participant is still alive in the bracket.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantStatus {
    #[default]
    In,
    Eliminated,
}

/// Status view of a participant (for friend lists / display).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ParticipantStanding {
    pub participant: Participant,
    pub status: ParticipantStatus,
    /// Round in which the participant lost; None while still in.
    pub eliminated_round: Option<u32>,
}

impl ParticipantStanding {
    pub fn active(participant: Participant) -> Self {
        Self {
            participant,
            status: ParticipantStatus::In,
            eliminated_round: None,
        }
    }

    pub fn eliminated(participant: Participant, round_number: u32) -> Self {
        Self {
            participant,
            status: ParticipantStatus::Eliminated,
            eliminated_round: Some(round_number),
        }
    }

    pub fn is_eliminated(&self) -> bool {
        self.status == ParticipantStatus::Eliminated
    }
}
