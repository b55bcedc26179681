//! Read views computed on demand: bracket previews, matchups, next-opponent previews, friends.
//! None of these are stored.

use crate::models::game::MatchId;
use crate::models::participant::{EntryId, Participant, ParticipantStatus};
use serde::{Deserialize, Serialize};

/// Bracket shape for a given entrant count and match size.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketPreviewInfo {
    pub rounds: u32,
    pub total_slots: usize,
    pub bye_count: usize,
    /// First entry is round 1; the last is always 1.
    pub matches_per_round: Vec<usize>,
}

/// Timing of a match relative to the tournament's current gameweek.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    Live,
    Upcoming,
    Finished,
}

/// Status of a participant's matchup.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Live,
    Upcoming,
    Finished,
    /// Latest matchup is a finished loss.
    Eliminated,
}

impl From<MatchPhase> for MatchStatus {
    fn from(phase: MatchPhase) -> Self {
        match phase {
            MatchPhase::Live => MatchStatus::Live,
            MatchPhase::Upcoming => MatchStatus::Upcoming,
            MatchPhase::Finished => MatchStatus::Finished,
        }
    }
}

/// Outcome from the participant's point of view.
/// `Winning`/`Losing`/`Tied` are provisional (round still open); `Won`/`Lost` are confirmed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchResult {
    Winning,
    Losing,
    Tied,
    Won,
    Lost,
}

impl MatchResult {
    pub fn is_confirmed(self) -> bool {
        matches!(self, MatchResult::Won | MatchResult::Lost)
    }
}

/// One participant's resolved matchup.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchupResult {
    pub participant: Participant,
    pub match_id: MatchId,
    pub round_number: u32,
    pub round_name: String,
    pub gameweek: u32,
    /// None for a bye.
    pub opponent: Option<Participant>,
    pub score: Option<i32>,
    pub opponent_score: Option<i32>,
    pub match_status: MatchStatus,
    /// None while either score is missing.
    pub result: Option<MatchResult>,
    /// Present whenever friend data was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_friend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_league_count: Option<usize>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PreviewPlayer {
    pub participant: Participant,
    pub score: Option<i32>,
}

/// The match whose winner a participant meets next round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct NextOpponentPreview {
    pub match_id: MatchId,
    pub match_type: MatchPhase,
    pub is_bye: bool,
    pub players: Vec<PreviewPlayer>,
    pub winner_id: Option<EntryId>,
    /// Gameweek of the would-be meeting: sibling round gameweek + 1.
    pub next_gameweek: u32,
}

/// A participant sharing at least one outside league with the querying user.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FriendInTournament {
    pub entry_id: EntryId,
    pub team_name: String,
    pub manager_name: String,
    pub seed: u32,
    pub shared_league_count: usize,
    pub shared_league_names: Vec<String>,
    pub status: ParticipantStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eliminated_round: Option<u32>,
}
