//! Read interfaces to the systems of record, injected so tests can fake them.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::{EntryId, LeagueId, Tournament, TournamentId};
use crate::store::errors::StoreResult;

/// A league the querying user belongs to.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct LeagueMembership {
    pub league_id: LeagueId,
    pub league_name: String,
}

/// One (participant, league) pair, cached when the tournament was created.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct ParticipantLeagueMembership {
    pub entry_id: EntryId,
    pub league_id: LeagueId,
    pub league_name: String,
}

/// Loads fully populated tournaments.
#[async_trait]
pub trait TournamentStore: Send + Sync {
    /// Fails with `StoreError::TournamentNotFound` for an unknown id.
    async fn load_tournament(&self, id: TournamentId) -> StoreResult<Tournament>;
}

/// League memberships for users and tournament participants.
#[async_trait]
pub trait LeagueDirectory: Send + Sync {
    /// Leagues the user (identified by their entry id) belongs to.
    async fn get_user_league_memberships(
        &self,
        user_id: EntryId,
    ) -> StoreResult<Vec<LeagueMembership>>;

    /// Cached membership table for every participant in the tournament.
    async fn get_participant_league_memberships(
        &self,
        tournament_id: TournamentId,
    ) -> StoreResult<Vec<ParticipantLeagueMembership>>;
}
