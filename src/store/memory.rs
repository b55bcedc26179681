//! In-memory store backing both read interfaces. Loaded from JSON/CSV files at startup, or
//! filled directly in tests.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::sync::RwLock;

use async_trait::async_trait;
use serde::Deserialize;

use crate::models::{EntryId, LeagueId, Tournament, TournamentId};
use crate::store::errors::{StoreError, StoreResult};
use crate::store::repository::{
    LeagueDirectory, LeagueMembership, ParticipantLeagueMembership, TournamentStore,
};

/// One row of the membership CSV: `tournament_id,entry_id,league_id,league_name`.
/// An empty `tournament_id` makes it a user membership keyed by `entry_id`.
#[derive(Debug, Deserialize)]
struct MembershipRow {
    tournament_id: Option<TournamentId>,
    entry_id: EntryId,
    league_id: LeagueId,
    league_name: String,
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    tournaments: RwLock<HashMap<TournamentId, Tournament>>,
    user_leagues: RwLock<HashMap<EntryId, Vec<LeagueMembership>>>,
    participant_leagues: RwLock<HashMap<TournamentId, Vec<ParticipantLeagueMembership>>>,
}

fn poisoned() -> StoreError {
    StoreError::Unavailable("lock poisoned".to_string())
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a tournament. Invariant violations are logged, not rejected.
    pub fn insert_tournament(&self, tournament: Tournament) -> StoreResult<()> {
        if let Err(e) = tournament.check_invariants() {
            log::warn!("Tournament {} loaded with inconsistent rounds: {}", tournament.id, e);
        }
        let mut g = self.tournaments.write().map_err(|_| poisoned())?;
        g.insert(tournament.id, tournament);
        Ok(())
    }

    pub fn add_user_membership(
        &self,
        user_id: EntryId,
        league_id: LeagueId,
        league_name: impl Into<String>,
    ) -> StoreResult<()> {
        let mut g = self.user_leagues.write().map_err(|_| poisoned())?;
        g.entry(user_id).or_default().push(LeagueMembership {
            league_id,
            league_name: league_name.into(),
        });
        Ok(())
    }

    pub fn add_participant_membership(
        &self,
        tournament_id: TournamentId,
        entry_id: EntryId,
        league_id: LeagueId,
        league_name: impl Into<String>,
    ) -> StoreResult<()> {
        let mut g = self.participant_leagues.write().map_err(|_| poisoned())?;
        g.entry(tournament_id)
            .or_default()
            .push(ParticipantLeagueMembership {
                entry_id,
                league_id,
                league_name: league_name.into(),
            });
        Ok(())
    }

    /// Load a JSON array of tournaments. Returns how many were loaded.
    pub fn load_tournaments_json(&self, path: impl AsRef<Path>) -> StoreResult<usize> {
        let content = std::fs::read_to_string(path)?;
        self.load_tournaments_str(&content)
    }

    pub fn load_tournaments_str(&self, content: &str) -> StoreResult<usize> {
        let tournaments: Vec<Tournament> = serde_json::from_str(content)?;
        let n = tournaments.len();
        for t in tournaments {
            self.insert_tournament(t)?;
        }
        Ok(n)
    }

    /// Load the membership CSV (with header row). Returns how many rows were loaded.
    pub fn load_memberships_csv(&self, path: impl AsRef<Path>) -> StoreResult<usize> {
        let file = std::fs::File::open(path)?;
        self.load_memberships_reader(file)
    }

    pub fn load_memberships_reader<R: Read>(&self, reader: R) -> StoreResult<usize> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut count = 0;
        for row in rdr.deserialize() {
            let row: MembershipRow = row?;
            match row.tournament_id {
                Some(tournament_id) => self.add_participant_membership(
                    tournament_id,
                    row.entry_id,
                    row.league_id,
                    row.league_name,
                )?,
                None => self.add_user_membership(row.entry_id, row.league_id, row.league_name)?,
            }
            count += 1;
        }
        Ok(count)
    }

    pub fn tournament_ids(&self) -> StoreResult<Vec<TournamentId>> {
        let g = self.tournaments.read().map_err(|_| poisoned())?;
        Ok(g.keys().copied().collect())
    }

    fn get_tournament(&self, id: TournamentId) -> StoreResult<Tournament> {
        let g = self.tournaments.read().map_err(|_| poisoned())?;
        g.get(&id).cloned().ok_or(StoreError::TournamentNotFound(id))
    }

    fn get_user_leagues(&self, user_id: EntryId) -> StoreResult<Vec<LeagueMembership>> {
        let g = self.user_leagues.read().map_err(|_| poisoned())?;
        Ok(g.get(&user_id).cloned().unwrap_or_default())
    }

    fn get_participant_leagues(
        &self,
        tournament_id: TournamentId,
    ) -> StoreResult<Vec<ParticipantLeagueMembership>> {
        let g = self.participant_leagues.read().map_err(|_| poisoned())?;
        Ok(g.get(&tournament_id).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl TournamentStore for InMemoryStore {
    async fn load_tournament(&self, id: TournamentId) -> StoreResult<Tournament> {
        self.get_tournament(id)
    }
}

#[async_trait]
impl LeagueDirectory for InMemoryStore {
    async fn get_user_league_memberships(
        &self,
        user_id: EntryId,
    ) -> StoreResult<Vec<LeagueMembership>> {
        self.get_user_leagues(user_id)
    }

    async fn get_participant_league_memberships(
        &self,
        tournament_id: TournamentId,
    ) -> StoreResult<Vec<ParticipantLeagueMembership>> {
        self.get_participant_leagues(tournament_id)
    }
}
