//! Read-only collaborator interfaces: tournament loading and league membership lookups.

mod errors;
mod memory;
mod repository;

pub use errors::{StoreError, StoreResult};
pub use memory::InMemoryStore;
pub use repository::{
    LeagueDirectory, LeagueMembership, ParticipantLeagueMembership, TournamentStore,
};
