//! Errors raised by the tournament and league-membership reads.

use crate::models::TournamentId;

/// Errors from collaborator reads. Passed to callers unchanged; nothing here retries.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StoreError {
    /// No tournament with this id.
    TournamentNotFound(TournamentId),
    /// Reading a data file failed.
    Io(String),
    /// A data file could not be decoded.
    Parse(String),
    /// The backing store could not serve the read (e.g. a poisoned lock).
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::TournamentNotFound(id) => write!(f, "Tournament {} not found", id),
            StoreError::Io(msg) => write!(f, "I/O error: {}", msg),
            StoreError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StoreError::Unavailable(msg) => write!(f, "Store unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Parse(e.to_string())
    }
}

impl From<csv::Error> for StoreError {
    fn from(e: csv::Error) -> Self {
        StoreError::Parse(e.to_string())
    }
}
