//! Data structures for knockout tournaments: participants, rounds, matches, and computed views.

mod game;
mod participant;
mod tournament;
mod views;

pub use game::{GameMatch, MatchId, MatchPlayer, Round, RoundId};
pub use participant::{EntryId, LeagueId, Participant, ParticipantStanding, ParticipantStatus};
pub use tournament::{Tournament, TournamentError, TournamentId, TournamentStatus};
pub use views::{
    BracketPreviewInfo, FriendInTournament, MatchPhase, MatchResult, MatchStatus, MatchupResult,
    NextOpponentPreview, PreviewPlayer,
};
