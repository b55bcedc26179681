//! Gameweek knockout engine: bracket sizing, matchup resolution, and friend matching over
//! already-loaded tournament data.

pub mod logic;
pub mod models;
pub mod store;

pub use logic::{
    calculate_bracket_preview, find_sibling_match, get_next_opponent_for_participant,
    get_next_opponent_preview, get_participant_matchup, get_round_name, get_tournament_friends,
    get_tournament_matchups, match_friends, match_phase, match_result, participant_standings,
    resolve_matchups, round_names, MatchupOptions,
};
pub use models::{
    BracketPreviewInfo, EntryId, FriendInTournament, GameMatch, LeagueId, MatchId, MatchPhase,
    MatchPlayer, MatchResult, MatchStatus, MatchupResult, NextOpponentPreview, Participant,
    ParticipantStanding, ParticipantStatus, PreviewPlayer, Round, RoundId, Tournament,
    TournamentError, TournamentId, TournamentStatus,
};
pub use store::{
    InMemoryStore, LeagueDirectory, LeagueMembership, ParticipantLeagueMembership, StoreError,
    StoreResult, TournamentStore,
};
