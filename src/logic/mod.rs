//! Bracket engine: sizing, round names, matchups, next-opponent lookahead, friends.

mod bracket;
mod friends;
mod matchups;
mod sibling;
mod standings;

pub use bracket::{calculate_bracket_preview, get_round_name, round_names};
pub use friends::{get_tournament_friends, match_friends};
pub use matchups::{
    get_participant_matchup, get_tournament_matchups, match_phase, match_result, resolve_matchups,
    MatchupOptions,
};
pub use sibling::{find_sibling_match, get_next_opponent_for_participant, get_next_opponent_preview};
pub use standings::participant_standings;
