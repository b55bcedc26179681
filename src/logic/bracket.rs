//! Bracket sizing and round naming for brackets of any match size.

use crate::models::BracketPreviewInfo;

/// Pulls exact powers (e.g. ln(27)/ln(3) = 3.0000000000000004) back under the integer.
const LOG_EPSILON: f64 = 1e-9;

/// Rounds, slots, byes and matches per round for `participant_count` entrants in matches of
/// `match_size`.
///
/// Fewer than 2 entrants (or a match size below 2) gives the zero value: no bracket is possible.
pub fn calculate_bracket_preview(
    participant_count: usize,
    match_size: usize,
) -> BracketPreviewInfo {
    if participant_count < 2 || match_size < 2 {
        return BracketPreviewInfo::default();
    }

    let ratio = (participant_count as f64).ln() / (match_size as f64).ln();
    let mut rounds = (ratio - LOG_EPSILON).ceil().max(1.0) as u32;
    // Very large counts sit closer to a power than the epsilon; settle it with integers.
    while match_size.saturating_pow(rounds) < participant_count {
        rounds += 1;
    }
    while rounds > 1 && match_size.saturating_pow(rounds - 1) >= participant_count {
        rounds -= 1;
    }

    let total_slots = match_size.saturating_pow(rounds);
    let matches_per_round = (1..=rounds)
        .map(|round| match_size.saturating_pow(rounds - round))
        .collect();

    BracketPreviewInfo {
        rounds,
        total_slots,
        bye_count: total_slots - participant_count,
        matches_per_round,
    }
}

/// Display name for a round, counted back from the Final.
///
/// A 3-round bracket starts at "Quarter-Finals"; a 5-round bracket starts at "Round 1".
pub fn get_round_name(round_number: u32, total_rounds: u32) -> String {
    let from_end = i64::from(total_rounds) - i64::from(round_number);
    match from_end {
        0 => "Final".to_string(),
        1 => "Semi-Finals".to_string(),
        2 => "Quarter-Finals".to_string(),
        _ => format!("Round {}", round_number),
    }
}

/// Names for every round of a `total_rounds` bracket, round 1 first.
pub fn round_names(total_rounds: u32) -> Vec<String> {
    (1..=total_rounds)
        .map(|round| get_round_name(round, total_rounds))
        .collect()
}
