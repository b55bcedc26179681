//! Next-opponent lookahead: the match in the same round whose winner a participant meets next.

use crate::logic::matchups::match_phase;
use crate::models::{
    EntryId, GameMatch, MatchId, MatchPhase, NextOpponentPreview, PreviewPlayer, Round, Tournament,
};

/// The other match in `match_id`'s feeder block.
///
/// Matches are laid out in bracket order, so each block of `match_size` consecutive matches feeds
/// one next-round match (for head-to-head, matches 0/1, 2/3, ...). None in the Final, for an
/// unknown round or match, or when the block has no other match.
///
/// Only the first other match of the block is returned. With `match_size > 2` the remaining
/// matches of the block also feed the participant's next match and are not part of the result.
pub fn find_sibling_match(
    tournament: &Tournament,
    match_id: MatchId,
    round_number: u32,
) -> Option<(&Round, &GameMatch)> {
    if tournament.is_final_round(round_number) {
        return None;
    }
    let round = tournament.round(round_number)?;
    let idx = round.matches.iter().position(|m| m.id == match_id)?;
    let block = tournament.match_size.max(2);
    let start = idx / block * block;
    let end = (start + block).min(round.matches.len());
    round.matches[start..end]
        .iter()
        .enumerate()
        .find(|(offset, _)| start + offset != idx)
        .map(|(_, sibling)| (round, sibling))
}

/// Preview of the sibling match, or None when there is nobody further to preview.
///
/// A bye sibling is always shown finished with its sole occupant as winner; it has no gameweek in
/// which the outcome could change.
pub fn get_next_opponent_preview(
    tournament: &Tournament,
    match_id: MatchId,
    round_number: u32,
) -> Option<NextOpponentPreview> {
    let (round, sibling) = find_sibling_match(tournament, match_id, round_number)?;
    if sibling.players.is_empty() {
        return None;
    }

    let players: Vec<PreviewPlayer> = sibling
        .players
        .iter()
        .filter_map(|p| {
            tournament.participant(p.entry_id).map(|participant| PreviewPlayer {
                participant: participant.clone(),
                score: p.score,
            })
        })
        .collect();
    let next_gameweek = round.gameweek.saturating_add(1);

    if sibling.is_single_occupant() {
        return Some(NextOpponentPreview {
            match_id: sibling.id,
            match_type: MatchPhase::Finished,
            is_bye: true,
            players,
            winner_id: sibling.players.first().map(|p| p.entry_id),
            next_gameweek,
        });
    }

    Some(NextOpponentPreview {
        match_id: sibling.id,
        match_type: match_phase(tournament, round),
        is_bye: false,
        players,
        winner_id: sibling.winner_id,
        next_gameweek,
    })
}

/// Preview for a participant's latest match. None once they are out.
pub fn get_next_opponent_for_participant(
    tournament: &Tournament,
    entry_id: EntryId,
) -> Option<NextOpponentPreview> {
    let (round, game) = tournament
        .rounds
        .iter()
        .rev()
        .find_map(|round| round.match_for(entry_id).map(|game| (round, game)))?;
    if game.winner_id.is_some_and(|w| w != entry_id) {
        return None;
    }
    get_next_opponent_preview(tournament, game.id, round.round_number)
}
