//! Matchup resolution: each participant's match, opponent, status and result.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::logic::friends::get_tournament_friends;
use crate::logic::standings::participant_standings;
use crate::models::{
    EntryId, GameMatch, LeagueId, MatchPhase, MatchPlayer, MatchResult, MatchStatus, MatchupResult,
    Participant, Round, Tournament,
};
use crate::store::{LeagueDirectory, StoreResult};

/// Query options for [`get_tournament_matchups`].
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchupOptions {
    /// Only this round; otherwise each participant's latest matchup.
    #[serde(default)]
    pub round: Option<u32>,
    /// Keep friends only. With no friend data requested nobody is a friend.
    #[serde(default)]
    pub friends_only: bool,
    /// Querying user's entry id; friend data needs both this and `league_id`.
    #[serde(default)]
    pub user_id: Option<EntryId>,
    /// The tournament's origin league, never counted as shared.
    #[serde(default)]
    pub league_id: Option<LeagueId>,
}

/// Finished once the round is complete, live from its gameweek on, upcoming before.
pub fn match_phase(tournament: &Tournament, round: &Round) -> MatchPhase {
    if round.is_complete {
        MatchPhase::Finished
    } else if round.gameweek <= tournament.current_gameweek {
        MatchPhase::Live
    } else {
        MatchPhase::Upcoming
    }
}

/// Result for `me` against `opponent`. None unless both scores are known.
///
/// A complete round gives a confirmed `Won`/`Lost` from the match winner; an open round gives a
/// provisional `Winning`/`Losing`/`Tied` from the scores.
pub fn match_result(
    round: &Round,
    game: &GameMatch,
    me: &MatchPlayer,
    opponent: Option<&MatchPlayer>,
) -> Option<MatchResult> {
    let my_score = me.score?;
    let their_score = opponent?.score?;
    if round.is_complete {
        return Some(if game.winner_id == Some(me.entry_id) {
            MatchResult::Won
        } else {
            MatchResult::Lost
        });
    }
    Some(match my_score.cmp(&their_score) {
        std::cmp::Ordering::Greater => MatchResult::Winning,
        std::cmp::Ordering::Less => MatchResult::Losing,
        std::cmp::Ordering::Equal => MatchResult::Tied,
    })
}

/// Build one participant's matchup. Occupants missing from the participant list are skipped.
fn resolve_matchup(
    tournament: &Tournament,
    round: &Round,
    game: &GameMatch,
    me: &MatchPlayer,
) -> Option<MatchupResult> {
    let Some(participant) = tournament.participant(me.entry_id) else {
        log::debug!(
            "Skipping entry {} in round {}: not a participant",
            me.entry_id,
            round.round_number
        );
        return None;
    };
    let opponent: Option<(&MatchPlayer, &Participant)> = game
        .opponents_of(me.entry_id)
        .find_map(|p| tournament.participant(p.entry_id).map(|o| (p, o)));

    Some(MatchupResult {
        participant: participant.clone(),
        match_id: game.id,
        round_number: round.round_number,
        round_name: round.name.clone(),
        gameweek: round.gameweek,
        opponent: opponent.map(|(_, o)| o.clone()),
        score: me.score,
        opponent_score: opponent.and_then(|(p, _)| p.score),
        match_status: match_phase(tournament, round).into(),
        result: match_result(round, game, me, opponent.map(|(p, _)| p)),
        is_friend: None,
        shared_league_count: None,
    })
}

/// Latest-matchup variant: a finished match won by someone else reads as eliminated.
fn resolve_latest_matchup(
    tournament: &Tournament,
    round: &Round,
    game: &GameMatch,
    me: &MatchPlayer,
) -> Option<MatchupResult> {
    let mut matchup = resolve_matchup(tournament, round, game, me)?;
    let lost = game.winner_id.is_some_and(|w| w != me.entry_id);
    if matchup.match_status == MatchStatus::Finished && lost {
        matchup.match_status = MatchStatus::Eliminated;
    }
    Some(matchup)
}

/// Matchups without friend data.
///
/// With `round`, one result per occupant of that round (empty for an unknown round). Without it,
/// one result per participant from the last round they appear in. Rounds must be in ascending
/// order.
pub fn resolve_matchups(tournament: &Tournament, round: Option<u32>) -> Vec<MatchupResult> {
    match round {
        Some(round_number) => {
            let Some(round) = tournament.round(round_number) else {
                return Vec::new();
            };
            round
                .matches
                .iter()
                .flat_map(|game| game.players.iter().map(move |p| (game, p)))
                .filter_map(|(game, p)| resolve_matchup(tournament, round, game, p))
                .collect()
        }
        None => {
            let mut seen: HashSet<EntryId> = HashSet::new();
            let mut results = Vec::new();
            for round in tournament.rounds.iter().rev() {
                for game in &round.matches {
                    for p in &game.players {
                        if !seen.insert(p.entry_id) {
                            continue;
                        }
                        results.extend(resolve_latest_matchup(tournament, round, game, p));
                    }
                }
            }
            results
        }
    }
}

/// Latest matchup for a single participant.
pub fn get_participant_matchup(
    tournament: &Tournament,
    entry_id: EntryId,
) -> Option<MatchupResult> {
    tournament.rounds.iter().rev().find_map(|round| {
        let game = round.match_for(entry_id)?;
        let me = game.occupant(entry_id)?;
        resolve_latest_matchup(tournament, round, game, me)
    })
}

/// Matchups, optionally tagged with friend data and filtered to friends.
///
/// Friend data is fetched once when both `user_id` and `league_id` are given; read failures
/// propagate.
pub async fn get_tournament_matchups<D>(
    tournament: &Tournament,
    options: &MatchupOptions,
    directory: &D,
) -> StoreResult<Vec<MatchupResult>>
where
    D: LeagueDirectory + ?Sized,
{
    let friends: Option<HashMap<EntryId, usize>> = match (options.user_id, options.league_id) {
        (Some(user_id), Some(league_id)) => {
            let standings = participant_standings(tournament);
            let friends =
                get_tournament_friends(directory, tournament.id, league_id, user_id, &standings)
                    .await?;
            Some(
                friends
                    .into_iter()
                    .map(|f| (f.entry_id, f.shared_league_count))
                    .collect(),
            )
        }
        _ => None,
    };

    let mut results = resolve_matchups(tournament, options.round);

    if let Some(friends) = &friends {
        for matchup in &mut results {
            let shared = friends.get(&matchup.participant.entry_id).copied();
            matchup.is_friend = Some(shared.is_some());
            matchup.shared_league_count = shared;
        }
    }
    if options.friends_only {
        results.retain(|m| m.is_friend == Some(true));
    }
    Ok(results)
}
