//! Friend matching: participants who share an outside league with the querying user.

use std::collections::{HashMap, HashSet};

use crate::models::{EntryId, FriendInTournament, LeagueId, ParticipantStanding, TournamentId};
use crate::store::{LeagueDirectory, LeagueMembership, ParticipantLeagueMembership, StoreResult};

/// Friends of `user_id` among `participants`, most shared leagues first, then by team name.
///
/// Both membership reads run concurrently. The tournament's own league never counts.
pub async fn get_tournament_friends<D>(
    directory: &D,
    tournament_id: TournamentId,
    tournament_league_id: LeagueId,
    user_id: EntryId,
    participants: &[ParticipantStanding],
) -> StoreResult<Vec<FriendInTournament>>
where
    D: LeagueDirectory + ?Sized,
{
    let (user_leagues, memberships) = tokio::try_join!(
        directory.get_user_league_memberships(user_id),
        directory.get_participant_league_memberships(tournament_id),
    )?;

    let friends = match_friends(
        tournament_league_id,
        user_id,
        &user_leagues,
        &memberships,
        participants,
    );
    log::debug!(
        "Tournament {}: {} friend(s) for user {} across {} league(s)",
        tournament_id,
        friends.len(),
        user_id,
        user_leagues.len()
    );
    Ok(friends)
}

/// The set-intersection step of [`get_tournament_friends`], over already-fetched memberships.
pub fn match_friends(
    tournament_league_id: LeagueId,
    user_id: EntryId,
    user_leagues: &[LeagueMembership],
    memberships: &[ParticipantLeagueMembership],
    participants: &[ParticipantStanding],
) -> Vec<FriendInTournament> {
    let user_league_ids: HashSet<LeagueId> = user_leagues
        .iter()
        .map(|l| l.league_id)
        .filter(|&id| id != tournament_league_id)
        .collect();
    if user_league_ids.is_empty() {
        return Vec::new();
    }

    // entry -> shared (league id, name), in table order without repeats
    let mut shared: HashMap<EntryId, Vec<(LeagueId, &str)>> = HashMap::new();
    for m in memberships {
        if m.entry_id == user_id
            || m.league_id == tournament_league_id
            || !user_league_ids.contains(&m.league_id)
        {
            continue;
        }
        let leagues = shared.entry(m.entry_id).or_default();
        if !leagues.iter().any(|(id, _)| *id == m.league_id) {
            leagues.push((m.league_id, m.league_name.as_str()));
        }
    }

    let mut friends: Vec<FriendInTournament> = participants
        .iter()
        .filter(|s| s.participant.entry_id != user_id)
        .filter_map(|s| {
            let leagues = shared.get(&s.participant.entry_id)?;
            Some(FriendInTournament {
                entry_id: s.participant.entry_id,
                team_name: s.participant.team_name.clone(),
                manager_name: s.participant.manager_name.clone(),
                seed: s.participant.seed,
                shared_league_count: leagues.len(),
                shared_league_names: leagues.iter().map(|(_, name)| name.to_string()).collect(),
                status: s.status,
                eliminated_round: s.eliminated_round,
            })
        })
        .collect();

    friends.sort_by(|a, b| {
        b.shared_league_count
            .cmp(&a.shared_league_count)
            .then_with(|| a.team_name.cmp(&b.team_name))
    });
    friends
}
