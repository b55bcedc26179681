//! Integration tests for friend matching over league memberships.

mod common;

use async_trait::async_trait;
use common::{four_player_tournament, participant, ORIGIN_LEAGUE};
use gameweek_knockout::{
    get_tournament_friends, participant_standings, EntryId, InMemoryStore, LeagueDirectory,
    LeagueMembership, ParticipantLeagueMembership, ParticipantStanding, ParticipantStatus,
    StoreError, StoreResult, TournamentId,
};
use uuid::Uuid;

const USER: EntryId = 1;

fn standings() -> Vec<ParticipantStanding> {
    vec![
        ParticipantStanding::active(participant(USER, "Mine")),
        ParticipantStanding::active(participant(2, "Only Origin")),
        ParticipantStanding::active(participant(3, "Charlie")),
        ParticipantStanding::eliminated(participant(4, "Bravo"), 1),
        ParticipantStanding::active(participant(5, "Echo")),
        ParticipantStanding::active(participant(6, "alpha")),
    ]
}

fn store(tournament_id: TournamentId) -> InMemoryStore {
    let store = InMemoryStore::new();
    store.add_user_membership(USER, ORIGIN_LEAGUE, "Origin").unwrap();
    store.add_user_membership(USER, 600, "Work").unwrap();
    store.add_user_membership(USER, 700, "Family").unwrap();

    let rows: [(EntryId, u64, &str); 9] = [
        (USER, ORIGIN_LEAGUE, "Origin"),
        (USER, 600, "Work"),
        (2, ORIGIN_LEAGUE, "Origin"),
        (3, 600, "Work"),
        (4, 700, "Family"),
        (5, 600, "Work"),
        (5, 700, "Family"),
        (6, 700, "Family"),
        (6, 800, "Unrelated"),
    ];
    for (entry_id, league_id, name) in rows {
        store
            .add_participant_membership(tournament_id, entry_id, league_id, name)
            .unwrap();
    }
    store
}

#[tokio::test]
async fn friends_ranked_by_shared_count_then_name() {
    let id = Uuid::new_v4();
    let friends = get_tournament_friends(&store(id), id, ORIGIN_LEAGUE, USER, &standings())
        .await
        .unwrap();
    let names: Vec<_> = friends.iter().map(|f| f.team_name.as_str()).collect();
    // Byte-wise compare: uppercase sorts before lowercase.
    assert_eq!(names, vec!["Echo", "Bravo", "Charlie", "alpha"]);

    let echo = &friends[0];
    assert_eq!(echo.shared_league_count, 2);
    assert_eq!(echo.shared_league_names, vec!["Work", "Family"]);
    assert_eq!(friends[1].shared_league_count, 1);
    assert_eq!(friends[3].shared_league_names, vec!["Family"]);
}

#[tokio::test]
async fn origin_league_alone_is_not_friendship() {
    let id = Uuid::new_v4();
    let friends = get_tournament_friends(&store(id), id, ORIGIN_LEAGUE, USER, &standings())
        .await
        .unwrap();
    assert!(friends.iter().all(|f| f.entry_id != 2));
}

#[tokio::test]
async fn user_is_never_their_own_friend() {
    let id = Uuid::new_v4();
    let friends = get_tournament_friends(&store(id), id, ORIGIN_LEAGUE, USER, &standings())
        .await
        .unwrap();
    assert!(friends.iter().all(|f| f.entry_id != USER));
}

#[tokio::test]
async fn friend_carries_tournament_status() {
    let id = Uuid::new_v4();
    let friends = get_tournament_friends(&store(id), id, ORIGIN_LEAGUE, USER, &standings())
        .await
        .unwrap();
    let bravo = friends.iter().find(|f| f.entry_id == 4).unwrap();
    assert_eq!(bravo.status, ParticipantStatus::Eliminated);
    assert_eq!(bravo.eliminated_round, Some(1));
    assert_eq!(bravo.seed, 4);
    let charlie = friends.iter().find(|f| f.entry_id == 3).unwrap();
    assert_eq!(charlie.status, ParticipantStatus::In);
    assert_eq!(charlie.eliminated_round, None);
}

#[tokio::test]
async fn user_without_leagues_has_no_friends() {
    let id = Uuid::new_v4();
    let friends = get_tournament_friends(&store(id), id, ORIGIN_LEAGUE, 99, &standings())
        .await
        .unwrap();
    assert!(friends.is_empty());

    let empty = InMemoryStore::new();
    let friends = get_tournament_friends(&empty, id, ORIGIN_LEAGUE, USER, &standings())
        .await
        .unwrap();
    assert!(friends.is_empty());
}

#[tokio::test]
async fn duplicate_rows_count_once() {
    let id = Uuid::new_v4();
    let store = store(id);
    store.add_participant_membership(id, 3, 600, "Work").unwrap();
    let friends = get_tournament_friends(&store, id, ORIGIN_LEAGUE, USER, &standings())
        .await
        .unwrap();
    let charlie = friends.iter().find(|f| f.entry_id == 3).unwrap();
    assert_eq!(charlie.shared_league_count, 1);
}

#[tokio::test]
async fn standings_from_tournament() {
    let t = four_player_tournament(11);
    let standings = participant_standings(&t);
    let status: Vec<_> = standings
        .iter()
        .map(|s| (s.participant.entry_id, s.eliminated_round))
        .collect();
    assert_eq!(status, vec![(1, None), (2, Some(1)), (3, None), (4, Some(1))]);
    let out: Vec<_> = standings
        .iter()
        .filter(|s| s.is_eliminated())
        .map(|s| s.participant.entry_id)
        .collect();
    assert_eq!(out, vec![2, 4]);

    let store = InMemoryStore::new();
    store.add_user_membership(1, 600, "Work").unwrap();
    store.add_participant_membership(t.id, 2, 600, "Work").unwrap();
    let friends = get_tournament_friends(&store, t.id, ORIGIN_LEAGUE, 1, &standings)
        .await
        .unwrap();
    assert_eq!(friends.len(), 1);
    assert_eq!(friends[0].status, ParticipantStatus::Eliminated);
}

struct FailingDirectory;

#[async_trait]
impl LeagueDirectory for FailingDirectory {
    async fn get_user_league_memberships(
        &self,
        _user_id: EntryId,
    ) -> StoreResult<Vec<LeagueMembership>> {
        Ok(vec![LeagueMembership {
            league_id: 600,
            league_name: "Work".to_string(),
        }])
    }

    async fn get_participant_league_memberships(
        &self,
        _tournament_id: TournamentId,
    ) -> StoreResult<Vec<ParticipantLeagueMembership>> {
        Err(StoreError::Unavailable("membership cache offline".to_string()))
    }
}

#[tokio::test]
async fn read_failure_propagates() {
    let tournament_id = Uuid::new_v4();
    let err = get_tournament_friends(
        &FailingDirectory,
        tournament_id,
        ORIGIN_LEAGUE,
        USER,
        &standings(),
    )
    .await
    .unwrap_err();
    assert_eq!(err, StoreError::Unavailable("membership cache offline".to_string()));
}
