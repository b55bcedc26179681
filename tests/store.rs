//! Integration tests for the in-memory store and its JSON/CSV loaders.

mod common;

use common::{four_player_tournament, ORIGIN_LEAGUE};
use gameweek_knockout::{
    InMemoryStore, LeagueDirectory, StoreError, Tournament, TournamentError, TournamentStatus,
    TournamentStore,
};
use uuid::Uuid;

#[tokio::test]
async fn load_unknown_tournament_is_not_found() {
    let store = InMemoryStore::new();
    let id = Uuid::new_v4();
    assert_eq!(
        store.load_tournament(id).await.unwrap_err(),
        StoreError::TournamentNotFound(id)
    );
}

#[tokio::test]
async fn tournaments_round_trip_through_json() {
    let t = four_player_tournament(11);
    let json = serde_json::to_string(&vec![t.clone()]).unwrap();
    let store = InMemoryStore::new();
    assert_eq!(store.load_tournaments_str(&json).unwrap(), 1);
    assert_eq!(store.load_tournament(t.id).await.unwrap(), t);
    assert_eq!(store.tournament_ids().unwrap(), vec![t.id]);
}

#[test]
fn json_defaults_optional_fields() {
    let json = r#"[{
        "id": "5b7c8a9e-1f2d-4c3b-9a8e-7d6c5b4a3f21",
        "name": "Minimal",
        "league_id": 1,
        "current_round": 1,
        "current_gameweek": 3,
        "total_rounds": 1,
        "participants": [],
        "rounds": [{
            "id": "0e4a2c61-8b3f-4d7e-a1c9-2f5b6d8e9a01",
            "round_number": 1,
            "name": "Final",
            "gameweek": 3,
            "matches": [{
                "id": "3a1f9c2e-6d4b-4e8a-b7c5-1d2e3f4a5b61",
                "players": [{ "entry_id": 7 }]
            }]
        }]
    }]"#;
    let tournaments: Vec<Tournament> = serde_json::from_str(json).unwrap();
    let t = &tournaments[0];
    assert_eq!(t.match_size, 2);
    assert_eq!(t.status, TournamentStatus::Active);
    assert_eq!(t.winner_id, None);
    assert!(!t.rounds[0].is_complete);
    assert_eq!(t.rounds[0].matches[0].players[0].score, None);
    assert!(!t.rounds[0].matches[0].is_bye);
}

#[test]
fn bad_json_is_a_parse_error() {
    let store = InMemoryStore::new();
    assert!(matches!(
        store.load_tournaments_str("{not json"),
        Err(StoreError::Parse(_))
    ));
}

#[tokio::test]
async fn memberships_load_from_csv() {
    let tournament_id = Uuid::new_v4();
    let csv = format!(
        "tournament_id,entry_id,league_id,league_name\n\
         ,1,{ORIGIN_LEAGUE},Origin\n\
         ,1,600,Work\n\
         {tournament_id},2,600,Work\n\
         {tournament_id},3,700,\"Family, extended\"\n"
    );
    let store = InMemoryStore::new();
    assert_eq!(store.load_memberships_reader(csv.as_bytes()).unwrap(), 4);

    let user = store.get_user_league_memberships(1).await.unwrap();
    assert_eq!(user.len(), 2);
    assert_eq!(user[1].league_name, "Work");

    let rows = store.get_participant_league_memberships(tournament_id).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].league_name, "Family, extended");

    assert!(store.get_user_league_memberships(2).await.unwrap().is_empty());
    assert!(store
        .get_participant_league_memberships(Uuid::new_v4())
        .await
        .unwrap()
        .is_empty());
}

#[test]
fn malformed_csv_row_is_a_parse_error() {
    let csv = "tournament_id,entry_id,league_id,league_name\n,abc,600,Work\n";
    let store = InMemoryStore::new();
    assert!(matches!(
        store.load_memberships_reader(csv.as_bytes()),
        Err(StoreError::Parse(_))
    ));
}

#[test]
fn invariants_checked() {
    let t = four_player_tournament(11);
    assert_eq!(t.check_invariants(), Ok(()));

    let mut short = t.clone();
    short.total_rounds = 3;
    assert_eq!(
        short.check_invariants(),
        Err(TournamentError::RoundCountMismatch { expected: 3, found: 2 })
    );

    let mut swapped = t.clone();
    swapped.rounds.swap(0, 1);
    assert_eq!(
        swapped.check_invariants(),
        Err(TournamentError::RoundsOutOfOrder { round_number: 1 })
    );

    let mut lost = t;
    lost.current_round = 5;
    assert_eq!(lost.check_invariants(), Err(TournamentError::UnknownRound(5)));
}

#[test]
fn completed_tournament_skips_current_round_check() {
    let mut t = four_player_tournament(11);
    t.status = TournamentStatus::Completed;
    t.winner_id = Some(3);
    t.current_round = 5;
    assert_eq!(t.check_invariants(), Ok(()));
}

#[test]
fn model_lookups() {
    let t = four_player_tournament(11);
    assert_eq!(t.current_round().map(|r| r.round_number), Some(2));
    assert_eq!(t.final_round().map(|r| r.name.as_str()), Some("Final"));
    assert!(t.is_final_round(2));
    assert!(!t.is_final_round(1));
    assert_eq!(t.participant(3).map(|p| p.team_name.as_str()), Some("Charlie"));
    let round_1 = t.round(1).unwrap();
    let m = round_1.match_for(4).unwrap();
    assert_eq!(round_1.find_match(m.id), Some(m));
    assert_eq!(m.opponents_of(4).map(|p| p.entry_id).collect::<Vec<_>>(), vec![3]);
    assert_eq!(m.occupant(4).and_then(|p| p.score), Some(65));
}
