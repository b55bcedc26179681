//! Fixtures shared by the integration tests.
#![allow(dead_code)]

use gameweek_knockout::{
    get_round_name, EntryId, GameMatch, MatchPlayer, Participant, Round, Tournament,
};

pub const ORIGIN_LEAGUE: u64 = 500;

pub fn participant(entry_id: EntryId, team_name: &str) -> Participant {
    Participant::new(entry_id, team_name, format!("Manager {entry_id}"), entry_id as u32)
}

fn slot((entry_id, score): (EntryId, Option<i32>)) -> MatchPlayer {
    match score {
        Some(score) => MatchPlayer::with_score(entry_id, score),
        None => MatchPlayer::new(entry_id),
    }
}

pub fn head_to_head(a: (EntryId, Option<i32>), b: (EntryId, Option<i32>)) -> GameMatch {
    GameMatch::new(vec![slot(a), slot(b)])
}

/// 4 entrants, 2 rounds. Round 1 (gameweek 10) is complete: Alpha beat Bravo 60-55 and Charlie
/// beat Delta 70-65. The Final (gameweek 11) is Alpha 45 v Charlie 50, still open.
pub fn four_player_tournament(current_gameweek: u32) -> Tournament {
    let participants = vec![
        participant(1, "Alpha"),
        participant(2, "Bravo"),
        participant(3, "Charlie"),
        participant(4, "Delta"),
    ];
    let round_1 = Round::new(
        1,
        get_round_name(1, 2),
        10,
        vec![
            head_to_head((1, Some(60)), (2, Some(55))).with_winner(1),
            head_to_head((3, Some(70)), (4, Some(65))).with_winner(3),
        ],
    )
    .completed();
    let round_2 = Round::new(
        2,
        get_round_name(2, 2),
        11,
        vec![head_to_head((1, Some(45)), (3, Some(50)))],
    );
    let rounds = vec![round_1, round_2];
    let mut t = Tournament::new("Office Cup", ORIGIN_LEAGUE, 2, participants, rounds);
    t.current_round = 2;
    t.current_gameweek = current_gameweek;
    t
}

/// 7 entrants in an 8-slot bracket; entry 5 has a bye. Round 1 is gameweek 5 and still open.
/// Round 1 order: [1 v 4], [5 bye], [3 v 6], [2 v 7].
pub fn seven_player_tournament(current_gameweek: u32) -> Tournament {
    let participants = (1..=7)
        .map(|id| participant(id, &format!("Team {id}")))
        .collect();
    let round_1 = Round::new(
        1,
        get_round_name(1, 3),
        5,
        vec![
            head_to_head((1, Some(40)), (4, Some(38))),
            GameMatch::bye(5),
            head_to_head((3, None), (6, None)),
            head_to_head((2, Some(51)), (7, Some(51))),
        ],
    );
    let round_2 = Round::new(
        2,
        get_round_name(2, 3),
        6,
        vec![GameMatch::new(Vec::new()), GameMatch::new(Vec::new())],
    );
    let round_3 = Round::new(3, get_round_name(3, 3), 7, vec![GameMatch::new(Vec::new())]);
    let mut t = Tournament::new(
        "Seven Cup",
        ORIGIN_LEAGUE,
        2,
        participants,
        vec![round_1, round_2, round_3],
    );
    t.current_gameweek = current_gameweek;
    t
}
