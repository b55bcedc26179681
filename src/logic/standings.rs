//! Who is still in, and where everyone else went out.

use crate::models::{ParticipantStanding, Tournament};

/// One standing per participant, in participant order.
///
/// A participant is eliminated in the first round where a decided match they played was won by
/// someone else.
pub fn participant_standings(tournament: &Tournament) -> Vec<ParticipantStanding> {
    tournament
        .participants
        .iter()
        .map(|p| {
            let lost_in = tournament.rounds.iter().find_map(|round| {
                round
                    .match_for(p.entry_id)
                    .and_then(|m| m.winner_id)
                    .filter(|&winner| winner != p.entry_id)
                    .map(|_| round.round_number)
            });
            match lost_in {
                Some(round_number) => ParticipantStanding::eliminated(p.clone(), round_number),
                None => ParticipantStanding::active(p.clone()),
            }
        })
        .collect()
}
