use itertools::Itertools;
use ordered_float::OrderedFloat;

use bracket_entities::prelude::*;
use bracket_entities::domain::{CourtId, MatchId};

use super::resequence_court;


/// Moves a match to `new_position` on `new_court_id` and renumbers the
/// affected courts. The moved match gets a half-integer key so it sorts
/// between its new neighbours, then both courts are laid out again from
/// the tournament start.
pub fn reschedule_match(details: &TournamentDetails, match_id: MatchId, new_court_id: CourtId, new_position: i32) -> Result<Vec<TournamentMatch>, BracketError> {
    if new_position < 0 {
        return Err(BracketError::InvalidReschedule(format!("Position {} is negative", new_position)));
    }
    if !details.courts.iter().any(|c| c.id == new_court_id) {
        return Err(BracketError::not_found("Court", new_court_id));
    }

    let moved = details.find_match(match_id)?;
    let old_court_id = moved.court_id;
    let old_position = moved.position_in_schedule;

    if old_court_id == Some(new_court_id) && old_position == Some(new_position) {
        return Ok(vec![]);
    }

    let moved_key = match old_position {
        Some(old) if old_court_id == Some(new_court_id) && old < new_position => new_position as f64 + 0.5,
        _ => new_position as f64 - 0.5,
    };

    let affected_courts = [Some(new_court_id), old_court_id].into_iter().flatten().unique().collect::<Vec<_>>();
    let mut changed = vec![];

    for court_id in affected_courts {
        let queue = details.all_matches()
            .filter(|m| {
                if m.id == match_id {
                    court_id == new_court_id
                }
                else {
                    m.court_id == Some(court_id) && m.position_in_schedule.is_some()
                }
            })
            .map(|m| {
                let key = if m.id == match_id { moved_key } else { m.position_in_schedule.unwrap_or_default() as f64 };
                (OrderedFloat(key), m.id, m.clone())
            })
            .sorted_by_key(|(key, id, _)| (*key, *id))
            .map(|(_, _, m)| m)
            .collect::<Vec<_>>();

        changed.extend(resequence_court(court_id, queue, details.tournament.start_time));
    }

    Ok(changed)
}
