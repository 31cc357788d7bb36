use std::collections::HashMap;

use bracket_entities::prelude::*;
use bracket_entities::domain::{CourtId, MatchId};

use super::{normalize_positions, CourtCursor};


/// Fills the schedule gaps of a tournament. Matches that already have a
/// start time and position are left where they are.
///
/// Stage items of the first stage are spread over the courts in turn,
/// everything in later stages queues up on the last court.
/// Returns every match whose schedule changed.
pub fn schedule_all(details: &TournamentDetails) -> Result<Vec<TournamentMatch>, BracketError> {
    let pending = details.stages.iter()
        .flat_map(|s| s.items.iter())
        .flat_map(|i| i.rounds.iter())
        .filter(|r| !r.round.is_draft)
        .flat_map(|r| r.matches.iter())
        .any(|m| !m.is_scheduled());
    if !pending {
        return Ok(vec![]);
    }
    if details.courts.is_empty() {
        return Err(BracketError::NoCourts);
    }

    let all_matches = details.all_matches().cloned().collect::<Vec<_>>();
    let mut cursors = details.courts.iter()
        .map(|c| (c.id, CourtCursor::for_court(c.id, &all_matches, details.tournament.start_time)))
        .collect::<HashMap<CourtId, _>>();
    let court_ids = details.courts.iter().map(|c| c.id).collect::<Vec<_>>();
    let last_court = court_ids[court_ids.len() - 1];

    let mut placed: HashMap<MatchId, TournamentMatch> = HashMap::new();

    for (stage_idx, stage) in details.stages.iter().enumerate() {
        for (item_idx, item) in stage.items.iter().enumerate() {
            let item_court = if stage_idx == 0 { court_ids[item_idx % court_ids.len()] } else { last_court };

            for m in item.rounds.iter().filter(|r| !r.round.is_draft).flat_map(|r| r.matches.iter()) {
                if m.is_scheduled() {
                    continue;
                }
                let court_id = m.court_id.filter(|c| cursors.contains_key(c)).unwrap_or(item_court);
                let mut m = m.clone();
                if let Some(cursor) = cursors.get_mut(&court_id) {
                    cursor.place(&mut m);
                }
                placed.insert(m.id, m);
            }
        }
    }

    let scheduled = all_matches.into_iter()
        .map(|m| placed.remove(&m.id).unwrap_or(m))
        .collect::<Vec<_>>();
    let renumbered = normalize_positions(&scheduled)
        .into_iter()
        .map(|m| (m.id, m))
        .collect::<HashMap<_, _>>();

    Ok(scheduled.into_iter().filter_map(|m| {
        let original = details.all_matches().find(|o| o.id == m.id);
        let m = renumbered.get(&m.id).cloned().unwrap_or(m);
        match original {
            Some(original) if *original == m => None,
            _ => Some(m),
        }
    }).collect())
}
