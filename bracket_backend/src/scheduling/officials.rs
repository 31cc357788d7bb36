use std::collections::HashMap;

use itertools::Itertools;

use bracket_entities::prelude::*;
use bracket_entities::domain::OfficialId;

use crate::conflicts::intervals_overlap;


/// Gives every scheduled match without an official the least busy official
/// that is free for the whole match. Returns the matches that got one.
pub fn assign_officials(matches: &[TournamentMatch], officials: &[Official]) -> Vec<TournamentMatch> {
    let mut assigned: HashMap<OfficialId, Vec<TournamentMatch>> = officials.iter().map(|o| (o.id, vec![])).collect();
    for m in matches.iter() {
        if let Some(official_id) = m.official_id {
            assigned.entry(official_id).or_default().push(m.clone());
        }
    }

    let mut changed = vec![];
    let open = matches.iter()
        .filter(|m| m.official_id.is_none() && m.start_time.is_some())
        .sorted_by_key(|m| (m.start_time, m.court_id, m.position_in_schedule, m.id));

    for m in open {
        let candidate = officials.iter()
            .filter(|o| assigned.get(&o.id).map_or(true, |busy| busy.iter().all(|b| !intervals_overlap(m, b))))
            .min_by_key(|o| (assigned.get(&o.id).map_or(0, |busy| busy.len()), o.id));

        if let Some(official) = candidate {
            let mut m = m.clone();
            m.official_id = Some(official.id);
            assigned.entry(official.id).or_default().push(m.clone());
            changed.push(m);
        }
    }
    changed
}
