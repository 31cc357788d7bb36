use std::collections::HashMap;

use itertools::Itertools;

use bracket_entities::prelude::*;
use bracket_entities::domain::MatchId;


/// Half-open `[start, end)` overlap. Matches without a start never overlap.
pub fn intervals_overlap(a: &TournamentMatch, b: &TournamentMatch) -> bool {
    match (a.start_time, a.end_time(), b.start_time, b.end_time()) {
        (Some(start_a), Some(end_a), Some(start_b), Some(end_b)) => start_a < end_b && start_b < end_a,
        _ => false,
    }
}

fn takes_part_in_conflicts(m: &TournamentMatch) -> bool {
    m.is_definitive() && m.start_time.is_some()
}

/// Recomputes both conflict flags of every match from scratch. A side is
/// flagged when its input plays another match at an overlapping time.
pub fn detect_conflicts(matches: &[TournamentMatch]) -> Vec<TournamentMatch> {
    let mut flags: HashMap<MatchId, (bool, bool)> = HashMap::new();

    let candidates = matches.iter().filter(|m| takes_part_in_conflicts(m)).collect::<Vec<_>>();
    for pair in candidates.iter().combinations(2) {
        let (a, b) = (*pair[0], *pair[1]);
        if a.id == b.id || !intervals_overlap(a, b) {
            continue;
        }
        for m in [a, b] {
            let other = if m.id == a.id { b } else { a };
            let entry = flags.entry(m.id).or_default();
            if m.side_1.input_id.map_or(false, |i| other.has_participant(i)) {
                entry.0 = true;
            }
            if m.side_2.input_id.map_or(false, |i| other.has_participant(i)) {
                entry.1 = true;
            }
        }
    }

    matches.iter().map(|m| {
        let (side_1, side_2) = flags.get(&m.id).copied().unwrap_or_default();
        let mut m = m.clone();
        m.side_1.conflict = side_1;
        m.side_2.conflict = side_2;
        m
    }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::test_utils::*;

    #[test]
    fn test_overlapping_matches_flag_shared_side() {
        let matches = vec![
            scheduled(1, 1, 2, 1, 0, at(9, 0)),
            scheduled(2, 3, 1, 2, 0, at(9, 5)),
            scheduled(3, 4, 5, 3, 0, at(9, 0)),
        ];
        let out = detect_conflicts(&matches);

        assert_eq!((out[0].side_1.conflict, out[0].side_2.conflict), (true, false));
        assert_eq!((out[1].side_1.conflict, out[1].side_2.conflict), (false, true));
        assert_eq!((out[2].side_1.conflict, out[2].side_2.conflict), (false, false));
    }

    #[test]
    fn test_touching_matches_do_not_conflict() {
        let matches = vec![
            scheduled(1, 1, 2, 1, 0, at(9, 0)),
            scheduled(2, 1, 3, 2, 0, at(9, 10)),
        ];
        let out = detect_conflicts(&matches);
        assert!(out.iter().all(|m| !m.side_1.conflict && !m.side_2.conflict));
    }

    #[test]
    fn test_stale_flags_are_cleared() {
        let mut stale = scheduled(1, 1, 2, 1, 0, at(9, 0));
        stale.side_1.conflict = true;
        stale.side_2.conflict = true;
        let mut unresolved = unscheduled(2, 1, 3);
        unresolved.side_2 = MatchSide::from_source(MatchSource::WinnerOf(1));
        unresolved.start_time = Some(at(9, 0));
        unresolved.side_1.conflict = true;

        let out = detect_conflicts(&[stale, unresolved]);
        assert!(out.iter().all(|m| !m.side_1.conflict && !m.side_2.conflict));
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let matches = vec![
            scheduled(1, 1, 2, 1, 0, at(9, 0)),
            scheduled(2, 2, 1, 2, 0, at(9, 0)),
        ];
        let once = detect_conflicts(&matches);
        let twice = detect_conflicts(&once);
        assert_eq!(once, twice);
        assert!(once.iter().all(|m| m.side_1.conflict && m.side_2.conflict));
    }
}
