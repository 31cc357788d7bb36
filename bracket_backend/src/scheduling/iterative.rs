use chrono::NaiveDateTime;
use rand::{seq::SliceRandom, Rng};
use serde::{Serialize, Deserialize};
use tracing::{debug, warn};

use bracket_entities::prelude::*;

use super::CourtCursor;


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IterativeSchedulingOptions {
    /// Rejected placements tolerated before a match is placed regardless.
    pub max_attempts: usize,
}

impl Default for IterativeSchedulingOptions {
    fn default() -> Self {
        IterativeSchedulingOptions { max_attempts: 100 }
    }
}

fn clashes_at_start(candidate: &TournamentMatch, start: NaiveDateTime, placed: &[TournamentMatch]) -> bool {
    placed.iter().any(|other| {
        other.id != candidate.id
            && other.start_time == Some(start)
            && candidate.input_ids().iter().any(|i| other.has_participant(*i))
    })
}

/// Randomized placement of an ad-hoc set of matches.
///
/// Each step takes the least loaded court and tries the next pending match
/// there. A match whose participant already plays at that exact start time
/// is rejected and the pending list reshuffled; after `max_attempts`
/// rejections in a row the match is placed anyway.
pub fn iterative_scheduling<R: Rng>(
    courts: &[Court],
    scheduled: &[TournamentMatch],
    pending: Vec<TournamentMatch>,
    tournament_start: NaiveDateTime,
    options: &IterativeSchedulingOptions,
    rng: &mut R,
) -> Result<Vec<TournamentMatch>, BracketError> {
    if pending.is_empty() {
        return Ok(vec![]);
    }
    if courts.is_empty() {
        return Err(BracketError::NoCourts);
    }

    let mut cursors = courts.iter().map(|c| CourtCursor::for_court(c.id, scheduled, tournament_start)).collect::<Vec<_>>();
    let mut placed = scheduled.iter().filter(|m| m.is_scheduled()).cloned().collect::<Vec<_>>();
    let mut out = vec![];
    let mut pending = pending;
    let mut attempts = 0;

    while !pending.is_empty() {
        let cursor = cursors.iter_mut()
            .min_by_key(|c| (c.load, c.next_start, c.court_id))
            .ok_or(BracketError::NoCourts)?;

        if clashes_at_start(&pending[0], cursor.next_start, &placed) && attempts < options.max_attempts {
            attempts += 1;
            pending.shuffle(rng);
            continue;
        }
        if attempts >= options.max_attempts {
            warn!("Forcing match {} onto court {} after {} attempts", pending[0].id, cursor.court_id, attempts);
        }

        let mut m = pending.remove(0);
        cursor.place(&mut m);
        debug!("Placed match {} on court {} at position {:?}", m.id, cursor.court_id, m.position_in_schedule);
        placed.push(m.clone());
        out.push(m);
        attempts = 0;
        pending.shuffle(rng);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::test_utils::*;
    use itertools::Itertools;
    use rand::{rngs::StdRng, SeedableRng};
    use tracing_test::traced_test;

    fn courts(n: i32) -> Vec<Court> {
        (1..=n).map(|id| Court { id, tournament_id: 1, name: format!("Court {}", id) }).collect()
    }

    #[test]
    fn test_places_every_match_without_same_start_clashes() {
        let pending = vec![
            unscheduled(1, 1, 2),
            unscheduled(2, 1, 3),
            unscheduled(3, 4, 5),
            unscheduled(4, 6, 7),
        ];
        let mut rng = StdRng::seed_from_u64(7);
        let out = iterative_scheduling(&courts(2), &[], pending, at(9, 0), &Default::default(), &mut rng).unwrap();

        assert_eq!(out.len(), 4);
        for pair in out.iter().combinations(2) {
            let shared = pair[0].input_ids().iter().any(|i| pair[1].has_participant(*i));
            if shared {
                assert_ne!(pair[0].start_time, pair[1].start_time);
            }
        }
        let loads = out.iter().map(|m| m.court_id).counts();
        assert_eq!(loads.values().copied().collect::<Vec<_>>(), vec![2, 2]);
    }

    #[test]
    fn test_same_seed_gives_same_schedule() {
        let pending = (1..=6).map(|i| unscheduled(i, i, i + 1)).collect::<Vec<_>>();
        let first = iterative_scheduling(&courts(3), &[], pending.clone(), at(9, 0), &Default::default(), &mut StdRng::seed_from_u64(3)).unwrap();
        let second = iterative_scheduling(&courts(3), &[], pending, at(9, 0), &Default::default(), &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(first, second);
    }

    #[traced_test]
    #[test]
    fn test_unavoidable_clash_is_forced() {
        let pending = vec![unscheduled(1, 1, 2), unscheduled(2, 1, 3)];
        let mut rng = StdRng::seed_from_u64(1);
        let options = IterativeSchedulingOptions { max_attempts: 5 };
        let out = iterative_scheduling(&courts(2), &[], pending, at(9, 0), &options, &mut rng).unwrap();

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].start_time, Some(at(9, 0)));
        assert_eq!(out[1].start_time, Some(at(9, 0)));
        assert!(logs_contain("Forcing match"));
    }
}
