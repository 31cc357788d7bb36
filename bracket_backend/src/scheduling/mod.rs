//! Assignment of courts, queue positions and start times to matches.
//!
//! Every court holds a queue of matches ordered by `position_in_schedule`;
//! positions on a court are contiguous from zero and a match starts no
//! earlier than its predecessor's end plus margin.

use chrono::NaiveDateTime;
use itertools::Itertools;

use bracket_entities::prelude::*;
use bracket_entities::domain::CourtId;

mod batch;
mod iterative;
mod reschedule;
mod swiss;
mod officials;

pub use batch::schedule_all;
pub use iterative::{iterative_scheduling, IterativeSchedulingOptions};
pub use reschedule::reschedule_match;
pub use swiss::schedule_swiss_round;
pub use officials::assign_officials;


/// Where the next match on a court goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourtCursor {
    pub court_id: CourtId,
    pub next_position: i32,
    pub next_start: NaiveDateTime,
    pub load: usize,
}

impl CourtCursor {
    pub fn for_court<'a>(court_id: CourtId, matches: impl IntoIterator<Item = &'a TournamentMatch>, tournament_start: NaiveDateTime) -> Self {
        let mut cursor = CourtCursor { court_id, next_position: 0, next_start: tournament_start, load: 0 };
        for m in matches.into_iter().filter(|m| m.court_id == Some(court_id) && m.is_scheduled()) {
            cursor.load += 1;
            if let Some(position) = m.position_in_schedule {
                cursor.next_position = cursor.next_position.max(position + 1);
            }
            if let Some(next) = m.next_slot_start() {
                cursor.next_start = cursor.next_start.max(next);
            }
        }
        cursor
    }

    /// Puts `m` at the end of this court's queue.
    pub fn place(&mut self, m: &mut TournamentMatch) {
        m.court_id = Some(self.court_id);
        m.position_in_schedule = Some(self.next_position);
        m.start_time = Some(self.next_start);
        self.next_position += 1;
        self.load += 1;
        if let Some(next) = m.next_slot_start() {
            self.next_start = next;
        }
    }
}

/// Renumbers positions on every court to `0..k` keeping the current order.
/// Only matches whose position changed are returned.
pub fn normalize_positions(matches: &[TournamentMatch]) -> Vec<TournamentMatch> {
    let by_court = matches.iter()
        .filter(|m| m.is_scheduled())
        .filter_map(|m| m.court_id.map(|c| (c, m)))
        .into_group_map();

    let mut changed = vec![];
    for (_, court_matches) in by_court.into_iter().sorted_by_key(|(c, _)| *c) {
        let ordered = court_matches.into_iter()
            .sorted_by_key(|m| (m.position_in_schedule, m.start_time, m.id));
        for (position, m) in ordered.enumerate() {
            if m.position_in_schedule != Some(position as i32) {
                let mut m = m.clone();
                m.position_in_schedule = Some(position as i32);
                changed.push(m);
            }
        }
    }
    changed
}

/// Lays out `queue` back to back on `court_id`, starting at `start`.
/// Returns the matches whose schedule changed.
pub fn resequence_court(court_id: CourtId, queue: Vec<TournamentMatch>, start: NaiveDateTime) -> Vec<TournamentMatch> {
    let mut cursor = CourtCursor { court_id, next_position: 0, next_start: start, load: 0 };
    queue.into_iter().filter_map(|original| {
        let mut m = original.clone();
        cursor.place(&mut m);
        if m != original { Some(m) } else { None }
    }).collect()
}

#[cfg(test)]
pub(crate) mod test_utils {
    use chrono::{NaiveDate, NaiveDateTime};
    use bracket_entities::prelude::*;

    pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(hour, minute, 0).unwrap()
    }

    pub fn unscheduled(id: i32, a: i32, b: i32) -> TournamentMatch {
        TournamentMatch { id, ..TournamentMatch::new(1, MatchSide::input(a), MatchSide::input(b), 10, 5) }
    }

    pub fn scheduled(id: i32, a: i32, b: i32, court: i32, position: i32, start: NaiveDateTime) -> TournamentMatch {
        let mut m = unscheduled(id, a, b);
        m.court_id = Some(court);
        m.position_in_schedule = Some(position);
        m.start_time = Some(start);
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::test_utils::*;

    #[test]
    fn test_cursor_follows_existing_queue() {
        let matches = vec![
            scheduled(1, 1, 2, 1, 0, at(9, 0)),
            scheduled(2, 3, 4, 1, 1, at(9, 15)),
            scheduled(3, 5, 6, 2, 0, at(9, 0)),
        ];
        let cursor = CourtCursor::for_court(1, &matches, at(9, 0));
        assert_eq!(cursor.next_position, 2);
        assert_eq!(cursor.next_start, at(9, 30));
        assert_eq!(cursor.load, 2);

        let empty = CourtCursor::for_court(3, &matches, at(9, 0));
        assert_eq!((empty.next_position, empty.next_start), (0, at(9, 0)));
    }

    #[test]
    fn test_normalize_closes_gaps() {
        let matches = vec![
            scheduled(1, 1, 2, 1, 0, at(9, 0)),
            scheduled(2, 3, 4, 1, 4, at(9, 15)),
            scheduled(3, 5, 6, 1, 7, at(9, 30)),
        ];
        let changed = normalize_positions(&matches);
        assert_eq!(changed.iter().map(|m| (m.id, m.position_in_schedule)).collect::<Vec<_>>(), vec![(2, Some(1)), (3, Some(2))]);
    }
}
