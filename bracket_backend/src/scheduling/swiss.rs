use chrono::NaiveDateTime;

use bracket_entities::prelude::*;

use super::CourtCursor;


/// Puts the matches of one Swiss round on the courts, one match per court,
/// each at the end of its court's queue.
///
/// With `adjust_to_time` every match starts at that time; the margin of the
/// previous match on the court is extended to cover the gap. Returns the
/// round's matches followed by any previous match whose margin grew.
pub fn schedule_swiss_round(
    round_matches: Vec<TournamentMatch>,
    courts: &[Court],
    existing: &[TournamentMatch],
    tournament_start: NaiveDateTime,
    adjust_to_time: Option<NaiveDateTime>,
) -> Result<Vec<TournamentMatch>, BracketError> {
    if round_matches.len() > courts.len() {
        return Err(BracketError::TooManyMatchesForCourts { matches: round_matches.len(), courts: courts.len() });
    }

    let others = existing.iter()
        .filter(|m| !round_matches.iter().any(|r| r.id == m.id))
        .collect::<Vec<_>>();

    let mut scheduled = vec![];
    let mut adjusted = vec![];

    for (mut m, court) in round_matches.into_iter().zip(courts.iter()) {
        let mut cursor = CourtCursor::for_court(court.id, others.iter().copied(), tournament_start);

        if let Some(target) = adjust_to_time {
            if target < cursor.next_start {
                return Err(BracketError::InfeasibleAdjustTime { court_id: court.id, requested: target, next_slot: cursor.next_start });
            }
            let last = others.iter()
                .filter(|o| o.court_id == Some(court.id) && o.is_scheduled())
                .max_by_key(|o| o.position_in_schedule);
            if let Some(last) = last {
                let gap = (target - cursor.next_start).num_minutes() as i32;
                if gap > 0 {
                    let mut last = (*last).clone();
                    last.custom_margin_minutes = Some(last.effective_margin_minutes() + gap);
                    adjusted.push(last);
                }
            }
            cursor.next_start = target;
        }

        cursor.place(&mut m);
        scheduled.push(m);
    }

    scheduled.extend(adjusted);
    Ok(scheduled)
}
