use std::collections::HashSet;

use bracket_entities::prelude::BracketPosition;
use bracket_entities::domain::StageItemInputId;

use super::{unordered_pair, BracketPlan, PlannedSide};


pub fn rounds_for_round_robin(team_count: usize) -> usize {
    if team_count < 2 {
        return 0;
    }
    let pairs = team_count * (team_count - 1) / 2;
    let per_round = team_count / 2;
    (pairs + per_round - 1) / per_round
}

/// Circle method: the first entry stays fixed while the others rotate, so
/// every input meets every other input exactly once and nobody plays twice
/// in the same round. An odd field gets a resting slot.
///
/// New rounds are numbered after the `existing_rounds` of the stage item.
pub fn build_round_robin(inputs: &[StageItemInputId], already_paired: &HashSet<(StageItemInputId, StageItemInputId)>, existing_rounds: usize) -> BracketPlan {
    let mut plan = BracketPlan::default();
    let num_rounds = rounds_for_round_robin(inputs.len());
    if num_rounds == 0 {
        return plan;
    }

    let mut circle: Vec<Option<StageItemInputId>> = inputs.iter().copied().map(Some).collect();
    if circle.len() % 2 == 1 {
        circle.push(None);
    }
    let n = circle.len();

    for _ in 0..num_rounds {
        let pairs = (0..n / 2)
            .filter_map(|i| match (circle[i], circle[n - 1 - i]) {
                (Some(a), Some(b)) if !already_paired.contains(&unordered_pair(a, b)) => Some((a, b)),
                _ => None,
            })
            .collect::<Vec<_>>();

        if !pairs.is_empty() {
            let round = plan.add_round(format!("Round {}", existing_rounds + plan.rounds.len() + 1), BracketPosition::None);
            for (a, b) in pairs {
                plan.add_match(round, PlannedSide::Input(a), PlannedSide::Input(b));
            }
        }

        circle[1..].rotate_right(1);
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn pairs_of(plan: &BracketPlan) -> Vec<(StageItemInputId, StageItemInputId)> {
        plan.matches.iter().map(|m| match (m.side_1, m.side_2) {
            (PlannedSide::Input(a), PlannedSide::Input(b)) => unordered_pair(a, b),
            _ => panic!("Round robin matches must be bound to inputs"),
        }).collect()
    }

    #[test]
    fn test_round_count_formula() {
        assert_eq!(rounds_for_round_robin(0), 0);
        assert_eq!(rounds_for_round_robin(1), 0);
        assert_eq!(rounds_for_round_robin(2), 1);
        assert_eq!(rounds_for_round_robin(4), 3);
        assert_eq!(rounds_for_round_robin(5), 5);
        assert_eq!(rounds_for_round_robin(6), 5);
        assert_eq!(rounds_for_round_robin(7), 7);
    }

    #[test]
    fn test_every_pair_meets_once() {
        for n in 2..=9 {
            let inputs = (1..=n as i32).collect::<Vec<_>>();
            let plan = build_round_robin(&inputs, &HashSet::new(), 0);
            let pairs = pairs_of(&plan);

            assert_eq!(pairs.len(), n * (n - 1) / 2);
            assert_eq!(pairs.iter().collect::<HashSet<_>>().len(), pairs.len());
            assert_eq!(plan.rounds.len(), rounds_for_round_robin(n));
        }
    }

    #[test]
    fn test_nobody_plays_twice_in_a_round() {
        let inputs = (1..=7).collect::<Vec<_>>();
        let plan = build_round_robin(&inputs, &HashSet::new(), 0);

        let mut seen: HashMap<usize, HashSet<StageItemInputId>> = HashMap::new();
        for m in plan.matches.iter() {
            let round = seen.entry(m.round).or_default();
            for side in [m.side_1, m.side_2] {
                if let PlannedSide::Input(id) = side {
                    assert!(round.insert(id), "input {} plays twice in round {}", id, m.round);
                }
            }
        }
    }

    #[test]
    fn test_existing_pairs_are_skipped() {
        let inputs = vec![1, 2, 3, 4];
        let already = HashSet::from([(1, 2), (3, 4)]);
        let plan = build_round_robin(&inputs, &already, 0);

        let pairs = pairs_of(&plan);
        assert_eq!(pairs.len(), 4);
        assert!(!pairs.contains(&(1, 2)));
        assert!(!pairs.contains(&(3, 4)));
    }

    #[test]
    fn test_fully_paired_field_plans_no_rounds() {
        let inputs = vec![1, 2, 3];
        let already = HashSet::from([(1, 2), (1, 3), (2, 3)]);
        let plan = build_round_robin(&inputs, &already, 0);
        assert!(plan.rounds.is_empty());
        assert!(plan.matches.is_empty());
    }

    #[test]
    fn test_rebuilt_rounds_continue_numbering() {
        let inputs = vec![1, 2, 3, 4];
        let already = HashSet::from([(1, 4), (2, 3)]);
        let plan = build_round_robin(&inputs, &already, 1);

        let names = plan.rounds.iter().map(|r| r.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Round 2", "Round 3"]);
    }
}
