use bracket_entities::prelude::{BracketError, BracketPosition};
use bracket_entities::domain::StageItemInputId;

use super::{BracketPlan, PlannedSide};


/// Occupant of a bracket position while the plan is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Input(StageItemInputId),
    Winner(usize),
    Loser(usize),
    Empty,
}

impl Slot {
    fn as_side(self) -> Option<PlannedSide> {
        match self {
            Slot::Input(id) => Some(PlannedSide::Input(id)),
            Slot::Winner(m) => Some(PlannedSide::WinnerOf(m)),
            Slot::Loser(m) => Some(PlannedSide::LoserOf(m)),
            Slot::Empty => None,
        }
    }
}

/// Returns `(winners_rounds, losers_rounds, grand_final_rounds)`.
pub fn rounds_for_double_elimination(team_count: usize) -> Result<(usize, usize, usize), BracketError> {
    if team_count < 2 {
        return Err(BracketError::NotEnoughTeams { required: 2, actual: team_count });
    }
    let winners_rounds = team_count.next_power_of_two().trailing_zeros() as usize;
    Ok((winners_rounds, 2 * (winners_rounds - 1), 1))
}

/// First-round pairs that receive a bye, alternating between the top and
/// the bottom of the seed order.
pub fn bye_pair_indices(bracket_size: usize, byes: usize) -> Vec<usize> {
    let pairs = bracket_size / 2;
    let mut out = Vec::with_capacity(byes);
    let (mut top, mut bottom) = (0, pairs);
    while out.len() < byes && top < bottom {
        out.push(top);
        top += 1;
        if out.len() < byes && top < bottom {
            bottom -= 1;
            out.push(bottom);
        }
    }
    out
}

/// Plays two slots against each other. A match only exists when both
/// slots are occupied, otherwise the occupant advances and nobody drops.
fn play(plan: &mut BracketPlan, round: usize, a: Slot, b: Slot) -> (Slot, Slot) {
    match (a.as_side(), b.as_side()) {
        (Some(side_1), Some(side_2)) => {
            let m = plan.add_match(round, side_1, side_2);
            (Slot::Winner(m), Slot::Loser(m))
        },
        (Some(_), None) => (a, Slot::Empty),
        (None, Some(_)) => (b, Slot::Empty),
        (None, None) => (Slot::Empty, Slot::Empty),
    }
}

pub fn build_double_elimination(inputs: &[StageItemInputId]) -> Result<BracketPlan, BracketError> {
    let (winners_rounds, losers_rounds, _) = rounds_for_double_elimination(inputs.len())?;
    let bracket_size = inputs.len().next_power_of_two();
    let byes = bye_pair_indices(bracket_size, bracket_size - inputs.len());

    let mut seeds = inputs.iter().copied();
    let mut current = vec![];
    for pair in 0..bracket_size / 2 {
        let first = seeds.next().map(Slot::Input).unwrap_or(Slot::Empty);
        let second = if byes.contains(&pair) {
            Slot::Empty
        }
        else {
            seeds.next().map(Slot::Input).unwrap_or(Slot::Empty)
        };
        current.push(first);
        current.push(second);
    }

    let mut plan = BracketPlan::default();
    let mut dropped = Vec::with_capacity(winners_rounds);

    for round_idx in 0..winners_rounds {
        let round = plan.add_round(format!("Winners Round {}", round_idx + 1), BracketPosition::Winners);
        let mut advancing = vec![];
        let mut losers = vec![];
        for pair in current.chunks(2) {
            let (winner, loser) = play(&mut plan, round, pair[0], pair[1]);
            advancing.push(winner);
            losers.push(loser);
        }
        dropped.push(losers);
        current = advancing;
    }
    let winners_champion = current[0];

    let mut survivors = dropped[0].clone();
    for round_idx in 0..losers_rounds {
        let round = plan.add_round(format!("Losers Round {}", round_idx + 1), BracketPosition::Losers);
        let pairs: Vec<(Slot, Slot)> = if round_idx % 2 == 0 {
            survivors.chunks(2).map(|pair| (pair[0], pair[1])).collect()
        }
        else {
            let fresh = &dropped[(round_idx + 1) / 2];
            survivors.iter().zip(fresh.iter().rev()).map(|(a, b)| (*a, *b)).collect()
        };
        survivors = pairs.into_iter().map(|(a, b)| play(&mut plan, round, a, b).0).collect();
    }
    let losers_champion = survivors[0];

    let grand_finals = plan.add_round("Grand Finals", BracketPosition::GrandFinals);
    let (Some(side_1), Some(side_2)) = (winners_champion.as_side(), losers_champion.as_side()) else {
        return Err(BracketError::InvariantViolation("Grand finals without two participants".into()));
    };
    let decider = plan.add_match(grand_finals, side_1, side_2);
    plan.add_match(grand_finals, PlannedSide::WinnerOf(decider), PlannedSide::LoserOf(decider));

    Ok(plan)
}
