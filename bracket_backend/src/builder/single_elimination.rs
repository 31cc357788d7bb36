use bracket_entities::prelude::{BracketError, BracketPosition};
use bracket_entities::domain::StageItemInputId;

use super::{BracketPlan, PlannedSide};


pub const SINGLE_ELIMINATION_TEAM_COUNTS: [usize; 5] = [2, 4, 8, 16, 32];

pub fn rounds_for_single_elimination(team_count: usize) -> Result<usize, BracketError> {
    if !SINGLE_ELIMINATION_TEAM_COUNTS.contains(&team_count) {
        return Err(BracketError::InvalidTeamCount {
            team_count,
            allowed: SINGLE_ELIMINATION_TEAM_COUNTS.to_vec(),
        });
    }
    Ok(team_count.trailing_zeros() as usize)
}

pub fn build_single_elimination(inputs: &[StageItemInputId]) -> Result<BracketPlan, BracketError> {
    let num_rounds = rounds_for_single_elimination(inputs.len())?;
    let mut plan = BracketPlan::default();

    let first_round = plan.add_round("Round 1", BracketPosition::None);
    let mut previous = inputs.chunks(2).map(|pair| {
        plan.add_match(first_round, PlannedSide::Input(pair[0]), PlannedSide::Input(pair[1]))
    }).collect::<Vec<_>>();

    for round_idx in 1..num_rounds {
        let round = plan.add_round(format!("Round {}", round_idx + 1), BracketPosition::None);
        previous = previous.chunks(2).map(|pair| {
            plan.add_match(round, PlannedSide::WinnerOf(pair[0]), PlannedSide::WinnerOf(pair[1]))
        }).collect();
    }

    Ok(plan)
}
