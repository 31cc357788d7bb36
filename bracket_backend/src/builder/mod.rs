//! Generation of round and match skeletons for a stage item.
//!
//! The builders are pure: they return a [`BracketPlan`] in which matches
//! refer to each other by their index in the plan. Persisting the plan in
//! index order therefore always creates a referenced match before the
//! matches that depend on it.

use std::collections::HashSet;

use bracket_entities::prelude::*;
use bracket_entities::domain::StageItemInputId;
use serde::{Serialize, Deserialize};

mod round_robin;
mod single_elimination;
mod double_elimination;

pub use round_robin::{build_round_robin, rounds_for_round_robin};
pub use single_elimination::{build_single_elimination, rounds_for_single_elimination, SINGLE_ELIMINATION_TEAM_COUNTS};
pub use double_elimination::{build_double_elimination, rounds_for_double_elimination, bye_pair_indices};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlannedSide {
    Input(StageItemInputId),
    WinnerOf(usize),
    LoserOf(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedRound {
    pub name: String,
    pub bracket_position: BracketPosition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedMatch {
    /// Index into [`BracketPlan::rounds`].
    pub round: usize,
    pub side_1: PlannedSide,
    pub side_2: PlannedSide,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BracketPlan {
    pub rounds: Vec<PlannedRound>,
    pub matches: Vec<PlannedMatch>,
}

impl BracketPlan {
    pub(crate) fn add_round(&mut self, name: impl Into<String>, bracket_position: BracketPosition) -> usize {
        self.rounds.push(PlannedRound { name: name.into(), bracket_position });
        self.rounds.len() - 1
    }

    pub(crate) fn add_match(&mut self, round: usize, side_1: PlannedSide, side_2: PlannedSide) -> usize {
        self.matches.push(PlannedMatch { round, side_1, side_2 });
        self.matches.len() - 1
    }

    pub fn matches_in_round(&self, round: usize) -> impl Iterator<Item = &PlannedMatch> {
        self.matches.iter().filter(move |m| m.round == round)
    }
}

/// Plans the skeleton of a stage item. Swiss stage items get an empty plan,
/// their rounds are created one at a time.
pub fn build_stage_item(item: &StageItemWithRounds) -> Result<BracketPlan, BracketError> {
    let inputs = item.inputs.iter().map(|i| i.id).collect::<Vec<_>>();
    match item.stage_item.stage_type {
        StageType::RoundRobin => {
            let already_paired = item.matches()
                .filter_map(|m| match (m.side_1.input_id, m.side_2.input_id) {
                    (Some(a), Some(b)) => Some(unordered_pair(a, b)),
                    _ => None,
                })
                .collect::<HashSet<_>>();
            Ok(build_round_robin(&inputs, &already_paired, item.rounds.len()))
        },
        StageType::SingleElimination => {
            rounds_for_single_elimination(declared_team_count(item))?;
            check_input_count(item)?;
            build_single_elimination(&inputs)
        },
        StageType::DoubleElimination => {
            rounds_for_double_elimination(declared_team_count(item))?;
            check_input_count(item)?;
            build_double_elimination(&inputs)
        },
        StageType::Swiss => Ok(BracketPlan::default()),
    }
}

fn declared_team_count(item: &StageItemWithRounds) -> usize {
    item.stage_item.team_count.max(0) as usize
}

fn check_input_count(item: &StageItemWithRounds) -> Result<(), BracketError> {
    if item.inputs.len() != item.stage_item.team_count as usize {
        return Err(BracketError::InvariantViolation(format!(
            "Stage item {} declares {} teams but has {} inputs",
            item.stage_item.id,
            item.stage_item.team_count,
            item.inputs.len()
        )));
    }
    Ok(())
}

pub fn unordered_pair(a: StageItemInputId, b: StageItemInputId) -> (StageItemInputId, StageItemInputId) {
    if a <= b { (a, b) } else { (b, a) }
}
