//! Standings of stage items and the propagation of results into later
//! matches and stages.

mod statistics;
mod propagation;
mod resolution;

pub use statistics::{compute_statistics, determine_team_ranking_for_stage_item, EloOptions};
pub use propagation::propagate_elimination_results;
pub use resolution::resolve_stage_inputs;
