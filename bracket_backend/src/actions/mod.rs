use serde::{Serialize, Deserialize};

use bracket_entities::prelude::*;

mod base;
mod build_stage_item;
mod schedule_all;
mod reschedule_match;
mod swiss_round;
mod update_conflicts;
mod recompute_ranking;
mod update_match_scores;
mod activate_stage;

pub use self::base::{ActionTrait, make_rng};
pub use self::build_stage_item::BuildStageItemAction;
pub use self::schedule_all::{ScheduleAllAction, SchedulingMode};
pub use self::reschedule_match::RescheduleMatchAction;
pub use self::swiss_round::{CreateSwissRoundAction, CommitDraftRoundAction, ScheduleSwissRoundAction};
pub use self::update_conflicts::UpdateConflictsAction;
pub use self::recompute_ranking::RecomputeRankingAction;
pub use self::update_match_scores::UpdateMatchScoresAction;
pub use self::activate_stage::{ActivateStageAction, StageDirection};

pub(crate) use self::base::tournament_of_stage_item;
pub(crate) use self::recompute_ranking::recompute_stage_item;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    BuildStageItem { action: BuildStageItemAction },
    ScheduleAll { action: ScheduleAllAction },
    RescheduleMatch { action: RescheduleMatchAction },
    ScheduleSwissRound { action: ScheduleSwissRoundAction },
    CreateSwissRound { action: CreateSwissRoundAction },
    CommitDraftRound { action: CommitDraftRoundAction },
    UpdateConflicts { action: UpdateConflictsAction },
    RecomputeRanking { action: RecomputeRankingAction },
    UpdateMatchScores { action: UpdateMatchScoresAction },
    ActivateStage { action: ActivateStageAction },
}

impl Action {
    pub async fn execute<C>(self, db: &C) -> Result<EntityGroup, anyhow::Error> where C: sea_orm::ConnectionTrait {
        match self {
            Action::BuildStageItem { action } => action.get_changes(db).await,
            Action::ScheduleAll { action } => action.get_changes(db).await,
            Action::RescheduleMatch { action } => action.get_changes(db).await,
            Action::ScheduleSwissRound { action } => action.get_changes(db).await,
            Action::CreateSwissRound { action } => action.get_changes(db).await,
            Action::CommitDraftRound { action } => action.get_changes(db).await,
            Action::UpdateConflicts { action } => action.get_changes(db).await,
            Action::RecomputeRanking { action } => action.get_changes(db).await,
            Action::UpdateMatchScores { action } => action.get_changes(db).await,
            Action::ActivateStage { action } => action.get_changes(db).await,
        }
    }
}
