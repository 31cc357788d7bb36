use async_trait::async_trait;
use bracket_entities::prelude::*;
use bracket_entities::domain::TournamentId;

use serde::{Serialize, Deserialize};
use tracing::info;

use crate::ranking::{resolve_stage_inputs, EloOptions};

use super::ActionTrait;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageDirection {
    Next,
    Previous,
}

/// Hands the active flag to the neighbouring stage. Moving forward fills
/// the inputs of the new stage with the teams that qualified for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivateStageAction {
    pub tournament_id: TournamentId,
    pub direction: StageDirection,
}

#[async_trait]
impl ActionTrait for ActivateStageAction {
    async fn get_changes<C>(self, db: &C) -> Result<EntityGroup, anyhow::Error> where C: sea_orm::ConnectionTrait {
        let details = TournamentDetails::load(db, self.tournament_id).await?;
        let active = details.active_stage_index().ok_or(BracketError::NoActiveStage)?;

        let target = match self.direction {
            StageDirection::Next if active + 1 < details.stages.len() => active + 1,
            StageDirection::Previous if active > 0 => active - 1,
            _ => return Err(BracketError::NoNextStage.into()),
        };

        let mut groups = EntityGroup::new();
        if self.direction == StageDirection::Next {
            for input in resolve_stage_inputs(&details, target, &EloOptions::default())? {
                groups.add(input);
            }
        }

        for (idx, stage) in details.stages.iter().enumerate() {
            let is_active = idx == target;
            if stage.stage.is_active != is_active {
                groups.add(Stage { is_active, ..stage.stage.clone() });
            }
        }

        info!("Stage {} of tournament {} is now active", details.stages[target].stage.name, self.tournament_id);
        Ok(groups)
    }
}
