use std::str::FromStr;

use sea_orm::{prelude::*, QueryOrder};
use serde::{Serialize, Deserialize};

use crate::{error::BracketError, schema};

use super::{entity::simple_entity, MatchId, StageItemId, StageItemInputId, TeamId};


#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, Hash)]
pub enum MatchOutcome {
    Winner,
    Loser,
}

impl MatchOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchOutcome::Winner => "WINNER",
            MatchOutcome::Loser => "LOSER",
        }
    }
}

impl FromStr for MatchOutcome {
    type Err = BracketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WINNER" => Ok(MatchOutcome::Winner),
            "LOSER" => Ok(MatchOutcome::Loser),
            other => Err(BracketError::InvariantViolation(format!("Unknown match outcome {}", other))),
        }
    }
}

/// Where the team occupying an input slot comes from.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
pub enum InputSource {
    Final { team_id: TeamId },
    /// The team ranked `winner_position` (1-based) in another stage item.
    Tentative { winner_from_stage_item_id: StageItemId, winner_position: i32 },
    FromMatch { match_id: MatchId, outcome: MatchOutcome },
}

/// Accumulated results of one input. Always derived from the full match
/// history of its stage item.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy, Default)]
pub struct TeamStatistics {
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    pub points: f64,
}

impl TeamStatistics {
    pub fn with_points(points: f64) -> Self {
        TeamStatistics { points, ..Default::default() }
    }

    pub fn played(&self) -> i32 {
        self.wins + self.draws + self.losses
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct StageItemInput {
    pub id: StageItemInputId,
    pub stage_item_id: StageItemId,
    /// 1-based seed within the stage item.
    pub slot: i32,
    pub source: InputSource,
    pub statistics: TeamStatistics,
}

impl StageItemInput {
    pub fn new_final(stage_item_id: StageItemId, slot: i32, team_id: TeamId) -> Self {
        Self::new(stage_item_id, slot, InputSource::Final { team_id })
    }

    pub fn new(stage_item_id: StageItemId, slot: i32, source: InputSource) -> Self {
        StageItemInput {
            id: 0,
            stage_item_id,
            slot,
            source,
            statistics: TeamStatistics::default(),
        }
    }

    pub fn team_id(&self) -> Option<TeamId> {
        match self.source {
            InputSource::Final { team_id } => Some(team_id),
            _ => None,
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self.source, InputSource::Final { .. })
    }

    pub fn into_active_model(&self) -> schema::stage_item_input::ActiveModel {
        let (team_id, winner_from_stage_item_id, winner_position, from_match_id, from_match_outcome) = match self.source {
            InputSource::Final { team_id } => (Some(team_id), None, None, None, None),
            InputSource::Tentative { winner_from_stage_item_id, winner_position } => (None, Some(winner_from_stage_item_id), Some(winner_position), None, None),
            InputSource::FromMatch { match_id, outcome } => (None, None, None, Some(match_id), Some(outcome.as_str().to_string())),
        };
        schema::stage_item_input::ActiveModel {
            id: sea_orm::ActiveValue::Set(self.id),
            stage_item_id: sea_orm::ActiveValue::Set(self.stage_item_id),
            slot: sea_orm::ActiveValue::Set(self.slot),
            team_id: sea_orm::ActiveValue::Set(team_id),
            winner_from_stage_item_id: sea_orm::ActiveValue::Set(winner_from_stage_item_id),
            winner_position: sea_orm::ActiveValue::Set(winner_position),
            from_match_id: sea_orm::ActiveValue::Set(from_match_id),
            from_match_outcome: sea_orm::ActiveValue::Set(from_match_outcome),
            wins: sea_orm::ActiveValue::Set(self.statistics.wins),
            draws: sea_orm::ActiveValue::Set(self.statistics.draws),
            losses: sea_orm::ActiveValue::Set(self.statistics.losses),
            points: sea_orm::ActiveValue::Set(self.statistics.points),
        }
    }

    /// Inputs of the given stage items, ordered by stage item and slot.
    pub async fn get_all_in_stage_items<C>(db: &C, stage_item_ids: Vec<StageItemId>) -> Result<Vec<StageItemInput>, anyhow::Error> where C: ConnectionTrait {
        let rows = schema::stage_item_input::Entity::find()
            .filter(schema::stage_item_input::Column::StageItemId.is_in(stage_item_ids))
            .order_by_asc(schema::stage_item_input::Column::StageItemId)
            .order_by_asc(schema::stage_item_input::Column::Slot)
            .all(db).await?;
        rows.into_iter().map(|row| Self::try_from(row).map_err(anyhow::Error::from)).collect()
    }
}

impl TryFrom<schema::stage_item_input::Model> for StageItemInput {
    type Error = BracketError;

    fn try_from(model: schema::stage_item_input::Model) -> Result<Self, Self::Error> {
        let source = match (model.team_id, model.winner_from_stage_item_id, model.winner_position, model.from_match_id, &model.from_match_outcome) {
            (Some(team_id), None, None, None, None) => InputSource::Final { team_id },
            (None, Some(winner_from_stage_item_id), Some(winner_position), None, None) => InputSource::Tentative { winner_from_stage_item_id, winner_position },
            (None, None, None, Some(match_id), Some(outcome)) => InputSource::FromMatch { match_id, outcome: outcome.parse()? },
            _ => return Err(BracketError::InvariantViolation(
                format!("Stage item input {} must populate exactly one source", model.id)
            )),
        };

        Ok(StageItemInput {
            id: model.id,
            stage_item_id: model.stage_item_id,
            slot: model.slot,
            source,
            statistics: TeamStatistics {
                wins: model.wins,
                draws: model.draws,
                losses: model.losses,
                points: model.points,
            },
        })
    }
}

simple_entity!(StageItemInput, stage_item_input, "Stage item input");
