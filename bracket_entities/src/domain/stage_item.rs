use std::{fmt::Display, str::FromStr};

use sea_orm::{prelude::*, QueryOrder};
use serde::{Serialize, Deserialize};

use crate::{error::BracketError, schema};

use super::{entity::simple_entity, RankingId, StageId, StageItemId};


#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, Hash)]
pub enum StageType {
    RoundRobin,
    SingleElimination,
    DoubleElimination,
    Swiss,
}

impl StageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageType::RoundRobin => "ROUND_ROBIN",
            StageType::SingleElimination => "SINGLE_ELIMINATION",
            StageType::DoubleElimination => "DOUBLE_ELIMINATION",
            StageType::Swiss => "SWISS",
        }
    }

    pub fn is_elimination(&self) -> bool {
        matches!(self, StageType::SingleElimination | StageType::DoubleElimination)
    }
}

impl Display for StageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StageType {
    type Err = BracketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ROUND_ROBIN" => Ok(StageType::RoundRobin),
            "SINGLE_ELIMINATION" => Ok(StageType::SingleElimination),
            "DOUBLE_ELIMINATION" => Ok(StageType::DoubleElimination),
            "SWISS" => Ok(StageType::Swiss),
            other => Err(BracketError::UnknownStageType(other.to_string())),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct StageItem {
    pub id: StageItemId,
    pub stage_id: StageId,
    pub name: String,
    pub stage_type: StageType,
    pub team_count: i32,
    pub ranking_id: RankingId,
}

impl StageItem {
    pub fn new(stage_id: StageId, name: impl Into<String>, stage_type: StageType, team_count: i32, ranking_id: RankingId) -> Self {
        StageItem {
            id: 0,
            stage_id,
            name: name.into(),
            stage_type,
            team_count,
            ranking_id,
        }
    }

    pub fn into_active_model(&self) -> schema::stage_item::ActiveModel {
        schema::stage_item::ActiveModel {
            id: sea_orm::ActiveValue::Set(self.id),
            stage_id: sea_orm::ActiveValue::Set(self.stage_id),
            name: sea_orm::ActiveValue::Set(self.name.clone()),
            stage_type: sea_orm::ActiveValue::Set(self.stage_type.as_str().to_string()),
            team_count: sea_orm::ActiveValue::Set(self.team_count),
            ranking_id: sea_orm::ActiveValue::Set(self.ranking_id),
        }
    }

    pub async fn get_all_in_stages<C>(db: &C, stage_ids: Vec<StageId>) -> Result<Vec<StageItem>, anyhow::Error> where C: ConnectionTrait {
        let rows = schema::stage_item::Entity::find()
            .filter(schema::stage_item::Column::StageId.is_in(stage_ids))
            .order_by_asc(schema::stage_item::Column::Id)
            .all(db).await?;
        rows.into_iter().map(|row| Self::try_from(row).map_err(anyhow::Error::from)).collect()
    }
}

impl TryFrom<schema::stage_item::Model> for StageItem {
    type Error = BracketError;

    fn try_from(model: schema::stage_item::Model) -> Result<Self, Self::Error> {
        Ok(StageItem {
            id: model.id,
            stage_id: model.stage_id,
            name: model.name,
            stage_type: model.stage_type.parse()?,
            team_count: model.team_count,
            ranking_id: model.ranking_id,
        })
    }
}

simple_entity!(StageItem, stage_item, "Stage item");

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_stage_type_round_trips_through_column_value() {
        for stage_type in [StageType::RoundRobin, StageType::SingleElimination, StageType::DoubleElimination, StageType::Swiss] {
            assert_eq!(stage_type.as_str().parse::<StageType>().unwrap(), stage_type);
        }
    }

    #[test]
    fn test_unknown_stage_type_is_rejected() {
        assert_matches!("LADDER".parse::<StageType>(), Err(BracketError::UnknownStageType(s)) if s == "LADDER");
    }
}
