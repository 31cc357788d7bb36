use std::str::FromStr;

use sea_orm::{prelude::*, QueryOrder};
use serde::{Serialize, Deserialize};

use crate::{error::BracketError, schema};

use super::{entity::simple_entity, RoundId, StageItemId};


#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, Hash, Default)]
pub enum BracketPosition {
    Winners,
    Losers,
    GrandFinals,
    #[default]
    None,
}

impl BracketPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            BracketPosition::Winners => "WINNERS",
            BracketPosition::Losers => "LOSERS",
            BracketPosition::GrandFinals => "GRAND_FINALS",
            BracketPosition::None => "NONE",
        }
    }
}

impl FromStr for BracketPosition {
    type Err = BracketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WINNERS" => Ok(BracketPosition::Winners),
            "LOSERS" => Ok(BracketPosition::Losers),
            "GRAND_FINALS" => Ok(BracketPosition::GrandFinals),
            "NONE" => Ok(BracketPosition::None),
            other => Err(BracketError::UnknownBracketPosition(other.to_string())),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct Round {
    pub id: RoundId,
    pub stage_item_id: StageItemId,
    pub name: String,
    pub is_draft: bool,
    pub is_active: bool,
    pub bracket_position: BracketPosition,
}

impl Round {
    pub fn new(stage_item_id: StageItemId, name: impl Into<String>, bracket_position: BracketPosition) -> Self {
        Round {
            id: 0,
            stage_item_id,
            name: name.into(),
            is_draft: false,
            is_active: false,
            bracket_position,
        }
    }

    pub fn into_active_model(&self) -> schema::round::ActiveModel {
        schema::round::ActiveModel {
            id: sea_orm::ActiveValue::Set(self.id),
            stage_item_id: sea_orm::ActiveValue::Set(self.stage_item_id),
            name: sea_orm::ActiveValue::Set(self.name.clone()),
            is_draft: sea_orm::ActiveValue::Set(self.is_draft),
            is_active: sea_orm::ActiveValue::Set(self.is_active),
            bracket_position: sea_orm::ActiveValue::Set(self.bracket_position.as_str().to_string()),
        }
    }

    /// Rounds of the given stage items in creation order.
    pub async fn get_all_in_stage_items<C>(db: &C, stage_item_ids: Vec<StageItemId>) -> Result<Vec<Round>, anyhow::Error> where C: ConnectionTrait {
        let rows = schema::round::Entity::find()
            .filter(schema::round::Column::StageItemId.is_in(stage_item_ids))
            .order_by_asc(schema::round::Column::Id)
            .all(db).await?;
        rows.into_iter().map(|row| Self::try_from(row).map_err(anyhow::Error::from)).collect()
    }
}

impl TryFrom<schema::round::Model> for Round {
    type Error = BracketError;

    fn try_from(model: schema::round::Model) -> Result<Self, Self::Error> {
        Ok(Round {
            id: model.id,
            stage_item_id: model.stage_item_id,
            name: model.name,
            is_draft: model.is_draft,
            is_active: model.is_active,
            bracket_position: model.bracket_position.parse()?,
        })
    }
}

simple_entity!(Round, round, "Round");
