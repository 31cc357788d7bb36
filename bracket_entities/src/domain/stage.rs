use sea_orm::{prelude::*, QueryOrder};
use serde::{Serialize, Deserialize};

use crate::schema;

use super::{entity::simple_entity, StageId, TournamentId};


#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Default)]
pub struct Stage {
    pub id: StageId,
    pub tournament_id: TournamentId,
    pub name: String,
    pub position: i32,
    pub is_active: bool,
}

impl Stage {
    pub fn new(tournament_id: TournamentId, name: impl Into<String>, position: i32) -> Self {
        Stage {
            id: 0,
            tournament_id,
            name: name.into(),
            position,
            is_active: false,
        }
    }

    pub fn into_active_model(&self) -> schema::stage::ActiveModel {
        schema::stage::ActiveModel {
            id: sea_orm::ActiveValue::Set(self.id),
            tournament_id: sea_orm::ActiveValue::Set(self.tournament_id),
            name: sea_orm::ActiveValue::Set(self.name.clone()),
            position: sea_orm::ActiveValue::Set(self.position),
            is_active: sea_orm::ActiveValue::Set(self.is_active),
        }
    }

    /// All stages of the tournament ordered by position.
    pub async fn get_all_in_tournament<C>(db: &C, tournament_id: TournamentId) -> Result<Vec<Stage>, DbErr> where C: ConnectionTrait {
        let rows = schema::stage::Entity::find()
            .filter(schema::stage::Column::TournamentId.eq(tournament_id))
            .order_by_asc(schema::stage::Column::Position)
            .order_by_asc(schema::stage::Column::Id)
            .all(db).await?;
        Ok(rows.into_iter().map(Self::from).collect())
    }
}

impl From<schema::stage::Model> for Stage {
    fn from(model: schema::stage::Model) -> Self {
        Stage {
            id: model.id,
            tournament_id: model.tournament_id,
            name: model.name,
            position: model.position,
            is_active: model.is_active,
        }
    }
}

simple_entity!(Stage, stage, "Stage");
