use sea_orm::{prelude::*, QueryOrder};
use serde::{Serialize, Deserialize};

use crate::schema;

use super::{entity::simple_entity, CourtId, TournamentId};


#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Default)]
pub struct Court {
    pub id: CourtId,
    pub tournament_id: TournamentId,
    pub name: String,
}

impl Court {
    pub fn new(tournament_id: TournamentId, name: impl Into<String>) -> Self {
        Court {
            id: 0,
            tournament_id,
            name: name.into(),
        }
    }

    pub fn into_active_model(&self) -> schema::court::ActiveModel {
        schema::court::ActiveModel {
            id: sea_orm::ActiveValue::Set(self.id),
            tournament_id: sea_orm::ActiveValue::Set(self.tournament_id),
            name: sea_orm::ActiveValue::Set(self.name.clone()),
        }
    }

    pub async fn get_all_in_tournament<C>(db: &C, tournament_id: TournamentId) -> Result<Vec<Court>, DbErr> where C: ConnectionTrait {
        let rows = schema::court::Entity::find()
            .filter(schema::court::Column::TournamentId.eq(tournament_id))
            .order_by_asc(schema::court::Column::Id)
            .all(db).await?;
        Ok(rows.into_iter().map(Self::from).collect())
    }
}

impl From<schema::court::Model> for Court {
    fn from(model: schema::court::Model) -> Self {
        Court {
            id: model.id,
            tournament_id: model.tournament_id,
            name: model.name,
        }
    }
}

simple_entity!(Court, court, "Court");
