use sea_orm::{prelude::*, QueryOrder};
use serde::{Serialize, Deserialize};

use crate::schema;

use super::{entity::simple_entity, OfficialId, TournamentId};


#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Default)]
pub struct Official {
    pub id: OfficialId,
    pub tournament_id: TournamentId,
    pub name: String,
}

impl Official {
    pub fn new(tournament_id: TournamentId, name: impl Into<String>) -> Self {
        Official {
            id: 0,
            tournament_id,
            name: name.into(),
        }
    }

    pub fn into_active_model(&self) -> schema::official::ActiveModel {
        schema::official::ActiveModel {
            id: sea_orm::ActiveValue::Set(self.id),
            tournament_id: sea_orm::ActiveValue::Set(self.tournament_id),
            name: sea_orm::ActiveValue::Set(self.name.clone()),
        }
    }

    pub async fn get_all_in_tournament<C>(db: &C, tournament_id: TournamentId) -> Result<Vec<Official>, DbErr> where C: ConnectionTrait {
        let rows = schema::official::Entity::find()
            .filter(schema::official::Column::TournamentId.eq(tournament_id))
            .order_by_asc(schema::official::Column::Id)
            .all(db).await?;
        Ok(rows.into_iter().map(Self::from).collect())
    }
}

impl From<schema::official::Model> for Official {
    fn from(model: schema::official::Model) -> Self {
        Official {
            id: model.id,
            tournament_id: model.tournament_id,
            name: model.name,
        }
    }
}

simple_entity!(Official, official, "Official");
