use sea_orm::{prelude::*, QueryOrder};
use serde::{Serialize, Deserialize};

use crate::schema;

use super::{entity::simple_entity, TeamId, TournamentId};


#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Default)]
pub struct Team {
    pub id: TeamId,
    pub tournament_id: TournamentId,
    pub name: String,
}

impl Team {
    pub fn new(tournament_id: TournamentId, name: impl Into<String>) -> Self {
        Team {
            id: 0,
            tournament_id,
            name: name.into(),
        }
    }

    pub fn into_active_model(&self) -> schema::team::ActiveModel {
        schema::team::ActiveModel {
            id: sea_orm::ActiveValue::Set(self.id),
            tournament_id: sea_orm::ActiveValue::Set(self.tournament_id),
            name: sea_orm::ActiveValue::Set(self.name.clone()),
        }
    }

    pub async fn get_all_in_tournament<C>(db: &C, tournament_id: TournamentId) -> Result<Vec<Team>, DbErr> where C: ConnectionTrait {
        let rows = schema::team::Entity::find()
            .filter(schema::team::Column::TournamentId.eq(tournament_id))
            .order_by_asc(schema::team::Column::Id)
            .all(db).await?;
        Ok(rows.into_iter().map(Self::from).collect())
    }
}

impl From<schema::team::Model> for Team {
    fn from(model: schema::team::Model) -> Self {
        Team {
            id: model.id,
            tournament_id: model.tournament_id,
            name: model.name,
        }
    }
}

simple_entity!(Team, team, "Team");
