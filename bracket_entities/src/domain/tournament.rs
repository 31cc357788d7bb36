use chrono::{Duration, NaiveDateTime};
use sea_orm::prelude::*;
use serde::{Serialize, Deserialize};

use crate::schema;

use super::{entity::simple_entity, TournamentId};


#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub start_time: NaiveDateTime,
    pub duration_minutes: i32,
    pub margin_minutes: i32,
    pub auto_assign_courts: bool,
}

impl Tournament {
    pub fn new(name: impl Into<String>, start_time: NaiveDateTime) -> Self {
        Tournament {
            id: 0,
            name: name.into(),
            start_time,
            duration_minutes: 15,
            margin_minutes: 5,
            auto_assign_courts: false,
        }
    }

    pub fn default_slot(&self) -> Duration {
        Duration::minutes((self.duration_minutes + self.margin_minutes) as i64)
    }

    pub fn into_active_model(&self) -> schema::tournament::ActiveModel {
        schema::tournament::ActiveModel {
            id: sea_orm::ActiveValue::Set(self.id),
            name: sea_orm::ActiveValue::Set(self.name.clone()),
            start_time: sea_orm::ActiveValue::Set(self.start_time),
            duration_minutes: sea_orm::ActiveValue::Set(self.duration_minutes),
            margin_minutes: sea_orm::ActiveValue::Set(self.margin_minutes),
            auto_assign_courts: sea_orm::ActiveValue::Set(self.auto_assign_courts),
        }
    }

    pub async fn get_all<C>(db: &C) -> Result<Vec<Tournament>, DbErr> where C: ConnectionTrait {
        let rows = schema::tournament::Entity::find().all(db).await?;
        Ok(rows.into_iter().map(Self::from).collect())
    }
}

impl From<schema::tournament::Model> for Tournament {
    fn from(model: schema::tournament::Model) -> Self {
        Tournament {
            id: model.id,
            name: model.name,
            start_time: model.start_time,
            duration_minutes: model.duration_minutes,
            margin_minutes: model.margin_minutes,
            auto_assign_courts: model.auto_assign_courts,
        }
    }
}

simple_entity!(Tournament, tournament, "Tournament");
