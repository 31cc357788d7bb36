use sea_orm::{prelude::*, QueryOrder};
use serde::{Serialize, Deserialize};

use crate::schema;

use super::{entity::simple_entity, RankingId, TournamentId};


/// Scoring policy of a stage item.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Ranking {
    pub id: RankingId,
    pub tournament_id: TournamentId,
    pub win_points: f64,
    pub draw_points: f64,
    pub loss_points: f64,
    /// Add the raw score of a side on top of the result points.
    pub add_score_points: bool,
    pub position: i32,
}

impl Ranking {
    pub fn new(tournament_id: TournamentId) -> Self {
        Ranking {
            id: 0,
            tournament_id,
            win_points: 1.0,
            draw_points: 0.5,
            loss_points: 0.0,
            add_score_points: false,
            position: 0,
        }
    }

    pub fn into_active_model(&self) -> schema::ranking::ActiveModel {
        schema::ranking::ActiveModel {
            id: sea_orm::ActiveValue::Set(self.id),
            tournament_id: sea_orm::ActiveValue::Set(self.tournament_id),
            win_points: sea_orm::ActiveValue::Set(self.win_points),
            draw_points: sea_orm::ActiveValue::Set(self.draw_points),
            loss_points: sea_orm::ActiveValue::Set(self.loss_points),
            add_score_points: sea_orm::ActiveValue::Set(self.add_score_points),
            position: sea_orm::ActiveValue::Set(self.position),
        }
    }

    pub async fn get_all_in_tournament<C>(db: &C, tournament_id: TournamentId) -> Result<Vec<Ranking>, DbErr> where C: ConnectionTrait {
        let rows = schema::ranking::Entity::find()
            .filter(schema::ranking::Column::TournamentId.eq(tournament_id))
            .order_by_asc(schema::ranking::Column::Position)
            .all(db).await?;
        Ok(rows.into_iter().map(Self::from).collect())
    }
}

impl From<schema::ranking::Model> for Ranking {
    fn from(model: schema::ranking::Model) -> Self {
        Ranking {
            id: model.id,
            tournament_id: model.tournament_id,
            win_points: model.win_points,
            draw_points: model.draw_points,
            loss_points: model.loss_points,
            add_score_points: model.add_score_points,
            position: model.position,
        }
    }
}

simple_entity!(Ranking, ranking, "Ranking");
