use chrono::{Duration, NaiveDateTime};
use sea_orm::{prelude::*, QueryOrder};
use serde::{Serialize, Deserialize};

use crate::{error::BracketError, schema};

use super::{entity::simple_entity, CourtId, MatchId, OfficialId, RoundId, StageItemInputId};


/// Reference to an earlier match whose result decides who plays on a side.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, Hash)]
pub enum MatchSource {
    WinnerOf(MatchId),
    LoserOf(MatchId),
}

impl MatchSource {
    pub fn match_id(&self) -> MatchId {
        match self {
            MatchSource::WinnerOf(id) | MatchSource::LoserOf(id) => *id,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Default)]
pub struct MatchSide {
    pub input_id: Option<StageItemInputId>,
    pub source: Option<MatchSource>,
    pub score: i32,
    pub conflict: bool,
}

impl MatchSide {
    pub fn input(input_id: StageItemInputId) -> Self {
        MatchSide { input_id: Some(input_id), ..Default::default() }
    }

    pub fn from_source(source: MatchSource) -> Self {
        MatchSide { source: Some(source), ..Default::default() }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct TournamentMatch {
    pub id: MatchId,
    pub round_id: RoundId,
    pub side_1: MatchSide,
    pub side_2: MatchSide,
    pub court_id: Option<CourtId>,
    pub official_id: Option<OfficialId>,
    pub start_time: Option<NaiveDateTime>,
    pub position_in_schedule: Option<i32>,
    pub duration_minutes: i32,
    pub margin_minutes: i32,
    pub custom_duration_minutes: Option<i32>,
    pub custom_margin_minutes: Option<i32>,
}

impl TournamentMatch {
    pub fn new(round_id: RoundId, side_1: MatchSide, side_2: MatchSide, duration_minutes: i32, margin_minutes: i32) -> Self {
        TournamentMatch {
            id: 0,
            round_id,
            side_1,
            side_2,
            court_id: None,
            official_id: None,
            start_time: None,
            position_in_schedule: None,
            duration_minutes,
            margin_minutes,
            custom_duration_minutes: None,
            custom_margin_minutes: None,
        }
    }

    pub fn effective_duration_minutes(&self) -> i32 {
        self.custom_duration_minutes.unwrap_or(self.duration_minutes)
    }

    pub fn effective_margin_minutes(&self) -> i32 {
        self.custom_margin_minutes.unwrap_or(self.margin_minutes)
    }

    pub fn end_time(&self) -> Option<NaiveDateTime> {
        self.start_time.map(|start| start + Duration::minutes(self.effective_duration_minutes() as i64))
    }

    /// Earliest start of the match following this one on the same court.
    pub fn next_slot_start(&self) -> Option<NaiveDateTime> {
        self.end_time().map(|end| end + Duration::minutes(self.effective_margin_minutes() as i64))
    }

    pub fn is_scheduled(&self) -> bool {
        self.start_time.is_some() && self.position_in_schedule.is_some()
    }

    /// Both sides are bound to an input.
    pub fn is_definitive(&self) -> bool {
        self.side_1.input_id.is_some() && self.side_2.input_id.is_some()
    }

    pub fn input_ids(&self) -> Vec<StageItemInputId> {
        self.side_1.input_id.into_iter().chain(self.side_2.input_id).collect()
    }

    pub fn has_participant(&self, input_id: StageItemInputId) -> bool {
        self.side_1.input_id == Some(input_id) || self.side_2.input_id == Some(input_id)
    }

    /// Input with the higher score, `None` on a tie or while a side is unresolved.
    pub fn get_winner(&self) -> Option<StageItemInputId> {
        if !self.is_definitive() {
            return None;
        }
        if self.side_1.score > self.side_2.score {
            self.side_1.input_id
        }
        else if self.side_2.score > self.side_1.score {
            self.side_2.input_id
        }
        else {
            None
        }
    }

    pub fn get_loser(&self) -> Option<StageItemInputId> {
        let winner = self.get_winner()?;
        if self.side_1.input_id == Some(winner) {
            self.side_2.input_id
        }
        else {
            self.side_1.input_id
        }
    }

    pub fn into_active_model(&self) -> schema::tournament_match::ActiveModel {
        fn split(source: Option<MatchSource>) -> (Option<MatchId>, Option<MatchId>) {
            match source {
                Some(MatchSource::WinnerOf(id)) => (Some(id), None),
                Some(MatchSource::LoserOf(id)) => (None, Some(id)),
                None => (None, None),
            }
        }
        let (first_winner, first_loser) = split(self.side_1.source);
        let (second_winner, second_loser) = split(self.side_2.source);

        schema::tournament_match::ActiveModel {
            id: sea_orm::ActiveValue::Set(self.id),
            round_id: sea_orm::ActiveValue::Set(self.round_id),
            first_input_id: sea_orm::ActiveValue::Set(self.side_1.input_id),
            second_input_id: sea_orm::ActiveValue::Set(self.side_2.input_id),
            first_winner_from_match_id: sea_orm::ActiveValue::Set(first_winner),
            second_winner_from_match_id: sea_orm::ActiveValue::Set(second_winner),
            first_loser_from_match_id: sea_orm::ActiveValue::Set(first_loser),
            second_loser_from_match_id: sea_orm::ActiveValue::Set(second_loser),
            first_score: sea_orm::ActiveValue::Set(self.side_1.score),
            second_score: sea_orm::ActiveValue::Set(self.side_2.score),
            court_id: sea_orm::ActiveValue::Set(self.court_id),
            official_id: sea_orm::ActiveValue::Set(self.official_id),
            start_time: sea_orm::ActiveValue::Set(self.start_time),
            position_in_schedule: sea_orm::ActiveValue::Set(self.position_in_schedule),
            duration_minutes: sea_orm::ActiveValue::Set(self.duration_minutes),
            margin_minutes: sea_orm::ActiveValue::Set(self.margin_minutes),
            custom_duration_minutes: sea_orm::ActiveValue::Set(self.custom_duration_minutes),
            custom_margin_minutes: sea_orm::ActiveValue::Set(self.custom_margin_minutes),
            first_conflict: sea_orm::ActiveValue::Set(self.side_1.conflict),
            second_conflict: sea_orm::ActiveValue::Set(self.side_2.conflict),
        }
    }

    pub async fn get_all_in_rounds<C>(db: &C, round_ids: Vec<RoundId>) -> Result<Vec<TournamentMatch>, anyhow::Error> where C: ConnectionTrait {
        let rows = schema::tournament_match::Entity::find()
            .filter(schema::tournament_match::Column::RoundId.is_in(round_ids))
            .order_by_asc(schema::tournament_match::Column::Id)
            .all(db).await?;
        rows.into_iter().map(|row| Self::try_from(row).map_err(anyhow::Error::from)).collect()
    }
}

fn side_source(match_id: MatchId, winner_from: Option<MatchId>, loser_from: Option<MatchId>) -> Result<Option<MatchSource>, BracketError> {
    match (winner_from, loser_from) {
        (Some(id), None) => Ok(Some(MatchSource::WinnerOf(id))),
        (None, Some(id)) => Ok(Some(MatchSource::LoserOf(id))),
        (None, None) => Ok(None),
        (Some(_), Some(_)) => Err(BracketError::InvariantViolation(
            format!("Match {} references both a winner and a loser on one side", match_id)
        )),
    }
}

impl TryFrom<schema::tournament_match::Model> for TournamentMatch {
    type Error = BracketError;

    fn try_from(model: schema::tournament_match::Model) -> Result<Self, Self::Error> {
        Ok(TournamentMatch {
            id: model.id,
            round_id: model.round_id,
            side_1: MatchSide {
                input_id: model.first_input_id,
                source: side_source(model.id, model.first_winner_from_match_id, model.first_loser_from_match_id)?,
                score: model.first_score,
                conflict: model.first_conflict,
            },
            side_2: MatchSide {
                input_id: model.second_input_id,
                source: side_source(model.id, model.second_winner_from_match_id, model.second_loser_from_match_id)?,
                score: model.second_score,
                conflict: model.second_conflict,
            },
            court_id: model.court_id,
            official_id: model.official_id,
            start_time: model.start_time,
            position_in_schedule: model.position_in_schedule,
            duration_minutes: model.duration_minutes,
            margin_minutes: model.margin_minutes,
            custom_duration_minutes: model.custom_duration_minutes,
            custom_margin_minutes: model.custom_margin_minutes,
        })
    }
}

simple_entity!(TournamentMatch, tournament_match, "Match");

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_custom_timing_overrides_defaults() {
        let mut m = TournamentMatch::new(1, MatchSide::input(1), MatchSide::input(2), 10, 5);
        m.start_time = Some(at(10, 0));
        assert_eq!(m.end_time(), Some(at(10, 10)));
        assert_eq!(m.next_slot_start(), Some(at(10, 15)));

        m.custom_duration_minutes = Some(20);
        m.custom_margin_minutes = Some(0);
        assert_eq!(m.end_time(), Some(at(10, 20)));
        assert_eq!(m.next_slot_start(), Some(at(10, 20)));
    }

    #[test]
    fn test_winner_requires_distinct_scores() {
        let mut m = TournamentMatch::new(1, MatchSide::input(1), MatchSide::input(2), 10, 5);
        assert_eq!(m.get_winner(), None);
        m.side_2.score = 3;
        assert_eq!(m.get_winner(), Some(2));
        assert_eq!(m.get_loser(), Some(1));
    }

    #[test]
    fn test_unresolved_match_has_no_winner() {
        let mut m = TournamentMatch::new(1, MatchSide::input(1), MatchSide::from_source(MatchSource::WinnerOf(4)), 10, 5);
        m.side_1.score = 2;
        assert!(!m.is_definitive());
        assert_eq!(m.get_winner(), None);
    }
}
