use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Serialize, Deserialize};

use bracket_entities::prelude::*;
use bracket_entities::EntityType;
use bracket_entities::domain::{StageItemId, StageItemInputId, TeamId};

use crate::actions::tournament_of_stage_item;
use crate::ranking::{compute_statistics, determine_team_ranking_for_stage_item, EloOptions};

use super::LoadedView;


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub rank: usize,
    pub input_id: StageItemInputId,
    pub team_id: Option<TeamId>,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsView {
    pub stage_item_id: StageItemId,
    pub rows: Vec<StandingsRow>,
}

impl StandingsView {
    pub async fn load<C>(db: &C, stage_item_id: StageItemId) -> Result<StandingsView, anyhow::Error> where C: sea_orm::ConnectionTrait {
        let tournament_id = tournament_of_stage_item(db, stage_item_id).await?;
        let details = TournamentDetails::load(db, tournament_id).await?;
        Ok(Self::from_details(&details, stage_item_id)?)
    }

    pub fn from_details(details: &TournamentDetails, stage_item_id: StageItemId) -> Result<StandingsView, BracketError> {
        let item = details.stage_item(stage_item_id)?;
        let ranking = details.ranking_for(&item.stage_item)?;
        let stats = compute_statistics(item, ranking, &EloOptions::default());
        let teams = details.input_teams();

        let rows = determine_team_ranking_for_stage_item(item, &stats).into_iter()
            .enumerate()
            .map(|(idx, input_id)| {
                let s = stats.get(&input_id).copied().unwrap_or_default();
                StandingsRow {
                    rank: idx + 1,
                    input_id,
                    team_id: teams.get(&input_id).copied(),
                    wins: s.wins,
                    draws: s.draws,
                    losses: s.losses,
                    points: s.points,
                }
            })
            .collect();

        Ok(StandingsView { stage_item_id, rows })
    }
}

pub struct LoadedStandingsView {
    pub view: StandingsView,
}

impl LoadedStandingsView {
    pub async fn load<C>(db: &C, stage_item_id: StageItemId) -> Result<LoadedStandingsView, anyhow::Error> where C: sea_orm::ConnectionTrait {
        Ok(LoadedStandingsView { view: StandingsView::load(db, stage_item_id).await? })
    }
}

#[async_trait]
impl LoadedView for LoadedStandingsView {
    async fn update_and_get_changes(&mut self, db: &sea_orm::DatabaseTransaction, changes: &EntityGroup) -> Result<Option<HashMap<String, serde_json::Value>>, anyhow::Error> {
        if changes.has_changes_for_types(&[EntityType::TournamentMatch, EntityType::StageItemInput, EntityType::Ranking]) {
            let view = StandingsView::load(db, self.view.stage_item_id).await?;
            if view == self.view {
                return Ok(None);
            }
            self.view = view;

            let mut out = HashMap::new();
            out.insert(".".to_string(), serde_json::to_value(&self.view)?);
            Ok(Some(out))
        }
        else {
            Ok(None)
        }
    }

    async fn view_string(&self) -> Result<String, anyhow::Error> {
        Ok(serde_json::to_string(&self.view)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bracket_entities::mock::make_mock_tournament;

    fn details_from_mock() -> TournamentDetails {
        let group = make_mock_tournament();
        let mut details = TournamentDetails {
            tournament: Tournament::new("Mock", chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(9, 0, 0).unwrap()),
            stages: vec![],
            courts: vec![],
            officials: vec![],
            rankings: vec![],
        };
        let mut items = vec![];
        let mut inputs = vec![];
        for e in group.entities() {
            match e {
                Entity::Tournament(t) => details.tournament = t.clone(),
                Entity::Stage(s) => details.stages.push(StageWithItems { stage: s.clone(), items: vec![] }),
                Entity::Ranking(r) => details.rankings.push(r.clone()),
                Entity::StageItem(i) => items.push(i.clone()),
                Entity::StageItemInput(i) => inputs.push(i.clone()),
                _ => {}
            }
        }
        for item in items {
            let item_inputs = inputs.iter().filter(|i| i.stage_item_id == item.id).cloned().collect();
            if let Some(stage) = details.stages.iter_mut().find(|s| s.stage.id == item.stage_id) {
                stage.items.push(StageItemWithRounds { stage_item: item, inputs: item_inputs, rounds: vec![] });
            }
        }
        details
    }

    #[test]
    fn test_rows_without_matches_follow_slots() {
        let details = details_from_mock();
        let view = StandingsView::from_details(&details, 1).unwrap();
        assert_eq!(view.rows.len(), 8);
        assert_eq!(view.rows.iter().map(|r| r.rank).collect::<Vec<_>>(), (1..=8).collect::<Vec<_>>());
        assert_eq!(view.rows[0].team_id, Some(1));
        assert!(view.rows.iter().all(|r| r.points == 0.0 && r.wins == 0));
    }

    #[test]
    fn test_leader_is_match_winner() {
        let mut details = details_from_mock();
        let item = &mut details.stages[0].items[0];
        let mut m = TournamentMatch::new(1, MatchSide::input(3), MatchSide::input(5), 10, 5);
        m.id = 1;
        m.side_1.score = 1;
        m.side_2.score = 3;
        item.rounds.push(RoundWithMatches { round: Round { id: 1, ..Round::new(1, "Round 1", BracketPosition::None) }, matches: vec![m] });

        let view = StandingsView::from_details(&details, 1).unwrap();
        assert_eq!(view.rows[0].input_id, 5);
        assert_eq!(view.rows[0].wins, 1);
        let loser = view.rows.iter().find(|r| r.input_id == 3).unwrap();
        assert_eq!(loser.losses, 1);
        assert_eq!(loser.points, 0.0);
    }

    #[test]
    fn test_unknown_stage_item_is_not_found() {
        let details = details_from_mock();
        let err = StandingsView::from_details(&details, 99).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
