use std::collections::HashMap;

use itertools::Itertools;
use sea_orm::ConnectionTrait;
use serde::{Serialize, Deserialize};

use crate::{
    domain::{
        court::Court,
        entity::LoadEntity,
        official::Official,
        ranking::Ranking,
        round::Round,
        stage::Stage,
        stage_item::StageItem,
        stage_item_input::StageItemInput,
        tournament::Tournament,
        tournament_match::TournamentMatch,
        MatchId, StageItemId, StageItemInputId, TeamId, TournamentId,
    },
    error::BracketError,
};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundWithMatches {
    pub round: Round,
    pub matches: Vec<TournamentMatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageItemWithRounds {
    pub stage_item: StageItem,
    pub inputs: Vec<StageItemInput>,
    pub rounds: Vec<RoundWithMatches>,
}

impl StageItemWithRounds {
    pub fn matches(&self) -> impl Iterator<Item = &TournamentMatch> {
        self.rounds.iter().flat_map(|r| r.matches.iter())
    }

    /// Matches of committed rounds whose sides are both bound.
    pub fn definitive_matches(&self) -> impl Iterator<Item = &TournamentMatch> {
        self.rounds.iter()
            .filter(|r| !r.round.is_draft)
            .flat_map(|r| r.matches.iter())
            .filter(|m| m.is_definitive())
    }

    pub fn draft_round(&self) -> Option<&RoundWithMatches> {
        self.rounds.iter().find(|r| r.round.is_draft)
    }

    pub fn input(&self, input_id: StageItemInputId) -> Option<&StageItemInput> {
        self.inputs.iter().find(|i| i.id == input_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageWithItems {
    pub stage: Stage,
    pub items: Vec<StageItemWithRounds>,
}

/// Everything the scheduling and ranking code reads about one tournament.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentDetails {
    pub tournament: Tournament,
    pub stages: Vec<StageWithItems>,
    pub courts: Vec<Court>,
    pub officials: Vec<Official>,
    pub rankings: Vec<Ranking>,
}

impl TournamentDetails {
    pub async fn load<C>(db: &C, tournament_id: TournamentId) -> Result<TournamentDetails, anyhow::Error> where C: ConnectionTrait {
        let tournament = Tournament::get(db, tournament_id).await?;
        let stages = Stage::get_all_in_tournament(db, tournament_id).await?;
        let courts = Court::get_all_in_tournament(db, tournament_id).await?;
        let officials = Official::get_all_in_tournament(db, tournament_id).await?;
        let rankings = Ranking::get_all_in_tournament(db, tournament_id).await?;

        let stage_items = StageItem::get_all_in_stages(db, stages.iter().map(|s| s.id).collect()).await?;
        let stage_item_ids = stage_items.iter().map(|s| s.id).collect_vec();
        let inputs = StageItemInput::get_all_in_stage_items(db, stage_item_ids.clone()).await?;
        let rounds = Round::get_all_in_stage_items(db, stage_item_ids).await?;
        let matches = TournamentMatch::get_all_in_rounds(db, rounds.iter().map(|r| r.id).collect()).await?;

        let mut matches_by_round = matches.into_iter().into_group_map_by(|m| m.round_id);
        let mut rounds_by_item = rounds.into_iter().map(|round| {
            let matches = matches_by_round.remove(&round.id).unwrap_or_default();
            RoundWithMatches { round, matches }
        }).into_group_map_by(|r| r.round.stage_item_id);
        let mut inputs_by_item = inputs.into_iter().into_group_map_by(|i| i.stage_item_id);
        let mut items_by_stage = stage_items.into_iter().map(|stage_item| {
            StageItemWithRounds {
                inputs: inputs_by_item.remove(&stage_item.id).unwrap_or_default(),
                rounds: rounds_by_item.remove(&stage_item.id).unwrap_or_default(),
                stage_item,
            }
        }).into_group_map_by(|i| i.stage_item.stage_id);

        let stages = stages.into_iter().map(|stage| {
            StageWithItems {
                items: items_by_stage.remove(&stage.id).unwrap_or_default(),
                stage,
            }
        }).collect();

        Ok(TournamentDetails { tournament, stages, courts, officials, rankings })
    }

    pub fn stage_items(&self) -> impl Iterator<Item = &StageItemWithRounds> {
        self.stages.iter().flat_map(|s| s.items.iter())
    }

    pub fn stage_item(&self, stage_item_id: StageItemId) -> Result<&StageItemWithRounds, BracketError> {
        self.stage_items()
            .find(|i| i.stage_item.id == stage_item_id)
            .ok_or(BracketError::not_found("Stage item", stage_item_id))
    }

    pub fn all_matches(&self) -> impl Iterator<Item = &TournamentMatch> {
        self.stage_items().flat_map(|i| i.matches())
    }

    pub fn find_match(&self, match_id: MatchId) -> Result<&TournamentMatch, BracketError> {
        self.all_matches()
            .find(|m| m.id == match_id)
            .ok_or(BracketError::not_found("Match", match_id))
    }

    pub fn stage_item_of_match(&self, match_id: MatchId) -> Result<&StageItemWithRounds, BracketError> {
        self.stage_items()
            .find(|i| i.matches().any(|m| m.id == match_id))
            .ok_or(BracketError::not_found("Match", match_id))
    }

    pub fn active_stage_index(&self) -> Option<usize> {
        self.stages.iter().position(|s| s.stage.is_active)
    }

    pub fn ranking_for(&self, stage_item: &StageItem) -> Result<&Ranking, BracketError> {
        self.rankings.iter()
            .find(|r| r.id == stage_item.ranking_id)
            .ok_or(BracketError::MissingRankingPolicy { stage_item_id: stage_item.id })
    }

    /// Team currently bound to every final input of the tournament.
    pub fn input_teams(&self) -> HashMap<StageItemInputId, TeamId> {
        self.stage_items()
            .flat_map(|i| i.inputs.iter())
            .filter_map(|i| i.team_id().map(|t| (i.id, t)))
            .collect()
    }
}
