use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use bracket_entities::prelude::*;
use bracket_entities::domain::{RoundId, StageItemId};
use chrono::NaiveDateTime;

use serde::{Serialize, Deserialize};
use tracing::{debug, info};

use crate::ranking::{compute_statistics, EloOptions};
use crate::scheduling::schedule_swiss_round;
use crate::swiss::{pick_disjoint, suggest_swiss_matches, SwissSuggestionOptions};

use super::{ActionTrait, make_rng};
use super::base::{stage_item_of_round, tournament_of_stage_item};


/// Puts the unscheduled matches of a round on the courts that hold no
/// match of that round yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSwissRoundAction {
    pub round_id: RoundId,
    #[serde(default)]
    pub adjust_to_time: Option<NaiveDateTime>,
}

#[async_trait]
impl ActionTrait for ScheduleSwissRoundAction {
    async fn get_changes<C>(self, db: &C) -> Result<EntityGroup, anyhow::Error> where C: sea_orm::ConnectionTrait {
        let stage_item_id = stage_item_of_round(db, self.round_id).await?;
        let tournament_id = tournament_of_stage_item(db, stage_item_id).await?;
        let details = TournamentDetails::load(db, tournament_id).await?;
        let item = details.stage_item(stage_item_id)?;

        let round = item.rounds.iter()
            .find(|r| r.round.id == self.round_id)
            .ok_or(BracketError::not_found("Round", self.round_id))?;
        if round.matches.len() > details.courts.len() {
            return Err(BracketError::TooManyMatchesForCourts { matches: round.matches.len(), courts: details.courts.len() }.into());
        }

        let (placed, pending): (Vec<_>, Vec<_>) = round.matches.iter().cloned().partition(|m| m.is_scheduled());
        let busy_courts = placed.iter().filter_map(|m| m.court_id).collect::<HashSet<_>>();
        let free_courts = details.courts.iter()
            .filter(|c| !busy_courts.contains(&c.id))
            .cloned()
            .collect::<Vec<_>>();
        let existing = details.all_matches().cloned().collect::<Vec<_>>();

        let scheduled = schedule_swiss_round(pending, &free_courts, &existing, details.tournament.start_time, self.adjust_to_time)?;

        let mut groups = EntityGroup::new();
        for m in scheduled {
            groups.add(m);
        }
        Ok(groups)
    }
}

/// Fills the draft round of a Swiss stage item with suggested pairings,
/// one per free court, and schedules them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSwissRoundAction {
    pub stage_item_id: StageItemId,
    #[serde(default)]
    pub adjust_to_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub options: SwissSuggestionOptions,
}

#[async_trait]
impl ActionTrait for CreateSwissRoundAction {
    async fn get_changes<C>(self, db: &C) -> Result<EntityGroup, anyhow::Error> where C: sea_orm::ConnectionTrait {
        let tournament_id = tournament_of_stage_item(db, self.stage_item_id).await?;
        let details = TournamentDetails::load(db, tournament_id).await?;
        let item = details.stage_item(self.stage_item_id)?;

        if item.stage_item.stage_type != StageType::Swiss {
            return Err(BracketError::NotSwiss { stage_item_id: self.stage_item_id }.into());
        }

        let mut groups = EntityGroup::new();
        let draft_round = match item.draft_round() {
            Some(draft) => draft.round.clone(),
            None => {
                let mut round = Round::new(self.stage_item_id, format!("Round {}", item.rounds.len() + 1), BracketPosition::None);
                round.is_draft = true;
                let round = round.create(db).await?;
                groups.add(round.clone());
                round
            }
        };

        let ranking = details.ranking_for(&item.stage_item)?;
        let ratings: HashMap<_, f64> = compute_statistics(item, ranking, &EloOptions::default())
            .into_iter()
            .map(|(input_id, stats)| (input_id, stats.points))
            .collect();

        let mut rng = make_rng(self.seed);
        let suggestions = suggest_swiss_matches(item, &ratings, &self.options, &mut rng);

        let busy_courts = item.draft_round()
            .map(|r| r.matches.iter().filter_map(|m| m.court_id).collect::<HashSet<_>>())
            .unwrap_or_default();
        let free_courts = details.courts.iter()
            .filter(|c| !busy_courts.contains(&c.id))
            .cloned()
            .collect::<Vec<_>>();

        let picked = pick_disjoint(&suggestions, free_courts.len());
        debug!("Picked {} of {} suggested pairings", picked.len(), suggestions.len());

        let tournament = &details.tournament;
        let mut created = vec![];
        for suggestion in picked.iter() {
            let m = TournamentMatch::new(
                draft_round.id,
                MatchSide::input(suggestion.input_1),
                MatchSide::input(suggestion.input_2),
                tournament.duration_minutes,
                tournament.margin_minutes,
            ).create(db).await?;
            created.push(m);
        }

        let existing = details.all_matches().cloned().collect::<Vec<_>>();
        for m in schedule_swiss_round(created, &free_courts, &existing, tournament.start_time, self.adjust_to_time)? {
            groups.add(m);
        }

        info!("Draft round {} of stage item {} got {} new matches", draft_round.id, self.stage_item_id, picked.len());
        Ok(groups)
    }
}

/// Turns the draft round of a stage item into its active round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitDraftRoundAction {
    pub stage_item_id: StageItemId,
}

#[async_trait]
impl ActionTrait for CommitDraftRoundAction {
    async fn get_changes<C>(self, db: &C) -> Result<EntityGroup, anyhow::Error> where C: sea_orm::ConnectionTrait {
        let tournament_id = tournament_of_stage_item(db, self.stage_item_id).await?;
        let details = TournamentDetails::load(db, tournament_id).await?;
        let item = details.stage_item(self.stage_item_id)?;

        let draft_id = item.draft_round()
            .map(|r| r.round.id)
            .ok_or(BracketError::not_found("Draft round of stage item", self.stage_item_id))?;

        let mut groups = EntityGroup::new();
        for round in item.rounds.iter().map(|r| &r.round) {
            let committed = Round {
                is_draft: round.is_draft && round.id != draft_id,
                is_active: round.id == draft_id,
                ..round.clone()
            };
            if committed != *round {
                groups.add(committed);
            }
        }
        info!("Committed round {} of stage item {}", draft_id, self.stage_item_id);
        Ok(groups)
    }
}
