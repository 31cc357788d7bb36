use async_trait::async_trait;
use bracket_entities::prelude::*;
use bracket_entities::domain::{MatchId, StageItemId};

use serde::{Serialize, Deserialize};
use tracing::info;

use crate::builder::{build_stage_item, PlannedSide};
use crate::scheduling::schedule_all;

use super::ActionTrait;
use super::base::tournament_of_stage_item;


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildStageItemAction {
    pub stage_item_id: StageItemId,
}

fn to_side(side: PlannedSide, created: &[MatchId]) -> Result<MatchSide, BracketError> {
    let lookup = |idx: usize| created.get(idx).copied().ok_or_else(|| BracketError::InvariantViolation(format!("Planned match {} referenced before creation", idx)));
    Ok(match side {
        PlannedSide::Input(input_id) => MatchSide::input(input_id),
        PlannedSide::WinnerOf(idx) => MatchSide::from_source(MatchSource::WinnerOf(lookup(idx)?)),
        PlannedSide::LoserOf(idx) => MatchSide::from_source(MatchSource::LoserOf(lookup(idx)?)),
    })
}

#[async_trait]
impl ActionTrait for BuildStageItemAction {
    async fn get_changes<C>(self, db: &C) -> Result<EntityGroup, anyhow::Error> where C: sea_orm::ConnectionTrait {
        let tournament_id = tournament_of_stage_item(db, self.stage_item_id).await?;
        let details = TournamentDetails::load(db, tournament_id).await?;
        let item = details.stage_item(self.stage_item_id)?;

        if item.stage_item.stage_type.is_elimination() && !item.rounds.is_empty() {
            return Err(BracketError::AlreadyBuilt { stage_item_id: self.stage_item_id }.into());
        }

        let plan = build_stage_item(item)?;
        let tournament = &details.tournament;

        let mut groups = EntityGroup::new();
        let mut round_ids = vec![];
        for planned in plan.rounds.iter() {
            let round = Round::new(self.stage_item_id, planned.name.clone(), planned.bracket_position).create(db).await?;
            round_ids.push(round.id);
            groups.add(round);
        }

        let mut match_ids = vec![];
        for planned in plan.matches.into_iter() {
            let round_id = *round_ids.get(planned.round).ok_or_else(|| BracketError::InvariantViolation(format!("Planned round {} does not exist", planned.round)))?;
            let side_1 = to_side(planned.side_1, &match_ids)?;
            let side_2 = to_side(planned.side_2, &match_ids)?;

            let m = TournamentMatch::new(round_id, side_1, side_2, tournament.duration_minutes, tournament.margin_minutes).create(db).await?;
            match_ids.push(m.id);
            groups.add(m);
        }

        info!("Built stage item {} with {} rounds and {} matches", self.stage_item_id, round_ids.len(), match_ids.len());

        if tournament.auto_assign_courts && !match_ids.is_empty() {
            let details = TournamentDetails::load(db, tournament_id).await?;
            for m in schedule_all(&details)? {
                groups.add(m);
            }
        }

        Ok(groups)
    }
}
