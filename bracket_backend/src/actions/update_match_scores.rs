use async_trait::async_trait;
use bracket_entities::prelude::*;
use bracket_entities::domain::MatchId;

use serde::{Serialize, Deserialize};
use tracing::info;

use crate::ranking::EloOptions;

use super::{ActionTrait, recompute_stage_item};
use super::base::tournament_of_match;


/// Enters the scores of a match. Bracket progression and the standings of
/// the stage item are brought up to date in the same change set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMatchScoresAction {
    pub match_id: MatchId,
    pub score_1: i32,
    pub score_2: i32,
}

#[async_trait]
impl ActionTrait for UpdateMatchScoresAction {
    async fn get_changes<C>(self, db: &C) -> Result<EntityGroup, anyhow::Error> where C: sea_orm::ConnectionTrait {
        let tournament_id = tournament_of_match(db, self.match_id).await?;
        let details = TournamentDetails::load(db, tournament_id).await?;

        let mut item = details.stage_item_of_match(self.match_id)?.clone();
        let ranking = details.ranking_for(&item.stage_item)?;

        let m = item.rounds.iter_mut()
            .flat_map(|r| r.matches.iter_mut())
            .find(|m| m.id == self.match_id)
            .ok_or(BracketError::not_found("Match", self.match_id))?;
        m.side_1.score = self.score_1;
        m.side_2.score = self.score_2;

        let mut groups = EntityGroup::new();
        groups.add(m.clone());
        info!("Match {} scored {}:{}", self.match_id, self.score_1, self.score_2);

        recompute_stage_item(item, ranking, &EloOptions::default(), &mut groups)?;
        Ok(groups)
    }
}
