use async_trait::async_trait;
use bracket_entities::prelude::*;
use bracket_entities::domain::StageItemId;

use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::ranking::{compute_statistics, propagate_elimination_results, EloOptions};

use super::ActionTrait;
use super::base::tournament_of_stage_item;


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecomputeRankingAction {
    pub stage_item_id: StageItemId,
}

/// Propagates elimination results through `item`, then rewrites the
/// statistics of its inputs. Matches and inputs that changed are added to
/// `groups`.
pub(crate) fn recompute_stage_item(mut item: StageItemWithRounds, ranking: &Ranking, elo: &EloOptions, groups: &mut EntityGroup) -> Result<(), BracketError> {
    if item.stage_item.stage_type.is_elimination() {
        let propagated = propagate_elimination_results(&item)?;
        for m in propagated.into_iter() {
            if let Some(slot) = item.rounds.iter_mut().flat_map(|r| r.matches.iter_mut()).find(|o| o.id == m.id) {
                *slot = m.clone();
            }
            groups.add(m);
        }
    }

    let stats = compute_statistics(&item, ranking, elo);
    for input in item.inputs.into_iter() {
        let new_stats = stats.get(&input.id).copied().unwrap_or_default();
        if new_stats != input.statistics {
            debug!("Input {} now has {} points", input.id, new_stats.points);
            groups.add(StageItemInput { statistics: new_stats, ..input });
        }
    }
    Ok(())
}

#[async_trait]
impl ActionTrait for RecomputeRankingAction {
    async fn get_changes<C>(self, db: &C) -> Result<EntityGroup, anyhow::Error> where C: sea_orm::ConnectionTrait {
        let tournament_id = tournament_of_stage_item(db, self.stage_item_id).await?;
        let details = TournamentDetails::load(db, tournament_id).await?;
        let item = details.stage_item(self.stage_item_id)?;
        let ranking = details.ranking_for(&item.stage_item)?;

        let mut groups = EntityGroup::new();
        recompute_stage_item(item.clone(), ranking, &EloOptions::default(), &mut groups)?;
        Ok(groups)
    }
}
