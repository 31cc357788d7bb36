use async_trait::async_trait;
use bracket_entities::prelude::*;
use bracket_entities::domain::{MatchId, RoundId, StageItemId, TournamentId};

use sea_orm::prelude::*;
use rand::{rngs::StdRng, SeedableRng};


#[async_trait]
pub trait ActionTrait {
    async fn get_changes<C>(self, db: &C) -> Result<EntityGroup, anyhow::Error> where C: ConnectionTrait;
}

/// Seeded generator for reproducible runs, entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub(crate) async fn tournament_of_stage_item<C>(db: &C, stage_item_id: StageItemId) -> Result<TournamentId, anyhow::Error> where C: ConnectionTrait {
    let stage_item = StageItem::get(db, stage_item_id).await?;
    Ok(Stage::get(db, stage_item.stage_id).await?.tournament_id)
}

pub(crate) async fn stage_item_of_round<C>(db: &C, round_id: RoundId) -> Result<StageItemId, anyhow::Error> where C: ConnectionTrait {
    Ok(Round::get(db, round_id).await?.stage_item_id)
}

pub(crate) async fn tournament_of_match<C>(db: &C, match_id: MatchId) -> Result<TournamentId, anyhow::Error> where C: ConnectionTrait {
    let m = TournamentMatch::get(db, match_id).await?;
    let stage_item_id = stage_item_of_round(db, m.round_id).await?;
    tournament_of_stage_item(db, stage_item_id).await
}
