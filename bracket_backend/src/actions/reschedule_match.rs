use async_trait::async_trait;
use bracket_entities::prelude::*;
use bracket_entities::domain::{CourtId, MatchId};

use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::scheduling::reschedule_match;

use super::ActionTrait;
use super::base::tournament_of_match;


/// Moves a match to `position` in the queue of `court_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RescheduleMatchAction {
    pub match_id: MatchId,
    pub court_id: CourtId,
    pub position: i32,
}

#[async_trait]
impl ActionTrait for RescheduleMatchAction {
    async fn get_changes<C>(self, db: &C) -> Result<EntityGroup, anyhow::Error> where C: sea_orm::ConnectionTrait {
        let tournament_id = tournament_of_match(db, self.match_id).await?;
        let details = TournamentDetails::load(db, tournament_id).await?;

        let changed = reschedule_match(&details, self.match_id, self.court_id, self.position)?;
        debug!("Moving match {} touched {} matches", self.match_id, changed.len());

        let mut groups = EntityGroup::new();
        for m in changed {
            groups.add(m);
        }
        Ok(groups)
    }
}
