use async_trait::async_trait;
use bracket_entities::prelude::*;
use bracket_entities::domain::TournamentId;

use serde::{Serialize, Deserialize};
use tracing::info;

use crate::conflicts::detect_conflicts;

use super::ActionTrait;


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateConflictsAction {
    pub tournament_id: TournamentId,
}

#[async_trait]
impl ActionTrait for UpdateConflictsAction {
    async fn get_changes<C>(self, db: &C) -> Result<EntityGroup, anyhow::Error> where C: sea_orm::ConnectionTrait {
        let details = TournamentDetails::load(db, self.tournament_id).await?;
        let matches = details.all_matches().cloned().collect::<Vec<_>>();

        let mut groups = EntityGroup::new();
        for (old, new) in matches.iter().zip(detect_conflicts(&matches)) {
            if *old != new {
                groups.add(new);
            }
        }

        let flagged = groups.matches().filter(|m| m.side_1.conflict || m.side_2.conflict).count();
        info!("Conflict flags changed on {} matches, {} of them now conflicting", groups.len(), flagged);
        Ok(groups)
    }
}
