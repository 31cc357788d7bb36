use std::collections::BTreeMap;

use async_trait::async_trait;
use bracket_entities::prelude::*;
use bracket_entities::domain::{MatchId, TournamentId};

use serde::{Serialize, Deserialize};
use tracing::info;

use crate::scheduling::{assign_officials, iterative_scheduling, schedule_all, IterativeSchedulingOptions};

use super::{ActionTrait, make_rng};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SchedulingMode {
    #[default]
    Batch,
    Randomized,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleAllAction {
    pub tournament_id: TournamentId,
    #[serde(default)]
    pub mode: SchedulingMode,
    #[serde(default)]
    pub assign_officials: bool,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[async_trait]
impl ActionTrait for ScheduleAllAction {
    async fn get_changes<C>(self, db: &C) -> Result<EntityGroup, anyhow::Error> where C: sea_orm::ConnectionTrait {
        let details = TournamentDetails::load(db, self.tournament_id).await?;

        let changed = match self.mode {
            SchedulingMode::Batch => schedule_all(&details)?,
            SchedulingMode::Randomized => {
                let (scheduled, pending): (Vec<_>, Vec<_>) = details.stage_items()
                    .flat_map(|i| i.rounds.iter())
                    .filter(|r| !r.round.is_draft)
                    .flat_map(|r| r.matches.iter().cloned())
                    .partition(|m| m.is_scheduled());
                let mut rng = make_rng(self.seed);
                iterative_scheduling(
                    &details.courts,
                    &scheduled,
                    pending,
                    details.tournament.start_time,
                    &IterativeSchedulingOptions::default(),
                    &mut rng
                )?
            }
        };
        info!("Scheduled {} matches in tournament {}", changed.len(), self.tournament_id);

        let mut current: BTreeMap<MatchId, TournamentMatch> = details.all_matches().map(|m| (m.id, m.clone())).collect();
        for m in changed.into_iter() {
            current.insert(m.id, m);
        }

        let mut groups = EntityGroup::new();
        if self.assign_officials {
            let all = current.values().cloned().collect::<Vec<_>>();
            for m in assign_officials(&all, &details.officials) {
                current.insert(m.id, m);
            }
        }

        for m in current.into_values() {
            if details.find_match(m.id).map_or(true, |old| *old != m) {
                groups.add(m);
            }
        }

        Ok(groups)
    }
}
