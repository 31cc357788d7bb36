use std::collections::HashMap;

use sea_orm::ConnectionTrait;
use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::domain::{
    court::Court,
    entity::TournamentEntity,
    official::Official,
    ranking::Ranking,
    round::Round,
    stage::Stage,
    stage_item::StageItem,
    stage_item_input::StageItemInput,
    team::Team,
    tournament::Tournament,
    tournament_match::TournamentMatch,
};


#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub enum Entity {
    Tournament(Tournament),
    Team(Team),
    Court(Court),
    Official(Official),
    Stage(Stage),
    Ranking(Ranking),
    StageItem(StageItem),
    StageItemInput(StageItemInput),
    Round(Round),
    TournamentMatch(TournamentMatch),
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum EntityType {
    Tournament,
    Team,
    Court,
    Official,
    Stage,
    Ranking,
    StageItem,
    StageItemInput,
    Round,
    TournamentMatch,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Tournament => "Tournament",
            EntityType::Team => "Team",
            EntityType::Court => "Court",
            EntityType::Official => "Official",
            EntityType::Stage => "Stage",
            EntityType::Ranking => "Ranking",
            EntityType::StageItem => "StageItem",
            EntityType::StageItemInput => "StageItemInput",
            EntityType::Round => "Round",
            EntityType::TournamentMatch => "TournamentMatch",
        }
    }
}

impl Entity {
    pub fn get_id(&self) -> i32 {
        match self {
            Entity::Tournament(e) => e.id,
            Entity::Team(e) => e.id,
            Entity::Court(e) => e.id,
            Entity::Official(e) => e.id,
            Entity::Stage(e) => e.id,
            Entity::Ranking(e) => e.id,
            Entity::StageItem(e) => e.id,
            Entity::StageItemInput(e) => e.id,
            Entity::Round(e) => e.id,
            Entity::TournamentMatch(e) => e.id,
        }
    }

    pub fn get_type(&self) -> EntityType {
        match self {
            Entity::Tournament(_) => EntityType::Tournament,
            Entity::Team(_) => EntityType::Team,
            Entity::Court(_) => EntityType::Court,
            Entity::Official(_) => EntityType::Official,
            Entity::Stage(_) => EntityType::Stage,
            Entity::Ranking(_) => EntityType::Ranking,
            Entity::StageItem(_) => EntityType::StageItem,
            Entity::StageItemInput(_) => EntityType::StageItemInput,
            Entity::Round(_) => EntityType::Round,
            Entity::TournamentMatch(_) => EntityType::TournamentMatch,
        }
    }

    /// Parents have to be written before their children, so groups are
    /// flushed in ascending processing order.
    pub fn get_processing_order(&self) -> u64 {
        match self.get_type() {
            EntityType::Tournament => 0,
            EntityType::Team | EntityType::Court | EntityType::Official | EntityType::Stage | EntityType::Ranking => 1,
            EntityType::StageItem => 2,
            EntityType::StageItemInput | EntityType::Round => 3,
            EntityType::TournamentMatch => 4,
        }
    }
}

macro_rules! entity_from {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Entity {
                fn from(e: $variant) -> Self {
                    Entity::$variant(e)
                }
            }
        )*
    };
}

entity_from!(Tournament, Team, Court, Official, Stage, Ranking, StageItem, StageItemInput, Round, TournamentMatch);

/// A set of changed entities that is written back in one go.
/// Adding an entity twice keeps only the latest version.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EntityGroup {
    entities: Vec<Entity>,
    index: HashMap<(EntityType, i32), usize>,
}

impl EntityGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, e: impl Into<Entity>) {
        let e = e.into();
        let key = (e.get_type(), e.get_id());
        match self.index.get(&key) {
            Some(idx) => self.entities[*idx] = e,
            None => {
                self.index.insert(key, self.entities.len());
                self.entities.push(e);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn matches(&self) -> impl Iterator<Item = &TournamentMatch> {
        self.entities.iter().filter_map(|e| match e {
            Entity::TournamentMatch(m) => Some(m),
            _ => None
        })
    }

    pub fn has_changes_for_types(&self, types: &[EntityType]) -> bool {
        self.entities.iter().any(|e| types.contains(&e.get_type()))
    }

    pub async fn save_all<C>(&self, db: &C) -> Result<(), anyhow::Error> where C: ConnectionTrait {
        self.save_all_with_options(db, false).await
    }

    pub async fn save_all_with_options<C>(&self, db: &C, guarantee_insert: bool) -> Result<(), anyhow::Error> where C: ConnectionTrait {
        let mut ordered = self.entities.iter().collect::<Vec<_>>();
        ordered.sort_by_key(|e| e.get_processing_order());
        debug!("Saving {} entities", ordered.len());

        for entity in ordered {
            match entity {
                Entity::Tournament(e) => e.save(db, guarantee_insert).await?,
                Entity::Team(e) => e.save(db, guarantee_insert).await?,
                Entity::Court(e) => e.save(db, guarantee_insert).await?,
                Entity::Official(e) => e.save(db, guarantee_insert).await?,
                Entity::Stage(e) => e.save(db, guarantee_insert).await?,
                Entity::Ranking(e) => e.save(db, guarantee_insert).await?,
                Entity::StageItem(e) => e.save(db, guarantee_insert).await?,
                Entity::StageItemInput(e) => e.save(db, guarantee_insert).await?,
                Entity::Round(e) => e.save(db, guarantee_insert).await?,
                Entity::TournamentMatch(e) => e.save(db, guarantee_insert).await?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adding_twice_keeps_latest_version() {
        let mut group = EntityGroup::new();
        group.add(Team { id: 1, tournament_id: 1, name: "A".into() });
        group.add(Court { id: 1, tournament_id: 1, name: "Court 1".into() });
        group.add(Team { id: 1, tournament_id: 1, name: "B".into() });

        assert_eq!(group.len(), 2);
        assert_eq!(group.entities()[0], Entity::Team(Team { id: 1, tournament_id: 1, name: "B".into() }));
    }
}
