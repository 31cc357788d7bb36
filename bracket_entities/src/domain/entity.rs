use async_trait::async_trait;
use sea_orm::ConnectionTrait;

use crate::error::BracketError;

#[async_trait]
pub trait TournamentEntity: Send + Sync + Sized {
    /// Writes the entity under its current id. Without `guarantee_insert`
    /// an existing row is updated in place.
    async fn save<C>(&self, db: &C, guarantee_insert: bool) -> Result<(), anyhow::Error> where C: ConnectionTrait;

    async fn save_many<C>(db: &C, guarantee_insert: bool, entities: &Vec<&Self>) -> Result<(), anyhow::Error> where C: ConnectionTrait {
        for entity in entities.iter() {
            entity.save(db, guarantee_insert).await?;
        }
        Ok(())
    }

    /// Inserts the entity with a fresh id and returns the stored copy.
    async fn create<C>(&self, db: &C) -> Result<Self, anyhow::Error> where C: ConnectionTrait;
}

#[async_trait]
pub trait LoadEntity: Sized + Send {
    const ENTITY_NAME: &'static str;

    async fn try_get_many<C>(db: &C, ids: Vec<i32>) -> Result<Vec<Option<Self>>, anyhow::Error> where C: ConnectionTrait;

    async fn get_many<C>(db: &C, ids: Vec<i32>) -> Result<Vec<Self>, anyhow::Error> where C: ConnectionTrait {
        let entities = Self::try_get_many(db, ids.clone()).await?;
        entities.into_iter().zip(ids).map(|(entity, id)| {
            entity.ok_or_else(|| BracketError::not_found(Self::ENTITY_NAME, id).into())
        }).collect()
    }

    async fn get<C>(db: &C, id: i32) -> Result<Self, anyhow::Error> where C: ConnectionTrait {
        let mut entities = Self::get_many(db, vec![id]).await?;
        entities.pop().ok_or_else(|| BracketError::not_found(Self::ENTITY_NAME, id).into())
    }
}

/// Implements [`TournamentEntity`] and [`LoadEntity`] for a domain struct that
/// maps onto exactly one schema table. The struct needs an `id: i32` field,
/// an `into_active_model` method and a `TryFrom<Model>` conversion.
macro_rules! simple_entity {
    ($name:ident, $table:ident, $label:expr) => {
        #[async_trait::async_trait]
        impl $crate::domain::entity::TournamentEntity for $name {
            async fn save<C>(&self, db: &C, guarantee_insert: bool) -> Result<(), anyhow::Error> where C: sea_orm::ConnectionTrait {
                use $crate::schema::$table as table;
                use sea_orm::{ActiveModelTrait, EntityTrait};
                let model = self.into_active_model();
                if guarantee_insert {
                    table::Entity::insert(model).exec(db).await?;
                }
                else {
                    let existing_model = table::Entity::find_by_id(self.id).one(db).await?;
                    if existing_model.is_some() {
                        model.update(db).await?;
                    }
                    else {
                        table::Entity::insert(model).exec(db).await?;
                    }
                }
                Ok(())
            }

            async fn create<C>(&self, db: &C) -> Result<Self, anyhow::Error> where C: sea_orm::ConnectionTrait {
                use $crate::schema::$table as table;
                use sea_orm::EntityTrait;
                let mut model = self.into_active_model();
                model.id = sea_orm::ActiveValue::NotSet;
                let result = table::Entity::insert(model).exec(db).await?;
                let mut out = self.clone();
                out.id = result.last_insert_id;
                Ok(out)
            }
        }

        #[async_trait::async_trait]
        impl $crate::domain::entity::LoadEntity for $name {
            const ENTITY_NAME: &'static str = $label;

            async fn try_get_many<C>(db: &C, ids: Vec<i32>) -> Result<Vec<Option<Self>>, anyhow::Error> where C: sea_orm::ConnectionTrait {
                use $crate::schema::$table as table;
                let models = <table::Entity as $crate::utilities::BatchLoad>::batch_load(db, ids).await?;
                models.into_iter().map(|model| -> Result<Option<Self>, anyhow::Error> {
                    match model {
                        Some(model) => Ok(Some(Self::try_from(model)?)),
                        None => Ok(None)
                    }
                }).collect()
            }
        }
    };
}

pub(crate) use simple_entity;
