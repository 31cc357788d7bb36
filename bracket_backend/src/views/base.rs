use std::collections::HashMap;

use async_trait::async_trait;

use bracket_entities::prelude::*;


#[async_trait]
pub trait LoadedView : Sync + Send {
    // Takes a transaction since a generic connection would make the trait unusable as an object
    async fn update_and_get_changes(&mut self, db: &sea_orm::DatabaseTransaction, changes: &EntityGroup) -> Result<Option<HashMap<String, serde_json::Value>>, anyhow::Error>;
    async fn view_string(&self) -> Result<String, anyhow::Error>;
}
