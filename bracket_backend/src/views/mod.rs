pub mod standings_view;
mod base;

pub use self::base::LoadedView;
pub use self::standings_view::{LoadedStandingsView, StandingsRow, StandingsView};

use bracket_entities::domain::StageItemId;

use sea_orm::ConnectionTrait;
use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "type")]
pub enum View {
    Standings { stage_item_id: StageItemId },
}

impl View {
    pub async fn load_json<C>(&self, db: &C) -> Result<String, anyhow::Error> where C: ConnectionTrait {
        let view = self.load(db).await?;
        view.view_string().await
    }

    pub async fn load<C>(&self, db: &C) -> Result<Box<dyn LoadedView>, anyhow::Error> where C: ConnectionTrait {
        Ok(match self {
            View::Standings { stage_item_id } => {
                Box::new(LoadedStandingsView::load(db, *stage_item_id).await?)
            }
        })
    }
}
