#![allow(dead_code)]
use bracket_backend::actions::ActionTrait;
use bracket_entities::prelude::*;
use bracket_entities::mock::{self, MockOption, MockStageItem};
use migration::MigratorTrait;
use sea_orm::{prelude::*, Database, Statement};

pub async fn set_up_db(mock_option: Option<MockOption>) -> Result<DatabaseConnection, anyhow::Error> {
    let db = Database::connect("sqlite::memory:").await?;
    migration::Migrator::up(&db, None).await?;
    let _r = db.execute(Statement::from_sql_and_values(
        db.get_database_backend(),
        "PRAGMA foreign_keys = ON;",
        vec![])
    ).await?;

    if let Some(mock_option) = mock_option {
        mock::make_mock_tournament_with_options(mock_option).save_all_with_options(&db, true).await?;
    }
    Ok(db)
}

pub fn with_items(items: Vec<(StageType, usize)>) -> MockOption {
    MockOption {
        stage_items: items.into_iter().map(|(stage_type, team_count)| MockStageItem::new(stage_type, team_count)).collect(),
        ..Default::default()
    }
}

pub async fn apply<A, C>(db: &C, action: A) -> Result<EntityGroup, anyhow::Error> where A: ActionTrait + Send, C: ConnectionTrait {
    let changes = action.get_changes(db).await?;
    changes.save_all(db).await?;
    Ok(changes)
}

pub fn find_match_between(details: &TournamentDetails, a: i32, b: i32) -> TournamentMatch {
    details.all_matches()
        .find(|m| m.has_participant(a) && m.has_participant(b))
        .cloned()
        .expect("No match between the given inputs")
}
