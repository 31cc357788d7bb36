use bracket_entities::mock::{self, MockOption};
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
