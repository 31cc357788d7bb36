use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum TournamentMatch {
    Table,
    FirstConflict,
    SecondConflict,
}


#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite only supports one column per ALTER TABLE
        manager.alter_table(
            Table::alter()
                .table(TournamentMatch::Table)
                .add_column(ColumnDef::new(TournamentMatch::FirstConflict).boolean().not_null().default(false))
                .to_owned()
        ).await?;

        manager.alter_table(
            Table::alter()
                .table(TournamentMatch::Table)
                .add_column(ColumnDef::new(TournamentMatch::SecondConflict).boolean().not_null().default(false))
                .to_owned()
        ).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.alter_table(
            Table::alter()
                .table(TournamentMatch::Table)
                .drop_column(TournamentMatch::SecondConflict)
                .to_owned()
        ).await?;

        manager.alter_table(
            Table::alter()
                .table(TournamentMatch::Table)
                .drop_column(TournamentMatch::FirstConflict)
                .to_owned()
        ).await
    }
}
