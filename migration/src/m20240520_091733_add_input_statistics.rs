use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum StageItemInput {
    Table,
    Wins,
    Draws,
    Losses,
    Points,
}


#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for column in [StageItemInput::Wins, StageItemInput::Draws, StageItemInput::Losses] {
            manager.alter_table(
                Table::alter()
                    .table(StageItemInput::Table)
                    .add_column(ColumnDef::new(column).integer().not_null().default(0))
                    .to_owned()
            ).await?;
        }

        manager.alter_table(
            Table::alter()
                .table(StageItemInput::Table)
                .add_column(ColumnDef::new(StageItemInput::Points).double().not_null().default(0.0))
                .to_owned()
        ).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for column in [StageItemInput::Points, StageItemInput::Losses, StageItemInput::Draws, StageItemInput::Wins] {
            manager.alter_table(
                Table::alter()
                    .table(StageItemInput::Table)
                    .drop_column(column)
                    .to_owned()
            ).await?;
        }
        Ok(())
    }
}
