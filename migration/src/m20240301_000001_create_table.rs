use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240301_000001_create_table"
    }
}


#[derive(Iden)]
pub enum Tournament {
    Table,
    Id,
    Name,
    StartTime,
    DurationMinutes,
    MarginMinutes,
    AutoAssignCourts,
}

#[derive(Iden)]
pub enum Team {
    Table,
    Id,
    TournamentId,
    Name,
}

#[derive(Iden)]
pub enum Court {
    Table,
    Id,
    TournamentId,
    Name,
}

#[derive(Iden)]
pub enum Official {
    Table,
    Id,
    TournamentId,
    Name,
}

#[derive(Iden)]
pub enum Stage {
    Table,
    Id,
    TournamentId,
    Name,
    Position,
    IsActive,
}

#[derive(Iden)]
pub enum Ranking {
    Table,
    Id,
    TournamentId,
    WinPoints,
    DrawPoints,
    LossPoints,
    AddScorePoints,
    Position,
}

#[derive(Iden)]
pub enum StageItem {
    Table,
    Id,
    StageId,
    Name,
    StageType,
    TeamCount,
    RankingId,
}

#[derive(Iden)]
pub enum StageItemInput {
    Table,
    Id,
    StageItemId,
    Slot,
    TeamId,
    WinnerFromStageItemId,
    WinnerPosition,
    FromMatchId,
    FromMatchOutcome,
}

#[derive(Iden)]
pub enum Round {
    Table,
    Id,
    StageItemId,
    Name,
    IsDraft,
    IsActive,
    BracketPosition,
}

#[derive(Iden)]
pub enum TournamentMatch {
    Table,
    Id,
    RoundId,
    FirstInputId,
    SecondInputId,
    FirstWinnerFromMatchId,
    SecondWinnerFromMatchId,
    FirstLoserFromMatchId,
    SecondLoserFromMatchId,
    FirstScore,
    SecondScore,
    CourtId,
    OfficialId,
    StartTime,
    PositionInSchedule,
    DurationMinutes,
    MarginMinutes,
    CustomDurationMinutes,
    CustomMarginMinutes,
}


fn tournament_fk<T: IntoTableRef, C: IntoIden>(name: &str, table: T, column: C) -> ForeignKeyCreateStatement {
    ForeignKeyCreateStatement::new()
        .name(name)
        .from_tbl(table)
        .from_col(column)
        .to_tbl(Tournament::Table)
        .to_col(Tournament::Id)
        .on_delete(ForeignKeyAction::Cascade)
        .on_update(ForeignKeyAction::Cascade)
        .to_owned()
}


#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
        .create_table(
            sea_query::Table::create()
                .table(Tournament::Table)
                .if_not_exists()
                .col(ColumnDef::new(Tournament::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Tournament::Name).string().not_null())
                .col(ColumnDef::new(Tournament::StartTime).date_time().not_null())
                .col(ColumnDef::new(Tournament::DurationMinutes).integer().not_null())
                .col(ColumnDef::new(Tournament::MarginMinutes).integer().not_null())
                .col(ColumnDef::new(Tournament::AutoAssignCourts).boolean().not_null().default(false))
                .to_owned()
        ).await?;

        manager
        .create_table(
            sea_query::Table::create()
                .table(Team::Table)
                .if_not_exists()
                .col(ColumnDef::new(Team::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Team::TournamentId).integer().not_null())
                .col(ColumnDef::new(Team::Name).string().not_null())
                .foreign_key(&mut tournament_fk("fk-team-tournament", Team::Table, Team::TournamentId))
                .to_owned()
        ).await?;

        manager
        .create_table(
            sea_query::Table::create()
                .table(Court::Table)
                .if_not_exists()
                .col(ColumnDef::new(Court::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Court::TournamentId).integer().not_null())
                .col(ColumnDef::new(Court::Name).string().not_null())
                .foreign_key(&mut tournament_fk("fk-court-tournament", Court::Table, Court::TournamentId))
                .to_owned()
        ).await?;

        manager
        .create_table(
            sea_query::Table::create()
                .table(Official::Table)
                .if_not_exists()
                .col(ColumnDef::new(Official::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Official::TournamentId).integer().not_null())
                .col(ColumnDef::new(Official::Name).string().not_null())
                .foreign_key(&mut tournament_fk("fk-official-tournament", Official::Table, Official::TournamentId))
                .to_owned()
        ).await?;

        manager
        .create_table(
            sea_query::Table::create()
                .table(Stage::Table)
                .if_not_exists()
                .col(ColumnDef::new(Stage::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Stage::TournamentId).integer().not_null())
                .col(ColumnDef::new(Stage::Name).string().not_null())
                .col(ColumnDef::new(Stage::Position).integer().not_null())
                .col(ColumnDef::new(Stage::IsActive).boolean().not_null().default(false))
                .foreign_key(&mut tournament_fk("fk-stage-tournament", Stage::Table, Stage::TournamentId))
                .to_owned()
        ).await?;

        manager
        .create_table(
            sea_query::Table::create()
                .table(Ranking::Table)
                .if_not_exists()
                .col(ColumnDef::new(Ranking::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Ranking::TournamentId).integer().not_null())
                .col(ColumnDef::new(Ranking::WinPoints).double().not_null())
                .col(ColumnDef::new(Ranking::DrawPoints).double().not_null())
                .col(ColumnDef::new(Ranking::LossPoints).double().not_null())
                .col(ColumnDef::new(Ranking::AddScorePoints).boolean().not_null().default(false))
                .col(ColumnDef::new(Ranking::Position).integer().not_null())
                .foreign_key(&mut tournament_fk("fk-ranking-tournament", Ranking::Table, Ranking::TournamentId))
                .to_owned()
        ).await?;

        manager
        .create_table(
            sea_query::Table::create()
                .table(StageItem::Table)
                .if_not_exists()
                .col(ColumnDef::new(StageItem::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(StageItem::StageId).integer().not_null())
                .col(ColumnDef::new(StageItem::Name).string().not_null())
                .col(ColumnDef::new(StageItem::StageType).string().not_null())
                .col(ColumnDef::new(StageItem::TeamCount).integer().not_null())
                .col(ColumnDef::new(StageItem::RankingId).integer().not_null())
                .foreign_key(
                    ForeignKeyCreateStatement::new()
                        .name("fk-stage_item-stage")
                        .from_tbl(StageItem::Table)
                        .from_col(StageItem::StageId)
                        .to_tbl(Stage::Table)
                        .to_col(Stage::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKeyCreateStatement::new()
                        .name("fk-stage_item-ranking")
                        .from_tbl(StageItem::Table)
                        .from_col(StageItem::RankingId)
                        .to_tbl(Ranking::Table)
                        .to_col(Ranking::Id)
                        .on_delete(ForeignKeyAction::Restrict)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned()
        ).await?;

        manager.create_index(
            IndexCreateStatement::new()
            .name("idx-stage_item-stage_id")
            .table(StageItem::Table)
            .col(StageItem::StageId)
            .to_owned()
        ).await?;

        manager
        .create_table(
            sea_query::Table::create()
                .table(StageItemInput::Table)
                .if_not_exists()
                .col(ColumnDef::new(StageItemInput::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(StageItemInput::StageItemId).integer().not_null())
                .col(ColumnDef::new(StageItemInput::Slot).integer().not_null())
                .col(ColumnDef::new(StageItemInput::TeamId).integer())
                .col(ColumnDef::new(StageItemInput::WinnerFromStageItemId).integer())
                .col(ColumnDef::new(StageItemInput::WinnerPosition).integer())
                .col(ColumnDef::new(StageItemInput::FromMatchId).integer())
                .col(ColumnDef::new(StageItemInput::FromMatchOutcome).string())
                .foreign_key(
                    ForeignKeyCreateStatement::new()
                        .name("fk-stage_item_input-stage_item")
                        .from_tbl(StageItemInput::Table)
                        .from_col(StageItemInput::StageItemId)
                        .to_tbl(StageItem::Table)
                        .to_col(StageItem::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKeyCreateStatement::new()
                        .name("fk-stage_item_input-team")
                        .from_tbl(StageItemInput::Table)
                        .from_col(StageItemInput::TeamId)
                        .to_tbl(Team::Table)
                        .to_col(Team::Id)
                        .on_delete(ForeignKeyAction::SetNull)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned()
        ).await?;

        manager.create_index(
            IndexCreateStatement::new()
            .name("idx-stage_item_input-stage_item_id")
            .table(StageItemInput::Table)
            .col(StageItemInput::StageItemId)
            .to_owned()
        ).await?;

        manager
        .create_table(
            sea_query::Table::create()
                .table(Round::Table)
                .if_not_exists()
                .col(ColumnDef::new(Round::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Round::StageItemId).integer().not_null())
                .col(ColumnDef::new(Round::Name).string().not_null())
                .col(ColumnDef::new(Round::IsDraft).boolean().not_null().default(false))
                .col(ColumnDef::new(Round::IsActive).boolean().not_null().default(false))
                .col(ColumnDef::new(Round::BracketPosition).string().not_null())
                .foreign_key(
                    ForeignKeyCreateStatement::new()
                        .name("fk-round-stage_item")
                        .from_tbl(Round::Table)
                        .from_col(Round::StageItemId)
                        .to_tbl(StageItem::Table)
                        .to_col(StageItem::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned()
        ).await?;

        manager.create_index(
            IndexCreateStatement::new()
            .name("idx-round-stage_item_id")
            .table(Round::Table)
            .col(Round::StageItemId)
            .to_owned()
        ).await?;

        manager
        .create_table(
            sea_query::Table::create()
                .table(TournamentMatch::Table)
                .if_not_exists()
                .col(ColumnDef::new(TournamentMatch::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(TournamentMatch::RoundId).integer().not_null())
                .col(ColumnDef::new(TournamentMatch::FirstInputId).integer())
                .col(ColumnDef::new(TournamentMatch::SecondInputId).integer())
                .col(ColumnDef::new(TournamentMatch::FirstWinnerFromMatchId).integer())
                .col(ColumnDef::new(TournamentMatch::SecondWinnerFromMatchId).integer())
                .col(ColumnDef::new(TournamentMatch::FirstLoserFromMatchId).integer())
                .col(ColumnDef::new(TournamentMatch::SecondLoserFromMatchId).integer())
                .col(ColumnDef::new(TournamentMatch::FirstScore).integer().not_null().default(0))
                .col(ColumnDef::new(TournamentMatch::SecondScore).integer().not_null().default(0))
                .col(ColumnDef::new(TournamentMatch::CourtId).integer())
                .col(ColumnDef::new(TournamentMatch::OfficialId).integer())
                .col(ColumnDef::new(TournamentMatch::StartTime).date_time())
                .col(ColumnDef::new(TournamentMatch::PositionInSchedule).integer())
                .col(ColumnDef::new(TournamentMatch::DurationMinutes).integer().not_null())
                .col(ColumnDef::new(TournamentMatch::MarginMinutes).integer().not_null())
                .col(ColumnDef::new(TournamentMatch::CustomDurationMinutes).integer())
                .col(ColumnDef::new(TournamentMatch::CustomMarginMinutes).integer())
                .foreign_key(
                    ForeignKeyCreateStatement::new()
                        .name("fk-tournament_match-round")
                        .from_tbl(TournamentMatch::Table)
                        .from_col(TournamentMatch::RoundId)
                        .to_tbl(Round::Table)
                        .to_col(Round::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKeyCreateStatement::new()
                        .name("fk-tournament_match-court")
                        .from_tbl(TournamentMatch::Table)
                        .from_col(TournamentMatch::CourtId)
                        .to_tbl(Court::Table)
                        .to_col(Court::Id)
                        .on_delete(ForeignKeyAction::SetNull)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKeyCreateStatement::new()
                        .name("fk-tournament_match-official")
                        .from_tbl(TournamentMatch::Table)
                        .from_col(TournamentMatch::OfficialId)
                        .to_tbl(Official::Table)
                        .to_col(Official::Id)
                        .on_delete(ForeignKeyAction::SetNull)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned()
        ).await?;

        manager.create_index(
            IndexCreateStatement::new()
            .name("idx-tournament_match-round_id")
            .table(TournamentMatch::Table)
            .col(TournamentMatch::RoundId)
            .to_owned()
        ).await?;

        manager.create_index(
            IndexCreateStatement::new()
            .name("idx-tournament_match-court_id")
            .table(TournamentMatch::Table)
            .col(TournamentMatch::CourtId)
            .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(TournamentMatch::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Round::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(StageItemInput::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(StageItem::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Ranking::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Stage::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Official::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Court::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Team::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Tournament::Table).to_owned()).await?;
        Ok(())
    }
}
