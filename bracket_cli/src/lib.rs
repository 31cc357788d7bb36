pub mod cli;
pub mod config;

use std::collections::HashMap;
use std::io::Read;

use bracket_backend::actions::{
    make_rng, Action, ActionTrait, BuildStageItemAction, RecomputeRankingAction, ScheduleAllAction, SchedulingMode,
    UpdateConflictsAction
};
use bracket_backend::ranking::{compute_statistics, EloOptions};
use bracket_backend::swiss::suggest_swiss_matches;
use bracket_backend::views::StandingsView;
use bracket_entities::prelude::*;
use migration::MigratorTrait;
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::info;

use crate::cli::Command;
use crate::config::Config;


async fn apply_action<A>(db: &DatabaseConnection, action: A) -> Result<EntityGroup, anyhow::Error> where A: ActionTrait + Send {
    let transaction = db.begin().await?;
    let changes = action.get_changes(&transaction).await?;
    changes.save_all(&transaction).await?;
    transaction.commit().await?;
    info!("Saved {} changed entities", changes.len());
    Ok(changes)
}

fn read_action(path: &str) -> Result<Action, anyhow::Error> {
    let content = if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    }
    else {
        std::fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&content)?)
}

/// Runs `command` against `db` and returns what should be printed.
pub async fn run_command(command: Command, config: &Config, db: &DatabaseConnection) -> Result<String, anyhow::Error> {
    let changes = match command {
        Command::Migrate => {
            migration::Migrator::up(db, None).await?;
            return Ok("Database is up to date".into());
        },
        Command::Build { stage_item_id } => {
            apply_action(db, BuildStageItemAction { stage_item_id }).await?
        },
        Command::ScheduleAll { tournament_id, assign_officials, seed } => {
            let mode = if seed.is_some() { SchedulingMode::Randomized } else { SchedulingMode::Batch };
            apply_action(db, ScheduleAllAction { tournament_id, mode, assign_officials, seed }).await?
        },
        Command::UpdateConflicts { tournament_id } => {
            apply_action(db, UpdateConflictsAction { tournament_id }).await?
        },
        Command::RecomputeRanking { stage_item_id } => {
            apply_action(db, RecomputeRankingAction { stage_item_id }).await?
        },
        Command::Standings { stage_item_id } => {
            let view = StandingsView::load(db, stage_item_id).await?;
            return Ok(serde_json::to_string_pretty(&view)?);
        },
        Command::SuggestSwiss { stage_item_id, seed } => {
            let stage_item = StageItem::get(db, stage_item_id).await?;
            let stage = Stage::get(db, stage_item.stage_id).await?;
            let details = TournamentDetails::load(db, stage.tournament_id).await?;
            let item = details.stage_item(stage_item_id)?;
            let ranking = details.ranking_for(&item.stage_item)?;

            let ratings: HashMap<_, f64> = compute_statistics(item, ranking, &EloOptions::default())
                .into_iter()
                .map(|(input_id, stats)| (input_id, stats.points))
                .collect();
            let mut rng = make_rng(seed);
            let suggestions = suggest_swiss_matches(item, &ratings, &config.swiss, &mut rng);
            return Ok(serde_json::to_string_pretty(&suggestions)?);
        },
        Command::Apply { path } => {
            let action = read_action(&path)?;
            let transaction = db.begin().await?;
            let changes = action.execute(&transaction).await?;
            changes.save_all(&transaction).await?;
            transaction.commit().await?;
            changes
        },
    };

    Ok(serde_json::to_string_pretty(changes.entities())?)
}
