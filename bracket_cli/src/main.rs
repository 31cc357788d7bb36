use bracket_cli::{cli::Cli, config::read_config, run_command};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = read_config();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_new(&config.logging_config)
                .or_else(|_| EnvFilter::try_from_default_env())
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let db = sea_orm::Database::connect(&config.db_url).await?;
    let out = run_command(cli.command, &config, &db).await?;
    println!("{}", out);
    Ok(())
}
