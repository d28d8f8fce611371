use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use readwise_dayone::{Cli, Config, SyncOutcome, Syncer};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Values from a local .env behave like real environment variables.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(outcome) => {
            println!("{}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<SyncOutcome> {
    let config = Config::from_cli(cli, Utc::now().date_naive())?;
    debug!("Loaded {:?}", config);

    let syncer = Syncer::from_config(&config)?;
    let outcome = syncer.run(config.date).await?;

    if let SyncOutcome::Created { entries } = outcome {
        info!("Created {} Day One entries", entries);
    }

    Ok(outcome)
}
