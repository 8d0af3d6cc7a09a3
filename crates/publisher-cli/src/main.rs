//! Event publisher entry point.
//!
//! Reads a JSON array of events from a file and appends each one, encoded
//! as a JSON string, to the `events` list of a Redis-compatible server,
//! then appends `QUIT` so consumers know the stream has ended.
//!
//! # Run Sequence
//!
//! 1. Initialize structured logging (tracing, to stderr)
//! 2. Parse arguments (zero or one input path)
//! 3. Load configuration from `publisher-config.yaml`
//! 4. Load the input file (fails here, before any network access)
//! 5. Connect to Redis
//! 6. Push every event, then the sentinel
//! 7. Close the connection

mod cli;
mod error;

use std::path::Path;

use clap::Parser as _;
use publisher_core::config::DEFAULT_CONFIG_FILE;
use publisher_core::{EVENTS_KEY, PublisherConfig, resolve_input};
use publisher_store::RedisListStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::error::CliError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the configuration, the input file, the connection,
/// or any push fails. Nothing is retried.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli).await?;
    Ok(())
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = PublisherConfig::load(Path::new(DEFAULT_CONFIG_FILE))?;
    let input = resolve_input(cli.input, &config);
    let redis_url = config.redis.url();
    info!(
        input = %input.display(),
        redis = config.redis.target(),
        list_key = EVENTS_KEY,
        "publish-events starting"
    );

    let mut stdout = std::io::stdout();
    let (store, report) =
        publisher_core::run(&input, || RedisListStore::connect(&redis_url), &mut stdout).await?;

    store.quit().await?;
    info!(
        published = report.published,
        list_len = report.list_len,
        "publish-events finished"
    );
    Ok(())
}
