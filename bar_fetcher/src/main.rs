use std::error::Error;

use bar_fetcher::{
    BarFetcher,
    cli::{Cli, missing_is_ok},
    config::{Config, read_config},
    models::interval::{IntervalResolution, resolve_interval},
};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Logs go to stderr so stdout carries only the JSON output.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Loaded before logging so RUST_LOG may come from .env.
    let dotenv = missing_is_ok(dotenvy::dotenv());
    init_logging();
    if let Err(e) = dotenv {
        warn!("ignoring unreadable .env file: {e}");
    }

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => read_config(path)?,
        None => Config::default(),
    };

    if let IntervalResolution::Substituted {
        requested,
        fallback,
    } = resolve_interval(&cli.interval)
    {
        warn!("interval {requested:?} is not supported, fetching {fallback} bars instead");
    }

    let fetcher = BarFetcher::from_config(&config.polygon)?;
    let bars = fetcher.fetch(&cli.request()).await;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&bars)?
    } else {
        serde_json::to_string(&bars)?
    };
    println!("{output}");
    Ok(())
}
