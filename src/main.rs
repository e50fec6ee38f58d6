//! Breeder-Scout main entry point
//!
//! CSV goes to stdout and nothing else does: all diagnostics are
//! appended to a log file so the output stream stays machine-readable.

use anyhow::Context;
use breeder_scout::config::{DEFAULT_LIMIT, DEFAULT_WORKERS};
use breeder_scout::fetcher::build_http_client;
use breeder_scout::{run_scrape, ScrapeConfig};
use clap::Parser;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Breeder-Scout: scrape marketplace breeder listings to CSV
#[derive(Parser, Debug)]
#[command(name = "breeder-scout")]
#[command(version)]
#[command(about = "Scrapes marketplace breeder listings to CSV on stdout", long_about = None)]
struct Cli {
    /// Number of concurrent workers per fetch stage
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    workers: usize,

    /// Maximum number of breeder records to fetch
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    limit: usize,

    /// File diagnostics are appended to (stdout is reserved for CSV)
    #[arg(long, default_value = "log.txt")]
    log_file: PathBuf,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(&cli.log_file, cli.verbose)?;

    let config = ScrapeConfig::new(cli.workers, cli.limit)?;
    tracing::info!(
        "Starting scrape: workers={}, limit={}",
        config.workers,
        config.limit
    );

    let client = build_http_client().context("failed to build HTTP client")?;

    let written = run_scrape(&config, client, std::io::stdout()).await?;
    tracing::info!("Scrape finished: {written} records written");

    Ok(())
}

/// Sets up the tracing subscriber writing to the log file.
///
/// Failure to open the log file is fatal: running blind is worse than
/// not running.
fn setup_logging(log_file: &Path, verbose: u8) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("failed to open log file {}", log_file.display()))?;

    let filter = match verbose {
        0 => EnvFilter::new("breeder_scout=info,warn"),
        1 => EnvFilter::new("breeder_scout=debug,info"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();

    Ok(())
}
