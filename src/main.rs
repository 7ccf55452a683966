//! pydocs-scraper main entry point
//!
//! This is the command-line interface for the Python documentation scraper.

use anyhow::Context;
use clap::Parser;
use pydocs_scraper::config::load_or_default;
use pydocs_scraper::logging::setup_logging;
use pydocs_scraper::runner::{run, RunArgs};
use pydocs_scraper::{Mode, OutputMode};
use std::path::PathBuf;

/// pydocs-scraper: collects facts from the Python documentation
///
/// Scrapes docs.python.org and peps.python.org: what's-new articles,
/// documentation versions, the PDF archive and PEP status counts.
/// Responses are cached on disk between runs.
#[derive(Parser, Debug)]
#[command(name = "pydocs-scraper")]
#[command(version)]
#[command(about = "Python documentation scraper", long_about = None)]
struct Cli {
    /// Scraping mode
    #[arg(value_enum)]
    mode: Mode,

    /// Clear the response cache before running
    #[arg(short, long)]
    clear_cache: bool,

    /// Where to send results (stdout lines when omitted)
    #[arg(short, long, value_enum)]
    output: Option<OutputMode>,

    /// Path to TOML configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_or_default(cli.config.as_deref()).context("Failed to load configuration")?;
    let _log_guard = setup_logging(&config.logging, cli.verbose, cli.quiet)
        .context("Failed to set up logging")?;

    tracing::info!("Scraper started");
    tracing::info!(
        "Command line arguments: mode={}, clear_cache={}, output={:?}",
        cli.mode,
        cli.clear_cache,
        cli.output
    );

    let args = RunArgs {
        mode: cli.mode,
        clear_cache: cli.clear_cache,
        output: cli.output,
    };

    // Mode failures are reported through the log, not the exit status
    if let Err(e) = run(args, &config).await {
        tracing::error!("Error while running {}: {}", cli.mode, e);
    }

    tracing::info!("Scraper finished");
    Ok(())
}
