//! Logging setup
//!
//! Log records go to stderr and to a size-rotated file under the log
//! directory. File writes happen on a background thread; keep the returned
//! guard alive until the program exits so buffered records are flushed.

mod rotate;

pub use rotate::RotatingFile;

use crate::config::LoggingConfig;
use crate::progress::ConsoleWriter;
use std::path::Path;
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Errors raised while installing the subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to open log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to install subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Guard that flushes the log file when dropped
pub struct LogGuard {
    _guard: WorkerGuard,
}

/// Builds the level filter from the verbosity flags
pub fn env_filter(verbose: u8, quiet: bool) -> EnvFilter {
    if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pydocs_scraper=info,warn"),
            1 => EnvFilter::new("pydocs_scraper=debug,info"),
            2 => EnvFilter::new("pydocs_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    }
}

/// Installs the global tracing subscriber
///
/// Console records are drawn through the progress display so they never
/// land in the middle of a bar.
///
/// # Errors
///
/// Fails when the log directory or file cannot be created, or when a
/// subscriber is already installed.
pub fn setup_logging(
    config: &LoggingConfig,
    verbose: u8,
    quiet: bool,
) -> Result<LogGuard, LoggingError> {
    let path = Path::new(&config.dir).join(&config.file_name);
    let file = RotatingFile::open(&path, config.max_bytes, config.backups)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(|| ConsoleWriter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter(verbose, quiet))
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(LogGuard { _guard: guard })
}
