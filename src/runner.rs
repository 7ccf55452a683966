//! Top-level run loop
//!
//! Builds the session, optionally purges the response cache, runs one mode
//! and hands its table to the selected sink.

use crate::config::Config;
use crate::modes::{run_mode, Mode};
use crate::output::{control_output, OutputMode};
use crate::session::Session;
use crate::Result;

/// What to run, as parsed from the command line
#[derive(Debug, Clone, Copy)]
pub struct RunArgs {
    pub mode: Mode,
    pub clear_cache: bool,
    pub output: Option<OutputMode>,
}

/// Runs one mode end to end with a session built from `config`
pub async fn run(args: RunArgs, config: &Config) -> Result<()> {
    let mut session = Session::from_config(config)?;
    run_with_session(args, &mut session, config).await
}

/// Runs one mode with an existing session
///
/// The cache is cleared, when requested, before any page is fetched.
pub async fn run_with_session(args: RunArgs, session: &mut Session, config: &Config) -> Result<()> {
    if args.clear_cache {
        session.clear_cache()?;
    }

    tracing::debug!("Running mode {}", args.mode);
    if let Some(table) = run_mode(args.mode, session, config).await? {
        control_output(&table, args.output, args.mode.name(), &config.output)?;
    }

    Ok(())
}
