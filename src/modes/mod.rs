//! Scraping modes
//!
//! Each mode walks one landing page and, for the list-style modes, every
//! page it links to:
//! - `article-changes`: what's-new articles with their titles and authors
//! - `version-status`: documentation versions and their support status
//! - `download-archive`: the A4 PDF documentation archive
//! - `pep-census`: PEP counts per status, cross-checked against the index

mod article_changes;
mod download_archive;
mod pep_census;
mod version_status;

pub use article_changes::article_changes;
pub use download_archive::{download_archive, ARCHIVE_SUFFIX};
pub use pep_census::{declared_status, pep_census, IndexEntry};
pub use version_status::{parse_version_label, version_status, ALL_VERSIONS_MARKER};

use crate::config::Config;
use crate::output::ResultTable;
use crate::session::Session;
use crate::status::ExpectedStatusTable;
use crate::{Result, ScraperError};
use clap::ValueEnum;
use std::fmt;
use std::path::Path;
use url::Url;

/// The scraping mode selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Mode {
    /// Articles about changes between Python versions
    #[value(name = "article-changes", alias = "whats-new")]
    ArticleChanges,
    /// Documentation versions and their status
    #[value(name = "version-status", alias = "latest-versions")]
    VersionStatus,
    /// Download the PDF (A4) documentation archive
    #[value(name = "download-archive", alias = "download")]
    DownloadArchive,
    /// Count PEPs per status
    #[value(name = "pep-census", alias = "pep")]
    PepCensus,
}

impl Mode {
    /// The canonical command-line name
    pub fn name(&self) -> &'static str {
        match self {
            Self::ArticleChanges => "article-changes",
            Self::VersionStatus => "version-status",
            Self::DownloadArchive => "download-archive",
            Self::PepCensus => "pep-census",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rows produced by a mode plus the non-fatal problems met on the way
#[derive(Debug, Clone)]
pub struct Extraction {
    pub table: ResultTable,
    pub diagnostics: Vec<String>,
}

impl Extraction {
    pub fn new(table: ResultTable, diagnostics: Vec<String>) -> Self {
        Self { table, diagnostics }
    }
}

/// Runs `mode` to completion
///
/// # Returns
///
/// * `Ok(Some(table))` - rows for the result sink
/// * `Ok(None)` - the mode has no tabular output (`download-archive`)
/// * `Err(ScraperError)` - the landing page or a mandatory element failed
pub async fn run_mode(
    mode: Mode,
    session: &mut Session,
    config: &Config,
) -> Result<Option<ResultTable>> {
    let main_doc_url = parse_site(&config.sites.main_doc_url)?;

    let extraction = match mode {
        Mode::ArticleChanges => article_changes(session, &main_doc_url).await?,
        Mode::VersionStatus => version_status(session, &main_doc_url).await?,
        Mode::DownloadArchive => {
            download_archive(
                session,
                &main_doc_url,
                Path::new(&config.output.downloads_dir),
            )
            .await?;
            return Ok(None);
        }
        Mode::PepCensus => {
            let peps_url = parse_site(&config.sites.peps_url)?;
            let expected = ExpectedStatusTable::python_peps();
            pep_census(session, &peps_url, &expected).await?
        }
    };

    Ok(Some(extraction.table))
}

fn parse_site(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|e| crate::UrlError::Parse(format!("{}: {}", url, e)).into())
}

/// Turns an unavailable page into a recorded diagnostic
///
/// Every other error is handed back to the caller unchanged.
pub(crate) fn skip_unavailable<T>(
    result: Result<T>,
    diagnostics: &mut Vec<String>,
) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err @ ScraperError::PageUnavailable { .. }) => {
            tracing::debug!("Skipping item: {}", err);
            diagnostics.push(err.to_string());
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Logs the diagnostics gathered during an iteration
pub(crate) fn log_diagnostics(diagnostics: &[String]) {
    for message in diagnostics {
        tracing::info!("{}", message);
    }
}
