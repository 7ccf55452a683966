//! Documentation versions listed in the sidebar

use crate::modes::Extraction;
use crate::output::ResultTable;
use crate::session::{attr, find_all, text, Session, TagQuery};
use crate::{Result, ScraperError};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Text identifying the sidebar list of documentation versions
pub const ALL_VERSIONS_MARKER: &str = "All versions";

static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Python (?P<version>\d\.\d+) \((?P<status>.*)\)").expect("version pattern compiles")
});

/// Splits an anchor label like `Python 3.12 (stable)` into version and status
///
/// Labels that do not follow the pattern become `(label, "")`.
///
/// # Examples
///
/// ```
/// use pydocs_scraper::modes::parse_version_label;
///
/// assert_eq!(
///     parse_version_label("Python 3.11 (stable)"),
///     ("3.11".to_string(), "stable".to_string())
/// );
/// assert_eq!(
///     parse_version_label("Python 3.13"),
///     ("Python 3.13".to_string(), String::new())
/// );
/// ```
pub fn parse_version_label(label: &str) -> (String, String) {
    match VERSION_PATTERN.captures(label) {
        Some(caps) => (caps["version"].to_string(), caps["status"].to_string()),
        None => (label.to_string(), String::new()),
    }
}

/// Lists every documentation version from the sidebar's "All versions" group
///
/// # Errors
///
/// `RequiredSectionMissing` when no sidebar list mentions "All versions".
pub async fn version_status(session: &mut Session, main_doc_url: &Url) -> Result<Extraction> {
    let doc = session.get_document(main_doc_url).await?;

    let group = doc
        .find_all(&TagQuery::new("div").class("sphinxsidebarwrapper"))
        .into_iter()
        .flat_map(|sidebar| find_all(sidebar, &TagQuery::new("ul")))
        .find(|ul| text(*ul).contains(ALL_VERSIONS_MARKER))
        .ok_or_else(|| {
            ScraperError::RequiredSectionMissing(format!(
                "no sidebar list contains {:?}",
                ALL_VERSIONS_MARKER
            ))
        })?;

    let mut table = ResultTable::new(["documentation URL", "version", "status"]);
    for anchor in find_all(group, &TagQuery::new("a")) {
        let (version, status) = parse_version_label(&text(anchor));
        table.push([attr(anchor, "href")?.to_string(), version, status])?;
    }

    Ok(Extraction::new(table, Vec::new()))
}
