//! PEP status census

use crate::modes::{log_diagnostics, skip_unavailable, Extraction};
use crate::output::ResultTable;
use crate::progress::item_bar;
use crate::session::{attr, find, find_all, text, Session, TagQuery};
use crate::status::{reconcile, ExpectedStatusTable, StatusHistogram};
use crate::url::resolve_href;
use crate::{Result, ScraperError};
use regex::Regex;
use scraper::ElementRef;
use std::sync::LazyLock;
use url::Url;

// Tolerates any whitespace between the field name and its value
static STATUS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Status:\s*(\w+)").expect("status pattern compiles"));

/// One data row of the numerical PEP index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Status letter of the index row (may be empty)
    pub code: String,
    /// Link to the PEP page, relative to the index
    pub href: String,
}

impl IndexEntry {
    /// Reads the category code and PEP link from a table row
    fn from_row(row: ElementRef<'_>) -> Result<Self> {
        let abbr = find(row, &TagQuery::new("abbr"))?;
        // The first character is the type glyph, the rest is the status code
        let code = text(abbr).chars().skip(1).collect();

        let anchor = find(row, &TagQuery::new("a").class("pep reference internal"))?;
        let href = attr(anchor, "href")?.to_string();

        Ok(Self { code, href })
    }
}

/// Status declared in a PEP header field list, e.g. `Status:\nFinal`
pub fn declared_status(fields: &str) -> Option<String> {
    STATUS_PATTERN
        .captures(fields)
        .map(|caps| caps[1].to_string())
}

/// Counts PEPs per declared status
///
/// Each PEP listed in the numerical index is fetched; its declared status
/// is tallied and checked against the statuses its index code allows.
/// Mismatches and unreachable PEP pages end up in the diagnostics.
pub async fn pep_census(
    session: &mut Session,
    peps_url: &Url,
    expected: &ExpectedStatusTable,
) -> Result<Extraction> {
    let entries = {
        let doc = session.get_document(peps_url).await?;
        let index = doc.find(&TagQuery::new("section").id("numerical-index"))?;

        find_all(index, &TagQuery::new("tr"))
            .into_iter()
            .skip(1)
            .map(IndexEntry::from_row)
            .collect::<Result<Vec<_>>>()?
    };
    tracing::debug!("Numerical index lists {} PEPs", entries.len());

    let mut histogram = StatusHistogram::new();
    let mut diagnostics = Vec::new();

    let outcome = tally_statuses(
        session,
        peps_url,
        &entries,
        expected,
        &mut histogram,
        &mut diagnostics,
    )
    .await;
    // Skipped PEPs and mismatches are reported even when the run aborts
    log_diagnostics(&diagnostics);
    outcome?;

    let mut table = ResultTable::new(["Status", "Quantities"]);
    for (status, count) in histogram.iter() {
        table.push([status.to_string(), count.to_string()])?;
    }
    table.push(["Total".to_string(), histogram.total().to_string()])?;

    Ok(Extraction::new(table, diagnostics))
}

async fn tally_statuses(
    session: &mut Session,
    peps_url: &Url,
    entries: &[IndexEntry],
    expected: &ExpectedStatusTable,
    histogram: &mut StatusHistogram,
    diagnostics: &mut Vec<String>,
) -> Result<()> {
    for entry in item_bar(entries.len(), "pep-census").wrap_iter(entries.iter()) {
        let pep_link = resolve_href(peps_url, &entry.href)?;

        let Some(doc) = skip_unavailable(session.get_document(&pep_link).await, diagnostics)?
        else {
            continue;
        };

        let fields = doc.find(&TagQuery::new("dl").class("rfc2822 field-list simple"))?;
        let status = declared_status(&text(fields)).ok_or_else(|| ScraperError::StatusNotFound {
            url: pep_link.to_string(),
        })?;

        if let Some(mismatch) =
            reconcile(expected, histogram, &entry.code, &status, pep_link.as_str())
        {
            diagnostics.push(mismatch.to_string());
        }
    }
    Ok(())
}
