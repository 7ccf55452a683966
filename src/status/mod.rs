//! PEP status reconciliation
//!
//! This module compares the status a PEP page declares against the statuses
//! its category code in the index allows, and tallies what was observed.
//! Mismatches are reported, never raised.

mod expected;
mod histogram;

pub use expected::ExpectedStatusTable;
pub use histogram::StatusHistogram;

/// A PEP whose page status disagrees with its index category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMismatch {
    /// Absolute link to the PEP page
    pub link: String,
    /// Status declared on the PEP page
    pub observed: String,
    /// Statuses the category code allows
    pub expected: Vec<String>,
}

impl std::fmt::Display for StatusMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Mismatched status for {}: page says {:?}, expected one of {:?}",
            self.link, self.observed, self.expected
        )
    }
}

/// Records `observed` in the histogram and checks it against the table
///
/// The histogram is updated whether or not the status matches.
pub fn reconcile(
    table: &ExpectedStatusTable,
    histogram: &mut StatusHistogram,
    code: &str,
    observed: &str,
    link: &str,
) -> Option<StatusMismatch> {
    histogram.record(observed);

    if table.accepts(code, observed) {
        return None;
    }

    Some(StatusMismatch {
        link: link.to_string(),
        observed: observed.to_string(),
        expected: table
            .expected(code)
            .unwrap_or_default()
            .iter()
            .map(|s| s.to_string())
            .collect(),
    })
}
