/// Category code → statuses accepted on peps.python.org
const PYTHON_PEPS: &[(&str, &[&str])] = &[
    ("A", &["Active", "Accepted"]),
    ("D", &["Deferred"]),
    ("F", &["Final"]),
    ("P", &["Provisional"]),
    ("R", &["Rejected"]),
    ("S", &["Superseded"]),
    ("W", &["Withdrawn"]),
    ("", &["Draft", "Active"]),
];

/// Acceptable PEP statuses per one-letter category code
///
/// The empty code is valid: PEPs listed without a status letter are
/// expected to be drafts or active.
#[derive(Debug, Clone, Copy)]
pub struct ExpectedStatusTable {
    entries: &'static [(&'static str, &'static [&'static str])],
}

impl ExpectedStatusTable {
    /// The table used by peps.python.org
    pub fn python_peps() -> Self {
        Self {
            entries: PYTHON_PEPS,
        }
    }

    /// Expected statuses for `code`, or `None` for an unknown code
    pub fn expected(&self, code: &str) -> Option<&'static [&'static str]> {
        self.entries
            .iter()
            .find(|(known, _)| *known == code)
            .map(|(_, statuses)| *statuses)
    }

    /// Whether `status` is acceptable for `code`; unknown codes accept nothing
    pub fn accepts(&self, code: &str, status: &str) -> bool {
        self.expected(code)
            .is_some_and(|statuses| statuses.contains(&status))
    }
}
