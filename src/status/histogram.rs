use indexmap::IndexMap;

/// Observed status → count, in the order statuses were first seen
#[derive(Debug, Clone, Default)]
pub struct StatusHistogram {
    counts: IndexMap<String, u64>,
}

impl StatusHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one more occurrence of `status`
    pub fn record(&mut self, status: &str) {
        *self.counts.entry(status.to_string()).or_insert(0) += 1;
    }

    /// Count for a single status
    #[cfg(test)]
    pub(crate) fn count(&self, status: &str) -> u64 {
        self.counts.get(status).copied().unwrap_or(0)
    }

    /// Sum over all statuses
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// `(status, count)` pairs in first-observed order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(status, count)| (status.as_str(), *count))
    }
}
