//! The tabular shape every extractor produces

use crate::{Result, ScraperError};

/// One output record
pub type Row = Vec<String>;

/// A header plus data rows of the same arity
///
/// A table always has its header, so it is never empty as a whole;
/// `is_empty` reports whether there are data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    header: Row,
    rows: Vec<Row>,
}

impl ResultTable {
    /// Creates a table with the given column names and no data rows
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a data row
    ///
    /// # Errors
    ///
    /// `ScraperError::RowArity` when the row width differs from the header's.
    pub fn push<I, S>(&mut self, row: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Row = row.into_iter().map(Into::into).collect();
        if row.len() != self.header.len() {
            return Err(ScraperError::RowArity {
                expected: self.header.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Data rows, without the header
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// Header first, then every data row
    pub fn all_rows(&self) -> impl Iterator<Item = &Row> {
        std::iter::once(&self.header).chain(self.rows.iter())
    }
}
