//! Result rendering
//!
//! This module handles the three ways a ResultTable leaves the program:
//! - One space-joined line per row on stdout (default)
//! - A bordered pretty table on stdout
//! - A timestamped CSV file under the results directory

mod csv_file;
mod pretty;
mod table;

pub use csv_file::{csv_file_name, save_csv, write_csv, DATETIME_FORMAT};
pub use pretty::render_pretty;
pub use table::{ResultTable, Row};

use crate::config::OutputConfig;
use crate::Result;
use clap::ValueEnum;
use std::io::Write;
use std::path::Path;

/// Alternative output formats selected with `--output`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Aligned table with column titles
    Pretty,
    /// CSV file in the results directory
    File,
}

/// Writes each row, header included, as one space-joined line
pub fn write_lines<W: Write>(table: &ResultTable, mut writer: W) -> Result<()> {
    for row in table.all_rows() {
        writeln!(writer, "{}", row.join(" "))?;
    }
    writer.flush()?;
    Ok(())
}

/// Sends the table to the sink selected on the command line
///
/// `mode_name` is used to name CSV files.
pub fn control_output(
    table: &ResultTable,
    output: Option<OutputMode>,
    mode_name: &str,
    config: &OutputConfig,
) -> Result<()> {
    match output {
        None => write_lines(table, std::io::stdout().lock()),
        Some(OutputMode::Pretty) => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(render_pretty(table).as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
        Some(OutputMode::File) => {
            let path = save_csv(table, Path::new(&config.results_dir), mode_name)?;
            tracing::info!("Results saved to {}", path.display());
            Ok(())
        }
    }
}
