//! CSV result files

use crate::output::ResultTable;
use crate::Result;
use chrono::{DateTime, Local};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Timestamp format used in result file names
pub const DATETIME_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Writes the header and rows as Unix-dialect CSV: every field quoted, LF line ends
pub fn write_csv<W: Write>(table: &ResultTable, writer: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(writer);

    for row in table.all_rows() {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// `<mode>_<timestamp>.csv`
pub fn csv_file_name(mode: &str, now: DateTime<Local>) -> String {
    format!("{}_{}.csv", mode, now.format(DATETIME_FORMAT))
}

/// Saves the table under `results_dir`, creating the directory if needed
///
/// # Returns
///
/// The path of the written file
pub fn save_csv(table: &ResultTable, results_dir: &Path, mode: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(results_dir)?;
    let path = results_dir.join(csv_file_name(mode, Local::now()));
    let file = File::create(&path)?;
    write_csv(table, file)?;
    Ok(path)
}
