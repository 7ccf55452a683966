//! Progress indicator for per-item iteration
//!
//! Bars are registered with one process-wide display. Console log records
//! go through [`ConsoleWriter`], which hides the bars while the record is
//! written and redraws them afterwards.

use indicatif::{MultiProgress, ProgressBar, ProgressFinish, ProgressStyle};
use std::io::{self, Write};
use std::sync::LazyLock;

const TEMPLATE: &str = "{msg}: {percent:>3}%|{wide_bar}| {pos}/{len} [{elapsed_precise}<{eta_precise}]";

static DISPLAY: LazyLock<MultiProgress> = LazyLock::new(MultiProgress::new);

/// A bar counting `len` items, labelled with `desc`
///
/// The bar draws on stderr only when it is a terminal and clears itself
/// once dropped, so logs written afterwards are not interleaved with it.
pub fn item_bar(len: usize, desc: &str) -> ProgressBar {
    let style = ProgressStyle::with_template(TEMPLATE).unwrap_or_else(|_| ProgressStyle::default_bar());

    let bar = ProgressBar::new(len as u64)
        .with_style(style)
        .with_message(desc.to_string())
        .with_finish(ProgressFinish::AndClear);
    DISPLAY.add(bar)
}

/// Stderr writer that suspends active progress bars for each write
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleWriter;

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        DISPLAY.suspend(|| io::stderr().lock().write_all(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}
