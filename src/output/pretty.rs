//! Bordered, left-aligned table rendering

use crate::output::ResultTable;

/// Renders the table with the header as column titles
///
/// Cells containing newlines span several lines of the same row.
///
/// ```text
/// +--------+------------+
/// | Status | Quantities |
/// +--------+------------+
/// | Final  | 2          |
/// | Total  | 2          |
/// +--------+------------+
/// ```
pub fn render_pretty(table: &ResultTable) -> String {
    let widths = column_widths(table);
    let border = border_line(&widths);

    let mut out = String::new();
    out.push_str(&border);
    push_row(&mut out, table.header(), &widths);
    out.push_str(&border);

    if !table.is_empty() {
        for row in table.rows() {
            push_row(&mut out, row, &widths);
        }
        out.push_str(&border);
    }

    out
}

fn cell_lines(cell: &str) -> Vec<&str> {
    let lines: Vec<&str> = cell.lines().collect();
    if lines.is_empty() {
        vec![""]
    } else {
        lines
    }
}

fn column_widths(table: &ResultTable) -> Vec<usize> {
    let mut widths = vec![0; table.width()];
    for row in table.all_rows() {
        for (width, cell) in widths.iter_mut().zip(row) {
            let widest = cell_lines(cell)
                .iter()
                .map(|line| line.chars().count())
                .max()
                .unwrap_or(0);
            *width = (*width).max(widest);
        }
    }
    widths
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn push_row(out: &mut String, row: &[String], widths: &[usize]) {
    let cells: Vec<Vec<&str>> = row.iter().map(|cell| cell_lines(cell)).collect();
    let height = cells.iter().map(Vec::len).max().unwrap_or(1);

    for line in 0..height {
        out.push('|');
        for (cell, width) in cells.iter().zip(widths) {
            let text = cell.get(line).copied().unwrap_or("");
            out.push_str(&format!(" {:<width$} |", text, width = *width));
        }
        out.push('\n');
    }
}
