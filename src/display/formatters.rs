// Display formatting utilities - timestamp labels and plain-text grid dumps

use crate::config::GridConfig;
use crate::grid::selection::{SelectionMap, Timestamp};
use std::fmt::Write;

const TEXT_CELL_WIDTH: usize = 6;

/// Month and day, e.g. `03/05`
pub fn format_date_line(at: &Timestamp) -> String {
    at.format("%m/%d").to_string()
}

/// 24-hour clock, e.g. `14:07`
pub fn format_time_line(at: &Timestamp) -> String {
    at.format("%H:%M").to_string()
}

/// The two label lines drawn inside a selected cell
pub fn format_timestamp_lines(at: &Timestamp) -> (String, String) {
    (format_date_line(at), format_time_line(at))
}

pub fn format_timestamp(at: &Timestamp) -> String {
    let (date, time) = format_timestamp_lines(at);
    format!("{}\n{}", date, time)
}

/// Render the grid as text: `.` for free cells, selection time otherwise
pub fn render_text_grid(config: &GridConfig, selection: &SelectionMap) -> String {
    let mut out = String::new();

    out.push_str("    ");
    for col in 0..config.cols {
        let _ = write!(out, "{:>width$}", col, width = TEXT_CELL_WIDTH);
    }
    out.push('\n');

    for row in 0..config.rows {
        let _ = write!(out, "{:2}: ", row);
        for col in 0..config.cols {
            let cell = match selection.get(config.index_of(row, col)) {
                Some(at) => format_time_line(at),
                None => ".".to_string(),
            };
            let _ = write!(out, "{:>width$}", cell, width = TEXT_CELL_WIDTH);
        }
        out.push('\n');
    }
    out
}
