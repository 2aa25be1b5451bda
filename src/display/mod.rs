// Display module for cell presentation and grid formatting
pub mod cell;
pub mod formatters;

// Re-export main types and functions
pub use cell::{CellAppearance, CellView, Rgb};
pub use formatters::{
    format_date_line, format_time_line, format_timestamp, format_timestamp_lines,
    render_text_grid,
};
