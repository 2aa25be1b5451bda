// Common traits and types for the selectable grid

use crate::config::GridConfig;
use crate::grid::selection::{SelectionChange, Timestamp};

/// Result type for grid operations
pub type GridResult<T> = Result<T, GridError>;

/// Errors that can occur around the grid: bad input from outside the
/// render loop, configuration, and terminal or file I/O
#[derive(Debug)]
pub enum GridError {
    InvalidIndex { index: usize, cell_count: usize },
    ConfigurationError(String),
    Parse(serde_json::Error),
    Io(std::io::Error),
    LoggingError(String),
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::InvalidIndex { index, cell_count } => {
                write!(
                    f,
                    "Invalid cell index {}, grid has {} cells",
                    index, cell_count
                )
            }
            GridError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            GridError::Parse(err) => write!(f, "Config parse error: {}", err),
            GridError::Io(err) => write!(f, "I/O error: {}", err),
            GridError::LoggingError(msg) => write!(f, "Logging setup failed: {}", msg),
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GridError::Parse(err) => Some(err),
            GridError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GridError {
    fn from(err: std::io::Error) -> Self {
        GridError::Io(err)
    }
}

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        GridError::Parse(err)
    }
}

/// Common trait for grids whose cells can be toggled on and off
pub trait GridTrait {
    /// Get the grid configuration
    fn config(&self) -> &GridConfig;

    /// Check if a cell is selected
    fn is_cell_selected(&self, index: usize) -> bool;

    /// When the cell was selected, if it is
    fn selected_at(&self, index: usize) -> Option<&Timestamp>;

    /// Number of selected cells
    fn selected_count(&self) -> usize;

    /// Flip one cell, stamping a new selection with `at`
    fn toggle_at(&mut self, index: usize, at: Timestamp) -> SelectionChange;

    fn cell_count(&self) -> usize {
        self.config().cell_count()
    }

    /// Validate an index against grid bounds
    fn validate_index(&self, index: usize) -> GridResult<()> {
        let cell_count = self.cell_count();
        if index >= cell_count {
            return Err(GridError::InvalidIndex { index, cell_count });
        }
        Ok(())
    }
}
