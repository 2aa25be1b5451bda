// Grid geometry - fixed layout constants the layout pass reads on every frame

use crate::grid::traits::{GridError, GridResult};

pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_COLS: usize = 10;
/// Gap between neighbouring cells, in points
pub const DEFAULT_SPACING: f32 = 2.0;
/// Upper bound on the grid edge, in points
pub const DEFAULT_MAX_GRID_SIZE: f32 = 200.0;
/// Margin kept free on every side of the viewport, in points
pub const DEFAULT_SCREEN_PADDING: f32 = 1.0;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub spacing: f32,
    pub max_grid_size: f32,
    pub screen_padding: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            spacing: DEFAULT_SPACING,
            max_grid_size: DEFAULT_MAX_GRID_SIZE,
            screen_padding: DEFAULT_SCREEN_PADDING,
        }
    }
}

impl GridConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Row and column of a row-major cell index
    pub fn position_of(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }

    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Reject geometry the layout pass cannot work with
    pub fn validate(&self) -> GridResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GridError::ConfigurationError(format!(
                "grid must have at least one row and column, got {}x{}",
                self.rows, self.cols
            )));
        }
        for (name, value) in [
            ("spacing", self.spacing),
            ("max_grid_size", self.max_grid_size),
            ("screen_padding", self.screen_padding),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GridError::ConfigurationError(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_is_ten_by_ten() {
        let config = GridConfig::default();
        assert_eq!(config.cell_count(), 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_row_major_positions() {
        let config = GridConfig::new(3, 4);
        assert_eq!(config.position_of(0), (0, 0));
        assert_eq!(config.position_of(5), (1, 1));
        assert_eq!(config.position_of(11), (2, 3));
        assert_eq!(config.index_of(2, 3), 11);
    }

    #[test]
    fn test_validate_rejects_empty_grid() {
        assert!(GridConfig::new(0, 10).validate().is_err());
        assert!(GridConfig::new(10, 0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_spacing() {
        let config = GridConfig {
            spacing: -1.0,
            ..GridConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GridError::ConfigurationError(_))
        ));
    }
}
