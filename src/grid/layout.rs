// Layout calculation - square cell size and placement for a viewport
//
// All values are in points. A viewport smaller than twice the padding gives
// a zero or negative size from `cell_size`; `GridLayout` clamps that to zero
// and then places and hits nothing.

use crate::config::GridConfig;

/// Available drawing area, in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Edge of the square grid: the smaller viewport side less padding, capped
pub fn grid_size(viewport: Viewport, config: &GridConfig) -> f32 {
    let available = viewport.width.min(viewport.height) - 2.0 * config.screen_padding;
    available.min(config.max_grid_size)
}

/// Edge length of one cell. May be zero or negative for tiny viewports.
pub fn cell_size(viewport: Viewport, config: &GridConfig) -> f32 {
    let cols = config.cols as f32;
    (grid_size(viewport, config) - config.spacing * (cols - 1.0)) / cols
}

/// Square occupied by one cell, in points from the viewport origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

impl CellRect {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.size && y >= self.y && y < self.y + self.size
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.size / 2.0, self.y + self.size / 2.0)
    }
}

/// One layout pass: where every cell goes for the current viewport
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
    pub cell_size: f32,
    pub spacing: f32,
    pub origin_x: f32,
    pub origin_y: f32,
}

impl GridLayout {
    /// Compute a fresh layout; the grid is centered in the viewport
    pub fn compute(viewport: Viewport, config: &GridConfig) -> Self {
        let cell_size = cell_size(viewport, config).max(0.0);
        let mut layout = Self {
            rows: config.rows,
            cols: config.cols,
            cell_size,
            spacing: config.spacing,
            origin_x: 0.0,
            origin_y: 0.0,
        };
        layout.origin_x = (viewport.width - layout.width()) / 2.0;
        layout.origin_y = (viewport.height - layout.height()) / 2.0;
        layout
    }

    pub fn is_degenerate(&self) -> bool {
        self.cell_size <= 0.0
    }

    /// Distance between the origins of neighbouring cells
    pub fn pitch(&self) -> f32 {
        self.cell_size + self.spacing
    }

    pub fn width(&self) -> f32 {
        Self::span(self.cols, self.cell_size, self.spacing)
    }

    pub fn height(&self) -> f32 {
        Self::span(self.rows, self.cell_size, self.spacing)
    }

    fn span(count: usize, cell_size: f32, spacing: f32) -> f32 {
        if count == 0 {
            return 0.0;
        }
        count as f32 * cell_size + (count - 1) as f32 * spacing
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn cell_rect(&self, index: usize) -> Option<CellRect> {
        if index >= self.cell_count() || self.is_degenerate() {
            return None;
        }
        let row = index / self.cols;
        let col = index % self.cols;
        Some(CellRect {
            x: self.origin_x + col as f32 * self.pitch(),
            y: self.origin_y + row as f32 * self.pitch(),
            size: self.cell_size,
        })
    }

    /// Index of the cell under a point; gutters and margins hit nothing
    pub fn hit_test(&self, x: f32, y: f32) -> Option<usize> {
        if self.is_degenerate() {
            return None;
        }
        let col = Self::track_at(x - self.origin_x, self.pitch(), self.cell_size, self.cols)?;
        let row = Self::track_at(y - self.origin_y, self.pitch(), self.cell_size, self.rows)?;
        Some(row * self.cols + col)
    }

    fn track_at(offset: f32, pitch: f32, cell_size: f32, count: usize) -> Option<usize> {
        if offset < 0.0 {
            return None;
        }
        let track = (offset / pitch).floor() as usize;
        if track >= count || offset - track as f32 * pitch >= cell_size {
            return None;
        }
        Some(track)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GridConfig {
        GridConfig {
            rows: 10,
            cols: 10,
            spacing: 2.0,
            max_grid_size: 600.0,
            screen_padding: 20.0,
        }
    }

    #[test]
    fn test_cell_size_capped_by_max_grid() {
        let viewport = Viewport::new(800.0, 1000.0);
        assert!((grid_size(viewport, &config()) - 600.0).abs() < 1e-4);
        assert!((cell_size(viewport, &config()) - 58.2).abs() < 1e-4);
    }

    #[test]
    fn test_cell_size_limited_by_short_side() {
        let viewport = Viewport::new(400.0, 1000.0);
        // 400 - 40 = 360, (360 - 18) / 10
        assert!((cell_size(viewport, &config()) - 34.2).abs() < 1e-4);
    }

    #[test]
    fn test_degenerate_viewport_passes_negative_through() {
        let viewport = Viewport::new(30.0, 30.0);
        assert!(grid_size(viewport, &config()) < 0.0);
        assert!(cell_size(viewport, &config()) < 0.0);

        let layout = GridLayout::compute(viewport, &config());
        assert_eq!(layout.cell_size, 0.0);
        assert!(layout.is_degenerate());
        assert_eq!(layout.cell_rect(0), None);
        assert_eq!(layout.hit_test(15.0, 15.0), None);
    }

    #[test]
    fn test_layout_is_centered() {
        let layout = GridLayout::compute(Viewport::new(800.0, 1000.0), &config());
        assert!((layout.width() - 600.0).abs() < 1e-3);
        assert!((layout.origin_x - 100.0).abs() < 1e-3);
        assert!((layout.origin_y - 200.0).abs() < 1e-3);
    }

    #[test]
    fn test_cells_are_row_major() {
        let layout = GridLayout::compute(Viewport::new(800.0, 1000.0), &config());
        let first = layout.cell_rect(0).unwrap();
        let right = layout.cell_rect(1).unwrap();
        let below = layout.cell_rect(10).unwrap();
        assert!((right.x - first.x - 60.2).abs() < 1e-3);
        assert_eq!(right.y, first.y);
        assert!((below.y - first.y - 60.2).abs() < 1e-3);
        assert_eq!(below.x, first.x);
        assert_eq!(layout.cell_rect(100), None);
    }

    #[test]
    fn test_hit_test_centers_and_gutters() {
        let layout = GridLayout::compute(Viewport::new(800.0, 1000.0), &config());
        for index in 0..layout.cell_count() {
            let (x, y) = layout.cell_rect(index).unwrap().center();
            assert_eq!(layout.hit_test(x, y), Some(index));
        }

        let first = layout.cell_rect(0).unwrap();
        // gutter between cell 0 and cell 1
        assert_eq!(layout.hit_test(first.x + first.size + 1.0, first.y + 1.0), None);
        // margin above the grid
        assert_eq!(layout.hit_test(first.x + 1.0, first.y - 1.0), None);
        // past the last column
        assert_eq!(layout.hit_test(layout.origin_x + layout.width() + 1.0, first.y), None);
    }
}
