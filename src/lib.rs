// grid_select: a terminal grid of cells that toggle on click and remember
// when they were selected

// Modular structure
pub mod app;
pub mod config;
pub mod display;
pub mod grid;
pub mod grid_display;
pub mod logging;
pub mod terminal;

// Re-export main types for convenience
pub use app::App;
pub use config::{AppConfig, GridConfig};
pub use grid::{
    cell_size, EasingType, GridError, GridLayout, GridResult, GridSelector, GridTrait,
    SelectionChange, SelectionMap, Timestamp, Viewport,
};
pub use grid_display::GridWidget;
