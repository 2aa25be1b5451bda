// Grid module - layout, selection state and cell transitions

pub mod animation;
pub mod layout;
pub mod selection;
pub mod selector;
pub mod traits;

// Re-export the main grid types for easy access
pub use animation::{CellTransition, EasingType};
pub use layout::{cell_size, grid_size, CellRect, GridLayout, Viewport};
pub use selection::{SelectionChange, SelectionMap, Timestamp};
pub use selector::GridSelector;
pub use traits::{GridError, GridResult, GridTrait};

// Re-export common types used by all grids
pub use crate::config::GridConfig;
