pub mod app_config;
pub mod grid_config;

pub use app_config::AppConfig;
pub use grid_config::GridConfig;
