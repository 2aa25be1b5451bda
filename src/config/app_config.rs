// Application settings - optional JSON file layered over built-in defaults

use crate::config::GridConfig;
use crate::grid::animation::EasingType;
use crate::grid::traits::GridResult;
use log::info;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_ANIMATION_MS: u64 = 200;
pub const DEFAULT_TICK_RATE_MS: u64 = 50;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub grid: GridConfig,
    /// Length of the fill/elevation transition after a toggle
    pub animation_ms: u64,
    pub easing: EasingType,
    /// Event poll timeout; also the redraw cadence while a transition runs
    pub tick_rate_ms: u64,
    /// Where log output goes while the terminal is in use
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            animation_ms: DEFAULT_ANIMATION_MS,
            easing: EasingType::EaseInOut,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> GridResult<Self> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.grid.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> GridResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// First command-line argument, when present, names a config file
    pub fn from_args<I>(args: I) -> GridResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        match args.into_iter().next() {
            Some(path) => {
                let config = Self::load(Path::new(&path))?;
                info!("Loaded configuration from {}", path);
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}
