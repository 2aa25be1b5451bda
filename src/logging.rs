// Logging setup - env_logger behind the log facade
//
// The TUI owns stdout/stderr while running, so output is either piped to
// the configured log file or filtered down to errors.

use crate::config::AppConfig;
use crate::grid::{GridError, GridResult};
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;

const TERMINAL_FILTER: &str = "error";
const FILE_FILTER: &str = "info";

pub fn init_logging(config: &AppConfig) -> GridResult<()> {
    let default_filter = if config.log_file.is_some() {
        FILE_FILTER
    } else {
        TERMINAL_FILTER
    };
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter));

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder
        .try_init()
        .map_err(|err| GridError::LoggingError(err.to_string()))
}
