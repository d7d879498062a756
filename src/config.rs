//! Session configuration loaded from TOML.

use crate::games::tictactoe::HistoryOrder;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a play session.
///
/// Every key is optional in the file:
///
/// ```toml
/// initial_order = "descending"
/// log_filter = "strictly_history=debug"
/// show_board = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Order the move list starts in.
    #[serde(default)]
    initial_order: HistoryOrder,

    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Print the board after each command.
    #[serde(default = "default_show_board")]
    show_board: bool,
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_show_board() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_order: HistoryOrder::default(),
            log_filter: default_log_filter(),
            show_board: default_show_board(),
        }
    }
}

impl SessionConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(order = %config.initial_order, show_board = config.show_board, "Config loaded");
        Ok(config)
    }

    /// Loads from `path` if given, otherwise returns defaults.
    #[instrument(skip(path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Overrides the starting list order.
    pub fn with_initial_order(mut self, order: HistoryOrder) -> Self {
        self.initial_order = order;
        self
    }

    /// Overrides whether the board is printed.
    pub fn with_show_board(mut self, show_board: bool) -> Self {
        self.show_board = show_board;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: SessionConfig = toml::from_str("").unwrap();
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.log_filter(), "info");
        assert!(*config.show_board());
    }

    #[test]
    fn test_overrides() {
        let config = SessionConfig::default()
            .with_initial_order(HistoryOrder::Descending)
            .with_show_board(false);
        assert_eq!(*config.initial_order(), HistoryOrder::Descending);
        assert!(!*config.show_board());
    }
}
