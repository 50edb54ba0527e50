//! Console player configuration.

use crate::games::tictactoe::{MoveOrder, Player};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "perfect_tictactoe.toml";

/// Settings for the console driver, read from TOML.
///
/// Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Side the human plays in `play` mode.
    #[serde(default = "default_human")]
    human: Player,

    /// Move ordering for the search, which decides ties between equally good moves.
    #[serde(default)]
    move_order: MoveOrder,

    /// `tracing` filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_human() -> Player {
    Player::X
}

#[instrument]
fn default_log_filter() -> String {
    "warn,perfect_tictactoe=info".to_string()
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human: default_human(),
            move_order: MoveOrder::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl PlayConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(human = %config.human, move_order = %config.move_order, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the human's side.
    #[must_use]
    pub fn with_human(mut self, human: Player) -> Self {
        self.human = human;
        self
    }

    /// Replaces the move ordering.
    #[must_use]
    pub fn with_move_order(mut self, move_order: MoveOrder) -> Self {
        self.move_order = move_order;
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlayConfig::default();
        assert_eq!(*config.human(), Player::X);
        assert_eq!(*config.move_order(), MoveOrder::RowMajor);
        assert_eq!(config.log_filter(), "warn,perfect_tictactoe=info");
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: PlayConfig = toml::from_str("").unwrap();
        assert_eq!(config, PlayConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config: PlayConfig = toml::from_str(
            r#"human = "O"
move_order = "center-first"
"#,
        )
        .unwrap();
        assert_eq!(*config.human(), Player::O);
        assert_eq!(*config.move_order(), MoveOrder::CenterFirst);
        assert_eq!(config.log_filter(), "warn,perfect_tictactoe=info");
    }

    #[test]
    fn test_overrides() {
        let config = PlayConfig::default()
            .with_human(Player::O)
            .with_move_order(MoveOrder::Reversed);
        assert_eq!(*config.human(), Player::O);
        assert_eq!(*config.move_order(), MoveOrder::Reversed);
    }
}
