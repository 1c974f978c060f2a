//! Application configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "tictac.toml";

/// Settings for the terminal game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// File the TUI writes its log to.
    #[serde(default = "default_log_file")]
    log_file: String,

    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Input poll interval in milliseconds.
    #[serde(default = "default_tick_ms")]
    tick_ms: u64,

    /// Symbol drawn for the human's marks.
    #[serde(default = "default_player_symbol")]
    player_symbol: char,

    /// Symbol drawn for the computer's marks.
    #[serde(default = "default_opponent_symbol")]
    opponent_symbol: char,
}

fn default_log_file() -> String {
    "tictac.log".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_tick_ms() -> u64 {
    100
}

fn default_player_symbol() -> char {
    'X'
}

fn default_opponent_symbol() -> char {
    'O'
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            tick_ms: default_tick_ms(),
            player_symbol: default_player_symbol(),
            opponent_symbol: default_opponent_symbol(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`AppConfig::from_file`], but a missing file yields the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No config file, using defaults");
            return Ok(Self::default());
        }
        let config = Self::from_file(path)?;
        info!(log_file = %config.log_file, tick_ms = config.tick_ms, "Config loaded");
        Ok(config)
    }

    /// Returns the input poll interval.
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.player_symbol == self.opponent_symbol {
            return Err(ConfigError::new(format!(
                "Player and opponent symbols must differ, both are '{}'",
                self.player_symbol
            )));
        }
        if self.player_symbol.is_whitespace() || self.opponent_symbol.is_whitespace() {
            return Err(ConfigError::new("Symbols must be visible characters".to_string()));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::new("tick_ms must be positive".to_string()));
        }
        Ok(())
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
    use std::io::Write;

    #[test]
    fn test_defaults_for_empty_file() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_file(), "tictac.log");
        assert_eq!(*config.tick_ms(), 100);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = AppConfig::from_toml("tick_ms = 50\nplayer_symbol = \"#\"").unwrap();
        assert_eq!(config.tick(), Duration::from_millis(50));
        assert_eq!(*config.player_symbol(), '#');
        assert_eq!(*config.opponent_symbol(), 'O');
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_same_symbols_rejected() {
        let err = AppConfig::from_toml("player_symbol = \"O\"").unwrap_err();
        assert!(err.message.contains("must differ"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = AppConfig::from_toml("tick_ms = \"soon\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_file = \"game.log\"\nlog_filter = \"debug\"").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.log_file(), "game.log");
        assert_eq!(config.log_filter(), "debug");
    }
}
