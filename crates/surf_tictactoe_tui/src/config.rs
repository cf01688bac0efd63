//! Front-end configuration loaded from TOML.

use crate::status_line::SymbolStyle;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "surf_tictactoe.toml";

/// Configuration for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[setters(prefix = "with_")]
pub struct TuiConfig {
    /// Heading shown above the board.
    #[serde(default = "default_title")]
    title: String,

    /// Line shown under the heading.
    #[serde(default = "default_tagline")]
    tagline: String,

    /// How marks are drawn.
    #[serde(default)]
    symbols: SymbolStyle,

    /// Highlight the winning line once a game is won.
    #[serde(default = "default_highlight_winning_line")]
    highlight_winning_line: bool,

    /// Where interactive mode writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_title() -> String {
    "Surf & Wave Tic Tac Toe".to_string()
}

fn default_tagline() -> String {
    "Catch the perfect wave and surf to victory!".to_string()
}

fn default_highlight_winning_line() -> bool {
    true
}

fn default_log_file() -> PathBuf {
    PathBuf::from("surf_tictactoe.log")
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            tagline: default_tagline(),
            symbols: SymbolStyle::default(),
            highlight_winning_line: default_highlight_winning_line(),
            log_file: default_log_file(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(symbols = %config.symbols, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `explicit` if given, else `fallback` if it exists, else defaults.
    ///
    /// An explicitly named file must exist.
    #[instrument(skip_all)]
    pub fn load(explicit: Option<&Path>, fallback: &Path) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if fallback.exists() => Self::from_file(fallback),
            None => {
                debug!(fallback = %fallback.display(), "No config file, using defaults");
                Ok(Self::default())
            }
        }
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
    fn test_empty_file_gives_defaults() {
        let config: TuiConfig = toml::from_str("").unwrap();
        assert_eq!(config, TuiConfig::default());
        assert_eq!(*config.symbols(), SymbolStyle::Emoji);
        assert!(*config.highlight_winning_line());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config: TuiConfig = toml::from_str(
            r#"
            symbols = "letters"
            title = "Beach Break"
            "#,
        )
        .unwrap();

        assert_eq!(*config.symbols(), SymbolStyle::Letters);
        assert_eq!(config.title(), "Beach Break");
        assert_eq!(config.tagline(), &default_tagline());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(toml::from_str::<TuiConfig>("board_size = 4").is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "highlight_winning_line = false").unwrap();

        let missing = Path::new("does-not-exist.toml");
        let config = TuiConfig::load(Some(file.path()), missing).unwrap();
        assert!(!*config.highlight_winning_line());
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = TuiConfig::load(Some(&missing), &missing).unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let fallback = dir.path().join(DEFAULT_CONFIG_FILE);

        assert_eq!(TuiConfig::load(None, &fallback).unwrap(), TuiConfig::default());

        std::fs::write(&fallback, "symbols = \"letters\"\n").unwrap();
        let config = TuiConfig::load(None, &fallback).unwrap();
        assert_eq!(*config.symbols(), SymbolStyle::Letters);
    }

    #[test]
    fn test_setters_override() {
        let config = TuiConfig::default().with_symbols(SymbolStyle::Letters);
        assert_eq!(*config.symbols(), SymbolStyle::Letters);
    }
}
