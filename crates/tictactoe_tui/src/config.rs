//! Optional TOML configuration, merged with command-line flags.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Log file used when neither the CLI nor the config file names one.
pub const DEFAULT_LOG_FILE: &str = "tictactoe.log";

/// Contents of the config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Pre-filled name for player one.
    player_one: Option<String>,
    /// Pre-filled name for player two.
    player_two: Option<String>,
    /// Log destination.
    log_file: Option<PathBuf>,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!("Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns an empty config.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load_optional(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Loads the file named on the command line, or the default file.
    ///
    /// A path given explicitly must exist. Only [`DEFAULT_CONFIG_FILE`] may be
    /// missing.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => Self::load_optional(Path::new(DEFAULT_CONFIG_FILE)),
        }
    }
}

/// Resolved frontend settings: defaults, then the file, then the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Settings {
    /// Initial text of the player one name field.
    player_one: String,
    /// Initial text of the player two name field.
    player_two: String,
    /// Log destination.
    log_file: PathBuf,
}

impl Settings {
    /// Merges command-line flags over the file configuration.
    #[instrument(skip_all)]
    pub fn resolve(cli: &Cli, file: FileConfig) -> Self {
        let FileConfig {
            player_one,
            player_two,
            log_file,
        } = file;

        Self {
            player_one: cli.player_one.clone().or(player_one).unwrap_or_default(),
            player_two: cli.player_two.clone().or(player_two).unwrap_or_default(),
            log_file: cli
                .log_file
                .clone()
                .or(log_file)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
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
    use clap::Parser;
    use std::io::Write;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("tictactoe-tui").chain(args.iter().copied()))
    }

    #[test]
    fn test_missing_file_is_empty_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = FileConfig::load_optional(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let parsed = cli(&["--config", path.to_str().unwrap()]);
        assert_eq!(parsed.config.as_deref(), Some(path.as_path()));

        let err = FileConfig::load(parsed.config.as_deref()).unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }

    #[test]
    fn test_explicit_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "player_two = \"Grace\"").unwrap();

        let config = FileConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.player_two.as_deref(), Some("Grace"));
    }

    #[test]
    fn test_config_flag_defaults_to_none() {
        assert_eq!(cli(&[]).config, None);
    }

    #[test]
    fn test_parses_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "player_one = \"Ada\"\nlog_file = \"game.log\"").unwrap();

        let config = FileConfig::from_file(file.path()).unwrap();
        assert_eq!(config.player_one.as_deref(), Some("Ada"));
        assert_eq!(config.player_two, None);
        assert_eq!(config.log_file.as_deref(), Some(Path::new("game.log")));
    }

    #[test]
    fn test_rejects_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "player_one = ").unwrap();

        let err = FileConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = FileConfig {
            player_one: Some("Ada".to_string()),
            player_two: Some("Grace".to_string()),
            log_file: Some(PathBuf::from("file.log")),
        };
        let settings = Settings::resolve(&cli(&["--player-two", "Linus"]), file);

        assert_eq!(settings.player_one(), "Ada");
        assert_eq!(settings.player_two(), "Linus");
        assert_eq!(settings.log_file(), Path::new("file.log"));
    }

    #[test]
    fn test_defaults_without_file_or_flags() {
        let settings = Settings::resolve(&cli(&[]), FileConfig::default());
        assert_eq!(settings.player_one(), "");
        assert_eq!(settings.log_file(), Path::new(DEFAULT_LOG_FILE));
    }
}
