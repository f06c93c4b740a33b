//! Runtime configuration
//!
//! Settings are read from an optional `snipkit.toml`. Every key is optional;
//! keys this version does not know are ignored.

use std::fs;
use std::path::{Path, PathBuf};
use log::LevelFilter;
use crate::template::errors::{SnipError, SnipResult};

/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "snipkit.toml";

/// Run log written when the configuration does not name one
pub const DEFAULT_LOG_FILE: &str = "snipkit.log";

/// When to wait for a key press before the process exits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PauseMode {
    /// Pause after a failure when attached to a terminal
    #[default]
    Auto,
    /// Pause after a failure regardless of the terminal
    Always,
    /// Never pause
    Never,
}

impl PauseMode {
    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "auto" => Some(PauseMode::Auto),
            "always" => Some(PauseMode::Always),
            "never" => Some(PauseMode::Never),
            _ => None,
        }
    }
}

/// Settings controlling logging, progress and exit behavior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnipConfig {
    /// Run log path; `None` disables file logging
    pub log_file: Option<PathBuf>,
    /// Most verbose level logged
    pub log_level: LevelFilter,
    /// Whether to draw progress bars
    pub progress: bool,
    /// Pause behavior before exiting
    pub pause_on_error: PauseMode,
}

impl Default for SnipConfig {
    fn default() -> Self {
        SnipConfig {
            log_file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            log_level: LevelFilter::Info,
            progress: true,
            pause_on_error: PauseMode::Auto,
        }
    }
}

impl SnipConfig {
    /// Parse configuration from TOML text
    pub fn from_str(content: &str) -> SnipResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(SnipError::ConfigError(format!("Failed to parse TOML: {}", e))),
        };

        let mut config = SnipConfig::default();

        if let Some(value) = toml_value.get("log_file") {
            let path = expect_str(value, "log_file")?;
            config.log_file = if path.is_empty() { None } else { Some(PathBuf::from(path)) };
        }

        if let Some(value) = toml_value.get("log_level") {
            let level = expect_str(value, "log_level")?;
            config.log_level = level.parse::<LevelFilter>()
                .map_err(|_| SnipError::ConfigError(format!("Unknown log_level: {}", level)))?;
        }

        if let Some(value) = toml_value.get("progress") {
            config.progress = value.as_bool()
                .ok_or_else(|| SnipError::ConfigError("progress must be a boolean".to_string()))?;
        }

        if let Some(value) = toml_value.get("pause_on_error") {
            let mode = expect_str(value, "pause_on_error")?;
            config.pause_on_error = PauseMode::parse(mode)
                .ok_or_else(|| SnipError::ConfigError(
                    format!("pause_on_error must be auto, always or never, got {}", mode)))?;
        }

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> SnipResult<Self> {
        let contents = match fs::read_to_string(path.as_ref()) {
            Ok(content) => content,
            Err(e) => return Err(SnipError::IoError(e)),
        };

        Self::from_str(&contents)
    }

    /// Load the configuration for a run
    ///
    /// An explicitly named file must exist. Otherwise `snipkit.toml` in the
    /// working directory is used when present, and the defaults when not.
    pub fn load(explicit: Option<&Path>) -> SnipResult<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(default_path)
                } else {
                    Ok(SnipConfig::default())
                }
            }
        }
    }
}

fn expect_str<'v>(value: &'v toml::Value, key: &str) -> SnipResult<&'v str> {
    value.as_str()
        .ok_or_else(|| SnipError::ConfigError(format!("{} must be a string", key)))
}
