//! Tracker configuration.
//!
//! # Responsibility
//! - Load `TrackerConfig` from an optional TOML file.
//! - Fill unspecified fields with defaults.
//!
//! # Invariants
//! - A missing config file yields `TrackerConfig::default()`.
//! - `report_window_days` is in `1..=MAX_REPORT_WINDOW_DAYS`.
//! - `recent_history_limit` is non-zero.

use crate::repo::state_repo::{StorageKeys, DEFAULT_METHODS_KEY, DEFAULT_STATE_KEY};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const DEFAULT_DB_FILE_NAME: &str = "commtrack.sqlite3";
const DEFAULT_REPORT_WINDOW_DAYS: u32 = 30;
/// Upper bound for report windows; trends are computed per day.
pub const MAX_REPORT_WINDOW_DAYS: u32 = 3660;
const DEFAULT_RECENT_HISTORY_LIMIT: usize = 5;

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(toml::de::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config file: {err}"),
            Self::Invalid(message) => write!(f, "invalid config value: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// SQLite file holding persisted snapshots.
    pub db_path: PathBuf,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute log directory; file logging is disabled when unset.
    pub log_dir: Option<PathBuf>,
    pub state_key: String,
    pub methods_key: String,
    /// Default report window, in days before today.
    pub report_window_days: u32,
    /// Communications shown per dashboard row.
    pub recent_history_limit: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            log_level: crate::logging::default_log_level().to_string(),
            log_dir: None,
            state_key: DEFAULT_STATE_KEY.to_string(),
            methods_key: DEFAULT_METHODS_KEY.to_string(),
            report_window_days: DEFAULT_REPORT_WINDOW_DAYS,
            recent_history_limit: DEFAULT_RECENT_HISTORY_LIMIT,
        }
    }
}

impl TrackerConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, or defaults when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(source) => Self::from_toml_str(&source),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_REPORT_WINDOW_DAYS).contains(&self.report_window_days) {
            return Err(ConfigError::Invalid(format!(
                "report_window_days must be between 1 and {MAX_REPORT_WINDOW_DAYS}"
            )));
        }
        if self.recent_history_limit == 0 {
            return Err(ConfigError::Invalid(
                "recent_history_limit must be at least 1".to_string(),
            ));
        }
        if self.state_key.trim().is_empty() || self.methods_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage keys cannot be empty".to_string()));
        }
        if self.state_key == self.methods_key {
            return Err(ConfigError::Invalid(
                "state_key and methods_key must differ".to_string(),
            ));
        }
        Ok(())
    }

    pub fn storage_keys(&self) -> StorageKeys {
        StorageKeys {
            state_key: self.state_key.clone(),
            methods_key: self.methods_key.clone(),
        }
    }
}
