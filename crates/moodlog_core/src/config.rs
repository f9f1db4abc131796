//! Runtime configuration for hosts embedding the store.
//!
//! There is no config file; hosts either build `StoreConfig` directly or
//! resolve it from `MOODLOG_*` environment variables with temp-dir defaults.

use crate::logging::default_log_level;
use std::path::PathBuf;

/// Environment variable overriding the slot database path.
pub const DB_PATH_ENV: &str = "MOODLOG_DB_PATH";
/// Environment variable overriding the log directory.
pub const LOG_DIR_ENV: &str = "MOODLOG_LOG_DIR";
/// Environment variable overriding the log level.
pub const LOG_LEVEL_ENV: &str = "MOODLOG_LOG_LEVEL";

const DEFAULT_DB_FILE_NAME: &str = "moodlog.sqlite3";
const DEFAULT_LOG_DIR_NAME: &str = "moodlog-logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// SQLite file holding the three persisted slots.
    pub db_path: PathBuf,
    /// Absolute directory for rolling log files.
    pub log_dir: PathBuf,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        let temp_dir = std::env::temp_dir();
        Self {
            db_path: temp_dir.join(DEFAULT_DB_FILE_NAME),
            log_dir: temp_dir.join(DEFAULT_LOG_DIR_NAME),
            log_level: default_log_level().to_string(),
        }
    }
}

impl StoreConfig {
    /// Resolves configuration from the process environment.
    ///
    /// Blank or unset variables fall back to `StoreConfig::default()`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_blank = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            db_path: non_blank(DB_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
            log_dir: non_blank(LOG_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: non_blank(LOG_LEVEL_ENV).unwrap_or(defaults.log_level),
        }
    }
}
