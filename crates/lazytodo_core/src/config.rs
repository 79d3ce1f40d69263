//! Runtime configuration resolved from the environment.
//!
//! | Variable             | Default                          |
//! |----------------------|----------------------------------|
//! | `LAZYTODO_DB_PATH`   | `<temp dir>/lazytodo.sqlite3`    |
//! | `LAZYTODO_LOG_LEVEL` | [`default_log_level`]            |
//! | `LAZYTODO_LOG_DIR`   | unset, file logging disabled     |
//! | `LAZYTODO_LOCALE`    | `ru`                             |
//!
//! Blank values are treated as unset.

use crate::logging::default_log_level;
use crate::view::{Locale, ParseLocaleError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "LAZYTODO_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "LAZYTODO_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "LAZYTODO_LOG_DIR";
pub const ENV_LOCALE: &str = "LAZYTODO_LOCALE";

const DEFAULT_DB_FILE_NAME: &str = "lazytodo.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
    pub locale: Locale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLocale(ParseLocaleError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocale(err) => write!(f, "{ENV_LOCALE}: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidLocale(err) => Some(err),
        }
    }
}

impl AppConfig {
    /// Resolves configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through `lookup`, which maps a variable name
    /// to its raw value.
    pub fn from_lookup(
        mut lookup: impl FnMut(&'static str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut fetch = |key: &'static str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let db_path = fetch(ENV_DB_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));
        let log_level = fetch(ENV_LOG_LEVEL).unwrap_or_else(|| default_log_level().to_string());
        let log_dir = fetch(ENV_LOG_DIR).map(PathBuf::from);
        let locale = match fetch(ENV_LOCALE) {
            Some(raw) => raw.parse().map_err(ConfigError::InvalidLocale)?,
            None => Locale::default(),
        };

        Ok(Self {
            db_path,
            log_level,
            log_dir,
            locale,
        })
    }
}
