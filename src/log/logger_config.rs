use std::path::PathBuf;

use serde::Deserialize;

use crate::{
    config::{Config, expand_path},
    log::{log_error::LogError, log_level::LogLevel},
};

const LOGGING_SECTION: &str = "Logging";

/// Raw construction-time options, as handed over by the test engine.
///
/// Deserializes from `{ "logLevel": "warn", "filePath": "logs/run.log" }`;
/// both fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggerOptions {
    #[serde(default)]
    pub log_level: Option<String>,
    #[serde(default)]
    pub file_path: Option<String>,
}

impl LoggerOptions {
    /// Reads `log_level` and `file_path` from the `[Logging]` section,
    /// falling back to globals of the same name. Empty values count as unset.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let lookup = |key: &str| {
            config
                .get_non_empty(LOGGING_SECTION, key)
                .or_else(|| config.get_global(key).filter(|s| !s.is_empty()))
                .map(str::to_string)
        };

        Self {
            log_level: lookup("log_level"),
            file_path: lookup("file_path"),
        }
    }
}

/// Validated logger configuration.
///
/// Immutable once built: changing the level or the sinks means building a
/// new logger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggerConfig {
    log_level: LogLevel,
    file_path: Option<PathBuf>,
}

impl LoggerConfig {
    #[must_use]
    pub fn new(log_level: LogLevel, file_path: Option<PathBuf>) -> Self {
        Self {
            log_level,
            file_path,
        }
    }

    /// Validates raw options.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::InvalidLevel`] if `log_level` names no known level.
    pub fn from_options(options: &LoggerOptions) -> Result<Self, LogError> {
        let log_level = match options.log_level.as_deref() {
            Some(name) => name.parse()?,
            None => LogLevel::default(),
        };
        let file_path = options
            .file_path
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(expand_path);

        Ok(Self {
            log_level,
            file_path,
        })
    }

    #[must_use]
    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    #[must_use]
    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }
}
