use chrono::{DateTime, Utc};

use crate::log::log_level::LogLevel;

/// Represents a single log record.
///
/// A record is produced per lifecycle event, handed to every sink that
/// accepts its level, and then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Moment the record was created.
    pub timestamp: DateTime<Utc>,
    /// The severity level of the record.
    pub level: LogLevel,
    /// The rendered message text.
    pub message: String,
}

impl LogRecord {
    /// Creates a record stamped with the current time.
    ///
    /// # Example
    ///
    /// ```rust
    /// use testlog::log::{log_level::LogLevel, log_record::LogRecord};
    ///
    /// let rec = LogRecord::new(LogLevel::Info, "Test Started: Login test");
    /// assert_eq!(rec.level, LogLevel::Info);
    /// ```
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self::at(Utc::now(), level, message)
    }

    /// Creates a record with an explicit timestamp.
    pub fn at(timestamp: DateTime<Utc>, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            level,
            message: message.into(),
        }
    }
}
