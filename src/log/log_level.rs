use std::{fmt, str::FromStr};

use colored::Color;

use crate::log::log_error::LogError;

/// Defines the severity levels for log records.
///
/// Variants are declared from least to most severe, so the derived ordering
/// is the threshold ordering: a sink configured at `Warn` accepts `Warn` and
/// `Error` records only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Designates very fine-grained informational events.
    Trace,
    /// Designates fine-grained informational events that are most useful to debug a run.
    Debug,
    /// Designates informational messages that highlight the progress of a run.
    #[default]
    Info,
    /// Designates potentially harmful situations, such as skipped tests.
    Warn,
    /// Designates failures.
    Error,
}

impl LogLevel {
    /// Lowercase token used inside the `[<level>]` part of a rendered line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    /// Terminal color of the level token on interactive sinks.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            LogLevel::Trace => Color::Magenta,
            LogLevel::Debug => Color::Green,
            LogLevel::Info => Color::Blue,
            LogLevel::Warn => Color::Yellow,
            LogLevel::Error => Color::Red,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" | "silly" => Ok(LogLevel::Trace),
            "debug" | "verbose" => Ok(LogLevel::Debug),
            "info" | "http" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(LogError::InvalidLevel(s.to_string())),
        }
    }
}
