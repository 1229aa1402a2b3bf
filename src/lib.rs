//! testlog is a lifecycle logger for end-to-end test runs.
//!
//! The test engine drives a [`Reporter`](reporter::Reporter); the provided
//! [`LifecycleLogger`](reporter::LifecycleLogger) renders every notification as
//! a timestamped, leveled line on the console and, optionally, in a log file.
//!
//! ```rust,no_run
//! use testlog::log::logger_config::LoggerOptions;
//! use testlog::reporter::{LifecycleLogger, Reporter, test_case::TestCase};
//!
//! let opts = LoggerOptions { log_level: Some("info".into()), file_path: Some("logs/run.log".into()) };
//! let reporter = LifecycleLogger::from_options(&opts)?;
//! reporter.on_test_begin(&TestCase::new("Login test"));
//! # Ok::<(), testlog::log::log_error::LogError>(())
//! ```

/// INI-style configuration loading.
pub mod config;
/// Levels, records, sinks and the fan-out logger.
pub mod log;
/// Lifecycle subscriber contract and its logging implementation.
pub mod reporter;
