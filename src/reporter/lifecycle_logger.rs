use crate::{
    log::{
        log_error::LogError,
        logger::Logger,
        logger_config::{LoggerConfig, LoggerOptions},
    },
    logger_error, logger_info, logger_warn,
    reporter::{
        reporter::Reporter,
        test_case::{TestCase, TestError, TestResult, TestStatus},
    },
};

/// Reporter that turns lifecycle notifications into log lines.
///
/// Holds no per-test state: each call renders one record (or none) from its
/// arguments and the immutable configuration.
pub struct LifecycleLogger {
    config: LoggerConfig,
    logger: Logger,
}

impl LifecycleLogger {
    /// Console sink always, file sink when `config` names a file.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::FileSink`] if the log file cannot be opened.
    pub fn new(config: LoggerConfig) -> Result<Self, LogError> {
        let logger = Logger::from_config(&config)?;
        Ok(Self { config, logger })
    }

    /// # Errors
    ///
    /// Returns [`LogError::InvalidLevel`] for an unknown level name and
    /// [`LogError::FileSink`] if the log file cannot be opened.
    pub fn from_options(options: &LoggerOptions) -> Result<Self, LogError> {
        Self::new(LoggerConfig::from_options(options)?)
    }

    /// Uses a prebuilt sink set instead of the one derived from `config`.
    #[must_use]
    pub fn with_logger(config: LoggerConfig, logger: Logger) -> Self {
        Self { config, logger }
    }

    #[must_use]
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Logs the active level and destination at info.
    pub fn print_config(&self) {
        let file = self
            .config
            .file_path()
            .map_or_else(|| "console".to_string(), |p| p.display().to_string());
        logger_info!(
            self.logger,
            "Logger initialized with level=\"{}\" and file=\"{}\"",
            self.config.log_level(),
            file
        );
    }
}

impl Reporter for LifecycleLogger {
    fn on_test_begin(&self, test: &TestCase) {
        logger_info!(self.logger, "🚀 Test Started: {}", test.title);
    }

    fn on_test_end(&self, test: &TestCase, result: &TestResult) {
        // The engine's own reporter already prints failure details.
        match result.status {
            TestStatus::Passed => logger_info!(self.logger, "✅ Passed: {}", test.title),
            TestStatus::Skipped => logger_warn!(self.logger, "⏭ Skipped: {}", test.title),
            TestStatus::Failed => logger_error!(self.logger, "❌ Failed: {}", test.title),
            TestStatus::TimedOut | TestStatus::Interrupted | TestStatus::Other(_) => {}
        }
    }

    fn on_error(&self, error: &TestError) {
        logger_error!(self.logger, "💥 Error: {}", error.message);
    }
}
