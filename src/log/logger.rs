use std::{
    io::{self, Write},
    sync::atomic::{AtomicBool, Ordering},
};

use crate::log::{
    console_sink::ConsoleSink, file_sink::FileSink, log_error::LogError, log_level::LogLevel,
    log_record::LogRecord, log_sink::LogSink, logger_config::LoggerConfig,
};

struct SinkSlot {
    sink: Box<dyn LogSink>,
    failed: AtomicBool,
}

/// Synchronous fan-out logger.
///
/// Every record is offered to each sink in registration order; a sink only
/// receives records at or above its own threshold.
///
/// # Write failures
///
/// A failed sink write is logged and dropped: the first failure of each sink
/// is reported once on stderr, later failures are silent, and the remaining
/// sinks still receive the record. Nothing is ever returned to the caller.
pub struct Logger {
    sinks: Vec<SinkSlot>,
}

impl Logger {
    /// Builds the standard sink set for `config`: the console always, plus a
    /// file sink when a file path is configured. Both use the configured level.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::FileSink`] if the log file cannot be opened.
    pub fn from_config(config: &LoggerConfig) -> Result<Self, LogError> {
        let level = config.log_level();
        let mut sinks: Vec<Box<dyn LogSink>> = vec![Box::new(ConsoleSink::stdout(level))];

        if let Some(path) = config.file_path() {
            sinks.push(Box::new(FileSink::open(path, level)?));
        }

        Ok(Self::with_sinks(sinks))
    }

    /// Logger over an explicit sink set, each with its own threshold.
    #[must_use]
    pub fn with_sinks(sinks: Vec<Box<dyn LogSink>>) -> Self {
        Self {
            sinks: sinks
                .into_iter()
                .map(|sink| SinkSlot {
                    sink,
                    failed: AtomicBool::new(false),
                })
                .collect(),
        }
    }

    /// Stamps `message` with the current time and delivers it.
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.emit(&LogRecord::new(level, message));
    }

    /// Delivers an already built record.
    pub fn emit(&self, record: &LogRecord) {
        for slot in self.sinks.iter().filter(|s| s.sink.accepts(record.level)) {
            if let Err(e) = slot.sink.write(record) {
                if !slot.failed.swap(true, Ordering::Relaxed) {
                    let _ = writeln!(
                        io::stderr(),
                        "testlog: {} sink write failed, further errors suppressed: {e}",
                        slot.sink.name()
                    );
                }
            }
        }
    }

    /// Names of the registered sinks, in delivery order.
    #[must_use]
    pub fn sink_names(&self) -> Vec<&str> {
        self.sinks.iter().map(|s| s.sink.name()).collect()
    }
}
