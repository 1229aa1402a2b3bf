use std::{
    io,
    sync::{Arc, Mutex},
};

use crate::log::{
    line_format::render_line, log_level::LogLevel, log_record::LogRecord, log_sink::LogSink,
};

/// Sink that keeps every accepted record in memory.
///
/// Clones share the same buffer, so a test can keep one clone and hand the
/// other to a [`Logger`](crate::log::logger::Logger).
#[derive(Debug, Clone)]
pub struct MemorySink {
    threshold: LogLevel,
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl MemorySink {
    #[must_use]
    pub fn new(threshold: LogLevel) -> Self {
        Self {
            threshold,
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Snapshot of the captured records, in emission order.
    #[must_use]
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Captured records rendered as plain lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.records()
            .iter()
            .map(|r| render_line(r, false))
            .collect()
    }

    pub fn clear(&self) {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new(LogLevel::Trace)
    }
}

impl LogSink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    fn threshold(&self) -> LogLevel {
        self.threshold
    }

    fn write(&self, record: &LogRecord) -> io::Result<()> {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(record.clone());
        Ok(())
    }
}
