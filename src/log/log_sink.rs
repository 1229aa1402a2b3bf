use std::io;

use crate::log::{log_level::LogLevel, log_record::LogRecord};

/// A destination for rendered log lines.
///
/// Implementations render and write one complete line per call; concurrent
/// callers must never observe interleaved output.
pub trait LogSink: Send + Sync {
    /// Short name used when reporting write failures.
    fn name(&self) -> &str;

    /// Minimum level this sink accepts.
    fn threshold(&self) -> LogLevel;

    fn write(&self, record: &LogRecord) -> io::Result<()>;

    #[inline]
    fn accepts(&self, level: LogLevel) -> bool {
        level >= self.threshold()
    }
}
