use std::{
    io::{self, IsTerminal, Write},
    sync::Mutex,
};

use crate::log::{
    line_format::render_line, log_level::LogLevel, log_record::LogRecord, log_sink::LogSink,
};

/// Sink writing one line per record to standard output.
///
/// Level tokens are colorized only when the target is a terminal.
pub struct ConsoleSink {
    threshold: LogLevel,
    colorize: bool,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSink {
    /// Console sink on stdout, colorized when stdout is a terminal.
    #[must_use]
    pub fn stdout(threshold: LogLevel) -> Self {
        let colorize = io::stdout().is_terminal();
        Self::with_writer(threshold, Box::new(io::stdout()), colorize)
    }

    /// Console sink on an arbitrary writer, e.g. a captured buffer.
    #[must_use]
    pub fn with_writer(threshold: LogLevel, out: Box<dyn Write + Send>, colorize: bool) -> Self {
        Self {
            threshold,
            colorize,
            out: Mutex::new(out),
        }
    }

    #[must_use]
    pub fn is_colorized(&self) -> bool {
        self.colorize
    }
}

impl LogSink for ConsoleSink {
    fn name(&self) -> &str {
        "console"
    }

    fn threshold(&self) -> LogLevel {
        self.threshold
    }

    fn write(&self, record: &LogRecord) -> io::Result<()> {
        let mut line = render_line(record, self.colorize);
        line.push('\n');

        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        out.write_all(line.as_bytes())?;
        out.flush()
    }
}
