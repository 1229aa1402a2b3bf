use std::{
    fs::{self, File, OpenOptions},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    sync::Mutex,
};

use crate::log::{
    line_format::render_line, log_error::LogError, log_level::LogLevel, log_record::LogRecord,
    log_sink::LogSink,
};

/// Append-only file sink. Lines never carry color codes.
pub struct FileSink {
    threshold: LogLevel,
    path: PathBuf,
    out: Mutex<BufWriter<File>>,
}

impl FileSink {
    /// Opens `path` for appending, creating the file and any missing parent
    /// directories.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::FileSink`] if the directory or the file cannot be
    /// created or opened for writing.
    pub fn open<P: AsRef<Path>>(path: P, threshold: LogLevel) -> Result<Self, LogError> {
        let path = path.as_ref().to_path_buf();
        let fail = |source: io::Error| LogError::FileSink {
            path: path.clone(),
            source,
        };

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(fail)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(fail)?;

        Ok(Self {
            threshold,
            path,
            out: Mutex::new(BufWriter::new(file)),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for FileSink {
    fn name(&self) -> &str {
        "file"
    }

    fn threshold(&self) -> LogLevel {
        self.threshold
    }

    fn write(&self, record: &LogRecord) -> io::Result<()> {
        let mut line = render_line(record, false);
        line.push('\n');

        // Whole line per write_all, flushed per record.
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        out.write_all(line.as_bytes())?;
        out.flush()
    }
}
