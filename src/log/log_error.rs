use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while building a logger.
///
/// Runtime sink failures are not represented here: once a logger exists, a
/// failed write is reported on stderr and dropped.
#[derive(Error, Debug)]
pub enum LogError {
    #[error("unknown log level: {0:?}")]
    InvalidLevel(String),

    #[error("cannot open log file {}: {source}", path.display())]
    FileSink {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
