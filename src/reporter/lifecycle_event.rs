//! JSON-lines lifecycle notifications.
//!
//! Engines that run out of process can stream one event per line:
//!
//! ```text
//! {"event":"testBegin","test":{"title":"Login test"}}
//! {"event":"testEnd","test":{"title":"Login test"},"result":{"status":"passed"}}
//! {"event":"error","error":{"message":"timeout"}}
//! ```

use std::io::{self, BufRead};

use serde::Deserialize;
use thiserror::Error;

use crate::reporter::{
    reporter::Reporter,
    test_case::{TestCase, TestError, TestResult},
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum LifecycleEvent {
    TestBegin { test: TestCase },
    TestEnd { test: TestCase, result: TestResult },
    Error { error: TestError },
}

#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("failed to read lifecycle events: {0}")]
    Io(#[from] io::Error),

    #[error("malformed lifecycle event on line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl LifecycleEvent {
    /// # Errors
    ///
    /// Returns the JSON error if `line` is not a lifecycle event.
    pub fn parse(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }

    pub fn dispatch(&self, reporter: &dyn Reporter) {
        match self {
            LifecycleEvent::TestBegin { test } => reporter.on_test_begin(test),
            LifecycleEvent::TestEnd { test, result } => reporter.on_test_end(test, result),
            LifecycleEvent::Error { error } => reporter.on_error(error),
        }
    }
}

/// Dispatches every event in `reader` to `reporter`, in order.
///
/// Blank lines are skipped. Returns the number of events dispatched; replay
/// stops at the first malformed line.
///
/// # Errors
///
/// [`ReplayError::Io`] on read failure, [`ReplayError::Malformed`] with the
/// 1-based line number on a line that is not a lifecycle event.
pub fn replay<R: BufRead>(reader: R, reporter: &dyn Reporter) -> Result<usize, ReplayError> {
    let mut dispatched = 0;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let event = LifecycleEvent::parse(&line).map_err(|source| ReplayError::Malformed {
            line: idx + 1,
            source,
        })?;
        event.dispatch(reporter);
        dispatched += 1;
    }
    Ok(dispatched)
}
