use std::fmt;

use serde::Deserialize;

/// A test case as announced by the test engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TestCase {
    pub title: String,
}

impl TestCase {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Outcome of one test run, as reported by the engine.
///
/// Engine status strings are `passed`, `skipped`, `failed`, `timedOut` and
/// `interrupted`; anything else is kept verbatim in [`TestStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum TestStatus {
    Passed,
    Skipped,
    Failed,
    TimedOut,
    Interrupted,
    Other(String),
}

impl From<&str> for TestStatus {
    fn from(s: &str) -> Self {
        match s {
            "passed" => TestStatus::Passed,
            "skipped" => TestStatus::Skipped,
            "failed" => TestStatus::Failed,
            "timedOut" => TestStatus::TimedOut,
            "interrupted" => TestStatus::Interrupted,
            other => TestStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for TestStatus {
    fn from(s: String) -> Self {
        TestStatus::from(s.as_str())
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestStatus::Passed => f.write_str("passed"),
            TestStatus::Skipped => f.write_str("skipped"),
            TestStatus::Failed => f.write_str("failed"),
            TestStatus::TimedOut => f.write_str("timedOut"),
            TestStatus::Interrupted => f.write_str("interrupted"),
            TestStatus::Other(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TestResult {
    pub status: TestStatus,
}

impl TestResult {
    pub fn new(status: impl Into<TestStatus>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

/// An error raised by the engine, inside or outside a test.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TestError {
    #[serde(default)]
    pub message: String,
}

impl TestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
