use crate::reporter::test_case::{TestCase, TestError, TestResult};

/// Lifecycle subscriber driven by the test engine.
///
/// The engine calls these at fixed points of a run. Calls may come from
/// several workers at once, hence the `Send + Sync` bound.
pub trait Reporter: Send + Sync {
    fn on_test_begin(&self, test: &TestCase);

    fn on_test_end(&self, test: &TestCase, result: &TestResult);

    /// Called for engine errors, inside or outside any test.
    fn on_error(&self, error: &TestError);
}
