pub mod lifecycle_event;
pub mod lifecycle_logger;
#[allow(clippy::module_inception)]
pub mod reporter;
pub mod test_case;

pub use lifecycle_logger::LifecycleLogger;
pub use reporter::Reporter;
