//! Leveled formatting macros over a [`Logger`](crate::log::logger::Logger).
//!
//! ```rust,ignore
//! logger_info!(logger, "🚀 Test Started: {}", test.title);
//! ```

#[macro_export]
macro_rules! logger_log {
    ($logger:expr, $lvl:expr, $($arg:tt)*) => {{
        $logger.log($lvl, format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! logger_trace { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Trace, $($arg)*) } }
#[macro_export]
macro_rules! logger_debug { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Debug, $($arg)*) } }
#[macro_export]
macro_rules! logger_info  { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Info, $($arg)*) } }
#[macro_export]
macro_rules! logger_warn  { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Warn, $($arg)*) } }
#[macro_export]
macro_rules! logger_error { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Error, $($arg)*) } }

#[cfg(test)]
mod tests {
    use crate::log::{log_level::LogLevel, logger::Logger, memory_sink::MemorySink};

    #[test]
    fn macros_format_and_pick_level() {
        let mem = MemorySink::default();
        let logger = Logger::with_sinks(vec![Box::new(mem.clone())]);

        crate::logger_trace!(logger, "t{}", 1);
        crate::logger_debug!(logger, "d{}", 2);
        crate::logger_info!(logger, "i{}", 3);
        crate::logger_warn!(logger, "w{}", 4);
        crate::logger_error!(logger, "e{}", 5);

        let got: Vec<(LogLevel, String)> = mem
            .records()
            .into_iter()
            .map(|r| (r.level, r.message))
            .collect();
        assert_eq!(
            got,
            [
                (LogLevel::Trace, "t1".to_string()),
                (LogLevel::Debug, "d2".to_string()),
                (LogLevel::Info, "i3".to_string()),
                (LogLevel::Warn, "w4".to_string()),
                (LogLevel::Error, "e5".to_string()),
            ]
        );
    }
}
