pub mod console_sink;
pub mod file_sink;
pub mod line_format;
pub mod log_error;
pub mod log_level;
pub mod log_macros;
pub mod log_record;
pub mod log_sink;
pub mod logger;
pub mod logger_config;
pub mod memory_sink;
pub use memory_sink::MemorySink;
