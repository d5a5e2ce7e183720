//! Logging abstractions for runtime-agnostic logging

mod console;
mod noop;
mod traits;
pub mod file_logger;

pub use console::ConsoleLogger;
pub use noop::NoOpLogger;
pub use traits::Logger;

// Re-export file logger functions for convenience
pub use file_logger::{clear_log, debug, error, info, log, log_file_path, trace, warn, LogLevel};
