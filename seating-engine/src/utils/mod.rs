//! Utilities

pub mod logger;

// Re-exports
pub use logger::{init_logger, init_logger_with_file};
