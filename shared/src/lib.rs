//! Shared types for the seating engine
//!
//! Domain models (tables, reservations) and the unified error system
//! used across the workspace.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use serde::{Deserialize, Serialize};
