//! Seating Module
//!
//! The state-transition engine coupling table occupancy to the
//! reservation lifecycle, plus the stateless field validators used by
//! the table create path.

pub mod engine;
pub mod validation;

// Re-exports
pub use engine::SeatingEngine;
pub use validation::FieldCheck;
