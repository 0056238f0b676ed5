//! Seating engine for restaurant table occupancy
//!
//! A state-transition engine coupling table occupancy to the
//! reservation lifecycle: seating a reservation at a table, finishing
//! (releasing) a table, and validating that an assignment is legal.
//! Stores are consumed through narrow trait interfaces; an in-memory
//! implementation ships for tests and embedders without their own
//! backing store.

pub mod config;
pub mod seating;
pub mod store;
pub mod utils;

// Re-exports
pub use config::Config;
pub use seating::SeatingEngine;
pub use store::{MemoryStore, ReservationStore, TableStore};
