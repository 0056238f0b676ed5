//! Domain Models
//!
//! Table and reservation entities plus the request/confirmation
//! payloads the seating engine exchanges with its callers.

pub mod reservation;
pub mod seating;
pub mod table;

// Re-exports
pub use reservation::{Reservation, ReservationStatus};
pub use seating::{SeatRequest, SeatingConfirmation};
pub use table::{Table, TableCreate, TableStatus};
