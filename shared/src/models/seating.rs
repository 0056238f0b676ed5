//! Seating payloads

use super::reservation::ReservationStatus;
use serde::{Deserialize, Serialize};

/// Seat request payload
///
/// `reservation_id` is optional so a missing field reaches the engine
/// as a distinct validation failure instead of a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeatRequest {
    pub reservation_id: Option<String>,
}

impl SeatRequest {
    pub fn new(reservation_id: impl Into<String>) -> Self {
        Self {
            reservation_id: Some(reservation_id.into()),
        }
    }
}

/// Confirmation returned by a successful seat or finish transition
///
/// Serializes to `{"status":"seated"}` / `{"status":"finished"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatingConfirmation {
    pub status: ReservationStatus,
}

impl SeatingConfirmation {
    pub fn seated() -> Self {
        Self {
            status: ReservationStatus::Seated,
        }
    }

    pub fn finished() -> Self {
        Self {
            status: ReservationStatus::Finished,
        }
    }
}
