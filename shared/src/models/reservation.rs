//! Reservation Model

use serde::{Deserialize, Serialize};

/// Reservation lifecycle state
///
/// Transitions: `booked -> seated -> finished`. `finished` is terminal;
/// nothing moves a reservation out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Booked,
    Seated,
    Finished,
}

impl ReservationStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished)
    }

    /// Whether the state machine permits moving to `next`
    pub fn can_transition_to(&self, next: ReservationStatus) -> bool {
        matches!(
            (self, next),
            (Self::Booked, Self::Seated) | (Self::Seated, Self::Finished)
        )
    }
}

/// Reservation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub reservation_id: String,
    /// Party size
    pub people: u32,
    pub status: ReservationStatus,
}

impl Reservation {
    /// Create a booked reservation
    pub fn new(reservation_id: impl Into<String>, people: u32) -> Self {
        Self {
            reservation_id: reservation_id.into(),
            people,
            status: ReservationStatus::Booked,
        }
    }
}
