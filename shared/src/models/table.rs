//! Table Model

use serde::{Deserialize, Serialize};

/// Occupancy state of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    Free,
    Occupied,
}

/// Dining table entity
///
/// `reservation_id` and `status` are two views of one occupancy
/// invariant: `reservation_id` is `Some` iff `status == Occupied`.
/// Both are private and change only through [`Table::occupy`] and
/// [`Table::release`], so the views cannot drift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub table_id: String,
    pub table_name: String,
    pub capacity: u32,
    reservation_id: Option<String>,
    status: TableStatus,
}

impl Table {
    /// Create a free table
    pub fn new(
        table_id: impl Into<String>,
        table_name: impl Into<String>,
        capacity: u32,
    ) -> Self {
        Self {
            table_id: table_id.into(),
            table_name: table_name.into(),
            capacity,
            reservation_id: None,
            status: TableStatus::Free,
        }
    }

    /// The reservation currently seated at this table, if any
    pub fn reservation_id(&self) -> Option<&str> {
        self.reservation_id.as_deref()
    }

    pub fn status(&self) -> TableStatus {
        self.status
    }

    pub fn is_occupied(&self) -> bool {
        self.reservation_id.is_some()
    }

    /// Mark the table occupied by the given reservation
    ///
    /// Sole setter of the occupancy pair, together with [`Table::release`].
    pub fn occupy(&mut self, reservation_id: impl Into<String>) {
        self.reservation_id = Some(reservation_id.into());
        self.status = TableStatus::Occupied;
    }

    /// Clear the occupancy, returning the reservation id the table held
    pub fn release(&mut self) -> Option<String> {
        self.status = TableStatus::Free;
        self.reservation_id.take()
    }
}

/// Create table payload
///
/// Fields are optional so validators can distinguish a missing field
/// from an invalid value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableCreate {
    pub table_name: Option<String>,
    /// Signed so out-of-range client values survive deserialization
    /// and reach the capacity validator.
    pub capacity: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupancy_pair_stays_consistent() {
        let mut table = Table::new("t1", "Window 2", 4);
        assert_eq!(table.status(), TableStatus::Free);
        assert_eq!(table.reservation_id(), None);

        table.occupy("r1");
        assert_eq!(table.status(), TableStatus::Occupied);
        assert_eq!(table.reservation_id(), Some("r1"));
        assert!(table.is_occupied());

        let released = table.release();
        assert_eq!(released.as_deref(), Some("r1"));
        assert_eq!(table.status(), TableStatus::Free);
        assert_eq!(table.reservation_id(), None);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let mut table = Table::new("t1", "Bar 1", 2);
        table.occupy("r9");
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["status"], "occupied");
        assert_eq!(json["reservation_id"], "r9");
    }
}
