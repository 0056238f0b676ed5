//! In-memory store implementation
//!
//! Backs both store interfaces with concurrent maps. Used by tests and
//! by embedders that do not bring their own persistence.

use async_trait::async_trait;
use dashmap::DashMap;
use shared::models::{Reservation, ReservationStatus, Table, TableCreate};
use shared::{AppError, AppResult};
use uuid::Uuid;

use super::{ReservationStore, TableStore};
use crate::seating::validation::{validate_capacity_field, validate_table_name};

/// DashMap-backed table and reservation store
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: DashMap<String, Table>,
    reservations: DashMap<String, Reservation>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a table (test / bootstrap helper, bypasses payload validation)
    pub fn insert_table(&self, table: Table) {
        self.tables.insert(table.table_id.clone(), table);
    }

    /// Seed a reservation (test / bootstrap helper)
    pub fn insert_reservation(&self, reservation: Reservation) {
        self.reservations
            .insert(reservation.reservation_id.clone(), reservation);
    }
}

#[async_trait]
impl TableStore for MemoryStore {
    async fn find(&self, table_id: &str) -> AppResult<Option<Table>> {
        Ok(self.tables.get(table_id).map(|t| t.clone()))
    }

    async fn update(&self, table_id: &str, table: Table) -> AppResult<Table> {
        if !self.tables.contains_key(table_id) {
            return Err(AppError::not_found(format!(
                "table id: {} not found",
                table_id
            )));
        }
        self.tables.insert(table_id.to_string(), table.clone());
        Ok(table)
    }

    async fn create(&self, data: TableCreate) -> AppResult<Table> {
        let name = validate_table_name(data.table_name.as_deref())?;
        let capacity = validate_capacity_field(data.capacity)?;

        let table = Table::new(Uuid::new_v4().to_string(), name, capacity);
        self.tables.insert(table.table_id.clone(), table.clone());
        Ok(table)
    }

    async fn list(&self) -> AppResult<Vec<Table>> {
        let mut tables: Vec<Table> = self.tables.iter().map(|t| t.clone()).collect();
        tables.sort_by(|a, b| a.table_name.cmp(&b.table_name));
        Ok(tables)
    }
}

#[async_trait]
impl ReservationStore for MemoryStore {
    async fn read(&self, reservation_id: &str) -> AppResult<Option<Reservation>> {
        Ok(self.reservations.get(reservation_id).map(|r| r.clone()))
    }

    async fn update(
        &self,
        reservation_id: &str,
        status: ReservationStatus,
    ) -> AppResult<Reservation> {
        let mut entry = self.reservations.get_mut(reservation_id).ok_or_else(|| {
            AppError::not_found(format!("reservation {} does not exist", reservation_id))
        })?;
        // Last line of defense for the lifecycle; the engine checks first.
        if !entry.status.can_transition_to(status) {
            return Err(AppError::invalid_request(format!(
                "reservation {} cannot move from {:?} to {:?}",
                reservation_id, entry.status, status
            )));
        }
        entry.status = status;
        Ok(entry.clone())
    }
}
