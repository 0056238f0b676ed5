//! Store Interfaces
//!
//! Narrow trait interfaces the engine consumes. Implementations are
//! assumed to provide atomic single-entity reads and writes, but no
//! cross-entity transactions; the engine serializes its own
//! read-check-write sequences per table.

pub mod memory;

// Re-exports
pub use memory::MemoryStore;

use async_trait::async_trait;
use shared::AppResult;
use shared::models::{Reservation, ReservationStatus, Table, TableCreate};

/// Table store interface
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Find a table by id
    async fn find(&self, table_id: &str) -> AppResult<Option<Table>>;

    /// Replace the stored row for `table_id` with the given state
    async fn update(&self, table_id: &str, table: Table) -> AppResult<Table>;

    /// Create a new table from a validated payload
    async fn create(&self, data: TableCreate) -> AppResult<Table>;

    /// List all tables, ordered by name
    async fn list(&self) -> AppResult<Vec<Table>>;
}

/// Reservation store interface
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Read a reservation by id
    async fn read(&self, reservation_id: &str) -> AppResult<Option<Reservation>>;

    /// Move a reservation to the given status
    async fn update(
        &self,
        reservation_id: &str,
        status: ReservationStatus,
    ) -> AppResult<Reservation>;
}
