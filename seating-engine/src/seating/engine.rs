//! Seating engine
//!
//! Validates and executes the transitions between table occupancy and
//! reservation status: `seat`, `finish`, and the `validate_capacity`
//! pre-flight check. The engine holds no persistent state of its own;
//! all effects are the two store updates of a successful transition.
//!
//! The paired store writes are not atomic, so every read-check-write
//! sequence runs under a keyed per-table mutex. Two concurrent seats
//! on one table serialize; the loser observes the winner's occupancy
//! and fails the occupancy check instead of double-claiming the table.
//! Seats of one reservation at different tables race only on the
//! reservation transition, which is written before the table: the
//! losing claim is rejected by the lifecycle guard with no table write.

use std::sync::Arc;

use dashmap::DashMap;
use shared::models::{ReservationStatus, SeatRequest, SeatingConfirmation};
use shared::{AppError, AppResult};
use tokio::sync::Mutex;
use tracing::info;

use crate::store::{ReservationStore, TableStore};

/// State-transition engine over a table store and a reservation store
pub struct SeatingEngine {
    tables: Arc<dyn TableStore>,
    reservations: Arc<dyn ReservationStore>,
    table_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl SeatingEngine {
    pub fn new(tables: Arc<dyn TableStore>, reservations: Arc<dyn ReservationStore>) -> Self {
        Self {
            tables,
            reservations,
            table_locks: DashMap::new(),
        }
    }

    fn lock_for(&self, table_id: &str) -> Arc<Mutex<()>> {
        self.table_locks
            .entry(table_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Seat a reservation at a table
    ///
    /// Preconditions, first failure wins:
    /// 1. the request carries a `reservation_id`
    /// 2. the reservation exists
    /// 3. the table loads and has sufficient capacity
    /// 4. the table is not occupied
    /// 5. the reservation is still `booked`
    ///
    /// On success the table becomes occupied by the reservation and the
    /// reservation becomes `seated`. Nothing is written before every
    /// precondition has passed.
    pub async fn seat(
        &self,
        table_id: &str,
        request: &SeatRequest,
    ) -> AppResult<SeatingConfirmation> {
        let reservation_id = request
            .reservation_id
            .as_deref()
            .ok_or_else(|| AppError::invalid_request("body must have reservation_id."))?;

        let lock = self.lock_for(table_id);
        let _guard = lock.lock().await;

        let reservation = self
            .reservations
            .read(reservation_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("reservation {} does not exist", reservation_id))
            })?;

        let mut table = self
            .tables
            .find(table_id)
            .await?
            .ok_or_else(|| AppError::invalid_request("table does not have sufficient data"))?;

        if table.capacity < reservation.people {
            return Err(AppError::invalid_request(format!(
                "table does not have sufficient capacity for reservation {}",
                reservation_id
            )));
        }

        if table.is_occupied() {
            return Err(AppError::invalid_request("table is occupied."));
        }

        match reservation.status {
            ReservationStatus::Booked => {}
            ReservationStatus::Seated => {
                return Err(AppError::invalid_request(format!(
                    "reservation {} is already seated",
                    reservation_id
                )));
            }
            ReservationStatus::Finished => {
                return Err(AppError::invalid_request(format!(
                    "reservation {} is already finished",
                    reservation_id
                )));
            }
        }

        // The reservation transition is the claim: a losing concurrent
        // seat of the same reservation fails here, before any table write.
        self.reservations
            .update(reservation_id, ReservationStatus::Seated)
            .await?;
        table.occupy(reservation_id);
        self.tables.update(table_id, table).await?;

        info!(
            table_id = %table_id,
            reservation_id = %reservation_id,
            people = reservation.people,
            "reservation seated"
        );
        Ok(SeatingConfirmation::seated())
    }

    /// Release an occupied table, finishing its reservation
    ///
    /// The reservation moves to the terminal `finished` state; no engine
    /// call ever seats it again.
    pub async fn finish(&self, table_id: &str) -> AppResult<SeatingConfirmation> {
        let lock = self.lock_for(table_id);
        let _guard = lock.lock().await;

        let mut table = self
            .tables
            .find(table_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("table id: {} not found", table_id)))?;

        let reservation_id = table
            .release()
            .ok_or_else(|| AppError::invalid_request("this table is not occupied"))?;

        self.reservations
            .update(&reservation_id, ReservationStatus::Finished)
            .await?;
        self.tables.update(table_id, table).await?;

        info!(
            table_id = %table_id,
            reservation_id = %reservation_id,
            "reservation finished, table released"
        );
        Ok(SeatingConfirmation::finished())
    }

    /// Pre-flight capacity check: the table exists and seats the party
    ///
    /// Mutates nothing. An absent table is simply `false`; store
    /// infrastructure failures surface as errors.
    pub async fn validate_capacity(&self, table_id: &str, party_size: u32) -> AppResult<bool> {
        let table = self.tables.find(table_id).await?;
        Ok(table.map(|t| t.capacity >= party_size).unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use shared::ErrorCode;
    use shared::models::{Reservation, Table, TableStatus};

    fn setup() -> (Arc<MemoryStore>, SeatingEngine) {
        let store = Arc::new(MemoryStore::new());
        let engine = SeatingEngine::new(store.clone(), store.clone());
        (store, engine)
    }

    async fn table(store: &MemoryStore, table_id: &str) -> Table {
        store.find(table_id).await.unwrap().unwrap()
    }

    async fn reservation(store: &MemoryStore, reservation_id: &str) -> Reservation {
        store.read(reservation_id).await.unwrap().unwrap()
    }

    #[tokio::test]
    async fn test_seat_success() {
        let (store, engine) = setup();
        store.insert_table(Table::new("t1", "#1", 4));
        store.insert_reservation(Reservation::new("r1", 4));

        let confirmation = engine.seat("t1", &SeatRequest::new("r1")).await.unwrap();
        assert_eq!(confirmation, SeatingConfirmation::seated());

        let t = table(&store, "t1").await;
        assert_eq!(t.status(), TableStatus::Occupied);
        assert_eq!(t.reservation_id(), Some("r1"));
        assert_eq!(reservation(&store, "r1").await.status, ReservationStatus::Seated);
    }

    #[tokio::test]
    async fn test_seat_missing_reservation_id() {
        let (store, engine) = setup();
        store.insert_table(Table::new("t1", "#1", 4));

        let err = engine.seat("t1", &SeatRequest::default()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRequest);
        assert_eq!(err.message, "body must have reservation_id.");
    }

    #[tokio::test]
    async fn test_seat_unknown_reservation_is_not_found() {
        let (store, engine) = setup();
        store.insert_table(Table::new("t1", "#1", 4));

        let err = engine.seat("t1", &SeatRequest::new("r9")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "reservation r9 does not exist");
    }

    #[tokio::test]
    async fn test_seat_unknown_table_is_insufficient_data() {
        let (store, engine) = setup();
        store.insert_reservation(Reservation::new("r1", 2));

        let err = engine.seat("ghost", &SeatRequest::new("r1")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRequest);
        assert_eq!(err.message, "table does not have sufficient data");
    }

    #[tokio::test]
    async fn test_seat_insufficient_capacity_leaves_state_unchanged() {
        let (store, engine) = setup();
        store.insert_table(Table::new("t1", "#1", 2));
        store.insert_reservation(Reservation::new("r1", 4));

        let err = engine.seat("t1", &SeatRequest::new("r1")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRequest);
        assert!(err.message.contains("does not have sufficient capacity"));

        let t = table(&store, "t1").await;
        assert_eq!(t.status(), TableStatus::Free);
        assert_eq!(t.reservation_id(), None);
        assert_eq!(reservation(&store, "r1").await.status, ReservationStatus::Booked);
    }

    #[tokio::test]
    async fn test_seat_occupied_table_leaves_state_unchanged() {
        let (store, engine) = setup();
        store.insert_table(Table::new("t1", "#1", 4));
        store.insert_reservation(Reservation::new("r1", 2));
        store.insert_reservation(Reservation::new("r2", 2));
        engine.seat("t1", &SeatRequest::new("r1")).await.unwrap();

        let err = engine.seat("t1", &SeatRequest::new("r2")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRequest);
        assert_eq!(err.message, "table is occupied.");

        assert_eq!(table(&store, "t1").await.reservation_id(), Some("r1"));
        assert_eq!(reservation(&store, "r2").await.status, ReservationStatus::Booked);
    }

    #[tokio::test]
    async fn test_seat_already_seated_reservation_rejected_before_mutation() {
        let (store, engine) = setup();
        store.insert_table(Table::new("t1", "#1", 4));
        store.insert_table(Table::new("t2", "#2", 4));
        store.insert_reservation(Reservation::new("r1", 2));
        engine.seat("t1", &SeatRequest::new("r1")).await.unwrap();

        let err = engine.seat("t2", &SeatRequest::new("r1")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRequest);
        assert_eq!(err.message, "reservation r1 is already seated");

        // The rejected transition wrote nothing.
        let t2 = table(&store, "t2").await;
        assert_eq!(t2.status(), TableStatus::Free);
        assert_eq!(t2.reservation_id(), None);
        assert_eq!(table(&store, "t1").await.reservation_id(), Some("r1"));
    }

    #[tokio::test]
    async fn test_finish_round_trip() {
        let (store, engine) = setup();
        store.insert_table(Table::new("t1", "#1", 4));
        store.insert_reservation(Reservation::new("r1", 4));
        engine.seat("t1", &SeatRequest::new("r1")).await.unwrap();

        let confirmation = engine.finish("t1").await.unwrap();
        assert_eq!(confirmation, SeatingConfirmation::finished());

        let t = table(&store, "t1").await;
        assert_eq!(t.status(), TableStatus::Free);
        assert_eq!(t.reservation_id(), None);
        assert_eq!(
            reservation(&store, "r1").await.status,
            ReservationStatus::Finished
        );
    }

    #[tokio::test]
    async fn test_finish_unknown_table_is_not_found() {
        let (_store, engine) = setup();
        let err = engine.finish("ghost").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "table id: ghost not found");
    }

    #[tokio::test]
    async fn test_finish_free_table_rejected() {
        let (store, engine) = setup();
        store.insert_table(Table::new("t1", "#1", 4));

        let err = engine.finish("t1").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRequest);
        assert_eq!(err.message, "this table is not occupied");
    }

    #[tokio::test]
    async fn test_finished_reservation_can_never_be_reseated() {
        let (store, engine) = setup();
        store.insert_table(Table::new("t1", "#1", 4));
        store.insert_table(Table::new("t2", "#2", 4));
        store.insert_reservation(Reservation::new("r1", 2));
        engine.seat("t1", &SeatRequest::new("r1")).await.unwrap();
        engine.finish("t1").await.unwrap();

        for table_id in ["t1", "t2"] {
            let err = engine
                .seat(table_id, &SeatRequest::new("r1"))
                .await
                .unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidRequest);
            assert_eq!(err.message, "reservation r1 is already finished");
        }
        assert_eq!(
            reservation(&store, "r1").await.status,
            ReservationStatus::Finished
        );
    }

    #[tokio::test]
    async fn test_occupancy_invariant_holds_across_operations() {
        let (store, engine) = setup();
        store.insert_table(Table::new("t1", "#1", 4));
        store.insert_reservation(Reservation::new("r1", 3));

        let assert_invariant = |t: &Table| {
            assert_eq!(
                t.reservation_id().is_some(),
                t.status() == TableStatus::Occupied
            );
        };

        assert_invariant(&table(&store, "t1").await);
        engine.seat("t1", &SeatRequest::new("r1")).await.unwrap();
        assert_invariant(&table(&store, "t1").await);
        engine.finish("t1").await.unwrap();
        assert_invariant(&table(&store, "t1").await);
    }

    #[tokio::test]
    async fn test_validate_capacity() {
        let (store, engine) = setup();
        store.insert_table(Table::new("t1", "#1", 4));

        assert!(engine.validate_capacity("t1", 4).await.unwrap());
        assert!(engine.validate_capacity("t1", 1).await.unwrap());
        assert!(!engine.validate_capacity("t1", 5).await.unwrap());
        assert!(!engine.validate_capacity("ghost", 1).await.unwrap());
    }
}
