//! In-memory reservation store.
//!
//! Authoritative for the no-overlap invariant within a single process: the
//! overlap check and the insert happen under one mutex guard, so racing
//! inserts serialize and exactly one wins. Suitable for tests and
//! single-server deployments; multi-server deployments use the postgres
//! adapter.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

use crate::domain::foundation::{
    DomainError, ErrorCode, ReservationId, ResourceId, TimeRange, Timestamp,
};
use crate::domain::reservation::Reservation;
use crate::ports::{InsertOutcome, ReservationStore};

/// In-memory implementation of the ReservationStore port.
#[derive(Debug, Default)]
pub struct InMemoryReservationStore {
    reservations: Mutex<HashMap<ReservationId, Reservation>>,
    /// Simulate read failures, for testing error propagation.
    fail_reads: bool,
    /// Simulate write failures.
    fail_writes: bool,
}

impl InMemoryReservationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a store whose reads always fail (for testing).
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Returns a store whose writes always fail (for testing).
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Inserts without the overlap check. Test seeding only.
    pub async fn insert_unchecked(&self, reservation: Reservation) {
        self.reservations
            .lock()
            .await
            .insert(reservation.id, reservation);
    }

    /// Number of stored reservations, cancelled included.
    pub async fn len(&self) -> usize {
        self.reservations.lock().await.len()
    }

    /// Returns true if the store holds no reservations.
    pub async fn is_empty(&self) -> bool {
        self.reservations.lock().await.is_empty()
    }

    /// Fetches a reservation by id.
    pub async fn get(&self, id: ReservationId) -> Option<Reservation> {
        self.reservations.lock().await.get(&id).cloned()
    }

    /// Cancels a stored reservation, releasing its time range.
    pub async fn cancel(&self, id: ReservationId) -> Result<(), DomainError> {
        let mut reservations = self.reservations.lock().await;
        let reservation = reservations.get_mut(&id).ok_or_else(|| {
            DomainError::new(
                ErrorCode::ReservationNotFound,
                format!("Reservation not found: {}", id),
            )
        })?;
        reservation.cancel().map_err(DomainError::from)
    }

    fn storage_error(&self) -> DomainError {
        DomainError::new(ErrorCode::DatabaseError, "simulated storage failure")
    }
}

#[async_trait]
impl ReservationStore for InMemoryReservationStore {
    async fn insert_if_no_overlap(
        &self,
        reservation: Reservation,
    ) -> Result<InsertOutcome, DomainError> {
        if self.fail_writes {
            return Err(self.storage_error());
        }

        // One guard across check and insert; racing writers serialize here.
        let mut reservations = self.reservations.lock().await;

        let conflicting = reservations.values().any(|existing| {
            existing.resource_id == reservation.resource_id
                && existing.conflicts_with(&reservation.time_range)
        });
        if conflicting {
            return Ok(InsertOutcome::Conflict);
        }

        reservations.insert(reservation.id, reservation.clone());
        Ok(InsertOutcome::Inserted(reservation))
    }

    async fn query_active_overlaps(
        &self,
        resource_id: ResourceId,
        range: TimeRange,
        exclude: Option<ReservationId>,
    ) -> Result<Vec<Reservation>, DomainError> {
        if self.fail_reads {
            return Err(self.storage_error());
        }

        let reservations = self.reservations.lock().await;
        let mut overlapping: Vec<Reservation> = reservations
            .values()
            .filter(|existing| {
                existing.resource_id == resource_id
                    && Some(existing.id) != exclude
                    && existing.conflicts_with(&range)
            })
            .cloned()
            .collect();
        overlapping.sort_by_key(|r| r.time_range.start());
        Ok(overlapping)
    }
}
