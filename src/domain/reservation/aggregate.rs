//! Reservation aggregate entity.
//!
//! A Reservation claims a half-open time range on a single resource for a
//! tenant's customer. The aggregate owns its status transitions; the
//! no-overlap invariant across reservations is owned by the store
//! (see `ports::ReservationStore`).

use crate::domain::foundation::{
    ReservationId, ResourceId, StateMachine, TenantId, TimeRange, Timestamp, ValidationError,
};
use serde::{Deserialize, Serialize};

use super::ReservationStatus;

/// Reservation aggregate - a claim on a resource's time range.
///
/// # Invariants
///
/// - `id` is globally unique and immutable
/// - `time_range` is half-open with `start < end` (enforced by `TimeRange`)
/// - Status transitions follow state machine rules
/// - Never physically deleted; cancellation is a status transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Unique identifier for this reservation.
    pub id: ReservationId,

    /// Resource this reservation occupies.
    pub resource_id: ResourceId,

    /// Tenant whose customer holds the booking.
    pub tenant_id: TenantId,

    /// Claimed time range, `[start, end)`.
    pub time_range: TimeRange,

    /// Current status in the booking lifecycle.
    pub status: ReservationStatus,

    /// Free-form booking note (customer name, party size, etc.).
    pub note: Option<String>,

    /// When the reservation was created.
    pub created_at: Timestamp,

    /// When the reservation was last updated.
    pub updated_at: Timestamp,
}

impl Reservation {
    /// Creates a new reservation in the given initial status.
    ///
    /// Initial status is policy-configurable: Pending when staff confirmation
    /// is required, Confirmed for auto-confirming tenants.
    pub fn new(
        resource_id: ResourceId,
        tenant_id: TenantId,
        time_range: TimeRange,
        status: ReservationStatus,
        note: Option<String>,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id: ReservationId::new(),
            resource_id,
            tenant_id,
            time_range,
            status,
            note,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns true if this reservation counts against the no-overlap
    /// invariant (i.e., it is not cancelled).
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Confirm this reservation after staff approval.
    ///
    /// # Errors
    ///
    /// Returns error if transition from current status is not allowed.
    pub fn confirm(&mut self) -> Result<(), ValidationError> {
        self.status = self.status.transition_to(ReservationStatus::Confirmed)?;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Finalize this reservation after payment completes.
    pub fn finalize(&mut self) -> Result<(), ValidationError> {
        self.status = self.status.transition_to(ReservationStatus::Finalized)?;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Cancel this reservation, releasing its time range.
    pub fn cancel(&mut self) -> Result<(), ValidationError> {
        self.status = self.status.transition_to(ReservationStatus::Cancelled)?;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Returns true if this active reservation overlaps the candidate range.
    ///
    /// Cancelled reservations never conflict, regardless of range.
    pub fn conflicts_with(&self, range: &TimeRange) -> bool {
        self.is_active() && self.time_range.overlaps(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_range() -> TimeRange {
        let now = Timestamp::now();
        TimeRange::new(now.plus_hours(1), now.plus_hours(2)).unwrap()
    }

    fn pending_reservation() -> Reservation {
        Reservation::new(
            ResourceId::new(),
            TenantId::new(),
            test_range(),
            ReservationStatus::Pending,
            None,
        )
    }

    #[test]
    fn new_reservation_gets_unique_id() {
        let r1 = pending_reservation();
        let r2 = pending_reservation();
        assert_ne!(r1.id, r2.id);
    }

    #[test]
    fn new_reservation_starts_in_requested_status() {
        let range = test_range();
        let confirmed = Reservation::new(
            ResourceId::new(),
            TenantId::new(),
            range,
            ReservationStatus::Confirmed,
            Some("walk-in".to_string()),
        );
        assert_eq!(confirmed.status, ReservationStatus::Confirmed);
        assert_eq!(confirmed.note.as_deref(), Some("walk-in"));
    }

    #[test]
    fn confirm_transitions_pending_to_confirmed() {
        let mut reservation = pending_reservation();
        reservation.confirm().unwrap();
        assert_eq!(reservation.status, ReservationStatus::Confirmed);
    }

    #[test]
    fn finalize_requires_confirmed() {
        let mut reservation = pending_reservation();
        assert!(reservation.finalize().is_err());

        reservation.confirm().unwrap();
        reservation.finalize().unwrap();
        assert_eq!(reservation.status, ReservationStatus::Finalized);
    }

    #[test]
    fn cancel_releases_the_range() {
        let mut reservation = pending_reservation();
        let range = reservation.time_range;
        assert!(reservation.conflicts_with(&range));

        reservation.cancel().unwrap();
        assert!(!reservation.conflicts_with(&range));
    }

    #[test]
    fn cancelled_reservation_cannot_be_confirmed() {
        let mut reservation = pending_reservation();
        reservation.cancel().unwrap();
        assert!(reservation.confirm().is_err());
    }

    #[test]
    fn conflicts_with_respects_overlap_predicate() {
        let reservation = pending_reservation();
        let now = Timestamp::now();

        // Adjacent range starting exactly at this reservation's end.
        let adjacent =
            TimeRange::new(reservation.time_range.end(), now.plus_hours(3)).unwrap();
        assert!(!reservation.conflicts_with(&adjacent));

        // Overlapping range.
        let overlapping =
            TimeRange::new(now.plus_hours(1), now.plus_hours(3)).unwrap();
        assert!(reservation.conflicts_with(&overlapping));
    }
}
