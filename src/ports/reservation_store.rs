//! Reservation store port.
//!
//! The store is the sole authority for the no-double-booking invariant.
//! Client-side overlap checks (see `CheckConflictHandler`) are advisory:
//! they read a possibly-stale view and exist for early UX feedback only.
//! The insert path must make the check-and-insert indivisible so that the
//! storage layer, not client logic, is the final arbiter.

use crate::domain::foundation::{DomainError, ReservationId, ResourceId, TimeRange};
use crate::domain::reservation::Reservation;
use async_trait::async_trait;

/// Outcome of an atomic check-and-insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The reservation won its time range and was persisted.
    Inserted(Reservation),

    /// An active reservation already overlaps the requested range.
    Conflict,
}

impl InsertOutcome {
    /// Returns true if the insert succeeded.
    pub fn is_inserted(&self) -> bool {
        matches!(self, InsertOutcome::Inserted(_))
    }
}

/// Port for reservation persistence.
///
/// # Contract
///
/// `insert_if_no_overlap` must behave as one indivisible unit relative to
/// other concurrent inserts for the same resource: of N racing calls with
/// pairwise-overlapping ranges, exactly one returns `Inserted` and the rest
/// return `Conflict`. Implementations typically use a serializable
/// transaction that re-checks overlap immediately before insert, or an
/// exclusion constraint keyed on resource and range.
///
/// `query_active_overlaps` never blocks writers and may return stale reads;
/// its results must not be trusted as the sole gate.
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Atomically insert `reservation` unless an active reservation for the
    /// same resource overlaps its range.
    ///
    /// Cancelled reservations never count as overlapping.
    async fn insert_if_no_overlap(
        &self,
        reservation: Reservation,
    ) -> Result<InsertOutcome, DomainError>;

    /// List active reservations for `resource_id` overlapping `range`.
    ///
    /// `exclude` removes one reservation from consideration, used when
    /// re-validating an existing reservation being edited. Read failures
    /// propagate as errors, never as an empty result.
    async fn query_active_overlaps(
        &self,
        resource_id: ResourceId,
        range: TimeRange,
        exclude: Option<ReservationId>,
    ) -> Result<Vec<Reservation>, DomainError>;
}
