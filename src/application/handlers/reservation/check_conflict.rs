//! CheckConflictHandler - Advisory overlap query.
//!
//! Answers "would this range conflict right now?" from a read that may be
//! stale relative to concurrent writers. Used for optimistic UI pre-checks
//! and editing flows where an early explicit error beats a late one. The
//! authoritative check lives in the store's atomic insert
//! (see `CreateReservationHandler`).

use std::sync::Arc;

use crate::domain::foundation::{ReservationId, ResourceId, TimeRange};
use crate::domain::reservation::ReservationError;
use crate::ports::ReservationStore;

/// Query for an advisory conflict check.
#[derive(Debug, Clone)]
pub struct CheckConflictQuery {
    pub resource_id: ResourceId,
    pub range: TimeRange,
    /// Reservation to ignore, when re-validating one being edited.
    pub exclude: Option<ReservationId>,
}

/// Handler for advisory conflict checks.
pub struct CheckConflictHandler {
    store: Arc<dyn ReservationStore>,
}

impl CheckConflictHandler {
    pub fn new(store: Arc<dyn ReservationStore>) -> Self {
        Self { store }
    }

    /// Returns true if any active reservation overlaps the candidate range.
    ///
    /// Read failures propagate as errors; a failed read is never treated
    /// as "no conflict".
    pub async fn handle(&self, query: CheckConflictQuery) -> Result<bool, ReservationError> {
        if query.resource_id.is_nil() {
            return Err(ReservationError::validation(
                "resource_id",
                "resource id must not be nil",
            ));
        }

        let overlaps = self
            .store
            .query_active_overlaps(query.resource_id, query.range, query.exclude)
            .await?;

        Ok(!overlaps.is_empty())
    }
}
