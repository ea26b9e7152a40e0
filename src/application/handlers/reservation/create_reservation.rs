//! CreateReservationHandler - Atomic reservation creation.
//!
//! The one write path in this core. Ordering is load-bearing:
//!
//! 1. Validation preconditions (cheap, no I/O)
//! 2. Subscription gate (blocked tenants never reach the store)
//! 3. Atomic check-and-insert at the store (the authority for the
//!    no-overlap invariant)
//!
//! Of N concurrent calls racing for overlapping ranges on one resource,
//! exactly one succeeds; the rest receive `ReservationError::Conflict`.

use std::sync::Arc;

use crate::domain::foundation::{ResourceId, TenantId, TimeRange, Timestamp};
use crate::domain::reservation::{Reservation, ReservationError, ReservationStatus};
use crate::domain::subscription::AccessPolicy;
use crate::ports::{InsertOutcome, ReservationStore, TenantReader};

/// Command to create a reservation.
#[derive(Debug, Clone)]
pub struct CreateReservationCommand {
    pub resource_id: ResourceId,
    pub tenant_id: TenantId,
    pub start: Timestamp,
    pub end: Timestamp,
    /// When true the reservation is created already Confirmed
    /// (auto-confirming tenants); otherwise it starts Pending.
    pub auto_confirm: bool,
    pub note: Option<String>,
}

/// Handler for atomic reservation creation.
pub struct CreateReservationHandler {
    store: Arc<dyn ReservationStore>,
    tenants: Arc<dyn TenantReader>,
    access_policy: AccessPolicy,
}

impl CreateReservationHandler {
    pub fn new(
        store: Arc<dyn ReservationStore>,
        tenants: Arc<dyn TenantReader>,
        access_policy: AccessPolicy,
    ) -> Self {
        Self {
            store,
            tenants,
            access_policy,
        }
    }

    pub async fn handle(
        &self,
        command: CreateReservationCommand,
    ) -> Result<Reservation, ReservationError> {
        // Validation before any I/O. Violations are ValidationFailed,
        // never Conflict.
        if command.resource_id.is_nil() {
            return Err(ReservationError::validation(
                "resource_id",
                "resource id must not be nil",
            ));
        }
        let range = TimeRange::new(command.start, command.end)?;

        // Subscription gate. Blocked tenants are rejected before the store
        // sees the request.
        let snapshot = self
            .tenants
            .get_subscription(&command.tenant_id)
            .await
            .map_err(|e| ReservationError::infrastructure(e.to_string()))?;
        let decision = self
            .access_policy
            .evaluate(snapshot.as_ref(), Timestamp::now());
        if decision.is_blocked {
            tracing::warn!(
                tenant_id = %command.tenant_id,
                status = ?decision.status,
                "reservation rejected by subscription gate"
            );
            return Err(ReservationError::access_blocked(format!(
                "subscription is {}",
                decision.status.as_str()
            )));
        }

        let status = if command.auto_confirm {
            ReservationStatus::Confirmed
        } else {
            ReservationStatus::Pending
        };
        let reservation = Reservation::new(
            command.resource_id,
            command.tenant_id,
            range,
            status,
            command.note,
        );

        // The store decides. A conflicting concurrent insert surfaces here
        // as Conflict no matter what any advisory pre-check said.
        match self.store.insert_if_no_overlap(reservation).await? {
            InsertOutcome::Inserted(reservation) => {
                tracing::info!(
                    reservation_id = %reservation.id,
                    resource_id = %reservation.resource_id,
                    "reservation created"
                );
                Ok(reservation)
            }
            InsertOutcome::Conflict => Err(ReservationError::conflict(command.resource_id, range)),
        }
    }
}
