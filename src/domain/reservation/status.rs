//! Reservation status state machine.
//!
//! Defines all possible reservation states and valid transitions
//! according to the booking lifecycle.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Reservation lifecycle status.
///
/// Reservations are never physically deleted; cancellation is a status
/// transition, and only cancelled reservations drop out of conflict checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    /// Created by a booking request, awaiting staff confirmation or payment.
    Pending,

    /// Confirmed by staff or an automatic policy. Still mutable.
    Confirmed,

    /// Payment finalized. Terminal apart from record-keeping.
    Finalized,

    /// Cancelled by the customer or staff. Excluded from conflict checks.
    Cancelled,
}

impl ReservationStatus {
    /// Returns true if this reservation still occupies its time range.
    ///
    /// Every status except Cancelled counts against the no-overlap invariant.
    pub fn is_active(&self) -> bool {
        !matches!(self, ReservationStatus::Cancelled)
    }

    /// Database/storage representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Finalized => "finalized",
            ReservationStatus::Cancelled => "cancelled",
        }
    }

    /// Parses a storage representation, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(ReservationStatus::Pending),
            "confirmed" => Some(ReservationStatus::Confirmed),
            "finalized" => Some(ReservationStatus::Finalized),
            "cancelled" => Some(ReservationStatus::Cancelled),
            _ => None,
        }
    }
}

impl StateMachine for ReservationStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ReservationStatus::*;
        matches!(
            (self, target),
            // From PENDING
            (Pending, Confirmed)
                | (Pending, Cancelled)
            // From CONFIRMED
                | (Confirmed, Finalized)
                | (Confirmed, Cancelled)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ReservationStatus::*;
        match self {
            Pending => vec![Confirmed, Cancelled],
            Confirmed => vec![Finalized, Cancelled],
            Finalized => vec![],
            Cancelled => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Unit Tests - State Transitions

    #[test]
    fn pending_can_transition_to_confirmed() {
        let status = ReservationStatus::Pending;
        assert!(status.can_transition_to(&ReservationStatus::Confirmed));

        let result = status.transition_to(ReservationStatus::Confirmed);
        assert_eq!(result, Ok(ReservationStatus::Confirmed));
    }

    #[test]
    fn pending_can_transition_to_cancelled() {
        let status = ReservationStatus::Pending;
        let result = status.transition_to(ReservationStatus::Cancelled);
        assert_eq!(result, Ok(ReservationStatus::Cancelled));
    }

    #[test]
    fn pending_cannot_skip_to_finalized() {
        let status = ReservationStatus::Pending;
        assert!(!status.can_transition_to(&ReservationStatus::Finalized));

        let result = status.transition_to(ReservationStatus::Finalized);
        assert!(result.is_err());
    }

    #[test]
    fn confirmed_can_transition_to_finalized() {
        let status = ReservationStatus::Confirmed;
        let result = status.transition_to(ReservationStatus::Finalized);
        assert_eq!(result, Ok(ReservationStatus::Finalized));
    }

    #[test]
    fn confirmed_can_transition_to_cancelled() {
        let status = ReservationStatus::Confirmed;
        let result = status.transition_to(ReservationStatus::Cancelled);
        assert_eq!(result, Ok(ReservationStatus::Cancelled));
    }

    #[test]
    fn finalized_is_terminal() {
        assert!(ReservationStatus::Finalized.is_terminal());
    }

    #[test]
    fn cancelled_is_terminal() {
        assert!(ReservationStatus::Cancelled.is_terminal());
    }

    // Unit Tests - is_active

    #[test]
    fn pending_is_active() {
        assert!(ReservationStatus::Pending.is_active());
    }

    #[test]
    fn confirmed_is_active() {
        assert!(ReservationStatus::Confirmed.is_active());
    }

    #[test]
    fn finalized_is_active() {
        assert!(ReservationStatus::Finalized.is_active());
    }

    #[test]
    fn cancelled_is_not_active() {
        assert!(!ReservationStatus::Cancelled.is_active());
    }

    // Parsing

    #[test]
    fn parse_roundtrips_all_statuses() {
        for status in [
            ReservationStatus::Pending,
            ReservationStatus::Confirmed,
            ReservationStatus::Finalized,
            ReservationStatus::Cancelled,
        ] {
            assert_eq!(ReservationStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(
            ReservationStatus::parse("CONFIRMED"),
            Some(ReservationStatus::Confirmed)
        );
    }

    #[test]
    fn parse_rejects_unknown_status() {
        assert_eq!(ReservationStatus::parse("archived"), None);
    }

    #[test]
    fn valid_transitions_are_consistent_with_can_transition_to() {
        for status in [
            ReservationStatus::Pending,
            ReservationStatus::Confirmed,
            ReservationStatus::Finalized,
            ReservationStatus::Cancelled,
        ] {
            for valid_target in status.valid_transitions() {
                assert!(
                    status.can_transition_to(&valid_target),
                    "can_transition_to should return true for {:?} -> {:?}",
                    status,
                    valid_target
                );
            }
        }
    }
}
