//! Reservation-specific error types.
//!
//! The taxonomy separates errors by what the caller should do next:
//!
//! | Error | Caller action |
//! |-------|---------------|
//! | ValidationFailed | Fix the input, never retry |
//! | Conflict | Refresh the slot view; "slot no longer available" |
//! | AccessBlocked | Show the subscription block screen |
//! | NotFound | Refresh the listing |
//! | Infrastructure | Classify and possibly retry (see `classification`) |

use crate::domain::foundation::{
    DomainError, ErrorCode, ReservationId, ResourceId, TimeRange, ValidationError,
};

/// Reservation-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReservationError {
    /// Reservation was not found.
    NotFound(ReservationId),

    /// Input failed a validation precondition (malformed range, nil ids).
    ValidationFailed {
        field: String,
        message: String,
    },

    /// The requested range overlaps an existing active reservation.
    ///
    /// The store is the authority for this outcome; it is raised only when
    /// the atomic check-and-insert loses to a competing reservation.
    Conflict {
        resource_id: ResourceId,
        range: TimeRange,
    },

    /// The tenant's subscription blocks all booking operations.
    AccessBlocked {
        reason: String,
    },

    /// Invalid state for the requested operation.
    InvalidState {
        current: String,
        attempted: String,
    },

    /// Infrastructure error (store read/write failure).
    Infrastructure(String),
}

impl ReservationError {
    pub fn not_found(id: ReservationId) -> Self {
        ReservationError::NotFound(id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ReservationError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn conflict(resource_id: ResourceId, range: TimeRange) -> Self {
        ReservationError::Conflict { resource_id, range }
    }

    pub fn access_blocked(reason: impl Into<String>) -> Self {
        ReservationError::AccessBlocked {
            reason: reason.into(),
        }
    }

    pub fn invalid_state(current: impl Into<String>, attempted: impl Into<String>) -> Self {
        ReservationError::InvalidState {
            current: current.into(),
            attempted: attempted.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ReservationError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ReservationError::NotFound(_) => ErrorCode::ReservationNotFound,
            ReservationError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ReservationError::Conflict { .. } => ErrorCode::ReservationConflict,
            ReservationError::AccessBlocked { .. } => ErrorCode::AccessBlocked,
            ReservationError::InvalidState { .. } => ErrorCode::InvalidStateTransition,
            ReservationError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    ///
    /// Raw backend internals are never exposed here; callers receive a
    /// stable message regardless of the storage implementation.
    pub fn message(&self) -> String {
        match self {
            ReservationError::NotFound(id) => format!("Reservation not found: {}", id),
            ReservationError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ReservationError::Conflict { .. } => {
                "This slot is no longer available".to_string()
            }
            ReservationError::AccessBlocked { reason } => {
                format!("Booking unavailable: {}", reason)
            }
            ReservationError::InvalidState { current, attempted } => {
                format!("Cannot {} reservation in {} state", attempted, current)
            }
            ReservationError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }

    /// Returns true if this error is a candidate for retry classification.
    ///
    /// Validation and conflict outcomes are final; only infrastructure
    /// failures go through the classifier/retry path.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ReservationError::Infrastructure(_))
    }
}

impl std::fmt::Display for ReservationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ReservationError {}

impl From<ValidationError> for ReservationError {
    fn from(err: ValidationError) -> Self {
        let field = match &err {
            ValidationError::EmptyField { field } => field.clone(),
            ValidationError::OutOfRange { field, .. } => field.clone(),
            ValidationError::InvalidFormat { field, .. } => field.clone(),
        };
        ReservationError::ValidationFailed {
            field,
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for ReservationError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ReservationConflict => {
                // A conflict surfacing as DomainError has lost its typed
                // payload; keep the code but degrade to infrastructure.
                ReservationError::Infrastructure(err.to_string())
            }
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => ReservationError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => ReservationError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;

    fn test_range() -> TimeRange {
        let now = Timestamp::now();
        TimeRange::new(now, now.plus_hours(1)).unwrap()
    }

    #[test]
    fn conflict_message_does_not_leak_internals() {
        let err = ReservationError::conflict(ResourceId::new(), test_range());
        assert_eq!(err.message(), "This slot is no longer available");
    }

    #[test]
    fn conflict_carries_reservation_conflict_code() {
        let err = ReservationError::conflict(ResourceId::new(), test_range());
        assert_eq!(err.code(), ErrorCode::ReservationConflict);
    }

    #[test]
    fn validation_error_converts_with_field() {
        let err: ReservationError = ValidationError::empty_field("resource_id").into();
        assert!(matches!(
            err,
            ReservationError::ValidationFailed { ref field, .. } if field == "resource_id"
        ));
    }

    #[test]
    fn only_infrastructure_is_retryable() {
        assert!(ReservationError::infrastructure("connection reset").is_retryable());
        assert!(!ReservationError::conflict(ResourceId::new(), test_range()).is_retryable());
        assert!(!ReservationError::validation("time_range", "inverted").is_retryable());
        assert!(!ReservationError::access_blocked("trial ended").is_retryable());
    }

    #[test]
    fn access_blocked_message_includes_reason() {
        let err = ReservationError::access_blocked("subscription suspended");
        assert!(err.message().contains("subscription suspended"));
    }
}
