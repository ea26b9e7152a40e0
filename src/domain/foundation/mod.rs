//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the VenueBook booking domain.

mod errors;
mod ids;
mod state_machine;
mod time_range;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ReservationId, ResourceId, TenantId};
pub use state_machine::StateMachine;
pub use time_range::TimeRange;
pub use timestamp::Timestamp;
