//! Reservation domain - booking lifecycle and conflict semantics.
//!
//! A reservation claims a half-open time range on a single resource. The
//! central invariant of this module: for a fixed resource, no two active
//! (non-cancelled) reservations may overlap in time.

mod aggregate;
mod errors;
mod status;

pub use aggregate::Reservation;
pub use errors::ReservationError;
pub use status::ReservationStatus;
