//! Reservation operation handlers.

mod check_conflict;
mod create_reservation;

pub use check_conflict::{CheckConflictHandler, CheckConflictQuery};
pub use create_reservation::{CreateReservationCommand, CreateReservationHandler};
