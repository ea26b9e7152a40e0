//! Operation handlers, one module per operation.

pub mod access;
pub mod reservation;

pub use access::{EvaluateAccessHandler, EvaluateAccessQuery};
pub use reservation::{
    CheckConflictHandler, CheckConflictQuery, CreateReservationCommand, CreateReservationHandler,
};
