//! Access gate handlers.

mod evaluate_access;

pub use evaluate_access::{EvaluateAccessHandler, EvaluateAccessQuery};
