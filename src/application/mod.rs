//! Application layer - operation handlers.
//!
//! Each handler wires one operation to its ports. Handlers own orchestration
//! (validation order, access gating, error mapping) and stay free of
//! storage or transport concerns.

pub mod handlers;
