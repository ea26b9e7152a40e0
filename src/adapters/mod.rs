//! Adapters - Implementations of ports for concrete backends.
//!
//! - `memory` - in-process implementations for tests, development, and
//!   single-server deployments
//! - `postgres` - sqlx-backed implementations for production

pub mod memory;
pub mod postgres;
