//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! domain and the outside world. Adapters implement these ports.
//!
//! - `ReservationStore` - transactional reservation persistence; the
//!   authoritative enforcement point for the no-overlap invariant
//! - `TenantReader` - tenant subscription snapshots for access gating

mod reservation_store;
mod tenant_reader;

pub use reservation_store::{InsertOutcome, ReservationStore};
pub use tenant_reader::TenantReader;
