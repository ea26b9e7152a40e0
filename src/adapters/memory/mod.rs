//! In-memory adapters for tests, development, and single-process use.

mod reservation_store;
mod tenant_reader;

pub use reservation_store::InMemoryReservationStore;
pub use tenant_reader::StaticTenantReader;
