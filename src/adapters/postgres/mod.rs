//! PostgreSQL adapters.

mod reservation_store;
mod tenant_reader;

pub use reservation_store::PostgresReservationStore;
pub use tenant_reader::PostgresTenantReader;
