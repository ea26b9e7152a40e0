//! Domain layer - pure booking and access control logic.
//!
//! No I/O here: persistence lives behind `ports`, and the application layer
//! wires the two together.

pub mod classification;
pub mod foundation;
pub mod reservation;
pub mod subscription;
