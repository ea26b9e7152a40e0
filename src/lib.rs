//! VenueBook Core - Booking conflict and access control engine.
//!
//! This crate implements the reservation conflict/atomic-creation core and
//! the subscription access-control state machine that gate all tenant-scoped
//! operations on the VenueBook platform.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
