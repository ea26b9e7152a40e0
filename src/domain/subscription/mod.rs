//! Subscription domain - tenant access control.
//!
//! Derives an access decision (blocked / warned / healthy) from a tenant's
//! subscription snapshot. Lifecycle transitions themselves are driven by
//! external billing events; this module only classifies a given snapshot.

mod access;
mod tenant;

pub use access::{AccessDecision, AccessPolicy};
pub use tenant::{PlanTier, TenantStatus, TenantSubscription};
