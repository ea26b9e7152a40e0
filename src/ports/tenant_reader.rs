//! Tenant reader port.
//!
//! Supplies subscription snapshots for access gating. The caller refreshes
//! on its own cadence (navigation, periodic poll); this core does not
//! subscribe to billing change events itself.

use crate::domain::foundation::{DomainError, TenantId};
use crate::domain::subscription::TenantSubscription;
use async_trait::async_trait;

/// Port for reading tenant subscription snapshots.
///
/// This is called on every gated operation and should be cheap;
/// implementations may cache within the caller's refresh cadence.
#[async_trait]
pub trait TenantReader: Send + Sync {
    /// Fetch the subscription snapshot for a tenant.
    ///
    /// Returns `None` for callers with no tenant record (which evaluate to
    /// the unrestricted default, see `AccessPolicy::evaluate`).
    async fn get_subscription(
        &self,
        tenant_id: &TenantId,
    ) -> Result<Option<TenantSubscription>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tenant_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn TenantReader) {}
    }
}
