//! Static tenant reader for development and testing.
//!
//! Serves fixed subscription snapshots from memory. Replace with
//! `PostgresTenantReader` in production.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::domain::foundation::{DomainError, ErrorCode, TenantId};
use crate::domain::subscription::TenantSubscription;
use crate::ports::TenantReader;

/// TenantReader serving a fixed set of snapshots.
#[derive(Debug, Clone, Default)]
pub struct StaticTenantReader {
    subscriptions: HashMap<TenantId, TenantSubscription>,
    fail_reads: bool,
}

impl StaticTenantReader {
    /// Reader with no tenant records; every lookup returns `None`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Reader holding a single subscription snapshot.
    pub fn with_subscription(subscription: TenantSubscription) -> Self {
        let mut subscriptions = HashMap::new();
        subscriptions.insert(subscription.tenant_id, subscription);
        Self {
            subscriptions,
            fail_reads: false,
        }
    }

    /// Reader whose lookups always fail (for testing error paths).
    pub fn failing() -> Self {
        Self {
            subscriptions: HashMap::new(),
            fail_reads: true,
        }
    }

    /// Adds another snapshot.
    pub fn insert(&mut self, subscription: TenantSubscription) {
        self.subscriptions
            .insert(subscription.tenant_id, subscription);
    }
}

#[async_trait]
impl TenantReader for StaticTenantReader {
    async fn get_subscription(
        &self,
        tenant_id: &TenantId,
    ) -> Result<Option<TenantSubscription>, DomainError> {
        if self.fail_reads {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "simulated tenant read failure",
            ));
        }
        Ok(self.subscriptions.get(tenant_id).cloned())
    }
}
