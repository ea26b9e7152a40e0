//! EvaluateAccessHandler - Query handler for subscription access decisions.
//!
//! Called by route gates (to decide between a block screen and normal
//! content) and by banner UI. This is the most frequently called query; the
//! reader implementation may cache within the caller's refresh cadence, but
//! the decision itself is recomputed on every call because `now` advances
//! independently of any billing event.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, TenantId, Timestamp};
use crate::domain::subscription::{AccessDecision, AccessPolicy};
use crate::ports::TenantReader;

/// Query for a tenant's access decision.
#[derive(Debug, Clone)]
pub struct EvaluateAccessQuery {
    pub tenant_id: TenantId,
}

/// Handler deriving access decisions from tenant snapshots.
pub struct EvaluateAccessHandler {
    tenants: Arc<dyn TenantReader>,
    policy: AccessPolicy,
}

impl EvaluateAccessHandler {
    pub fn new(tenants: Arc<dyn TenantReader>, policy: AccessPolicy) -> Self {
        Self { tenants, policy }
    }

    pub async fn handle(
        &self,
        query: EvaluateAccessQuery,
    ) -> Result<AccessDecision, DomainError> {
        let snapshot = self.tenants.get_subscription(&query.tenant_id).await?;
        let decision = self.policy.evaluate(snapshot.as_ref(), Timestamp::now());

        if decision.is_blocked {
            tracing::debug!(
                tenant_id = %query.tenant_id,
                status = ?decision.status,
                days_remaining = decision.days_remaining,
                "tenant access blocked"
            );
        }

        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::StaticTenantReader;
    use crate::domain::subscription::{PlanTier, TenantStatus, TenantSubscription};

    fn handler_for(subscription: TenantSubscription) -> EvaluateAccessHandler {
        EvaluateAccessHandler::new(
            Arc::new(StaticTenantReader::with_subscription(subscription)),
            AccessPolicy::default(),
        )
    }

    fn subscription(
        tenant_id: TenantId,
        status: TenantStatus,
        trial_ends_at: Option<Timestamp>,
        subscription_ends_at: Option<Timestamp>,
    ) -> TenantSubscription {
        TenantSubscription {
            tenant_id,
            status,
            trial_ends_at,
            subscription_ends_at,
            plan: PlanTier::Starter,
        }
    }

    #[tokio::test]
    async fn healthy_active_tenant_gets_open_decision() {
        let tenant_id = TenantId::new();
        let handler = handler_for(subscription(
            tenant_id,
            TenantStatus::Active,
            None,
            Some(Timestamp::now().add_days(10)),
        ));

        let decision = handler
            .handle(EvaluateAccessQuery { tenant_id })
            .await
            .unwrap();

        assert!(!decision.is_blocked);
        assert!(!decision.show_banner);
        assert_eq!(decision.days_remaining, 10);
    }

    #[tokio::test]
    async fn trial_ending_soon_shows_banner() {
        let tenant_id = TenantId::new();
        let handler = handler_for(subscription(
            tenant_id,
            TenantStatus::Trialing,
            Some(Timestamp::now().add_days(2)),
            None,
        ));

        let decision = handler
            .handle(EvaluateAccessQuery { tenant_id })
            .await
            .unwrap();

        assert!(decision.show_banner);
        assert!(!decision.is_blocked);
    }

    #[tokio::test]
    async fn suspended_tenant_is_blocked() {
        let tenant_id = TenantId::new();
        let handler = handler_for(subscription(
            tenant_id,
            TenantStatus::Suspended,
            None,
            None,
        ));

        let decision = handler
            .handle(EvaluateAccessQuery { tenant_id })
            .await
            .unwrap();

        assert!(decision.is_blocked);
    }

    #[tokio::test]
    async fn unknown_tenant_gets_unrestricted_default() {
        let handler = EvaluateAccessHandler::new(
            Arc::new(StaticTenantReader::empty()),
            AccessPolicy::default(),
        );

        let decision = handler
            .handle(EvaluateAccessQuery {
                tenant_id: TenantId::new(),
            })
            .await
            .unwrap();

        assert!(!decision.is_blocked);
        assert_eq!(decision.days_remaining, 999);
    }

    #[tokio::test]
    async fn reader_failure_propagates() {
        let handler = EvaluateAccessHandler::new(
            Arc::new(StaticTenantReader::failing()),
            AccessPolicy::default(),
        );

        let result = handler
            .handle(EvaluateAccessQuery {
                tenant_id: TenantId::new(),
            })
            .await;

        assert!(result.is_err());
    }
}
