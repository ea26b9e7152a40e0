//! PostgreSQL implementation of TenantReader.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, TenantId, Timestamp};
use crate::domain::subscription::{PlanTier, TenantStatus, TenantSubscription};
use crate::ports::TenantReader;

/// PostgreSQL implementation of the TenantReader port.
pub struct PostgresTenantReader {
    pool: PgPool,
}

impl PostgresTenantReader {
    /// Creates a new reader backed by the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row shape for tenant subscription queries.
#[derive(Debug, sqlx::FromRow)]
struct TenantRow {
    id: Uuid,
    status: String,
    trial_ends_at: Option<DateTime<Utc>>,
    subscription_ends_at: Option<DateTime<Utc>>,
    plan: String,
}

fn parse_status(s: &str) -> Result<TenantStatus, DomainError> {
    TenantStatus::parse(s).ok_or_else(|| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid tenant status value: {}", s),
        )
    })
}

fn parse_plan(s: &str) -> Result<PlanTier, DomainError> {
    match s.to_lowercase().as_str() {
        "starter" => Ok(PlanTier::Starter),
        "professional" => Ok(PlanTier::Professional),
        "enterprise" => Ok(PlanTier::Enterprise),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid plan value: {}", s),
        )),
    }
}

impl TenantRow {
    fn into_domain(self) -> Result<TenantSubscription, DomainError> {
        Ok(TenantSubscription {
            tenant_id: TenantId::from_uuid(self.id),
            status: parse_status(&self.status)?,
            trial_ends_at: self.trial_ends_at.map(Timestamp::from_datetime),
            subscription_ends_at: self.subscription_ends_at.map(Timestamp::from_datetime),
            plan: parse_plan(&self.plan)?,
        })
    }
}

#[async_trait]
impl TenantReader for PostgresTenantReader {
    async fn get_subscription(
        &self,
        tenant_id: &TenantId,
    ) -> Result<Option<TenantSubscription>, DomainError> {
        let row: Option<TenantRow> = sqlx::query_as(
            r#"
            SELECT id, status, trial_ends_at, subscription_ends_at, plan
            FROM tenants
            WHERE id = $1
            "#,
        )
        .bind(tenant_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::new(ErrorCode::DatabaseError, e.to_string()))?;

        row.map(TenantRow::into_domain).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_status_accepts_known_values() {
        assert_eq!(parse_status("overdue").unwrap(), TenantStatus::Overdue);
        assert_eq!(parse_status("SUSPENDED").unwrap(), TenantStatus::Suspended);
    }

    #[test]
    fn parse_status_rejects_unknown_values() {
        assert!(parse_status("archived").is_err());
    }

    #[test]
    fn parse_plan_accepts_known_values() {
        assert_eq!(parse_plan("starter").unwrap(), PlanTier::Starter);
        assert_eq!(parse_plan("Enterprise").unwrap(), PlanTier::Enterprise);
    }

    #[test]
    fn parse_plan_rejects_unknown_values() {
        assert!(parse_plan("platinum").is_err());
    }
}
