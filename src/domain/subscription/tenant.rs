//! Tenant subscription snapshot.
//!
//! A read-only view of a tenant's billing lifecycle. This core never mutates
//! tenant state; billing events (handled elsewhere) move tenants between
//! statuses and update the expiry dates.

use crate::domain::foundation::{TenantId, Timestamp};
use serde::{Deserialize, Serialize};

/// Tenant subscription lifecycle status.
///
/// Exactly one of the two expiry dates is semantically active per status:
/// `trial_ends_at` while Trialing, `subscription_ends_at` while Active or
/// Overdue. Suspended ignores both dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenantStatus {
    /// Free trial in progress. Blocked once the trial date passes.
    Trialing,

    /// Paid subscription in good standing. Never blocked.
    Active,

    /// Payment failed; access continues through a grace window past expiry.
    Overdue,

    /// Administratively suspended. Always blocked, dates ignored.
    Suspended,
}

impl TenantStatus {
    /// Database/storage representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            TenantStatus::Trialing => "trialing",
            TenantStatus::Active => "active",
            TenantStatus::Overdue => "overdue",
            TenantStatus::Suspended => "suspended",
        }
    }

    /// Parses a storage representation, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "trialing" => Some(TenantStatus::Trialing),
            "active" => Some(TenantStatus::Active),
            "overdue" => Some(TenantStatus::Overdue),
            "suspended" => Some(TenantStatus::Suspended),
            _ => None,
        }
    }
}

/// Subscription plan tier.
///
/// Informational only: plan never feeds into blocking logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    Starter,
    Professional,
    Enterprise,
}

/// Snapshot of a tenant's subscription, as read from the tenant record
/// source. Refreshed by the caller on its own cadence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantSubscription {
    /// Tenant this snapshot belongs to.
    pub tenant_id: TenantId,

    /// Current lifecycle status.
    pub status: TenantStatus,

    /// Trial expiry; meaningful only while Trialing.
    pub trial_ends_at: Option<Timestamp>,

    /// Subscription expiry; meaningful while Active or Overdue.
    pub subscription_ends_at: Option<Timestamp>,

    /// Plan tier, informational only.
    pub plan: PlanTier,
}

impl TenantSubscription {
    /// The expiry date relevant to the current status, if any.
    ///
    /// Suspended tenants have no relevant date; both are ignored.
    pub fn relevant_expiry(&self) -> Option<Timestamp> {
        match self.status {
            TenantStatus::Trialing => self.trial_ends_at,
            TenantStatus::Active | TenantStatus::Overdue => self.subscription_ends_at,
            TenantStatus::Suspended => None,
        }
    }
}
