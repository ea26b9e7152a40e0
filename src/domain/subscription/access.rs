//! Access decision derivation from subscription snapshots.
//!
//! `AccessPolicy::evaluate` is the pure core of the subscription gate. It is
//! deterministic, total over all snapshots, never mutates tenant state, and
//! must be re-evaluated on every access check since `now` advances
//! independently of any billing event.

use crate::domain::foundation::Timestamp;
use serde::{Deserialize, Serialize};

use super::{TenantStatus, TenantSubscription};

/// Sentinel days-remaining value used when no expiry date applies.
///
/// Large enough to never trip the warning banner window.
const OPEN_ENDED_DAYS: i64 = 999;

/// Thresholds for the access decision.
///
/// The grace window and banner window are business-tuned; the defaults
/// mirror the platform's launch configuration (3 days each) and are
/// overridable through `config::AccessConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPolicy {
    /// Days past subscription expiry an Overdue tenant keeps access.
    pub grace_days: i64,

    /// Upper bound (inclusive) of days-remaining that shows the warning
    /// banner. The lower bound is always zero.
    pub banner_days: i64,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self {
            grace_days: 3,
            banner_days: 3,
        }
    }
}

/// Outcome of evaluating a tenant snapshot at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessDecision {
    /// Status the decision was derived from.
    pub status: TenantStatus,

    /// Whole days until the relevant expiry (negative once past it);
    /// 999 when no date applies.
    pub days_remaining: i64,

    /// Whether all tenant-scoped operations must be rejected.
    pub is_blocked: bool,

    /// Whether the UI should show an expiry warning banner.
    pub show_banner: bool,
}

impl AccessDecision {
    /// Decision for a caller with no tenant record: fully open.
    pub fn unrestricted() -> Self {
        Self {
            status: TenantStatus::Active,
            days_remaining: OPEN_ENDED_DAYS,
            is_blocked: false,
            show_banner: false,
        }
    }
}

impl AccessPolicy {
    /// Creates a policy with explicit thresholds.
    pub fn new(grace_days: i64, banner_days: i64) -> Self {
        Self {
            grace_days,
            banner_days,
        }
    }

    /// Derives the access decision for a tenant snapshot at `now`.
    ///
    /// Blocking rules per status:
    /// - Trialing: blocked once `trial_ends_at` passes; an absent trial date
    ///   never blocks (open-ended trial).
    /// - Active: never blocked.
    /// - Overdue: blocked once more than `grace_days` past
    ///   `subscription_ends_at`; an absent date never blocks.
    /// - Suspended: always blocked, dates ignored.
    ///
    /// Day arithmetic truncates toward zero: one hour past expiry is still
    /// "day zero", which matters for the Trialing rule (blocked by timestamp
    /// comparison, not by the truncated day count).
    pub fn evaluate(&self, tenant: Option<&TenantSubscription>, now: Timestamp) -> AccessDecision {
        let Some(tenant) = tenant else {
            return AccessDecision::unrestricted();
        };

        let days_remaining = tenant
            .relevant_expiry()
            .map(|expiry| expiry.days_until(&now))
            .unwrap_or(OPEN_ENDED_DAYS);

        let is_blocked = match tenant.status {
            TenantStatus::Trialing => tenant
                .trial_ends_at
                .map(|ends| ends.is_before(&now))
                .unwrap_or(false),
            TenantStatus::Active => false,
            TenantStatus::Overdue => days_remaining < -self.grace_days,
            TenantStatus::Suspended => true,
        };

        let show_banner =
            !is_blocked && (0..=self.banner_days).contains(&days_remaining);

        AccessDecision {
            status: tenant.status,
            days_remaining,
            is_blocked,
            show_banner,
        }
    }
}
