//! Access policy configuration
//!
//! The grace and banner windows default to the platform's launch values
//! (3 days each) but are deployment-tunable; they carry no inherent business
//! justification beyond "what the product launched with".

use serde::Deserialize;

use crate::domain::subscription::AccessPolicy;

use super::error::ValidationError;

/// Access policy thresholds
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AccessConfig {
    /// Days past subscription expiry an overdue tenant keeps access
    #[serde(default = "default_grace_days")]
    pub grace_days: i64,

    /// Days-remaining at or below which the warning banner shows
    #[serde(default = "default_banner_days")]
    pub banner_days: i64,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            grace_days: default_grace_days(),
            banner_days: default_banner_days(),
        }
    }
}

impl AccessConfig {
    /// Builds the domain policy from this configuration.
    pub fn policy(&self) -> AccessPolicy {
        AccessPolicy::new(self.grace_days, self.banner_days)
    }

    /// Validate access configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        for days in [self.grace_days, self.banner_days] {
            if !(0..=365).contains(&days) {
                return Err(ValidationError::InvalidAccessThreshold);
            }
        }
        Ok(())
    }
}

fn default_grace_days() -> i64 {
    3
}

fn default_banner_days() -> i64 {
    3
}
