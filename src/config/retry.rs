//! Retry policy configuration

use serde::Deserialize;

use crate::domain::classification::RetryPolicy;

use super::error::ValidationError;

/// Retry policy bounds
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RetryConfig {
    /// Total attempts allowed per transient failure, including the first
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
        }
    }
}

impl RetryConfig {
    /// Builds the domain policy from this configuration.
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts)
    }

    /// Validate retry configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=10).contains(&self.max_attempts) {
            return Err(ValidationError::InvalidRetryBound);
        }
        Ok(())
    }
}

fn default_max_attempts() -> u32 {
    3
}
