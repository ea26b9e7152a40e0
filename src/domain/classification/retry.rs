//! Retry policy over classified failures.
//!
//! Stateless: the caller owns the attempt counter and any backoff/delay
//! scheduling. This policy only answers "may this be re-issued?".

use serde::{Deserialize, Serialize};

use super::ErrorLabel;

/// Decides whether a failed operation may be retried.
///
/// Authorization failures are never retried: re-issuing the same request
/// cannot fix an expired session or a denied policy, and hammers the
/// backend. Transient and unknown failures retry up to `max_attempts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total attempts allowed, including the first.
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_attempts: 3 }
    }
}

impl RetryPolicy {
    /// Creates a policy with an explicit attempt bound.
    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }

    /// Returns true if the operation may be re-issued.
    ///
    /// `attempt` is the number of attempts already made.
    pub fn should_retry(&self, label: ErrorLabel, attempt: u32) -> bool {
        match label {
            ErrorLabel::AuthExpired | ErrorLabel::PermissionDenied => false,
            ErrorLabel::Transient | ErrorLabel::Unknown => attempt < self.max_attempts,
        }
    }
}
