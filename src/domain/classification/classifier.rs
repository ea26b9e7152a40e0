//! Failure classifier.
//!
//! Labels a failed data-access result as an authentication failure, a
//! permission (row-level authorization) denial, a transient fault, or
//! unknown. Pure function over a fixed set of provider codes and
//! case-insensitive message patterns.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Label derived from a failed operation. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorLabel {
    /// Session/token no longer valid; caller must re-authenticate.
    AuthExpired,

    /// Row-level or role authorization denied; surfaced as access-denied.
    PermissionDenied,

    /// Network, timeout, 5xx and similar faults; eligible for retry.
    Transient,

    /// Nothing recognizable in the failure; treated like Transient for
    /// retry purposes but logged distinctly.
    Unknown,
}

/// Raw failure details captured at the store/session boundary.
///
/// All fields are optional; absent fields simply never match a pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureInfo {
    /// Provider error code, e.g. an HTTP status or SQLSTATE.
    pub code: Option<String>,

    /// Human-readable message from the provider.
    pub message: Option<String>,

    /// Secondary detail text (hint, constraint name, policy name).
    pub details: Option<String>,
}

impl FailureInfo {
    /// Failure with a code only.
    pub fn from_code(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            ..Self::default()
        }
    }

    /// Failure with a message only.
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Failure with both code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: Some(message.into()),
            details: None,
        }
    }

    /// Adds secondary detail text.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    fn code_matches(&self, codes: &[&str]) -> bool {
        self.code
            .as_deref()
            .map(|c| codes.iter().any(|known| c.eq_ignore_ascii_case(known)))
            .unwrap_or(false)
    }

    fn text_matches(&self, patterns: &[&str]) -> bool {
        let haystacks = [self.message.as_deref(), self.details.as_deref()];
        haystacks.iter().flatten().any(|text| {
            let lowered = text.to_lowercase();
            patterns.iter().any(|p| lowered.contains(p))
        })
    }

    fn is_empty(&self) -> bool {
        let blank = |s: &Option<String>| s.as_deref().map(str::trim).unwrap_or("").is_empty();
        blank(&self.code) && blank(&self.message) && blank(&self.details)
    }
}

/// Provider codes that signal an expired or invalid session.
static AUTH_CODES: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec!["401", "PGRST301", "invalid_grant"]);

/// Message fragments that signal an expired or invalid session.
static AUTH_PATTERNS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "jwt expired",
        "invalid token",
        "session expired",
        "refresh token",
        "not authenticated",
    ]
});

/// Provider codes that signal an authorization denial.
static PERMISSION_CODES: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec!["403", "42501", "PGRST116"]);

/// Message fragments that signal a row-level authorization denial.
static PERMISSION_PATTERNS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "row-level security",
        "rls",
        "permission denied",
        "insufficient privilege",
    ]
});

/// Classifies a failure into an `ErrorLabel`.
///
/// Auth patterns take precedence over permission patterns when both match.
/// A failure carrying no code, message, or details is `Unknown`; anything
/// else unrecognized is `Transient`.
pub fn classify(failure: &FailureInfo) -> ErrorLabel {
    if failure.code_matches(&AUTH_CODES) || failure.text_matches(&AUTH_PATTERNS) {
        return ErrorLabel::AuthExpired;
    }

    if failure.code_matches(&PERMISSION_CODES) || failure.text_matches(&PERMISSION_PATTERNS) {
        return ErrorLabel::PermissionDenied;
    }

    if failure.is_empty() {
        ErrorLabel::Unknown
    } else {
        ErrorLabel::Transient
    }
}
