//! Failure classification and retry policy.
//!
//! Every failed store/session call is classified at the boundary where it
//! returns. Upstream callers receive only the label and the retry decision,
//! never raw backend internals.

mod classifier;
mod retry;

pub use classifier::{classify, ErrorLabel, FailureInfo};
pub use retry::RetryPolicy;
