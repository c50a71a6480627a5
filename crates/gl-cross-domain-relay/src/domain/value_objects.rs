//! # Relay Value Objects
//!
//! Per-call execution outcomes collected by the receiver.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one call inside a received batch.
///
/// The receiver never aborts a batch on a single failure; it records one
/// status per call, in batch order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallStatus {
    /// The call executed successfully.
    Success,
    /// The call failed; sibling calls were unaffected.
    Failure,
}

impl CallStatus {
    /// Returns true for `Success`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, CallStatus::Success)
    }
}

/// Why a single call failed. Caught by the receiver and surfaced only as a
/// `CallStatus::Failure` entry, never as a handler error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallFailure {
    /// Human-readable failure reason from the executor.
    pub reason: String,
}

impl CallFailure {
    /// Creates a failure with the given reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CallFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "call failed: {}", self.reason)
    }
}
