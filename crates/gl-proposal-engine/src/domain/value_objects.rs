//! # Governance Value Objects
//!
//! Vote types and the proposal lifecycle state machine.

use serde::{Deserialize, Serialize};

/// A voter's choice.
///
/// `Unknown` is the absent/default value returned by vote queries; submitting
/// it is a validation error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoteType {
    /// No vote recorded. Invalid as a submission.
    #[default]
    Unknown,
    /// Vote in favor.
    Yes,
    /// Vote against.
    No,
}

impl VoteType {
    /// Returns true for `Yes`/`No`, false for `Unknown`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !matches!(self, VoteType::Unknown)
    }
}

/// Proposal lifecycle state machine.
///
/// `Open → {Rejected | Completed | Reverted | Processed}`, one transition,
/// no way back. `Completed`/`Reverted` describe a known same-domain outcome;
/// `Processed` means "approved and dispatched cross-domain" with the remote
/// outcome unknown to this side. The vocabularies are deliberately distinct.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalStatus {
    /// Accepting votes (within the window) or awaiting processing.
    #[default]
    Open,
    /// Yes-weight did not exceed no-weight; nothing was dispatched.
    Rejected,
    /// Same-domain batch executed; every call succeeded.
    Completed,
    /// Same-domain batch failed; the enclosing transaction rolled it back.
    Reverted,
    /// Batch handed to the cross-domain relay. Not a confirmation of remote
    /// execution.
    Processed,
}

impl ProposalStatus {
    /// Check if transition is valid.
    #[must_use]
    pub fn can_transition_to(&self, next: ProposalStatus) -> bool {
        matches!(self, ProposalStatus::Open) && next.is_terminal()
    }

    /// Check if terminal state.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ProposalStatus::Open)
    }
}
