//! # Governance Errors
//!
//! One enum for the engine surface, with a coarse category accessor so
//! callers can branch on error class without matching every variant.

use gl_snapshot_ledger::LedgerError;
use shared_types::{Address, ProposalId, SnapshotId};
use thiserror::Error;

/// Coarse classification of a governance error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Double initialization or invalid initialization parameters.
    Initialization,
    /// Caller lacks the required capability.
    Authorization,
    /// Malformed input: missing proposal, bad batch, invalid vote type.
    Validation,
    /// Valid input against the wrong state: window closed, duplicate vote,
    /// already processed, insufficient weight.
    State,
}

/// Errors raised by the governance engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GovernanceError {
    /// The engine was already initialized.
    #[error("Already initialized")]
    AlreadyInitialized,

    /// The engine has not been initialized yet.
    #[error("Not initialized")]
    NotInitialized,

    /// Snapshot window length must be nonzero.
    #[error("Invalid snapshot window length")]
    InvalidSnapshotWindowLength,

    /// Voting period must be nonzero.
    #[error("Invalid voting period")]
    InvalidVotingPeriod,

    /// Total supply must be nonzero.
    #[error("Invalid total supply")]
    InvalidTotalSupply,

    /// Proposal creation requires the controller capability.
    #[error("Caller {0} is not a controller")]
    CallerNotController(Address),

    /// Burning requires the owner capability.
    #[error("Caller {0} is not the owner")]
    CallerNotOwner(Address),

    /// A proposal needs at least one call.
    #[error("Call batch is empty")]
    EmptyCallBatch,

    /// No call may target the zero address.
    #[error("Call target is the zero address")]
    CallTargetIsZeroAddress,

    /// No proposal with this id exists.
    #[error("Proposal not found: {0}")]
    ProposalNotFound(ProposalId),

    /// `Unknown` is not a castable vote.
    #[error("Invalid vote type")]
    InvalidVoteType,

    /// The voting window has not opened yet.
    #[error("Voting not started")]
    VotingNotStarted,

    /// The voting window has closed.
    #[error("Voting already finished")]
    VotingAlreadyFinished,

    /// The voting window is still open; the proposal cannot be processed.
    #[error("Voting not finished")]
    VotingNotFinished,

    /// Each account votes at most once per proposal.
    #[error("Account {voter} already voted on proposal {proposal_id}")]
    AlreadyVoted {
        /// The duplicate voter.
        voter: Address,
        /// The proposal in question.
        proposal_id: ProposalId,
    },

    /// Zero balance at the proposal's snapshot carries no voting weight.
    #[error("Insufficient balance: {voter} holds nothing at snapshot {snapshot_id}")]
    InsufficientBalance {
        /// The would-be voter.
        voter: Address,
        /// The proposal's frozen snapshot id.
        snapshot_id: SnapshotId,
    },

    /// The proposal already reached a terminal status.
    #[error("Proposal already processed: {0}")]
    ProposalAlreadyProcessed(ProposalId),

    /// A ledger mutation failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// The dispatcher failed to hand off the batch; nothing was recorded.
    #[error("Dispatch failed: {0}")]
    Dispatch(String),
}

impl GovernanceError {
    /// The coarse class this error belongs to.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        use GovernanceError::*;
        match self {
            AlreadyInitialized
            | NotInitialized
            | InvalidSnapshotWindowLength
            | InvalidVotingPeriod
            | InvalidTotalSupply => ErrorCategory::Initialization,
            CallerNotController(_) | CallerNotOwner(_) => ErrorCategory::Authorization,
            EmptyCallBatch | CallTargetIsZeroAddress | ProposalNotFound(_) | InvalidVoteType => {
                ErrorCategory::Validation
            }
            VotingNotStarted
            | VotingAlreadyFinished
            | VotingNotFinished
            | AlreadyVoted { .. }
            | InsufficientBalance { .. }
            | ProposalAlreadyProcessed(_)
            | Ledger(_)
            | Dispatch(_) => ErrorCategory::State,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialization_category() {
        assert_eq!(
            GovernanceError::AlreadyInitialized.category(),
            ErrorCategory::Initialization
        );
        assert_eq!(
            GovernanceError::InvalidVotingPeriod.category(),
            ErrorCategory::Initialization
        );
    }

    #[test]
    fn test_authorization_category() {
        let err = GovernanceError::CallerNotController(Address::new([1u8; 20]));
        assert_eq!(err.category(), ErrorCategory::Authorization);
    }

    #[test]
    fn test_validation_category() {
        assert_eq!(
            GovernanceError::ProposalNotFound(7).category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            GovernanceError::InvalidVoteType.category(),
            ErrorCategory::Validation
        );
    }

    #[test]
    fn test_state_category() {
        assert_eq!(
            GovernanceError::ProposalAlreadyProcessed(1).category(),
            ErrorCategory::State
        );
        let err = GovernanceError::InsufficientBalance {
            voter: Address::new([1u8; 20]),
            snapshot_id: 2,
        };
        assert_eq!(err.category(), ErrorCategory::State);
    }

    #[test]
    fn test_ledger_error_converts() {
        let err: GovernanceError = LedgerError::InvalidTotalSupply.into();
        assert!(matches!(err, GovernanceError::Ledger(_)));
    }
}
