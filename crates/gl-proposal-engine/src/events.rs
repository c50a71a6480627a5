//! # Governance Events
//!
//! Records emitted by the engine for observers. Collected in order and
//! drained by the host; the engine never inspects them again.

use crate::domain::{ProposalStatus, VoteType};
use serde::{Deserialize, Serialize};
use shared_types::{Address, Amount, Call, ProposalId, SnapshotId, Timestamp};

/// An observable state change in the governance engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GovernanceEvent {
    /// The engine was initialized and the supply minted.
    Initialized {
        /// Accounts granted the controller capability at initialization.
        controllers: Vec<Address>,
    },

    /// Balance moved between accounts (burns report the zero address as
    /// `to`).
    Transfer {
        /// Debited account.
        from: Address,
        /// Credited account.
        to: Address,
        /// Amount moved.
        amount: Amount,
    },

    /// A controller created a proposal.
    ProposalCreated {
        /// Id assigned to the new proposal.
        proposal_id: ProposalId,
        /// Snapshot id frozen for vote weighing.
        snapshot_id: SnapshotId,
        /// The call batch to execute on approval.
        calls: Vec<Call>,
        /// Start of the voting window.
        voting_starts_at: Timestamp,
        /// End of the voting window.
        voting_ends_at: Timestamp,
    },

    /// An account cast a vote.
    VoteSubmitted {
        /// The proposal voted on.
        proposal_id: ProposalId,
        /// The voting account.
        voter: Address,
        /// The choice cast.
        vote_type: VoteType,
        /// Weight applied, frozen at cast time.
        weight: Amount,
    },

    /// A proposal reached its terminal status.
    ProposalProcessed {
        /// The processed proposal.
        proposal_id: ProposalId,
        /// Terminal status recorded.
        status: ProposalStatus,
        /// Budget attached to the relayed message; `None` unless the batch
        /// was handed to the cross-domain relay.
        execution_budget: Option<u64>,
    },
}
