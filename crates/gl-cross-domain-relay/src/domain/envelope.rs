//! # Relay Envelope
//!
//! The message a sender hands to the delivery transport.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Call, ProposalId};
use uuid::Uuid;

/// A dispatched call batch in flight between domains.
///
/// `message_id` is a correlation id for tracing and log stitching only;
/// replay protection on the receiver is keyed by `proposal_id`, so a
/// redelivery under a fresh message id is still rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayEnvelope {
    /// Correlation id stamped by the sender.
    pub message_id: Uuid,
    /// Governance contract the batch originates from.
    pub source_contract: Address,
    /// Proposal the batch belongs to.
    pub proposal_id: ProposalId,
    /// Approved call batch. Non-empty by construction on the sender side.
    pub calls: Vec<Call>,
    /// Resource bound the destination should spend attempting execution.
    pub execution_budget: u64,
}

impl RelayEnvelope {
    /// Creates an envelope with a fresh correlation id.
    #[must_use]
    pub fn new(
        source_contract: Address,
        proposal_id: ProposalId,
        calls: Vec<Call>,
        execution_budget: u64,
    ) -> Self {
        Self {
            message_id: Uuid::new_v4(),
            source_contract,
            proposal_id,
            calls,
            execution_budget,
        }
    }
}
