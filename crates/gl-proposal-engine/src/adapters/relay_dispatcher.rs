//! # Relay Dispatcher
//!
//! Hands approved batches to the cross-domain relay sender.

use crate::domain::GovernanceError;
use crate::ports::{DispatchOutcome, ProposalDispatcher};
use async_trait::async_trait;
use gl_cross_domain_relay::{MessageTransport, RelaySender};
use shared_types::{Call, ProposalId};

/// Dispatches batches across domains through a [`RelaySender`].
///
/// Reports `Relayed`, never `Executed`: the remote outcome arrives in a
/// later, unrelated transaction on the other domain and is not observable
/// here.
pub struct RelayDispatcher<T: MessageTransport> {
    sender: RelaySender<T>,
    default_execution_budget: u64,
}

impl<T: MessageTransport> RelayDispatcher<T> {
    /// Creates a dispatcher with a fallback budget for callers that supply
    /// none.
    pub fn new(sender: RelaySender<T>, default_execution_budget: u64) -> Self {
        Self {
            sender,
            default_execution_budget,
        }
    }
}

#[async_trait]
impl<T: MessageTransport> ProposalDispatcher for RelayDispatcher<T> {
    async fn dispatch(
        &self,
        proposal_id: ProposalId,
        calls: &[Call],
        execution_budget: Option<u64>,
    ) -> Result<DispatchOutcome, GovernanceError> {
        let budget = execution_budget.unwrap_or(self.default_execution_budget);
        self.sender
            .send(proposal_id, calls.to_vec(), budget)
            .await
            .map_err(|err| GovernanceError::Dispatch(err.to_string()))?;
        Ok(DispatchOutcome::Relayed {
            execution_budget: budget,
        })
    }
}
