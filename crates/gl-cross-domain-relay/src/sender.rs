//! # Relay Sender
//!
//! Hands approved call batches to the delivery transport, addressed to the
//! counterpart governance contract on the other domain.

use crate::domain::{RelayEnvelope, RelayError};
use crate::ports::MessageTransport;
use shared_types::{Address, Call, Domain, ProposalId};
use tracing::info;
use uuid::Uuid;

/// Sender half of the relay.
///
/// Fire-and-forget: `send` returns once the transport has accepted the
/// envelope. The remote outcome is reported asynchronously on the other
/// domain and is never observable here.
pub struct RelaySender<T: MessageTransport> {
    source_contract: Address,
    counterpart: Address,
    destination: Domain,
    transport: T,
}

impl<T: MessageTransport> RelaySender<T> {
    /// Creates a sender bound to a counterpart contract on `destination`.
    pub fn new(
        source_contract: Address,
        counterpart: Address,
        destination: Domain,
        transport: T,
    ) -> Self {
        Self {
            source_contract,
            counterpart,
            destination,
            transport,
        }
    }

    /// Dispatches `calls` for `proposal_id` with the given execution budget.
    /// Returns the envelope's correlation id.
    pub async fn send(
        &self,
        proposal_id: ProposalId,
        calls: Vec<Call>,
        execution_budget: u64,
    ) -> Result<Uuid, RelayError> {
        if self.counterpart.is_zero() {
            return Err(RelayError::CounterpartUnset);
        }

        let envelope = RelayEnvelope::new(self.source_contract, proposal_id, calls, execution_budget);
        let message_id = envelope.message_id;

        info!(
            proposal_id,
            %message_id,
            counterpart = %self.counterpart,
            destination = ?self.destination,
            execution_budget,
            "sending cross-domain proposal batch"
        );

        self.transport.deliver(self.counterpart, envelope).await?;

        Ok(message_id)
    }
}
