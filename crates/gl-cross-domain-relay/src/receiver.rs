//! # Relay Receiver
//!
//! Handles inbound proposal batches: authenticates the originator, rejects
//! redelivery, and executes each call independently.

use crate::domain::{CallStatus, RelayEnvelope, RelayError};
use crate::events::RelayEvent;
use crate::ports::{CallExecutor, OriginVerifier};
use shared_types::{Address, ProposalId};
use std::collections::HashSet;
use tracing::{info, instrument, warn};

/// Receiver half of the relay.
///
/// Bound to exactly one counterpart contract. The processed-set is keyed by
/// proposal id: proposal ids are strictly increasing per sending contract, so
/// the id alone is unique within one receiver, and a redelivered envelope is
/// rejected even when the transport stamped it with a fresh message id.
pub struct RelayReceiver<V: OriginVerifier, E: CallExecutor> {
    expected_counterpart: Address,
    verifier: V,
    executor: E,
    processed: HashSet<ProposalId>,
    events: Vec<RelayEvent>,
}

impl<V: OriginVerifier, E: CallExecutor> RelayReceiver<V, E> {
    /// Creates a receiver trusting messages originated by
    /// `expected_counterpart` only.
    pub fn new(expected_counterpart: Address, verifier: V, executor: E) -> Self {
        Self {
            expected_counterpart,
            verifier,
            executor,
            processed: HashSet::new(),
            events: Vec::new(),
        }
    }

    /// Executes a delivered proposal batch at most once.
    ///
    /// Order of checks: authentication, then replay protection, then
    /// execution. A rejected delivery leaves no state change and emits no
    /// record. Within an accepted batch every call runs regardless of sibling
    /// failures; the returned vector carries one status per call, in order.
    #[instrument(skip(self, envelope), fields(proposal_id = envelope.proposal_id, message_id = %envelope.message_id))]
    pub fn handle_proposal(
        &mut self,
        envelope: &RelayEnvelope,
    ) -> Result<Vec<CallStatus>, RelayError> {
        let reported = self.verifier.verify_originator();
        if reported != self.expected_counterpart {
            warn!(%reported, expected = %self.expected_counterpart, "rejected unauthenticated relay message");
            return Err(RelayError::UnauthorizedOriginator {
                reported,
                expected: self.expected_counterpart,
            });
        }

        if self.processed.contains(&envelope.proposal_id) {
            warn!("rejected redelivery of processed proposal");
            return Err(RelayError::AlreadyProcessed(envelope.proposal_id));
        }

        let call_statuses: Vec<CallStatus> = envelope
            .calls
            .iter()
            .map(|call| match self.executor.execute(call) {
                Ok(()) => CallStatus::Success,
                Err(failure) => {
                    warn!(target = %call.target, %failure, "call in batch failed");
                    CallStatus::Failure
                }
            })
            .collect();

        self.processed.insert(envelope.proposal_id);
        self.events.push(RelayEvent::ProposalExecuted {
            message_id: envelope.message_id,
            proposal_id: envelope.proposal_id,
            call_statuses: call_statuses.clone(),
        });

        info!(calls = call_statuses.len(), "proposal batch executed");

        Ok(call_statuses)
    }

    /// Returns true if the proposal's batch already executed here.
    #[must_use]
    pub fn is_processed(&self, proposal_id: ProposalId) -> bool {
        self.processed.contains(&proposal_id)
    }

    /// Records emitted so far.
    #[must_use]
    pub fn events(&self) -> &[RelayEvent] {
        &self.events
    }

    /// Drains and returns the emitted records.
    pub fn drain_events(&mut self) -> Vec<RelayEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockCallExecutor, MockOriginVerifier};
    use shared_types::Call;

    fn counterpart() -> Address {
        Address::new([0x52u8; 20])
    }

    fn receiver(
        reported: Address,
    ) -> RelayReceiver<MockOriginVerifier, MockCallExecutor> {
        RelayReceiver::new(
            counterpart(),
            MockOriginVerifier::new(reported),
            MockCallExecutor::new(),
        )
    }

    fn envelope(proposal_id: ProposalId, calls: Vec<Call>) -> RelayEnvelope {
        RelayEnvelope::new(counterpart(), proposal_id, calls, 3_000_000)
    }

    #[test]
    fn test_executes_batch_and_records_event() {
        let mut receiver = receiver(counterpart());
        let calls = vec![Call::new(Address::new([1u8; 20]), 0, vec![])];

        let statuses = receiver.handle_proposal(&envelope(1, calls)).unwrap();

        assert_eq!(statuses, vec![CallStatus::Success]);
        assert!(receiver.is_processed(1));
        assert_eq!(receiver.events().len(), 1);
    }

    #[test]
    fn test_rejects_unknown_originator_regardless_of_payload() {
        let mut receiver = receiver(Address::new([0xEEu8; 20]));

        let err = receiver.handle_proposal(&envelope(1, vec![])).unwrap_err();

        assert!(matches!(err, RelayError::UnauthorizedOriginator { .. }));
        assert!(!receiver.is_processed(1));
        assert!(receiver.events().is_empty());
        assert!(receiver.executor.executed().is_empty());
    }

    #[test]
    fn test_redelivery_rejected_without_side_effects() {
        let mut receiver = receiver(counterpart());
        let calls = vec![Call::new(Address::new([1u8; 20]), 0, vec![])];

        receiver.handle_proposal(&envelope(4, calls.clone())).unwrap();
        // Redelivery arrives under a fresh message id.
        let err = receiver.handle_proposal(&envelope(4, calls)).unwrap_err();

        assert_eq!(err, RelayError::AlreadyProcessed(4));
        assert_eq!(receiver.events().len(), 1);
        assert_eq!(receiver.executor.executed().len(), 1);
    }

    #[test]
    fn test_continue_on_failure_status_vector() {
        let mut receiver = receiver(counterpart());
        let bad = Address::new([0xBBu8; 20]);
        receiver.executor.fail_target(bad);

        let calls = vec![
            Call::new(Address::new([1u8; 20]), 0, vec![]),
            Call::new(bad, 0, vec![]),
            Call::new(Address::new([3u8; 20]), 0, vec![]),
        ];
        let statuses = receiver.handle_proposal(&envelope(2, calls)).unwrap();

        assert_eq!(
            statuses,
            vec![CallStatus::Success, CallStatus::Failure, CallStatus::Success]
        );
        // The third call ran despite the second failing.
        assert_eq!(receiver.executor.executed().len(), 2);
    }

    #[test]
    fn test_out_of_order_delivery_tolerated() {
        let mut receiver = receiver(counterpart());

        receiver.handle_proposal(&envelope(2, vec![])).unwrap();
        receiver.handle_proposal(&envelope(1, vec![])).unwrap();

        assert!(receiver.is_processed(1));
        assert!(receiver.is_processed(2));
        assert!(!receiver.is_processed(3));
    }
}
