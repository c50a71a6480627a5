//! # Outbound Ports
//!
//! Capability checks and call-batch dispatch, as seen from the engine.

use crate::domain::GovernanceError;
use async_trait::async_trait;
use shared_types::{Address, Call, ProposalId};
use std::collections::HashSet;

/// Access capability check - outbound port.
///
/// Administration of the underlying owner/controller sets (owner transfer,
/// controller add/remove, one-shot guard initialization) belongs to an
/// external collaborator; the engine only ever asks these two questions.
pub trait AccessGuard: Send + Sync {
    /// True if `account` may create proposals.
    fn is_controller(&self, account: &Address) -> bool;

    /// True if `account` is the single owner.
    fn is_owner(&self, account: &Address) -> bool;
}

/// What happened to a dispatched batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Same-domain execution with a known local outcome. `success` means
    /// every call in the batch succeeded; otherwise the enclosing
    /// transaction is the rollback boundary for the whole batch.
    Executed {
        /// Whether the whole batch succeeded.
        success: bool,
    },
    /// Handed to the cross-domain relay. The remote outcome is unknown here
    /// and never collapses into `Executed`.
    Relayed {
        /// Budget actually attached to the relayed message.
        execution_budget: u64,
    },
}

/// Call-batch dispatch - outbound port.
///
/// The engine decides *whether* an approved batch runs; the dispatcher
/// decides *where*. Deployment shape is a wiring choice, not engine logic.
#[async_trait]
pub trait ProposalDispatcher: Send + Sync {
    /// Dispatches the approved batch of `proposal_id`.
    ///
    /// `execution_budget` is a caller-supplied bound for remote execution;
    /// same-domain dispatchers may ignore it.
    async fn dispatch(
        &self,
        proposal_id: ProposalId,
        calls: &[Call],
        execution_budget: Option<u64>,
    ) -> Result<DispatchOutcome, GovernanceError>;
}

// =============================================================================
// Implementations for Tests and Wiring
// =============================================================================

/// In-memory capability set, fixed at construction.
///
/// Stands in for the external access-control collaborator in tests and
/// single-process deployments.
#[derive(Clone, Debug)]
pub struct StaticAccessGuard {
    owner: Address,
    controllers: HashSet<Address>,
}

impl StaticAccessGuard {
    /// Creates a guard with one owner and a controller allow-list.
    #[must_use]
    pub fn new(owner: Address, controllers: impl IntoIterator<Item = Address>) -> Self {
        Self {
            owner,
            controllers: controllers.into_iter().collect(),
        }
    }
}

impl AccessGuard for StaticAccessGuard {
    fn is_controller(&self, account: &Address) -> bool {
        self.controllers.contains(account)
    }

    fn is_owner(&self, account: &Address) -> bool {
        self.owner == *account
    }
}

/// Mock dispatcher returning a programmed outcome and recording dispatches.
pub struct MockDispatcher {
    /// Outcome returned for every dispatch.
    pub outcome: DispatchOutcome,
    /// Should fail?
    pub should_fail: bool,
    dispatched: parking_lot::Mutex<Vec<(ProposalId, Vec<Call>, Option<u64>)>>,
}

impl MockDispatcher {
    /// Creates a dispatcher that reports the given outcome.
    #[must_use]
    pub fn new(outcome: DispatchOutcome) -> Self {
        Self {
            outcome,
            should_fail: false,
            dispatched: parking_lot::Mutex::new(Vec::new()),
        }
    }

    /// Batches dispatched so far.
    #[must_use]
    pub fn dispatched(&self) -> Vec<(ProposalId, Vec<Call>, Option<u64>)> {
        self.dispatched.lock().clone()
    }
}

#[async_trait]
impl ProposalDispatcher for MockDispatcher {
    async fn dispatch(
        &self,
        proposal_id: ProposalId,
        calls: &[Call],
        execution_budget: Option<u64>,
    ) -> Result<DispatchOutcome, GovernanceError> {
        if self.should_fail {
            return Err(GovernanceError::Dispatch("mock dispatch failure".to_string()));
        }
        self.dispatched
            .lock()
            .push((proposal_id, calls.to_vec(), execution_budget));
        Ok(self.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_guard_capabilities() {
        let owner = Address::new([1u8; 20]);
        let controller = Address::new([2u8; 20]);
        let guard = StaticAccessGuard::new(owner, [controller]);

        assert!(guard.is_owner(&owner));
        assert!(!guard.is_owner(&controller));
        assert!(guard.is_controller(&controller));
        assert!(!guard.is_controller(&owner));
    }

    #[tokio::test]
    async fn test_mock_dispatcher_records() {
        let dispatcher = MockDispatcher::new(DispatchOutcome::Executed { success: true });
        let calls = vec![Call::new(Address::new([3u8; 20]), 0, vec![])];

        let outcome = dispatcher.dispatch(5, &calls, None).await.unwrap();

        assert_eq!(outcome, DispatchOutcome::Executed { success: true });
        assert_eq!(dispatcher.dispatched().len(), 1);
        assert_eq!(dispatcher.dispatched()[0].0, 5);
    }

    #[tokio::test]
    async fn test_mock_dispatcher_failure() {
        let mut dispatcher = MockDispatcher::new(DispatchOutcome::Executed { success: true });
        dispatcher.should_fail = true;
        assert!(dispatcher.dispatch(1, &[], None).await.is_err());
    }
}
