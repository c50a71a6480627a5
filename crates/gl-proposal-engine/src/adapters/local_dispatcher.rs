//! # Local Dispatcher
//!
//! Same-domain batch execution with all-or-nothing semantics.

use crate::domain::GovernanceError;
use crate::ports::{DispatchOutcome, ProposalDispatcher};
use async_trait::async_trait;
use gl_cross_domain_relay::CallExecutor;
use shared_types::{Call, ProposalId};
use tracing::warn;

/// Executes an approved batch directly on the local domain.
///
/// The batch runs inside the caller's transaction: the first failing call
/// marks the whole batch failed and no further calls run, leaving the
/// enclosing transaction to discard any partial effects. This is the
/// opposite of the relay receiver's continue-on-failure semantics.
pub struct LocalDispatcher<E: CallExecutor> {
    executor: E,
}

impl<E: CallExecutor> LocalDispatcher<E> {
    /// Creates a dispatcher over the given executor.
    pub fn new(executor: E) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl<E: CallExecutor> ProposalDispatcher for LocalDispatcher<E> {
    async fn dispatch(
        &self,
        proposal_id: ProposalId,
        calls: &[Call],
        _execution_budget: Option<u64>,
    ) -> Result<DispatchOutcome, GovernanceError> {
        for call in calls {
            if let Err(failure) = self.executor.execute(call) {
                warn!(proposal_id, target = %call.target, %failure, "local batch failed");
                return Ok(DispatchOutcome::Executed { success: false });
            }
        }
        Ok(DispatchOutcome::Executed { success: true })
    }
}
