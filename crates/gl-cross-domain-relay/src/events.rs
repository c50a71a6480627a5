//! # Relay Event Records

use crate::domain::CallStatus;
use serde::{Deserialize, Serialize};
use shared_types::ProposalId;
use uuid::Uuid;

/// Records emitted by the receiver service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelayEvent {
    /// A delivered proposal batch was executed. Carries one status per call,
    /// in batch order; failed calls do not suppress their siblings.
    ProposalExecuted {
        /// Correlation id of the delivered envelope.
        message_id: Uuid,
        /// Proposal whose batch executed.
        proposal_id: ProposalId,
        /// Per-call outcome vector.
        call_statuses: Vec<CallStatus>,
    },
}
