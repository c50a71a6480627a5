//! # Relay Errors

use shared_types::{Address, ProposalId};
use thiserror::Error;

/// Errors raised by the sender and receiver services.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RelayError {
    /// The sender was constructed without a counterpart contract address.
    #[error("Counterpart contract is the zero address")]
    CounterpartUnset,

    /// The reported original sender does not match the expected counterpart
    /// governance contract. Guards against direct invocation of the handler
    /// and against unrelated relay paths.
    #[error("Unauthorized originator: reported {reported}, expected {expected}")]
    UnauthorizedOriginator {
        /// Originator claimed by the relay binding.
        reported: Address,
        /// Counterpart contract the receiver trusts.
        expected: Address,
    },

    /// The proposal's batch was already executed on this receiver.
    /// Redelivery is rejected with no state change.
    #[error("Proposal already processed: {0}")]
    AlreadyProcessed(ProposalId),

    /// The delivery transport refused the message.
    #[error("Transport error: {0}")]
    Transport(String),
}
