//! # Cross-Domain Relay
//!
//! Authenticated, at-most-once delivery of approved call batches between
//! ledger domains.
//!
//! ## Purpose
//!
//! A proposal approved on the governance domain may need to execute on the
//! settlement domain. The sender side hands an envelope to a delivery
//! transport; the receiver side authenticates the reported originator,
//! rejects redelivery through a processed-set, and executes each call in the
//! batch independently, collecting per-call outcomes.
//!
//! The delivery transport itself (ordering, retries, fees) is out of scope:
//! delivery is assumed at-least-once and unordered, and the receiver is built
//! to tolerate exactly that.
//!
//! ## Module Structure
//!
//! ```text
//! gl-cross-domain-relay/
//! ├── domain/       # RelayEnvelope, CallStatus, errors
//! ├── ports/        # MessageTransport, OriginVerifier, CallExecutor + mocks
//! ├── sender.rs     # RelaySender service
//! ├── receiver.rs   # RelayReceiver service
//! └── events.rs     # emitted records
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod events;
pub mod ports;
pub mod receiver;
pub mod sender;

pub use domain::{CallFailure, CallStatus, RelayEnvelope, RelayError};
pub use events::RelayEvent;
pub use ports::{
    CallExecutor, MessageTransport, MockCallExecutor, MockOriginVerifier, MockTransport,
    OriginVerifier,
};
pub use receiver::RelayReceiver;
pub use sender::RelaySender;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
