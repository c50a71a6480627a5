//! # Proposal Engine
//!
//! Proposal creation, voting, and processing over a snapshot ledger.
//!
//! ## Purpose
//!
//! A controller bundles a batch of calls into a proposal. The proposal
//! freezes the snapshot id current at creation; every vote is weighed by the
//! voter's balance at that snapshot, so transfers after creation cannot move
//! voting power. Once the window closes, anyone triggers processing, which
//! transitions the proposal exactly once into a terminal status:
//!
//! - `Rejected` — yes-weight did not exceed no-weight; nothing dispatched.
//! - `Completed` / `Reverted` — same-domain batch executed atomically,
//!   all calls succeeded / some call failed.
//! - `Processed` — batch handed to the cross-domain relay; the remote
//!   outcome is reported asynchronously on the other domain and is not part
//!   of this engine's vocabulary.
//!
//! ## Module Structure
//!
//! ```text
//! gl-proposal-engine/
//! ├── domain/       # Proposal, Vote, VoteType, ProposalStatus, errors
//! ├── ports/        # AccessGuard, ProposalDispatcher + mocks
//! ├── adapters/     # LocalDispatcher, RelayDispatcher
//! ├── engine.rs     # GovernanceEngine service
//! └── events.rs     # emitted records
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod engine;
pub mod events;
pub mod ports;

pub use adapters::{LocalDispatcher, RelayDispatcher};
pub use domain::{
    ErrorCategory, GovernanceError, Proposal, ProposalStatus, Vote, VoteType,
};
pub use engine::GovernanceEngine;
pub use events::GovernanceEvent;
pub use ports::{AccessGuard, DispatchOutcome, MockDispatcher, ProposalDispatcher, StaticAccessGuard};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
