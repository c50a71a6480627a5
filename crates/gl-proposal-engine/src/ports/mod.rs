//! Ports: capability check and dispatch traits, with implementations for
//! tests and wiring.

pub mod outbound;

pub use outbound::{
    AccessGuard, DispatchOutcome, MockDispatcher, ProposalDispatcher, StaticAccessGuard,
};
