//! Ports: traits the relay services depend on, with mock implementations
//! for tests and local wiring.

pub mod outbound;

pub use outbound::{
    CallExecutor, MessageTransport, MockCallExecutor, MockOriginVerifier, MockTransport,
    OriginVerifier,
};
