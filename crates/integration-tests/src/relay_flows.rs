//! # Relay Flows
//!
//! End-to-end cross-domain flows: an approved batch leaves the engine
//! through the relay dispatcher, crosses a recorded transport, and executes
//! on a receiver bound to the sending contract.
