//! # Outbound Ports
//!
//! Traits for external dependencies: the delivery transport, the relay
//! binding's originator claim, and the call executor.

use crate::domain::{CallFailure, RelayEnvelope, RelayError};
use async_trait::async_trait;
use shared_types::{Address, Call};
use std::sync::Arc;

/// Message delivery transport - outbound port.
///
/// Delivery is at-least-once and unordered relative to other messages from
/// the same sender. The sender does not wait for, and cannot observe, the
/// remote outcome; no expiry or cancellation is defined for an in-flight
/// message.
#[async_trait]
pub trait MessageTransport: Send + Sync {
    /// Hands `envelope` to the delivery mechanism, addressed to the
    /// counterpart contract on the other domain.
    async fn deliver(
        &self,
        destination: Address,
        envelope: RelayEnvelope,
    ) -> Result<(), RelayError>;
}

#[async_trait]
impl<T: MessageTransport + ?Sized> MessageTransport for Arc<T> {
    async fn deliver(
        &self,
        destination: Address,
        envelope: RelayEnvelope,
    ) -> Result<(), RelayError> {
        (**self).deliver(destination, envelope).await
    }
}

/// Originator authentication - outbound port.
///
/// The receiver must trust an opaque relay's claim about who really sent the
/// inbound message. This narrow port surfaces that claim; the receiver only
/// ever compares it against its configured counterpart, so the relay binding
/// stays swappable.
pub trait OriginVerifier: Send + Sync {
    /// The original sender reported by the relay binding for the message
    /// currently being handled.
    fn verify_originator(&self) -> Address;
}

impl<T: OriginVerifier + ?Sized> OriginVerifier for Arc<T> {
    fn verify_originator(&self) -> Address {
        (**self).verify_originator()
    }
}

/// Single-call executor - outbound port.
///
/// Applies one call's effect on the local domain. The receiver evaluates each
/// call independently; the local dispatcher on the sending domain uses the
/// same port with the enclosing transaction as its rollback boundary.
pub trait CallExecutor: Send + Sync {
    /// Executes `call`, returning the failure reason if it did not take
    /// effect.
    fn execute(&self, call: &Call) -> Result<(), CallFailure>;
}

impl<T: CallExecutor + ?Sized> CallExecutor for Arc<T> {
    fn execute(&self, call: &Call) -> Result<(), CallFailure> {
        (**self).execute(call)
    }
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Mock transport that records every delivery.
#[derive(Default)]
pub struct MockTransport {
    pub deliveries: parking_lot::Mutex<Vec<(Address, RelayEnvelope)>>,
    /// Should fail?
    pub should_fail: bool,
}

impl MockTransport {
    /// Creates a transport that accepts everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Envelopes delivered so far, in hand-off order.
    #[must_use]
    pub fn deliveries(&self) -> Vec<(Address, RelayEnvelope)> {
        self.deliveries.lock().clone()
    }
}

#[async_trait]
impl MessageTransport for MockTransport {
    async fn deliver(
        &self,
        destination: Address,
        envelope: RelayEnvelope,
    ) -> Result<(), RelayError> {
        if self.should_fail {
            return Err(RelayError::Transport("mock transport failure".to_string()));
        }
        self.deliveries.lock().push((destination, envelope));
        Ok(())
    }
}

/// Mock verifier reporting a fixed originator.
#[derive(Clone, Debug)]
pub struct MockOriginVerifier {
    /// Originator the binding claims for every message.
    pub reported: Address,
}

impl MockOriginVerifier {
    /// Creates a verifier that always reports `reported`.
    #[must_use]
    pub fn new(reported: Address) -> Self {
        Self { reported }
    }
}

impl OriginVerifier for MockOriginVerifier {
    fn verify_originator(&self) -> Address {
        self.reported
    }
}

/// Mock executor with programmable per-target failures.
#[derive(Default)]
pub struct MockCallExecutor {
    executed: parking_lot::Mutex<Vec<Call>>,
    failing_targets: parking_lot::Mutex<Vec<Address>>,
}

impl MockCallExecutor {
    /// Creates an executor where every call succeeds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every call addressed to `target` fail.
    pub fn fail_target(&self, target: Address) {
        self.failing_targets.lock().push(target);
    }

    /// Calls that actually took effect, in execution order.
    #[must_use]
    pub fn executed(&self) -> Vec<Call> {
        self.executed.lock().clone()
    }
}

impl CallExecutor for MockCallExecutor {
    fn execute(&self, call: &Call) -> Result<(), CallFailure> {
        if self.failing_targets.lock().contains(&call.target) {
            return Err(CallFailure::new(format!(
                "target {} rejected the call",
                call.target
            )));
        }
        self.executed.lock().push(call.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_transport_records_deliveries() {
        let transport = MockTransport::new();
        let destination = Address::new([9u8; 20]);
        let envelope = RelayEnvelope::new(Address::new([1u8; 20]), 1, vec![], 100);

        transport.deliver(destination, envelope.clone()).await.unwrap();

        let deliveries = transport.deliveries();
        assert_eq!(deliveries.len(), 1);
        assert_eq!(deliveries[0].0, destination);
        assert_eq!(deliveries[0].1, envelope);
    }

    #[tokio::test]
    async fn test_mock_transport_failure() {
        let transport = MockTransport {
            should_fail: true,
            ..Default::default()
        };
        let envelope = RelayEnvelope::new(Address::new([1u8; 20]), 1, vec![], 100);
        assert!(transport
            .deliver(Address::new([9u8; 20]), envelope)
            .await
            .is_err());
    }

    #[test]
    fn test_mock_executor_programmable_failure() {
        let executor = MockCallExecutor::new();
        let bad = Address::new([0xBBu8; 20]);
        executor.fail_target(bad);

        assert!(executor.execute(&Call::new(bad, 0, vec![])).is_err());
        assert!(executor
            .execute(&Call::new(Address::new([1u8; 20]), 0, vec![]))
            .is_ok());
        assert_eq!(executor.executed().len(), 1);
    }
}
