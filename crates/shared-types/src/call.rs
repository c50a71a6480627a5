//! # Call
//!
//! A single entry of a proposal's call batch.

use crate::primitives::{Address, Amount};
use serde::{Deserialize, Serialize};

/// One call inside a proposal batch: a target account, a value to attach, and
/// an opaque payload interpreted by the target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    /// Account the call is addressed to. The zero address is never valid.
    pub target: Address,
    /// Value attached to the call.
    pub value: Amount,
    /// Opaque call payload.
    pub payload: Vec<u8>,
}

impl Call {
    /// Creates a new call.
    #[must_use]
    pub fn new(target: Address, value: Amount, payload: Vec<u8>) -> Self {
        Self {
            target,
            value,
            payload,
        }
    }

    /// Returns true if the call targets the zero address.
    #[must_use]
    pub fn targets_zero_address(&self) -> bool {
        self.target.is_zero()
    }
}
