//! # Primitive Value Types
//!
//! Accounts, domains, and the scalar aliases used across the workspace.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Seconds since an arbitrary epoch, as observed by the host transaction.
pub type Timestamp = u64;

/// Fungible balance amount.
pub type Amount = u64;

/// Discrete time-window identifier used to freeze voting weight.
/// Zero means "before the ledger's base timestamp".
pub type SnapshotId = u64;

/// Monotonic proposal counter, starting at 1. Never reused.
pub type ProposalId = u64;

// =============================================================================
// ADDRESS (20 bytes)
// =============================================================================

/// A 20-byte account identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The zero address. Used as the burn sink and never a valid call target.
    pub const ZERO: Self = Self([0u8; 20]);

    /// Creates an address from a 20-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Creates an address from a slice. Returns None if wrong length.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() == 20 {
            let mut bytes = [0u8; 20];
            bytes.copy_from_slice(slice);
            Some(Self(bytes))
        } else {
            None
        }
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns true if this is the zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{}...{}",
            hex::encode(&self.0[..4]),
            hex::encode(&self.0[18..])
        )
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for [u8; 20] {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

// =============================================================================
// DOMAIN
// =============================================================================

/// Ledger domain a deployment lives on.
///
/// Voting can occur on one domain while the approved call batch executes on
/// the other; the relay bridges the two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    /// The settlement domain (execution side of cross-domain proposals).
    Settlement,
    /// The governance domain (where proposals are created and voted on).
    Governance,
}

impl Domain {
    /// The counterpart domain on the other side of the relay.
    #[must_use]
    pub fn counterpart(&self) -> Self {
        match self {
            Domain::Settlement => Domain::Governance,
            Domain::Governance => Domain::Settlement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_zero() {
        assert!(Address::ZERO.is_zero());
        assert!(!Address::new([1u8; 20]).is_zero());
    }

    #[test]
    fn test_address_from_slice() {
        assert!(Address::from_slice(&[0u8; 20]).is_some());
        assert!(Address::from_slice(&[0u8; 19]).is_none());
        assert!(Address::from_slice(&[0u8; 21]).is_none());
    }

    #[test]
    fn test_address_debug_is_full_hex() {
        let addr = Address::new([0xABu8; 20]);
        let repr = format!("{addr:?}");
        assert!(repr.starts_with("0x"));
        assert_eq!(repr.len(), 2 + 40);
    }

    #[test]
    fn test_address_display_is_abbreviated() {
        let addr = Address::new([0xABu8; 20]);
        assert!(format!("{addr}").contains("..."));
    }

    #[test]
    fn test_address_roundtrip_conversions() {
        let bytes = [7u8; 20];
        let addr = Address::from(bytes);
        let back: [u8; 20] = addr.into();
        assert_eq!(back, bytes);
    }

    #[test]
    fn test_domain_counterpart() {
        assert_eq!(Domain::Settlement.counterpart(), Domain::Governance);
        assert_eq!(Domain::Governance.counterpart(), Domain::Settlement);
    }
}
