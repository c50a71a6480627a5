//! # Ledger Errors

use shared_types::{Address, Amount};
use thiserror::Error;

/// Errors raised by ledger construction and mutation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// Snapshot window length must be nonzero.
    #[error("Invalid snapshot window length")]
    InvalidSnapshotWindowLength,

    /// Total supply must be nonzero.
    #[error("Invalid total supply")]
    InvalidTotalSupply,

    /// Account balance is too small for the requested debit.
    #[error("Insufficient balance: account {account} holds {balance}, needs {amount}")]
    InsufficientBalance {
        /// Debited account.
        account: Address,
        /// Current balance.
        balance: Amount,
        /// Requested amount.
        amount: Amount,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_balance_message() {
        let err = LedgerError::InsufficientBalance {
            account: Address::new([1u8; 20]),
            balance: 5,
            amount: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("holds 5"));
        assert!(msg.contains("needs 10"));
    }
}
