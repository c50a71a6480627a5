//! # Snapshot Ledger Aggregate
//!
//! Current balances plus per-account checkpoint histories, written through
//! the snapshot window so point-in-time queries stay consistent.

use crate::domain::checkpoint::CheckpointHistory;
use crate::domain::errors::LedgerError;
use crate::domain::window::SnapshotWindow;
use serde::{Deserialize, Serialize};
use shared_types::{Address, Amount, SnapshotId, Timestamp};
use std::collections::HashMap;
use tracing::debug;

/// Fungible balance ledger with sparse snapshot checkpoints.
///
/// Construction mints the entire supply to the deployer and records the
/// genesis checkpoint under the current snapshot id, so the genesis balance
/// is visible to `balance_at` from snapshot 1 onward.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapshotLedger {
    window: SnapshotWindow,
    total_supply: Amount,
    balances: HashMap<Address, Amount>,
    histories: HashMap<Address, CheckpointHistory>,
}

impl SnapshotLedger {
    /// Creates a ledger, minting `total_supply` to `deployer` at `now`.
    pub fn new(
        deployer: Address,
        total_supply: Amount,
        window_length: u64,
        now: Timestamp,
    ) -> Result<Self, LedgerError> {
        if window_length == 0 {
            return Err(LedgerError::InvalidSnapshotWindowLength);
        }
        if total_supply == 0 {
            return Err(LedgerError::InvalidTotalSupply);
        }

        let window = SnapshotWindow::new(now, window_length);
        let mut ledger = Self {
            window,
            total_supply,
            balances: HashMap::new(),
            histories: HashMap::new(),
        };
        ledger.write_balance(deployer, total_supply, window.snapshot_id_at(now));

        debug!(%deployer, total_supply, window_length, "ledger initialized");

        Ok(ledger)
    }

    /// Moves `amount` from `from` to `to`, checkpointing both accounts under
    /// the snapshot id current at `now`.
    pub fn transfer(
        &mut self,
        from: Address,
        to: Address,
        amount: Amount,
        now: Timestamp,
    ) -> Result<(), LedgerError> {
        let snapshot_id = self.window.snapshot_id_at(now);
        let from_balance = self.balance_of(&from);
        if from_balance < amount {
            return Err(LedgerError::InsufficientBalance {
                account: from,
                balance: from_balance,
                amount,
            });
        }

        self.write_balance(from, from_balance - amount, snapshot_id);
        // Re-read in case from == to.
        let to_balance = self.balance_of(&to);
        self.write_balance(to, to_balance + amount, snapshot_id);

        debug!(%from, %to, amount, snapshot_id, "transfer");

        Ok(())
    }

    /// Destroys `amount` held by `account`, reducing total supply with it so
    /// supply conservation holds.
    pub fn burn(
        &mut self,
        account: Address,
        amount: Amount,
        now: Timestamp,
    ) -> Result<(), LedgerError> {
        let snapshot_id = self.window.snapshot_id_at(now);
        let balance = self.balance_of(&account);
        if balance < amount {
            return Err(LedgerError::InsufficientBalance {
                account,
                balance,
                amount,
            });
        }

        self.write_balance(account, balance - amount, snapshot_id);
        self.total_supply -= amount;

        debug!(%account, amount, snapshot_id, "burn");

        Ok(())
    }

    /// Current balance of `account`.
    #[must_use]
    pub fn balance_of(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or(0)
    }

    /// Balance of `account` at `snapshot_id`; 0 for ids before the account's
    /// first recorded checkpoint.
    #[must_use]
    pub fn balance_at(&self, account: &Address, snapshot_id: SnapshotId) -> Amount {
        self.histories
            .get(account)
            .map_or(0, |history| history.balance_at(snapshot_id))
    }

    /// Snapshot id current at `timestamp`.
    #[must_use]
    pub fn snapshot_id_at(&self, timestamp: Timestamp) -> SnapshotId {
        self.window.snapshot_id_at(timestamp)
    }

    /// Total supply outstanding.
    #[must_use]
    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Window configuration fixed at initialization.
    #[must_use]
    pub fn window(&self) -> &SnapshotWindow {
        &self.window
    }

    /// Iterates current nonzero balances.
    pub fn balances(&self) -> impl Iterator<Item = (&Address, &Amount)> {
        self.balances.iter()
    }

    fn write_balance(&mut self, account: Address, balance: Amount, snapshot_id: SnapshotId) {
        self.balances.insert(account, balance);
        self.histories
            .entry(account)
            .or_default()
            .record(snapshot_id, balance);
    }
}
