//! # Checkpoints
//!
//! Sparse per-account balance history, one entry per touched snapshot id.

use serde::{Deserialize, Serialize};
use shared_types::{Amount, SnapshotId};

/// A recorded `(snapshot_id, balance)` pair for one account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Snapshot id the balance was recorded under.
    pub snapshot_id: SnapshotId,
    /// Account balance after the last mutation inside that window.
    pub balance: Amount,
}

/// Append-only, snapshot-id-ordered checkpoint list.
///
/// The write path keeps at most one entry per snapshot id: a second mutation
/// inside the same window overwrites that window's entry, so only the balance
/// at the end of the window is observable afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointHistory {
    entries: Vec<Checkpoint>,
}

impl CheckpointHistory {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `balance` under `snapshot_id`.
    ///
    /// Snapshot ids only move forward, so the id is either the last entry's
    /// (overwrite) or greater (append).
    pub fn record(&mut self, snapshot_id: SnapshotId, balance: Amount) {
        match self.entries.last_mut() {
            Some(last) if last.snapshot_id == snapshot_id => last.balance = balance,
            Some(last) => {
                debug_assert!(last.snapshot_id < snapshot_id);
                self.entries.push(Checkpoint {
                    snapshot_id,
                    balance,
                });
            }
            None => self.entries.push(Checkpoint {
                snapshot_id,
                balance,
            }),
        }
    }

    /// Balance at `snapshot_id`: the latest entry with an id `<= snapshot_id`,
    /// or 0 when no such entry exists (including any id before the account's
    /// first recorded mutation).
    #[must_use]
    pub fn balance_at(&self, snapshot_id: SnapshotId) -> Amount {
        let idx = self
            .entries
            .partition_point(|entry| entry.snapshot_id <= snapshot_id);
        if idx == 0 {
            0
        } else {
            self.entries[idx - 1].balance
        }
    }

    /// Number of recorded checkpoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no checkpoint has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
