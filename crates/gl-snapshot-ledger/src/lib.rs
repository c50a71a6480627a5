//! # Snapshot Ledger
//!
//! Per-account balance bookkeeping with point-in-time queries.
//!
//! ## Purpose
//!
//! Balances double as voting weight: a proposal freezes the snapshot id that
//! was current at creation, and every vote on it is weighed by the voter's
//! balance *at that snapshot*, regardless of later transfers.
//!
//! Snapshots are derived from time windows, not taken explicitly. Each
//! mutation records a `(snapshot_id, balance)` checkpoint for the touched
//! account; the last mutation inside a window wins, so queries observe the
//! balance at the *end* of each window.
//!
//! ## Module Structure
//!
//! ```text
//! gl-snapshot-ledger/
//! └── domain/
//!     ├── window.rs      # time -> snapshot id arithmetic
//!     ├── checkpoint.rs  # sparse per-account checkpoint history
//!     ├── ledger.rs      # SnapshotLedger aggregate
//!     ├── invariants.rs  # supply conservation
//!     └── errors.rs
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;

pub use domain::{
    invariant_supply_conserved, Checkpoint, CheckpointHistory, LedgerError, SnapshotLedger,
    SnapshotWindow,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
