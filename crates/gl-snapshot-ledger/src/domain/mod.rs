//! Domain layer: pure ledger state and arithmetic. No I/O, no async.

pub mod checkpoint;
pub mod errors;
pub mod invariants;
pub mod ledger;
pub mod window;

pub use checkpoint::{Checkpoint, CheckpointHistory};
pub use errors::LedgerError;
pub use invariants::invariant_supply_conserved;
pub use ledger::SnapshotLedger;
pub use window::SnapshotWindow;
