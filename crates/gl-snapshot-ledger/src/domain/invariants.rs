//! # Ledger Invariants

use crate::domain::ledger::SnapshotLedger;

/// Invariant: the sum of all current balances equals the outstanding total
/// supply. Holds after every transfer and burn.
#[must_use]
pub fn invariant_supply_conserved(ledger: &SnapshotLedger) -> bool {
    let sum: u128 = ledger.balances().map(|(_, amount)| u128::from(*amount)).sum();
    sum == u128::from(ledger.total_supply())
}
