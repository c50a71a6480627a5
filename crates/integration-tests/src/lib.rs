//! # Integration Tests Crate
//!
//! Cross-crate tests wiring the real governance engine, snapshot ledger, and
//! cross-domain relay together, the way a deployment would.
//!
//! ## Structure
//!
//! ```text
//! integration-tests/
//! ├── src/
//! │   ├── lib.rs              # This file + shared fixtures
//! │   ├── governance_flows.rs # Ledger + engine flows on one domain
//! │   └── relay_flows.rs      # Sender-to-receiver flows across domains
//! ```
//!
//! ## Flows Covered
//!
//! 1. **Snapshot accounting**: transfers land in the right snapshot window
//!    and historical balances stay frozen.
//! 2. **Proposal lifecycle**: create → vote → process to every terminal
//!    status, with dispatch wired to a real local executor.
//! 3. **Cross-domain relay**: an approved batch leaves through the relay
//!    dispatcher, crosses a recorded transport, and executes exactly once on
//!    the receiving side, surviving redelivery, forged origins, and
//!    out-of-order arrival.

pub mod governance_flows;
pub mod relay_flows;

use gl_proposal_engine::{GovernanceEngine, ProposalDispatcher, StaticAccessGuard};
use rand::RngCore;
use shared_types::{Address, Amount, Timestamp};

/// Snapshot window length shared by all fixtures.
pub const WINDOW: u64 = 20;
/// Voting period shared by all fixtures.
pub const VOTING_PERIOD: u64 = 50;
/// Total supply minted at initialization.
pub const SUPPLY: Amount = 1_000_000;
/// Initialization timestamp shared by all fixtures.
pub const T0: Timestamp = 1_000;

/// Deployer and owner of the fixture engine.
#[must_use]
pub fn owner() -> Address {
    Address::new([0xAAu8; 20])
}

/// The one controller allowed to create proposals.
#[must_use]
pub fn controller() -> Address {
    Address::new([0xBBu8; 20])
}

/// A plain token-holding account.
#[must_use]
pub fn holder() -> Address {
    Address::new([0xCCu8; 20])
}

/// A fresh random account address.
#[must_use]
pub fn random_address() -> Address {
    let mut bytes = [0u8; 20];
    rand::thread_rng().fill_bytes(&mut bytes);
    Address::new(bytes)
}

/// Installs a log subscriber honoring `RUST_LOG`. Safe to call from every
/// test; only the first call in the process wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// An initialized engine over the given dispatcher, minted and guarded with
/// the fixture constants.
pub fn initialized_engine<D: ProposalDispatcher>(
    dispatcher: D,
) -> GovernanceEngine<StaticAccessGuard, D> {
    let guard = StaticAccessGuard::new(owner(), [controller()]);
    let mut engine = GovernanceEngine::new(guard, dispatcher);
    engine
        .initialize(owner(), vec![controller()], WINDOW, VOTING_PERIOD, SUPPLY, T0)
        .unwrap();
    engine
}
