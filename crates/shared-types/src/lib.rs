//! # Shared Types Crate
//!
//! Domain primitives shared by every GovLedger subsystem crate.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: cross-crate types (accounts, calls, domains,
//!   ids) are defined here and nowhere else.
//! - **Plain values**: everything in this crate is a value type with no
//!   behavior beyond construction, formatting, and validation helpers.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod call;
pub mod primitives;

pub use call::Call;
pub use primitives::{Address, Amount, Domain, ProposalId, SnapshotId, Timestamp};
