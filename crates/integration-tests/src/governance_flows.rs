//! # Governance Flows
//!
//! Single-domain flows through the real engine and ledger: snapshot
//! accounting, the full proposal lifecycle against a local executor, and
//! supply conservation under mixed activity.
