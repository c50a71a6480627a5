//! Domain layer: proposal and vote state, lifecycle rules, errors.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::{Proposal, Vote};
pub use errors::{ErrorCategory, GovernanceError};
pub use value_objects::{ProposalStatus, VoteType};
