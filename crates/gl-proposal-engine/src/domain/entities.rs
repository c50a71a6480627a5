//! # Domain Entities
//!
//! Proposals and recorded votes.

use crate::domain::value_objects::{ProposalStatus, VoteType};
use serde::{Deserialize, Serialize};
use shared_types::{Amount, Call, ProposalId, SnapshotId, Timestamp};

/// A governance proposal.
///
/// `snapshot_id` is captured at creation and fixes the voting weight of every
/// subsequent vote. Proposals are never deleted; processing sets a terminal
/// status exactly once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    /// Monotonic id, starting at 1. Never reused.
    pub id: ProposalId,
    /// Snapshot id current when the proposal was created.
    pub snapshot_id: SnapshotId,
    /// Non-empty call batch to execute on approval.
    pub calls: Vec<Call>,
    /// First timestamp votes are accepted at.
    pub voting_starts_at: Timestamp,
    /// First timestamp votes are no longer accepted at.
    pub voting_ends_at: Timestamp,
    /// Lifecycle status.
    pub status: ProposalStatus,
    /// Accumulated weight of yes votes.
    pub yes_weight: Amount,
    /// Accumulated weight of no votes.
    pub no_weight: Amount,
}

impl Proposal {
    /// Creates an open proposal.
    #[must_use]
    pub fn new(
        id: ProposalId,
        snapshot_id: SnapshotId,
        calls: Vec<Call>,
        voting_starts_at: Timestamp,
        voting_ends_at: Timestamp,
    ) -> Self {
        Self {
            id,
            snapshot_id,
            calls,
            voting_starts_at,
            voting_ends_at,
            status: ProposalStatus::Open,
            yes_weight: 0,
            no_weight: 0,
        }
    }

    /// True while `voting_starts_at <= now < voting_ends_at`.
    #[must_use]
    pub fn voting_open(&self, now: Timestamp) -> bool {
        self.voting_starts_at <= now && now < self.voting_ends_at
    }

    /// True before the voting window opens.
    #[must_use]
    pub fn voting_not_started(&self, now: Timestamp) -> bool {
        now < self.voting_starts_at
    }

    /// True once the voting window has closed.
    #[must_use]
    pub fn voting_finished(&self, now: Timestamp) -> bool {
        now >= self.voting_ends_at
    }

    /// Adds `weight` to the tally for `vote_type`. Weight is frozen at cast
    /// time and never revised.
    pub fn tally(&mut self, vote_type: VoteType, weight: Amount) {
        match vote_type {
            VoteType::Yes => self.yes_weight += weight,
            VoteType::No => self.no_weight += weight,
            VoteType::Unknown => debug_assert!(false, "unknown votes are rejected upstream"),
        }
    }

    /// True when yes-weight strictly exceeds no-weight.
    #[must_use]
    pub fn approved(&self) -> bool {
        self.yes_weight > self.no_weight
    }
}

/// A recorded vote. Created at most once per `(proposal, voter)` pair and
/// immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    /// The voter's choice.
    pub vote_type: VoteType,
    /// Balance at the proposal's snapshot id, frozen at cast time.
    pub weight: Amount,
}
