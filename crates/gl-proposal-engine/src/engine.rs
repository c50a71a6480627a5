//! # Governance Engine Service
//!
//! Orchestrates the snapshot ledger, the proposal lifecycle, and batch
//! dispatch behind one initialize-once surface.
//!
//! ## Purpose
//!
//! The engine owns all mutable governance state. Callers identify
//! themselves by address; capability questions go to the [`AccessGuard`]
//! port and approved batches leave through the [`ProposalDispatcher`] port,
//! so the same engine runs unchanged whether the batch executes locally or
//! crosses domains.

use crate::domain::{GovernanceError, Proposal, ProposalStatus, Vote, VoteType};
use crate::events::GovernanceEvent;
use crate::ports::{AccessGuard, DispatchOutcome, ProposalDispatcher};
use gl_snapshot_ledger::SnapshotLedger;
use shared_types::{Address, Amount, Call, ProposalId, SnapshotId, Timestamp};
use std::collections::{BTreeMap, HashMap};
use tracing::{info, instrument};

/// State created by `initialize` and owned by the engine afterwards.
struct EngineState {
    ledger: SnapshotLedger,
    voting_period: u64,
    proposals: BTreeMap<ProposalId, Proposal>,
    votes: HashMap<(ProposalId, Address), Vote>,
    next_proposal_id: ProposalId,
}

/// The governance engine service.
///
/// Generic over the capability guard and the dispatcher so tests and
/// deployments pick their own wiring.
pub struct GovernanceEngine<G: AccessGuard, D: ProposalDispatcher> {
    guard: G,
    dispatcher: D,
    state: Option<EngineState>,
    events: Vec<GovernanceEvent>,
}

impl<G: AccessGuard, D: ProposalDispatcher> GovernanceEngine<G, D> {
    /// Creates an uninitialized engine. Every operation except
    /// `initialize` fails until `initialize` succeeds once.
    #[must_use]
    pub fn new(guard: G, dispatcher: D) -> Self {
        Self {
            guard,
            dispatcher,
            state: None,
            events: Vec::new(),
        }
    }

    /// Initializes the engine: validates parameters, mints `total_supply`
    /// to `deployer`, and fixes the snapshot window at `now`.
    ///
    /// Succeeds at most once for the lifetime of the engine.
    pub fn initialize(
        &mut self,
        deployer: Address,
        controllers: Vec<Address>,
        snapshot_window_length: u64,
        voting_period: u64,
        total_supply: Amount,
        now: Timestamp,
    ) -> Result<(), GovernanceError> {
        if self.state.is_some() {
            return Err(GovernanceError::AlreadyInitialized);
        }
        if snapshot_window_length == 0 {
            return Err(GovernanceError::InvalidSnapshotWindowLength);
        }
        if voting_period == 0 {
            return Err(GovernanceError::InvalidVotingPeriod);
        }
        if total_supply == 0 {
            return Err(GovernanceError::InvalidTotalSupply);
        }

        let ledger = SnapshotLedger::new(deployer, total_supply, snapshot_window_length, now)?;
        self.state = Some(EngineState {
            ledger,
            voting_period,
            proposals: BTreeMap::new(),
            votes: HashMap::new(),
            next_proposal_id: 1,
        });

        info!(%deployer, total_supply, snapshot_window_length, voting_period, "engine initialized");
        self.events
            .push(GovernanceEvent::Initialized { controllers });

        Ok(())
    }

    /// Moves `amount` from `from` to `to`.
    pub fn transfer(
        &mut self,
        from: Address,
        to: Address,
        amount: Amount,
        now: Timestamp,
    ) -> Result<(), GovernanceError> {
        let state = self.state_mut()?;
        state.ledger.transfer(from, to, amount, now)?;
        self.events.push(GovernanceEvent::Transfer { from, to, amount });
        Ok(())
    }

    /// Destroys `amount` held by the owner. Owner-only.
    pub fn burn(
        &mut self,
        caller: Address,
        amount: Amount,
        now: Timestamp,
    ) -> Result<(), GovernanceError> {
        if !self.guard.is_owner(&caller) {
            return Err(GovernanceError::CallerNotOwner(caller));
        }
        let state = self.state_mut()?;
        state.ledger.burn(caller, amount, now)?;
        self.events.push(GovernanceEvent::Transfer {
            from: caller,
            to: Address::ZERO,
            amount,
        });
        Ok(())
    }

    /// Creates a proposal from a call batch. Controller-only.
    ///
    /// The snapshot id current at `now` is frozen into the proposal; voting
    /// opens at `now + voting_starts_in` and closes one voting period later.
    /// Returns the assigned id, starting at 1 and strictly increasing.
    pub fn create_proposal(
        &mut self,
        caller: Address,
        calls: Vec<Call>,
        voting_starts_in: u64,
        now: Timestamp,
    ) -> Result<ProposalId, GovernanceError> {
        if !self.guard.is_controller(&caller) {
            return Err(GovernanceError::CallerNotController(caller));
        }
        let state = self.state_mut()?;
        if calls.is_empty() {
            return Err(GovernanceError::EmptyCallBatch);
        }
        if calls.iter().any(Call::targets_zero_address) {
            return Err(GovernanceError::CallTargetIsZeroAddress);
        }

        let proposal_id = state.next_proposal_id;
        state.next_proposal_id += 1;

        let snapshot_id = state.ledger.snapshot_id_at(now);
        let voting_starts_at = now + voting_starts_in;
        let voting_ends_at = voting_starts_at + state.voting_period;
        let proposal = Proposal::new(
            proposal_id,
            snapshot_id,
            calls.clone(),
            voting_starts_at,
            voting_ends_at,
        );
        state.proposals.insert(proposal_id, proposal);

        info!(proposal_id, snapshot_id, voting_starts_at, voting_ends_at, "proposal created");
        self.events.push(GovernanceEvent::ProposalCreated {
            proposal_id,
            snapshot_id,
            calls,
            voting_starts_at,
            voting_ends_at,
        });

        Ok(proposal_id)
    }

    /// Casts `caller`'s vote on `proposal_id`.
    ///
    /// Weight is the caller's balance at the proposal's frozen snapshot id;
    /// a zero balance carries no weight and the vote is rejected. Each
    /// account votes at most once per proposal.
    pub fn submit_vote(
        &mut self,
        caller: Address,
        proposal_id: ProposalId,
        vote_type: VoteType,
        now: Timestamp,
    ) -> Result<(), GovernanceError> {
        let state = self.state_mut()?;
        let proposal = state
            .proposals
            .get_mut(&proposal_id)
            .ok_or(GovernanceError::ProposalNotFound(proposal_id))?;

        if !vote_type.is_valid() {
            return Err(GovernanceError::InvalidVoteType);
        }
        if proposal.voting_not_started(now) {
            return Err(GovernanceError::VotingNotStarted);
        }
        if proposal.voting_finished(now) {
            return Err(GovernanceError::VotingAlreadyFinished);
        }
        if state.votes.contains_key(&(proposal_id, caller)) {
            return Err(GovernanceError::AlreadyVoted {
                voter: caller,
                proposal_id,
            });
        }

        let weight = state.ledger.balance_at(&caller, proposal.snapshot_id);
        if weight == 0 {
            return Err(GovernanceError::InsufficientBalance {
                voter: caller,
                snapshot_id: proposal.snapshot_id,
            });
        }

        proposal.tally(vote_type, weight);
        state.votes.insert((proposal_id, caller), Vote { vote_type, weight });

        self.events.push(GovernanceEvent::VoteSubmitted {
            proposal_id,
            voter: caller,
            vote_type,
            weight,
        });

        Ok(())
    }

    /// Processes a proposal whose voting window has closed.
    ///
    /// Requires no capability. A rejected proposal records `Rejected`
    /// without touching the dispatcher. An approved batch goes to the
    /// dispatcher; a dispatcher error propagates unchanged with no status
    /// recorded, so the proposal stays processable. Otherwise the outcome
    /// maps to `Completed`, `Reverted`, or `Processed` and the transition
    /// happens exactly once.
    #[instrument(skip(self, execution_budget))]
    pub async fn process_proposal(
        &mut self,
        proposal_id: ProposalId,
        execution_budget: Option<u64>,
        now: Timestamp,
    ) -> Result<ProposalStatus, GovernanceError> {
        let state = self.state.as_ref().ok_or(GovernanceError::NotInitialized)?;
        let proposal = state
            .proposals
            .get(&proposal_id)
            .ok_or(GovernanceError::ProposalNotFound(proposal_id))?;

        if !proposal.voting_finished(now) {
            return Err(GovernanceError::VotingNotFinished);
        }
        if proposal.status.is_terminal() {
            return Err(GovernanceError::ProposalAlreadyProcessed(proposal_id));
        }

        let (status, relayed_budget) = if !proposal.approved() {
            (ProposalStatus::Rejected, None)
        } else {
            let outcome = self
                .dispatcher
                .dispatch(proposal_id, &proposal.calls, execution_budget)
                .await?;
            match outcome {
                DispatchOutcome::Executed { success: true } => (ProposalStatus::Completed, None),
                DispatchOutcome::Executed { success: false } => (ProposalStatus::Reverted, None),
                DispatchOutcome::Relayed { execution_budget } => {
                    (ProposalStatus::Processed, Some(execution_budget))
                }
            }
        };

        // The first borrow ended at the dispatch await point.
        let state = self.state_mut()?;
        let proposal = state
            .proposals
            .get_mut(&proposal_id)
            .ok_or(GovernanceError::ProposalNotFound(proposal_id))?;
        debug_assert!(proposal.status.can_transition_to(status));
        proposal.status = status;

        info!(proposal_id, ?status, "proposal processed");
        self.events.push(GovernanceEvent::ProposalProcessed {
            proposal_id,
            status,
            execution_budget: relayed_budget,
        });

        Ok(status)
    }

    /// The proposal with this id, if any.
    #[must_use]
    pub fn get_proposal(&self, proposal_id: ProposalId) -> Option<&Proposal> {
        self.state.as_ref()?.proposals.get(&proposal_id)
    }

    /// The vote `voter` cast on `proposal_id`; `Unknown` if none.
    #[must_use]
    pub fn get_vote(&self, proposal_id: ProposalId, voter: &Address) -> VoteType {
        self.state
            .as_ref()
            .and_then(|state| state.votes.get(&(proposal_id, *voter)))
            .map_or(VoteType::Unknown, |vote| vote.vote_type)
    }

    /// Current balance of `account`; 0 before initialization.
    #[must_use]
    pub fn get_balance(&self, account: &Address) -> Amount {
        self.state
            .as_ref()
            .map_or(0, |state| state.ledger.balance_of(account))
    }

    /// Balance of `account` at `snapshot_id`; 0 before initialization.
    #[must_use]
    pub fn get_balance_at(&self, account: &Address, snapshot_id: SnapshotId) -> Amount {
        self.state
            .as_ref()
            .map_or(0, |state| state.ledger.balance_at(account, snapshot_id))
    }

    /// Snapshot id current at `timestamp`; 0 before initialization.
    #[must_use]
    pub fn compute_snapshot_id(&self, timestamp: Timestamp) -> SnapshotId {
        self.state
            .as_ref()
            .map_or(0, |state| state.ledger.snapshot_id_at(timestamp))
    }

    /// Total supply outstanding; 0 before initialization.
    #[must_use]
    pub fn total_supply(&self) -> Amount {
        self.state.as_ref().map_or(0, |state| state.ledger.total_supply())
    }

    /// Whether `initialize` has succeeded.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    /// Events emitted so far, in order.
    #[must_use]
    pub fn events(&self) -> &[GovernanceEvent] {
        &self.events
    }

    /// Removes and returns all emitted events.
    pub fn drain_events(&mut self) -> Vec<GovernanceEvent> {
        std::mem::take(&mut self.events)
    }

    fn state_mut(&mut self) -> Result<&mut EngineState, GovernanceError> {
        self.state.as_mut().ok_or(GovernanceError::NotInitialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockDispatcher, StaticAccessGuard};

    const WINDOW: u64 = 20;
    const VOTING_PERIOD: u64 = 50;
    const SUPPLY: Amount = 1_000_000;
    const T0: Timestamp = 1_000;

    fn owner() -> Address {
        Address::new([0xAAu8; 20])
    }

    fn controller() -> Address {
        Address::new([0xBBu8; 20])
    }

    fn voter() -> Address {
        Address::new([0xCCu8; 20])
    }

    fn guard() -> StaticAccessGuard {
        StaticAccessGuard::new(owner(), [controller()])
    }

    fn engine(
        dispatcher: MockDispatcher,
    ) -> GovernanceEngine<StaticAccessGuard, MockDispatcher> {
        let mut engine = GovernanceEngine::new(guard(), dispatcher);
        engine
            .initialize(owner(), vec![controller()], WINDOW, VOTING_PERIOD, SUPPLY, T0)
            .unwrap();
        engine
    }

    fn executed_ok() -> MockDispatcher {
        MockDispatcher::new(DispatchOutcome::Executed { success: true })
    }

    fn sample_calls() -> Vec<Call> {
        vec![Call::new(Address::new([1u8; 20]), 0, vec![0xDE, 0xAD])]
    }

    #[test]
    fn test_initialize_rejects_second_call() {
        let mut engine = engine(executed_ok());
        let err = engine
            .initialize(owner(), vec![], WINDOW, VOTING_PERIOD, SUPPLY, T0)
            .unwrap_err();
        assert_eq!(err, GovernanceError::AlreadyInitialized);
    }

    #[test]
    fn test_initialize_validates_parameters() {
        let mut engine = GovernanceEngine::new(guard(), executed_ok());
        assert_eq!(
            engine.initialize(owner(), vec![], 0, VOTING_PERIOD, SUPPLY, T0),
            Err(GovernanceError::InvalidSnapshotWindowLength)
        );
        assert_eq!(
            engine.initialize(owner(), vec![], WINDOW, 0, SUPPLY, T0),
            Err(GovernanceError::InvalidVotingPeriod)
        );
        assert_eq!(
            engine.initialize(owner(), vec![], WINDOW, VOTING_PERIOD, 0, T0),
            Err(GovernanceError::InvalidTotalSupply)
        );
        assert!(!engine.is_initialized());
    }

    #[test]
    fn test_operations_require_initialization() {
        let mut engine = GovernanceEngine::new(guard(), executed_ok());
        assert_eq!(
            engine.transfer(owner(), voter(), 1, T0),
            Err(GovernanceError::NotInitialized)
        );
        assert_eq!(
            engine.create_proposal(controller(), sample_calls(), 0, T0),
            Err(GovernanceError::NotInitialized)
        );
    }

    #[test]
    fn test_initialize_mints_to_deployer() {
        let engine = engine(executed_ok());
        assert_eq!(engine.get_balance(&owner()), SUPPLY);
        assert_eq!(engine.get_balance_at(&owner(), 1), SUPPLY);
        assert_eq!(engine.total_supply(), SUPPLY);
        assert_eq!(
            engine.events()[0],
            GovernanceEvent::Initialized {
                controllers: vec![controller()]
            }
        );
    }

    #[test]
    fn test_transfer_emits_event() {
        let mut engine = engine(executed_ok());
        engine.transfer(owner(), voter(), 100, T0).unwrap();
        assert_eq!(engine.get_balance(&voter()), 100);
        assert!(engine.events().contains(&GovernanceEvent::Transfer {
            from: owner(),
            to: voter(),
            amount: 100,
        }));
    }

    #[test]
    fn test_burn_is_owner_only() {
        let mut engine = engine(executed_ok());
        assert_eq!(
            engine.burn(controller(), 1, T0),
            Err(GovernanceError::CallerNotOwner(controller()))
        );

        engine.burn(owner(), 1_000, T0).unwrap();
        assert_eq!(engine.total_supply(), SUPPLY - 1_000);
        assert!(engine.events().contains(&GovernanceEvent::Transfer {
            from: owner(),
            to: Address::ZERO,
            amount: 1_000,
        }));
    }

    #[test]
    fn test_create_proposal_is_controller_only() {
        let mut engine = engine(executed_ok());
        let err = engine
            .create_proposal(voter(), sample_calls(), 0, T0)
            .unwrap_err();
        assert_eq!(err, GovernanceError::CallerNotController(voter()));
    }

    #[test]
    fn test_create_proposal_validates_batch() {
        let mut engine = engine(executed_ok());
        assert_eq!(
            engine.create_proposal(controller(), vec![], 0, T0),
            Err(GovernanceError::EmptyCallBatch)
        );
        let zero_target = vec![Call::new(Address::ZERO, 0, vec![])];
        assert_eq!(
            engine.create_proposal(controller(), zero_target, 0, T0),
            Err(GovernanceError::CallTargetIsZeroAddress)
        );
    }

    #[test]
    fn test_proposal_ids_start_at_one_and_increase() {
        let mut engine = engine(executed_ok());
        let first = engine
            .create_proposal(controller(), sample_calls(), 0, T0)
            .unwrap();
        let second = engine
            .create_proposal(controller(), sample_calls(), 0, T0)
            .unwrap();
        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[test]
    fn test_proposal_freezes_snapshot_and_window() {
        let mut engine = engine(executed_ok());
        let now = T0 + WINDOW; // snapshot id 2
        let id = engine
            .create_proposal(controller(), sample_calls(), 10, now)
            .unwrap();

        let proposal = engine.get_proposal(id).unwrap();
        assert_eq!(proposal.snapshot_id, 2);
        assert_eq!(proposal.voting_starts_at, now + 10);
        assert_eq!(proposal.voting_ends_at, now + 10 + VOTING_PERIOD);
    }

    #[test]
    fn test_vote_on_missing_proposal() {
        let mut engine = engine(executed_ok());
        assert_eq!(
            engine.submit_vote(owner(), 9, VoteType::Yes, T0),
            Err(GovernanceError::ProposalNotFound(9))
        );
    }

    #[test]
    fn test_vote_rejects_unknown_type() {
        let mut engine = engine(executed_ok());
        let id = engine
            .create_proposal(controller(), sample_calls(), 0, T0)
            .unwrap();
        assert_eq!(
            engine.submit_vote(owner(), id, VoteType::Unknown, T0),
            Err(GovernanceError::InvalidVoteType)
        );
    }

    #[test]
    fn test_vote_window_enforced() {
        let mut engine = engine(executed_ok());
        let id = engine
            .create_proposal(controller(), sample_calls(), 10, T0)
            .unwrap();

        assert_eq!(
            engine.submit_vote(owner(), id, VoteType::Yes, T0 + 9),
            Err(GovernanceError::VotingNotStarted)
        );
        assert_eq!(
            engine.submit_vote(owner(), id, VoteType::Yes, T0 + 10 + VOTING_PERIOD),
            Err(GovernanceError::VotingAlreadyFinished)
        );
        engine
            .submit_vote(owner(), id, VoteType::Yes, T0 + 10)
            .unwrap();
    }

    #[test]
    fn test_double_vote_rejected() {
        let mut engine = engine(executed_ok());
        let id = engine
            .create_proposal(controller(), sample_calls(), 0, T0)
            .unwrap();
        engine.submit_vote(owner(), id, VoteType::Yes, T0).unwrap();
        assert_eq!(
            engine.submit_vote(owner(), id, VoteType::No, T0 + 1),
            Err(GovernanceError::AlreadyVoted {
                voter: owner(),
                proposal_id: id,
            })
        );
    }

    #[test]
    fn test_zero_weight_vote_rejected() {
        let mut engine = engine(executed_ok());
        let id = engine
            .create_proposal(controller(), sample_calls(), 0, T0)
            .unwrap();
        assert_eq!(
            engine.submit_vote(voter(), id, VoteType::Yes, T0),
            Err(GovernanceError::InsufficientBalance {
                voter: voter(),
                snapshot_id: 1,
            })
        );
    }

    #[test]
    fn test_vote_weight_frozen_at_snapshot() {
        let mut engine = engine(executed_ok());
        engine.transfer(owner(), voter(), 300, T0).unwrap();

        // Created in window 2, freezing snapshot id 2 for every vote.
        let now = T0 + WINDOW;
        let id = engine
            .create_proposal(controller(), sample_calls(), 0, now)
            .unwrap();

        // Transfer after creation, inside window 2, changes the window-2
        // checkpoint but the recorded vote keeps the weight it was cast with.
        engine.submit_vote(voter(), id, VoteType::Yes, now).unwrap();
        engine.transfer(voter(), owner(), 300, now + 1).unwrap();

        let proposal = engine.get_proposal(id).unwrap();
        assert_eq!(proposal.yes_weight, 300);
        assert_eq!(engine.get_vote(id, &voter()), VoteType::Yes);
    }

    #[test]
    fn test_get_vote_defaults_to_unknown() {
        let engine = engine(executed_ok());
        assert_eq!(engine.get_vote(1, &voter()), VoteType::Unknown);
    }

    #[tokio::test]
    async fn test_process_requires_closed_window() {
        let mut engine = engine(executed_ok());
        let id = engine
            .create_proposal(controller(), sample_calls(), 0, T0)
            .unwrap();
        assert_eq!(
            engine.process_proposal(id, None, T0).await,
            Err(GovernanceError::VotingNotFinished)
        );
    }

    #[tokio::test]
    async fn test_process_missing_proposal() {
        let mut engine = engine(executed_ok());
        assert_eq!(
            engine.process_proposal(42, None, T0).await,
            Err(GovernanceError::ProposalNotFound(42))
        );
    }

    #[tokio::test]
    async fn test_rejected_without_dispatch() {
        let mut engine = engine(executed_ok());
        let id = engine
            .create_proposal(controller(), sample_calls(), 0, T0)
            .unwrap();
        // No votes cast: yes does not exceed no.
        let after = T0 + VOTING_PERIOD;

        let status = engine.process_proposal(id, None, after).await.unwrap();

        assert_eq!(status, ProposalStatus::Rejected);
        assert!(engine.dispatcher.dispatched().is_empty());
        assert!(engine.events().contains(&GovernanceEvent::ProposalProcessed {
            proposal_id: id,
            status: ProposalStatus::Rejected,
            execution_budget: None,
        }));
    }

    #[tokio::test]
    async fn test_tie_is_rejected() {
        let mut engine = engine(executed_ok());
        engine.transfer(owner(), voter(), 500_000, T0).unwrap();
        let now = T0 + WINDOW;
        let id = engine
            .create_proposal(controller(), sample_calls(), 0, now)
            .unwrap();
        engine.submit_vote(owner(), id, VoteType::Yes, now).unwrap();
        engine.submit_vote(voter(), id, VoteType::No, now).unwrap();

        let status = engine
            .process_proposal(id, None, now + VOTING_PERIOD)
            .await
            .unwrap();
        assert_eq!(status, ProposalStatus::Rejected);
    }

    #[tokio::test]
    async fn test_approved_batch_completes() {
        let mut engine = engine(executed_ok());
        let id = engine
            .create_proposal(controller(), sample_calls(), 0, T0)
            .unwrap();
        engine.submit_vote(owner(), id, VoteType::Yes, T0).unwrap();
        let after = T0 + VOTING_PERIOD;

        let status = engine.process_proposal(id, None, after).await.unwrap();

        assert_eq!(status, ProposalStatus::Completed);
        let dispatched = engine.dispatcher.dispatched();
        assert_eq!(dispatched.len(), 1);
        assert_eq!(dispatched[0].0, id);
        assert_eq!(dispatched[0].1, sample_calls());
    }

    #[tokio::test]
    async fn test_failed_batch_reverts() {
        let dispatcher = MockDispatcher::new(DispatchOutcome::Executed { success: false });
        let mut engine = engine(dispatcher);
        let id = engine
            .create_proposal(controller(), sample_calls(), 0, T0)
            .unwrap();
        engine.submit_vote(owner(), id, VoteType::Yes, T0).unwrap();

        let status = engine
            .process_proposal(id, None, T0 + VOTING_PERIOD)
            .await
            .unwrap();
        assert_eq!(status, ProposalStatus::Reverted);
    }

    #[tokio::test]
    async fn test_relayed_batch_is_processed() {
        let dispatcher = MockDispatcher::new(DispatchOutcome::Relayed {
            execution_budget: 700_000,
        });
        let mut engine = engine(dispatcher);
        let id = engine
            .create_proposal(controller(), sample_calls(), 0, T0)
            .unwrap();
        engine.submit_vote(owner(), id, VoteType::Yes, T0).unwrap();

        let status = engine
            .process_proposal(id, Some(700_000), T0 + VOTING_PERIOD)
            .await
            .unwrap();

        assert_eq!(status, ProposalStatus::Processed);
        assert!(engine.events().contains(&GovernanceEvent::ProposalProcessed {
            proposal_id: id,
            status: ProposalStatus::Processed,
            execution_budget: Some(700_000),
        }));
    }

    #[tokio::test]
    async fn test_process_is_exactly_once() {
        let mut engine = engine(executed_ok());
        let id = engine
            .create_proposal(controller(), sample_calls(), 0, T0)
            .unwrap();
        engine.submit_vote(owner(), id, VoteType::Yes, T0).unwrap();
        let after = T0 + VOTING_PERIOD;

        engine.process_proposal(id, None, after).await.unwrap();
        assert_eq!(
            engine.process_proposal(id, None, after).await,
            Err(GovernanceError::ProposalAlreadyProcessed(id))
        );
        assert_eq!(engine.dispatcher.dispatched().len(), 1);
    }

    #[tokio::test]
    async fn test_dispatch_error_leaves_proposal_open() {
        let mut dispatcher = executed_ok();
        dispatcher.should_fail = true;
        let mut engine = engine(dispatcher);
        let id = engine
            .create_proposal(controller(), sample_calls(), 0, T0)
            .unwrap();
        engine.submit_vote(owner(), id, VoteType::Yes, T0).unwrap();
        let after = T0 + VOTING_PERIOD;

        let err = engine.process_proposal(id, None, after).await.unwrap_err();
        assert!(matches!(err, GovernanceError::Dispatch(_)));
        assert_eq!(engine.get_proposal(id).unwrap().status, ProposalStatus::Open);

        // A later retry with a working dispatcher path would succeed; here we
        // flip the mock back and retry in place.
        engine.dispatcher.should_fail = false;
        let status = engine.process_proposal(id, None, after).await.unwrap();
        assert_eq!(status, ProposalStatus::Completed);
    }

    #[tokio::test]
    async fn test_drain_events_empties_the_log() {
        let mut engine = engine(executed_ok());
        engine.transfer(owner(), voter(), 1, T0).unwrap();

        let drained = engine.drain_events();
        assert_eq!(drained.len(), 2);
        assert!(engine.events().is_empty());
    }
}
