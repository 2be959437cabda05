//! The governance engine.
//!
//! Single source of truth for DAO state. The membership registry, proposal
//! store, voting ledger, treasury, and event log live behind one lock:
//! mutations take the write lock and apply serially, reads take the read
//! lock against a consistent snapshot. Every operation either commits
//! fully or fails with no partial state.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use agora_types::{Address, Amount};

use crate::clock::{Clock, SystemClock};
use crate::error::GovernanceError;
use crate::events::GovernanceEvent;
use crate::membership::MembershipRegistry;
use crate::proposal::{Proposal, ProposalKind, ProposalStatus, ProposalStore, SECONDS_PER_DAY};
use crate::treasury::{Treasury, TreasuryInfo, TreasurySnapshot};
use crate::voting::VotingLedger;

/// Outbound value transfer seam.
///
/// Withdrawals leave the engine through this trait, synchronously. An Err
/// return aborts the withdrawal before any ledger mutation is applied.
pub trait TransferOutlet: Send + Sync {
    fn transfer(&self, recipient: Address, amount: Amount) -> Result<(), String>;
}

/// Outlet that accepts every transfer, for deployments where settlement
/// happens downstream of the engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullOutlet;

impl TransferOutlet for NullOutlet {
    fn transfer(&self, _recipient: Address, _amount: Amount) -> Result<(), String> {
        Ok(())
    }
}

/// Aggregate DAO statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaoStats {
    pub total_proposals: u64,
    /// Proposals whose voting window is still open
    pub active_proposals: u64,
    pub total_members: u64,
    /// Percent (0-100) of members that have voted on at least one proposal
    pub average_participation: u64,
}

struct DaoState {
    membership: MembershipRegistry,
    proposals: ProposalStore,
    votes: VotingLedger,
    treasury: Treasury,
    events: Vec<GovernanceEvent>,
}

/// The composed governance engine.
pub struct GovernanceEngine {
    state: RwLock<DaoState>,
    clock: Arc<dyn Clock>,
    outlet: Arc<dyn TransferOutlet>,
}

impl GovernanceEngine {
    /// Create an engine with `owner` as the privileged first member,
    /// using the wall clock and an accept-all transfer outlet.
    pub fn new(owner: Address) -> Self {
        Self::with_parts(owner, Arc::new(SystemClock), Arc::new(NullOutlet))
    }

    /// Create an engine with an explicit clock and transfer outlet.
    pub fn with_parts(
        owner: Address,
        clock: Arc<dyn Clock>,
        outlet: Arc<dyn TransferOutlet>,
    ) -> Self {
        Self {
            state: RwLock::new(DaoState {
                membership: MembershipRegistry::new(owner),
                proposals: ProposalStore::new(),
                votes: VotingLedger::new(),
                treasury: Treasury::new(),
                events: Vec::new(),
            }),
            clock,
            outlet,
        }
    }

    /// Register a new member. Owner only.
    pub fn add_member(&self, caller: Address, address: Address) -> Result<(), GovernanceError> {
        let now = self.clock.now();
        let mut state = self.state.write();

        if !state.membership.is_owner(&caller) {
            return Err(GovernanceError::NotOwner);
        }

        state.membership.add(address)?;
        state.events.push(GovernanceEvent::MemberAdded {
            address,
            timestamp: now,
        });

        info!(member = %address, "member added");
        Ok(())
    }

    /// Create a proposal. Members only. Returns the new dense id.
    pub fn create_proposal(
        &self,
        caller: Address,
        title: impl Into<String>,
        short_description: impl Into<String>,
        detailed_description: impl Into<String>,
        kind: ProposalKind,
        voting_period_days: u64,
    ) -> Result<u64, GovernanceError> {
        let now = self.clock.now();
        let mut state = self.state.write();

        if !state.membership.is_member(&caller) {
            return Err(GovernanceError::NotMember);
        }

        let deadline = now.saturating_add(voting_period_days.saturating_mul(SECONDS_PER_DAY));
        let id = state.proposals.append(
            caller,
            title.into(),
            short_description.into(),
            detailed_description.into(),
            kind,
            now,
            deadline,
        );
        state.events.push(GovernanceEvent::ProposalCreated {
            id,
            proposer: caller,
            timestamp: now,
        });

        info!(id, proposer = %caller, kind = kind.name(), "proposal created");
        Ok(id)
    }

    /// Cast a vote. Members only; one vote per member per proposal.
    pub fn vote(
        &self,
        caller: Address,
        proposal_id: u64,
        support: bool,
    ) -> Result<(), GovernanceError> {
        let now = self.clock.now();
        let mut state = self.state.write();

        if !state.membership.is_member(&caller) {
            return Err(GovernanceError::NotMember);
        }
        if !state.proposals.get(proposal_id)?.voting_open(now) {
            return Err(GovernanceError::VotingEnded);
        }

        state.votes.record(proposal_id, caller, support)?;
        state.proposals.get_mut(proposal_id)?.record_vote(support);
        state.events.push(GovernanceEvent::VoteCast {
            id: proposal_id,
            voter: caller,
            support,
            timestamp: now,
        });

        debug!(id = proposal_id, voter = %caller, support, "vote recorded");
        Ok(())
    }

    /// Execute a proposal after its deadline has passed. Owner only.
    ///
    /// Execution flips the `executed` flag; it has no further effect.
    pub fn execute_proposal(
        &self,
        caller: Address,
        proposal_id: u64,
    ) -> Result<(), GovernanceError> {
        let now = self.clock.now();
        let mut state = self.state.write();

        if !state.membership.is_owner(&caller) {
            return Err(GovernanceError::NotOwner);
        }

        state.proposals.get_mut(proposal_id)?.execute(now)?;
        state.events.push(GovernanceEvent::ProposalExecuted {
            id: proposal_id,
            timestamp: now,
        });

        info!(id = proposal_id, "proposal executed");
        Ok(())
    }

    /// Credit the treasury. Open to any caller.
    pub fn deposit(&self, from: Address, amount: Amount) -> Result<(), GovernanceError> {
        let now = self.clock.now();
        let mut state = self.state.write();

        state.treasury.deposit(amount, now)?;
        state.events.push(GovernanceEvent::FundsDeposited {
            from,
            amount,
            timestamp: now,
        });

        debug!(from = %from, amount = %amount, "deposit received");
        Ok(())
    }

    /// Withdraw treasury funds to `recipient`. Owner only.
    ///
    /// The outlet transfer happens before the ledger debit; a rejected
    /// transfer leaves the treasury untouched.
    pub fn withdraw(
        &self,
        caller: Address,
        amount: Amount,
        recipient: Address,
    ) -> Result<(), GovernanceError> {
        let now = self.clock.now();
        let mut state = self.state.write();

        if !state.membership.is_owner(&caller) {
            return Err(GovernanceError::NotOwner);
        }
        if recipient.is_zero() {
            return Err(GovernanceError::InvalidAddress(recipient.to_hex()));
        }
        state.treasury.ensure_available(amount)?;

        self.outlet
            .transfer(recipient, amount)
            .map_err(GovernanceError::TransferFailed)?;

        state.treasury.withdraw(amount, now)?;
        state.events.push(GovernanceEvent::FundsWithdrawn {
            recipient,
            amount,
            timestamp: now,
        });

        info!(recipient = %recipient, amount = %amount, "withdrawal");
        Ok(())
    }

    /// Snapshot of a proposal's current state.
    pub fn get_proposal(&self, proposal_id: u64) -> Result<Proposal, GovernanceError> {
        self.state
            .read()
            .proposals
            .get(proposal_id)
            .map(|p| p.clone())
    }

    /// Derived lifecycle status of a proposal at this instant.
    pub fn proposal_status(&self, proposal_id: u64) -> Result<ProposalStatus, GovernanceError> {
        let now = self.clock.now();
        Ok(self.state.read().proposals.get(proposal_id)?.status(now))
    }

    pub fn proposal_count(&self) -> u64 {
        self.state.read().proposals.len()
    }

    pub fn has_voted(&self, proposal_id: u64, voter: &Address) -> bool {
        self.state.read().votes.has_voted(proposal_id, voter)
    }

    /// Proposal ids `voter` has voted on, oldest first.
    pub fn voting_history(&self, voter: &Address) -> Vec<u64> {
        self.state.read().votes.history(voter).to_vec()
    }

    pub fn is_member(&self, address: &Address) -> bool {
        self.state.read().membership.is_member(address)
    }

    pub fn is_owner(&self, address: &Address) -> bool {
        self.state.read().membership.is_owner(address)
    }

    pub fn owner(&self) -> Address {
        self.state.read().membership.owner()
    }

    pub fn member_count(&self) -> u64 {
        self.state.read().membership.len() as u64
    }

    pub fn treasury_info(&self) -> TreasuryInfo {
        self.state.read().treasury.info()
    }

    /// Treasury snapshots oldest first.
    pub fn treasury_history(&self) -> Vec<TreasurySnapshot> {
        self.state.read().treasury.history().to_vec()
    }

    /// Committed events, in commit order.
    pub fn events(&self) -> Vec<GovernanceEvent> {
        self.state.read().events.clone()
    }

    /// Aggregate stats for the dashboard read path.
    pub fn dao_stats(&self) -> DaoStats {
        let now = self.clock.now();
        let state = self.state.read();

        let total_members = state.membership.len() as u64;
        let participants = state.votes.participant_count() as u64;
        let average_participation = if total_members == 0 {
            0
        } else {
            participants * 100 / total_members
        };

        DaoStats {
            total_proposals: state.proposals.len(),
            active_proposals: state.proposals.active_count(now) as u64,
            total_members,
            average_participation,
        }
    }
}
