//! Proposal lifecycle management.
//!
//! Proposals are created Active, accrue votes until their deadline, then
//! become eligible for execution: Active -> ReadyForExecution -> Executed.
//! The `executed` flag flips false -> true at most once; vote tallies never
//! decrease.

use serde::{Deserialize, Serialize};

use agora_types::Address;

use crate::error::GovernanceError;

/// Seconds in a voting-period day.
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Kind of governance proposal. Codes are fixed by the external ABI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProposalKind {
    /// General signalling proposal
    General,
    /// Treasury funding request
    Funding,
    /// Change to governance itself
    Governance,
}

impl ProposalKind {
    /// Wire code used by the presentation layer.
    pub fn code(&self) -> u8 {
        match self {
            ProposalKind::General => 0,
            ProposalKind::Funding => 1,
            ProposalKind::Governance => 2,
        }
    }

    /// Decode a wire code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(ProposalKind::General),
            1 => Some(ProposalKind::Funding),
            2 => Some(ProposalKind::Governance),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ProposalKind::General => "General",
            ProposalKind::Funding => "Funding",
            ProposalKind::Governance => "Governance",
        }
    }
}

/// Where a proposal sits in its lifecycle.
///
/// Derived from stored state on every read, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalStatus {
    /// Voting is open
    Active,
    /// Deadline passed, awaiting execution
    ReadyForExecution,
    /// Executed (terminal)
    Executed,
}

/// A governance proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    /// Dense id, assigned at creation starting from 0
    pub id: u64,
    /// Proposing member
    pub proposer: Address,
    /// Title
    pub title: String,
    /// One-line summary
    pub short_description: String,
    /// Full description
    pub detailed_description: String,
    /// Proposal kind
    pub kind: ProposalKind,
    /// Creation time (unix seconds)
    pub created_at: u64,
    /// Voting closes after this instant (unix seconds)
    pub voting_deadline: u64,
    /// Votes in favor
    pub votes_for: u64,
    /// Votes against
    pub votes_against: u64,
    /// Whether the proposal has been executed
    pub executed: bool,
}

impl Proposal {
    /// Derive the lifecycle status at `now`.
    pub fn status(&self, now: u64) -> ProposalStatus {
        if self.executed {
            ProposalStatus::Executed
        } else if now > self.voting_deadline {
            ProposalStatus::ReadyForExecution
        } else {
            ProposalStatus::Active
        }
    }

    /// Voting is open while `now` has not passed the deadline.
    pub fn voting_open(&self, now: u64) -> bool {
        now <= self.voting_deadline
    }

    /// Total votes cast.
    pub fn total_votes(&self) -> u64 {
        self.votes_for + self.votes_against
    }

    /// Bump exactly one tally. One member, one vote, no weighting.
    pub(crate) fn record_vote(&mut self, support: bool) {
        if support {
            self.votes_for += 1;
        } else {
            self.votes_against += 1;
        }
    }

    /// Mark executed.
    ///
    /// Fails with `VotingOngoing` while the deadline has not passed and
    /// `AlreadyExecuted` on a repeat call.
    pub(crate) fn execute(&mut self, now: u64) -> Result<(), GovernanceError> {
        if self.executed {
            return Err(GovernanceError::AlreadyExecuted);
        }
        if now <= self.voting_deadline {
            return Err(GovernanceError::VotingOngoing);
        }

        self.executed = true;
        Ok(())
    }
}

/// Append-only proposal list. Ids are dense and start at 0.
#[derive(Debug, Default)]
pub struct ProposalStore {
    proposals: Vec<Proposal>,
}

impl ProposalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new proposal and return its id.
    #[allow(clippy::too_many_arguments)]
    pub fn append(
        &mut self,
        proposer: Address,
        title: String,
        short_description: String,
        detailed_description: String,
        kind: ProposalKind,
        created_at: u64,
        voting_deadline: u64,
    ) -> u64 {
        let id = self.proposals.len() as u64;
        self.proposals.push(Proposal {
            id,
            proposer,
            title,
            short_description,
            detailed_description,
            kind,
            created_at,
            voting_deadline,
            votes_for: 0,
            votes_against: 0,
            executed: false,
        });
        id
    }

    /// Get a proposal, failing for out-of-range ids.
    pub fn get(&self, id: u64) -> Result<&Proposal, GovernanceError> {
        self.proposals
            .get(id as usize)
            .ok_or(GovernanceError::InvalidProposal(id))
    }

    /// Get a proposal mutably, failing for out-of-range ids.
    pub fn get_mut(&mut self, id: u64) -> Result<&mut Proposal, GovernanceError> {
        self.proposals
            .get_mut(id as usize)
            .ok_or(GovernanceError::InvalidProposal(id))
    }

    pub fn len(&self) -> u64 {
        self.proposals.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Proposal> {
        self.proposals.iter()
    }

    /// Number of proposals whose voting window is open at `now`.
    pub fn active_count(&self, now: u64) -> usize {
        self.proposals
            .iter()
            .filter(|p| p.status(now) == ProposalStatus::Active)
            .count()
    }
}
