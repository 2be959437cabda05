//! Agora Governance - membership-gated DAO governance engine.
//!
//! This crate provides:
//! - Proposal lifecycle management
//! - One-member-one-vote ballots with per-voter history
//! - Treasury ledger with balance snapshots
//! - A single-writer engine composing the above

pub mod clock;
pub mod engine;
pub mod error;
pub mod events;
pub mod membership;
pub mod proposal;
pub mod treasury;
pub mod voting;

pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{DaoStats, GovernanceEngine, NullOutlet, TransferOutlet};
pub use error::GovernanceError;
pub use events::GovernanceEvent;
pub use membership::MembershipRegistry;
pub use proposal::{Proposal, ProposalKind, ProposalStatus, ProposalStore};
pub use treasury::{Treasury, TreasuryInfo, TreasurySnapshot};
pub use voting::VotingLedger;
