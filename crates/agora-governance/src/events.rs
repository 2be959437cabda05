//! Committed-mutation event log.
//!
//! The engine appends one event per committed mutation, in commit order.
//! Observers (dashboards, indexers) read the log; nothing inside the
//! engine depends on it.

use serde::{Deserialize, Serialize};

use agora_types::{Address, Amount};

/// One committed governance mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GovernanceEvent {
    MemberAdded {
        address: Address,
        timestamp: u64,
    },
    ProposalCreated {
        id: u64,
        proposer: Address,
        timestamp: u64,
    },
    VoteCast {
        id: u64,
        voter: Address,
        support: bool,
        timestamp: u64,
    },
    ProposalExecuted {
        id: u64,
        timestamp: u64,
    },
    FundsDeposited {
        from: Address,
        amount: Amount,
        timestamp: u64,
    },
    FundsWithdrawn {
        recipient: Address,
        amount: Amount,
        timestamp: u64,
    },
}
