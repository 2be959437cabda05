use agora_types::{Address, Amount};
use thiserror::Error;

/// Errors that can occur in governance operations.
///
/// Every variant is a caller error surfaced synchronously; a failing
/// operation applies no partial state.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GovernanceError {
    #[error("Not owner")]
    NotOwner,

    #[error("Not a DAO member")]
    NotMember,

    #[error("Already a member: {0}")]
    AlreadyMember(Address),

    #[error("Invalid proposal: {0}")]
    InvalidProposal(u64),

    #[error("Voting ended")]
    VotingEnded,

    #[error("Voting ongoing")]
    VotingOngoing,

    #[error("Already voted")]
    AlreadyVoted,

    #[error("Already executed")]
    AlreadyExecuted,

    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Amount,
        available: Amount,
    },

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Transfer failed: {0}")]
    TransferFailed(String),

    #[error("Amount overflow")]
    AmountOverflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GovernanceError::InvalidProposal(7);
        assert!(err.to_string().contains("7"));
    }

    #[test]
    fn test_insufficient_funds_fields() {
        let err = GovernanceError::InsufficientFunds {
            requested: Amount::from(200u64),
            available: Amount::from(100u64),
        };
        assert!(err.to_string().contains("200"));
        assert!(err.to_string().contains("100"));
    }
}
