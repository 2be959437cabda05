//! Per-proposal, per-voter vote records.
//!
//! At most one record exists per (proposal, voter) key, and records are
//! immutable once written. The ledger also keeps each voter's history in
//! insertion order.

use std::collections::HashMap;

use agora_types::Address;

use crate::error::GovernanceError;

/// Vote record store.
#[derive(Debug, Default)]
pub struct VotingLedger {
    /// proposal id -> voter -> support
    records: HashMap<u64, HashMap<Address, bool>>,
    /// voter -> proposal ids voted on, insertion order
    history: HashMap<Address, Vec<u64>>,
}

impl VotingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a vote.
    ///
    /// Fails with `AlreadyVoted` if a record for (proposal, voter) exists;
    /// an existing record is never overwritten.
    pub fn record(
        &mut self,
        proposal_id: u64,
        voter: Address,
        support: bool,
    ) -> Result<(), GovernanceError> {
        let votes = self.records.entry(proposal_id).or_default();
        if votes.contains_key(&voter) {
            return Err(GovernanceError::AlreadyVoted);
        }

        votes.insert(voter, support);
        self.history.entry(voter).or_default().push(proposal_id);
        Ok(())
    }

    pub fn has_voted(&self, proposal_id: u64, voter: &Address) -> bool {
        self.records
            .get(&proposal_id)
            .map_or(false, |votes| votes.contains_key(voter))
    }

    /// The recorded support of a voter on a proposal, if any.
    pub fn support_of(&self, proposal_id: u64, voter: &Address) -> Option<bool> {
        self.records
            .get(&proposal_id)
            .and_then(|votes| votes.get(voter))
            .copied()
    }

    /// Proposal ids `voter` has voted on, oldest first.
    pub fn history(&self, voter: &Address) -> &[u64] {
        self.history
            .get(voter)
            .map(|ids| ids.as_slice())
            .unwrap_or(&[])
    }

    /// Distinct voters on a proposal.
    pub fn voter_count(&self, proposal_id: u64) -> usize {
        self.records.get(&proposal_id).map_or(0, |votes| votes.len())
    }

    /// Addresses that have voted on at least one proposal.
    pub fn participant_count(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(byte: u8) -> Address {
        Address::from_bytes([byte; 20])
    }

    #[test]
    fn test_record_and_query() {
        let mut ledger = VotingLedger::new();

        ledger.record(0, addr(1), true).unwrap();
        assert!(ledger.has_voted(0, &addr(1)));
        assert!(!ledger.has_voted(0, &addr(2)));
        assert!(!ledger.has_voted(1, &addr(1)));
        assert_eq!(ledger.support_of(0, &addr(1)), Some(true));
        assert_eq!(ledger.support_of(0, &addr(2)), None);
    }

    #[test]
    fn test_double_vote_rejected() {
        let mut ledger = VotingLedger::new();
        ledger.record(0, addr(1), true).unwrap();

        assert_eq!(
            ledger.record(0, addr(1), false),
            Err(GovernanceError::AlreadyVoted)
        );

        // The first record is untouched
        assert_eq!(ledger.support_of(0, &addr(1)), Some(true));
        assert_eq!(ledger.history(&addr(1)), &[0]);
    }

    #[test]
    fn test_same_voter_different_proposals() {
        let mut ledger = VotingLedger::new();
        ledger.record(0, addr(1), true).unwrap();
        ledger.record(1, addr(1), false).unwrap();

        assert_eq!(ledger.history(&addr(1)), &[0, 1]);
        assert_eq!(ledger.voter_count(0), 1);
        assert_eq!(ledger.voter_count(1), 1);
    }

    #[test]
    fn test_voter_count_is_distinct_voters() {
        let mut ledger = VotingLedger::new();
        ledger.record(0, addr(1), true).unwrap();
        ledger.record(0, addr(2), true).unwrap();
        ledger.record(0, addr(3), false).unwrap();

        assert_eq!(ledger.voter_count(0), 3);
        assert_eq!(ledger.voter_count(9), 0);
    }

    #[test]
    fn test_participant_count() {
        let mut ledger = VotingLedger::new();
        assert_eq!(ledger.participant_count(), 0);

        ledger.record(0, addr(1), true).unwrap();
        ledger.record(1, addr(1), true).unwrap();
        ledger.record(0, addr(2), false).unwrap();

        // Two distinct participants despite three records
        assert_eq!(ledger.participant_count(), 2);
    }

    #[test]
    fn test_history_empty_for_unknown_voter() {
        let ledger = VotingLedger::new();
        assert!(ledger.history(&addr(9)).is_empty());
    }
}
