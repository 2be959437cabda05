//! Membership registry: the set of addresses allowed to propose and vote.
//!
//! Membership is append-only. There is no removal operation, so
//! `is_member` is monotonic within a session.

use std::collections::HashSet;

use agora_types::Address;

use crate::error::GovernanceError;

/// Owner-rooted member set.
///
/// Exactly one owner, fixed at construction; the owner is always a member.
#[derive(Debug, Clone)]
pub struct MembershipRegistry {
    owner: Address,
    members: HashSet<Address>,
}

impl MembershipRegistry {
    /// Create a registry with `owner` as its first member.
    pub fn new(owner: Address) -> Self {
        let mut members = HashSet::new();
        members.insert(owner);
        Self { owner, members }
    }

    /// The privileged address.
    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn is_owner(&self, address: &Address) -> bool {
        *address == self.owner
    }

    pub fn is_member(&self, address: &Address) -> bool {
        self.members.contains(address)
    }

    /// Number of registered members, the owner included.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Register a new member.
    ///
    /// Rejects the zero address and addresses that are already members.
    /// Caller gating (owner-only) is enforced by the engine.
    pub fn add(&mut self, address: Address) -> Result<(), GovernanceError> {
        if address.is_zero() {
            return Err(GovernanceError::InvalidAddress(address.to_hex()));
        }
        if self.members.contains(&address) {
            return Err(GovernanceError::AlreadyMember(address));
        }

        self.members.insert(address);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(byte: u8) -> Address {
        Address::from_bytes([byte; 20])
    }

    #[test]
    fn test_owner_is_member() {
        let registry = MembershipRegistry::new(addr(1));
        assert!(registry.is_owner(&addr(1)));
        assert!(registry.is_member(&addr(1)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_add_member() {
        let mut registry = MembershipRegistry::new(addr(1));

        registry.add(addr(2)).unwrap();
        assert!(registry.is_member(&addr(2)));
        assert!(!registry.is_owner(&addr(2)));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_add_duplicate_fails() {
        let mut registry = MembershipRegistry::new(addr(1));
        registry.add(addr(2)).unwrap();

        assert_eq!(
            registry.add(addr(2)),
            Err(GovernanceError::AlreadyMember(addr(2)))
        );
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_add_owner_fails() {
        let mut registry = MembershipRegistry::new(addr(1));
        assert_eq!(
            registry.add(addr(1)),
            Err(GovernanceError::AlreadyMember(addr(1)))
        );
    }

    #[test]
    fn test_add_zero_address_fails() {
        let mut registry = MembershipRegistry::new(addr(1));
        assert!(matches!(
            registry.add(Address::ZERO),
            Err(GovernanceError::InvalidAddress(_))
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_non_member() {
        let registry = MembershipRegistry::new(addr(1));
        assert!(!registry.is_member(&addr(9)));
    }
}
