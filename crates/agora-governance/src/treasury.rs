//! Treasury ledger: balance, cumulative flows, and snapshot history.
//!
//! `balance == total_inflow - total_outflow` holds after every operation
//! and the balance never goes negative. A snapshot is appended on every
//! deposit and withdrawal, oldest first.

use serde::{Deserialize, Serialize};

use agora_types::Amount;

use crate::error::GovernanceError;

/// Immutable (timestamp, balance) record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasurySnapshot {
    /// Unix seconds at the balance change
    pub timestamp: u64,
    /// Balance after the change
    pub balance: Amount,
}

/// Point-in-time treasury summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasuryInfo {
    pub balance: Amount,
    pub total_inflow: Amount,
    pub total_outflow: Amount,
}

/// Treasury balance and history.
#[derive(Debug, Default)]
pub struct Treasury {
    balance: Amount,
    total_inflow: Amount,
    total_outflow: Amount,
    history: Vec<TreasurySnapshot>,
}

impl Treasury {
    /// Create an empty treasury.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Credit the treasury. Open to anyone.
    pub fn deposit(&mut self, amount: Amount, now: u64) -> Result<(), GovernanceError> {
        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(GovernanceError::AmountOverflow)?;
        let inflow = self
            .total_inflow
            .checked_add(amount)
            .ok_or(GovernanceError::AmountOverflow)?;

        self.balance = balance;
        self.total_inflow = inflow;
        self.history.push(TreasurySnapshot {
            timestamp: now,
            balance,
        });
        Ok(())
    }

    /// Check a withdrawal against the current balance.
    pub fn ensure_available(&self, amount: Amount) -> Result<(), GovernanceError> {
        if amount > self.balance {
            return Err(GovernanceError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        Ok(())
    }

    /// Debit the treasury. The balance never goes below zero.
    pub fn withdraw(&mut self, amount: Amount, now: u64) -> Result<(), GovernanceError> {
        self.ensure_available(amount)?;

        let balance = self
            .balance
            .checked_sub(amount)
            .ok_or(GovernanceError::AmountOverflow)?;
        let outflow = self
            .total_outflow
            .checked_add(amount)
            .ok_or(GovernanceError::AmountOverflow)?;

        self.balance = balance;
        self.total_outflow = outflow;
        self.history.push(TreasurySnapshot {
            timestamp: now,
            balance,
        });
        Ok(())
    }

    pub fn info(&self) -> TreasuryInfo {
        TreasuryInfo {
            balance: self.balance,
            total_inflow: self.total_inflow,
            total_outflow: self.total_outflow,
        }
    }

    /// Snapshots oldest first.
    pub fn history(&self) -> &[TreasurySnapshot] {
        &self.history
    }
}
