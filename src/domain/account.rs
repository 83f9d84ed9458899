use std::fmt;

use super::{format_cents, Cents};

pub type AccountNumber = u32;

/// Rejections raised by the ledger. A rejected operation never touches the balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    InvalidAmount(Cents),
    InsufficientFunds { requested: Cents, balance: Cents },
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::InvalidAmount(amount) => write!(
                f,
                "Invalid amount: {}. Amount must be greater than zero",
                format_cents(*amount)
            ),
            LedgerError::InsufficientFunds { requested, balance } => write!(
                f,
                "Insufficient funds: requested ₹{}, current balance is ₹{}",
                format_cents(*requested),
                format_cents(*balance)
            ),
        }
    }
}

impl std::error::Error for LedgerError {}

/// Read-only view of an account, as returned by a balance inquiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub number: AccountNumber,
    pub holder: String,
    pub balance: Cents,
}

/// A single in-memory account. Number and holder are fixed at creation;
/// the balance only moves through `deposit` and `withdraw`.
#[derive(Debug, Clone)]
pub struct Account {
    number: AccountNumber,
    holder: String,
    balance: Cents,
}

impl Account {
    pub fn new(number: AccountNumber, holder: impl Into<String>, balance: Cents) -> Self {
        Self {
            number,
            holder: holder.into(),
            balance,
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn balance(&self) -> Cents {
        self.balance
    }

    /// Add a strictly positive amount and return the new balance.
    pub fn deposit(&mut self, amount: Cents) -> Result<Cents, LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::InvalidAmount(amount));
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::InvalidAmount(amount))?;
        Ok(self.balance)
    }

    /// Subtract a strictly positive amount that does not exceed the balance,
    /// and return the new balance.
    pub fn withdraw(&mut self, amount: Cents) -> Result<Cents, LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::InvalidAmount(amount));
        }
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                requested: amount,
                balance: self.balance,
            });
        }
        self.balance -= amount;
        Ok(self.balance)
    }

    pub fn balance_inquiry(&self) -> AccountSummary {
        AccountSummary {
            number: self.number,
            holder: self.holder.clone(),
            balance: self.balance,
        }
    }
}
