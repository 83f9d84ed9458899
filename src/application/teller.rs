use chrono::{DateTime, Local};
use tracing::debug;

use crate::domain::{Account, AccountNumber, AccountSummary, Cents, LedgerError};

use super::AppError;

/// The account every teller session starts with.
pub const SEED_ACCOUNT_NUMBER: AccountNumber = 101;
pub const SEED_HOLDER: &str = "Granth";
pub const SEED_BALANCE: Cents = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Deposit,
    Withdrawal,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Deposit => "deposit",
            OperationKind::Withdrawal => "withdrawal",
        }
    }
}

/// Proof of a completed balance change.
#[derive(Debug, Clone)]
pub struct Receipt {
    pub kind: OperationKind,
    pub amount: Cents,
    pub balance: Cents,
    pub at: DateTime<Local>,
}

/// Front desk for a single account.
pub struct Teller {
    account: Account,
}

impl Default for Teller {
    fn default() -> Self {
        Self::new(Account::new(SEED_ACCOUNT_NUMBER, SEED_HOLDER, SEED_BALANCE))
    }
}

impl Teller {
    pub fn new(account: Account) -> Self {
        Self { account }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn deposit(&mut self, amount: Cents) -> Result<Receipt, AppError> {
        let result = self.account.deposit(amount);
        self.settle(OperationKind::Deposit, amount, result)
    }

    pub fn withdraw(&mut self, amount: Cents) -> Result<Receipt, AppError> {
        let result = self.account.withdraw(amount);
        self.settle(OperationKind::Withdrawal, amount, result)
    }

    pub fn balance_inquiry(&self) -> AccountSummary {
        self.account.balance_inquiry()
    }

    fn settle(
        &self,
        kind: OperationKind,
        amount: Cents,
        result: Result<Cents, LedgerError>,
    ) -> Result<Receipt, AppError> {
        match result {
            Ok(balance) => {
                debug!(
                    account = self.account.number(),
                    operation = kind.as_str(),
                    amount,
                    balance,
                    "operation applied"
                );
                Ok(Receipt {
                    kind,
                    amount,
                    balance,
                    at: Local::now(),
                })
            }
            Err(err) => {
                debug!(
                    account = self.account.number(),
                    operation = kind.as_str(),
                    amount,
                    error = %err,
                    "operation rejected"
                );
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_teller_uses_seed_account() {
        let teller = Teller::default();
        let summary = teller.balance_inquiry();
        assert_eq!(summary.number, 101);
        assert_eq!(summary.holder, "Granth");
        assert_eq!(summary.balance, 100_000);
    }

    #[test]
    fn test_receipts_carry_new_balance() {
        let mut teller = Teller::default();

        let receipt = teller.deposit(50_000).unwrap();
        assert_eq!(receipt.kind, OperationKind::Deposit);
        assert_eq!(receipt.amount, 50_000);
        assert_eq!(receipt.balance, 150_000);

        let receipt = teller.withdraw(150_000).unwrap();
        assert_eq!(receipt.kind, OperationKind::Withdrawal);
        assert_eq!(receipt.balance, 0);
    }

    #[test]
    fn test_rejections_surface_as_app_errors() {
        let mut teller = Teller::default();
        assert_eq!(
            teller.withdraw(200_000).unwrap_err(),
            AppError::Ledger(LedgerError::InsufficientFunds {
                requested: 200_000,
                balance: 100_000
            })
        );
        assert_eq!(
            teller.deposit(-500).unwrap_err(),
            AppError::Ledger(LedgerError::InvalidAmount(-500))
        );
        assert_eq!(teller.account().balance(), 100_000);
    }
}
