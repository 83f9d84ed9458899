use thiserror::Error;

use crate::domain::{LedgerError, MoveError};

/// Every recoverable fault either demo can report back to the user.
/// None of them end a session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid input '{input}': expected {expected}")]
    MalformedInput {
        input: String,
        expected: &'static str,
    },

    #[error("Error: {0} is not an option")]
    InvalidMenuChoice(i64),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Move(#[from] MoveError),
}
