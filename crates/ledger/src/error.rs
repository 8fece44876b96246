//! Ledger errors

use tallybank_core::{AccountNumber, Amount, TransactionId};
use thiserror::Error;

/// Errors that can occur in ledger operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("no such account: {0}")]
    NoSuchAccount(AccountNumber),

    #[error("no such transaction: {0}")]
    NoSuchTransaction(TransactionId),

    #[error("sender cannot be receiver")]
    SameAccount,

    #[error("amount must be positive")]
    InvalidAmount,

    #[error("insufficient funds: need {needed}, available {available}")]
    InsufficientFunds { needed: Amount, available: Amount },

    #[error("balance overflow on account {0}")]
    BalanceOverflow(AccountNumber),
}

/// Result type alias with LedgerError
pub type LedgerResult<T> = Result<T, LedgerError>;
