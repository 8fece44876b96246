//! Tallybank Ledger - Single-process ledger engine
//!
//! This is the HEART of Tallybank. All account state changes go through
//! this crate.
//!
//! # Key Types
//! - `Ledger`: Account store plus hash-chained transaction log, owned by
//!   the caller
//! - `Account` / `AccountStore`: Accounts keyed by account number
//! - `Transaction` / `TransactionLog`: Append-only commit history
//! - `hash`: Fingerprint and chain verification

pub mod account;
pub mod error;
pub mod hash;
pub mod ledger;
pub mod transaction;

pub use account::{Account, AccountStore, DEFAULT_BALANCE, NUMBER_OFFSET};
pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
pub use transaction::{Transaction, TransactionLog};
