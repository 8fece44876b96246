//! Tallybank Core - Domain types
//!
//! This crate contains the fundamental types used across Tallybank:
//! - `Amount`: Non-negative integer wrapper for currency values
//! - `AccountNumber`: Type-safe account identifier
//! - `TransactionId`: 1-based position of a transaction in the log

pub mod amount;
pub mod number;

pub use amount::Amount;
pub use number::{AccountNumber, TransactionId};
