//! Transactions and the append-only transaction log

use crate::hash;
use serde::{Deserialize, Serialize};
use std::fmt;
use tallybank_core::{AccountNumber, Amount, TransactionId};

/// A committed value transfer between two accounts.
///
/// Immutable once created. `prev_fingerprint` is the fingerprint of the
/// transaction immediately before this one in the log, or `None` for the
/// first transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Sequence number, 1-based and contiguous in commit order
    pub id: TransactionId,
    /// Account the amount was debited from
    pub sender: AccountNumber,
    /// Account the amount was credited to
    pub receiver: AccountNumber,
    /// Transferred amount, strictly positive
    pub amount: Amount,
    /// Fingerprint of the predecessor transaction, None for the first
    pub prev_fingerprint: Option<String>,
}

impl Transaction {
    /// Fingerprint of this transaction, recomputed from its fields.
    pub fn fingerprint(&self) -> String {
        hash::fingerprint(
            self.id,
            self.sender,
            self.receiver,
            self.amount,
            self.prev_fingerprint.as_deref(),
        )
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} -> {} | ${} | {}",
            self.id,
            self.sender,
            self.receiver,
            self.amount,
            self.fingerprint()
        )
    }
}

/// Append-only ordered sequence of committed transactions.
///
/// The log is the single authoritative source for per-account history;
/// the total/outgoing/incoming views are filters over it, never stored
/// separately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionLog {
    entries: Vec<Transaction>,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, transaction: Transaction) {
        self.entries.push(transaction);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a transaction by id.
    ///
    /// Ids are contiguous and 1-based with no gaps, so the id doubles as
    /// a position into the log.
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.entries.get(id.index()?)
    }

    pub fn last(&self) -> Option<&Transaction> {
        self.entries.last()
    }

    /// All transactions in chronological (commit) order.
    pub fn all(&self) -> &[Transaction] {
        &self.entries
    }

    /// Transactions where the account is sender or receiver.
    pub fn for_account(&self, number: AccountNumber) -> Vec<&Transaction> {
        self.entries
            .iter()
            .filter(|t| t.sender == number || t.receiver == number)
            .collect()
    }

    /// Transactions where the account is the sender.
    pub fn outgoing_for(&self, number: AccountNumber) -> Vec<&Transaction> {
        self.entries.iter().filter(|t| t.sender == number).collect()
    }

    /// Transactions where the account is the receiver.
    pub fn incoming_for(&self, number: AccountNumber) -> Vec<&Transaction> {
        self.entries
            .iter()
            .filter(|t| t.receiver == number)
            .collect()
    }
}
