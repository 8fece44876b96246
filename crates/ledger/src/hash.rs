//! Hash chain utilities for ledger integrity
//!
//! Every transaction carries the fingerprint of its predecessor, forming
//! a chain over the whole log. The fingerprint is SHA-256 over the
//! transaction fields, hex-encoded. It is a tamper-evidence checksum;
//! the chain structure makes no assumptions beyond determinism.

use crate::transaction::Transaction;
use sha2::{Digest, Sha256};
use tallybank_core::{AccountNumber, Amount, TransactionId};

/// Marker hashed in place of the predecessor fingerprint for the first
/// transaction in a log.
const GENESIS_MARKER: &str = "GENESIS";

/// Calculate the fingerprint of a transaction from its five fields.
///
/// Deterministic for a given input; stable across runs so archived
/// ledgers stay verifiable.
pub fn fingerprint(
    id: TransactionId,
    sender: AccountNumber,
    receiver: AccountNumber,
    amount: Amount,
    prev_fingerprint: Option<&str>,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(id.value().to_le_bytes());
    hasher.update(sender.value().to_le_bytes());
    hasher.update(receiver.value().to_le_bytes());
    hasher.update(amount.value().to_le_bytes());
    hasher.update(prev_fingerprint.unwrap_or(GENESIS_MARKER).as_bytes());
    hex::encode(hasher.finalize())
}

/// Verify the hash chain over a sequence of transactions.
///
/// - An empty sequence is valid.
/// - A single transaction is valid iff it has no predecessor fingerprint.
/// - Otherwise every transaction's declared `prev_fingerprint` must equal
///   the recomputed fingerprint of the transaction before it.
pub fn verify(transactions: &[Transaction]) -> bool {
    if transactions.len() <= 1 {
        return transactions
            .first()
            .map_or(true, |t| t.prev_fingerprint.is_none());
    }
    transactions.windows(2).all(|pair| {
        pair[1].prev_fingerprint.as_deref() == Some(pair[0].fingerprint().as_str())
    })
}
