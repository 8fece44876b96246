//! Account and transaction identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Account number assigned by the store at creation.
///
/// Numbers start at a fixed offset (100000) and increase by one per
/// created account, so they are unique within a ledger.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AccountNumber(u32);

impl AccountNumber {
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountNumber {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(AccountNumber)
    }
}

/// Transaction identifier, 1-based and contiguous in commit order.
///
/// Because the log is append-only and nothing is ever deleted, the id of
/// a transaction doubles as its position in the log.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TransactionId(u64);

impl TransactionId {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Zero-based position of this transaction in the log, None for id 0.
    pub const fn index(&self) -> Option<usize> {
        match self.0 {
            0 => None,
            n => Some(n as usize - 1),
        }
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TransactionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(TransactionId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_number_display() {
        let number = AccountNumber::new(100000);
        assert_eq!(number.to_string(), "100000");
    }

    #[test]
    fn test_account_number_parse() {
        let number: AccountNumber = "100001".parse().unwrap();
        assert_eq!(number, AccountNumber::new(100001));
        assert!("abc".parse::<AccountNumber>().is_err());
    }

    #[test]
    fn test_transaction_id_index() {
        assert_eq!(TransactionId::new(1).index(), Some(0));
        assert_eq!(TransactionId::new(5).index(), Some(4));
        assert_eq!(TransactionId::new(0).index(), None);
    }

    #[test]
    fn test_ordering() {
        assert!(AccountNumber::new(100000) < AccountNumber::new(100001));
        assert!(TransactionId::new(1) < TransactionId::new(2));
    }
}
