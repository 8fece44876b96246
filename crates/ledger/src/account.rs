//! Accounts and the account store

use crate::error::{LedgerError, LedgerResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tallybank_core::{AccountNumber, Amount};

/// First account number handed out by a fresh store
pub const NUMBER_OFFSET: u32 = 100_000;

/// Starting balance when none is given at creation
pub const DEFAULT_BALANCE: Amount = Amount::new(10_000);

/// A bank account.
///
/// Accounts do not own transaction lists; per-account history is derived
/// from the transaction log. The balance is mutated only by the transfer
/// protocol, the name fields only by an explicit rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account number, unique within a ledger
    pub number: AccountNumber,
    /// First name of the holder
    pub first: String,
    /// Surname of the holder
    pub last: String,
    /// Current balance, never negative
    pub balance: Amount,
}

impl Account {
    pub fn new(
        number: AccountNumber,
        first: impl Into<String>,
        last: impl Into<String>,
        balance: Amount,
    ) -> Self {
        Self {
            number,
            first: first.into(),
            last: last.into(),
            balance,
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} {} - ${}",
            self.number, self.first, self.last, self.balance
        )
    }
}

/// The set of accounts, keyed by account number.
///
/// A `BTreeMap` keeps enumeration in ascending number order, which both
/// the listing operations and the accounts artifact require. No operation
/// removes an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountStore {
    accounts: BTreeMap<AccountNumber, Account>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from already-numbered accounts (recover path).
    pub fn from_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        Self {
            accounts: accounts
                .into_iter()
                .map(|account| (account.number, account))
                .collect(),
        }
    }

    /// Create an account and return its assigned number.
    ///
    /// Numbers are `NUMBER_OFFSET + count`, so they are monotonically
    /// increasing while nothing is ever deleted. Never fails.
    pub fn create(
        &mut self,
        first: impl Into<String>,
        last: impl Into<String>,
        balance: Option<Amount>,
    ) -> AccountNumber {
        let number = AccountNumber::new(NUMBER_OFFSET + self.accounts.len() as u32);
        let account = Account::new(number, first, last, balance.unwrap_or(DEFAULT_BALANCE));
        self.accounts.insert(number, account);
        number
    }

    pub fn get(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.get(&number)
    }

    pub(crate) fn get_mut(&mut self, number: AccountNumber) -> Option<&mut Account> {
        self.accounts.get_mut(&number)
    }

    pub fn contains(&self, number: AccountNumber) -> bool {
        self.accounts.contains_key(&number)
    }

    /// Rename an account, keeping its number and balance.
    pub fn rename(
        &mut self,
        number: AccountNumber,
        first: impl Into<String>,
        last: impl Into<String>,
    ) -> LedgerResult<()> {
        let account = self
            .accounts
            .get_mut(&number)
            .ok_or(LedgerError::NoSuchAccount(number))?;
        account.first = first.into();
        account.last = last.into();
        Ok(())
    }

    /// All account numbers in ascending order.
    pub fn numbers(&self) -> impl Iterator<Item = AccountNumber> + '_ {
        self.accounts.keys().copied()
    }

    /// All accounts in ascending number order.
    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_assigns_sequential_numbers() {
        let mut store = AccountStore::new();
        let a = store.create("Alice", "Smith", None);
        let b = store.create("Bob", "Jones", None);
        assert_eq!(a, AccountNumber::new(100000));
        assert_eq!(b, AccountNumber::new(100001));
    }

    #[test]
    fn test_create_default_balance() {
        let mut store = AccountStore::new();
        let number = store.create("Alice", "Smith", None);
        assert_eq!(store.get(number).unwrap().balance, DEFAULT_BALANCE);
    }

    #[test]
    fn test_create_explicit_balance() {
        let mut store = AccountStore::new();
        let number = store.create("Alice", "Smith", Some(Amount::new(500)));
        assert_eq!(store.get(number).unwrap().balance, Amount::new(500));
    }

    #[test]
    fn test_rename() {
        let mut store = AccountStore::new();
        let number = store.create("Alice", "Smith", None);
        store.rename(number, "Alicia", "Brown").unwrap();
        let account = store.get(number).unwrap();
        assert_eq!(account.first, "Alicia");
        assert_eq!(account.last, "Brown");
        assert_eq!(account.balance, DEFAULT_BALANCE);
    }

    #[test]
    fn test_rename_missing_account() {
        let mut store = AccountStore::new();
        let result = store.rename(AccountNumber::new(999), "A", "B");
        assert_eq!(result, Err(LedgerError::NoSuchAccount(AccountNumber::new(999))));
    }

    #[test]
    fn test_numbers_ascending() {
        let mut store = AccountStore::new();
        for i in 0..5 {
            store.create(format!("F{i}"), format!("L{i}"), None);
        }
        let numbers: Vec<u32> = store.numbers().map(|n| n.value()).collect();
        assert_eq!(numbers, vec![100000, 100001, 100002, 100003, 100004]);
    }

    #[test]
    fn test_account_display() {
        let account = Account::new(
            AccountNumber::new(100000),
            "Alice",
            "Smith",
            Amount::new(10000),
        );
        assert_eq!(account.to_string(), "100000 - Alice Smith - $10000");
    }
}
