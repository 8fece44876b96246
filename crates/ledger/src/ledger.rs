//! The ledger value: account store plus transaction log
//!
//! A `Ledger` is an explicit value owned by the caller (the command
//! layer), not process-wide state. Every mutating operation either fully
//! succeeds or leaves the ledger exactly as it was, with the single
//! documented exception of `merge`, which commits the transfers that
//! succeeded before the failing one.

use crate::account::AccountStore;
use crate::error::{LedgerError, LedgerResult};
use crate::transaction::{Transaction, TransactionLog};
use serde::{Deserialize, Serialize};
use tallybank_core::{AccountNumber, Amount, TransactionId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    accounts: AccountStore,
    log: TransactionLog,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a ledger from restored parts (recover path). The caller
    /// is responsible for having verified the log's hash chain.
    pub fn from_parts(accounts: AccountStore, log: TransactionLog) -> Self {
        Self { accounts, log }
    }

    pub fn accounts(&self) -> &AccountStore {
        &self.accounts
    }

    pub fn log(&self) -> &TransactionLog {
        &self.log
    }

    /// Create an account; `balance` defaults when None.
    pub fn create_account(
        &mut self,
        first: impl Into<String>,
        last: impl Into<String>,
        balance: Option<Amount>,
    ) -> AccountNumber {
        let number = self.accounts.create(first, last, balance);
        tracing::debug!(%number, "account created");
        number
    }

    pub fn rename_account(
        &mut self,
        number: AccountNumber,
        first: impl Into<String>,
        last: impl Into<String>,
    ) -> LedgerResult<()> {
        self.accounts.rename(number, first, last)
    }

    /// Transfer `amount` from `sender` to `receiver`.
    ///
    /// Validation order: same account, zero amount, unresolvable account,
    /// insufficient funds. All checks and the fingerprint of the new
    /// transaction are computed before the first mutation, so a failure
    /// leaves the ledger untouched and a success applies debit, credit
    /// and append together.
    pub fn transfer(
        &mut self,
        sender: AccountNumber,
        receiver: AccountNumber,
        amount: Amount,
    ) -> LedgerResult<TransactionId> {
        if sender == receiver {
            return Err(LedgerError::SameAccount);
        }
        if amount.is_zero() {
            return Err(LedgerError::InvalidAmount);
        }

        let available = self
            .accounts
            .get(sender)
            .ok_or(LedgerError::NoSuchAccount(sender))?
            .balance;
        let receiving = self
            .accounts
            .get(receiver)
            .ok_or(LedgerError::NoSuchAccount(receiver))?
            .balance;

        let debited = available
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientFunds {
                needed: amount,
                available,
            })?;
        let credited = receiving
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow(receiver))?;

        let id = TransactionId::new(self.log.len() as u64 + 1);
        let prev_fingerprint = self.log.last().map(Transaction::fingerprint);
        let transaction = Transaction {
            id,
            sender,
            receiver,
            amount,
            prev_fingerprint,
        };

        // Commit point: nothing past here can fail.
        self.accounts
            .get_mut(sender)
            .ok_or(LedgerError::NoSuchAccount(sender))?
            .balance = debited;
        self.accounts
            .get_mut(receiver)
            .ok_or(LedgerError::NoSuchAccount(receiver))?
            .balance = credited;
        self.log.append(transaction);

        tracing::debug!(%id, %sender, %receiver, %amount, "transfer committed");
        Ok(id)
    }

    /// Move the entire balance of each source account into `dest`.
    ///
    /// Rejects up front if `dest` appears among the sources or any number
    /// is unresolvable. The transfers then run in the given order; a
    /// failure (a source drained to zero mid-batch) stops the remainder
    /// but the transfers already committed stay committed. Deliberately
    /// not all-or-nothing.
    pub fn merge(
        &mut self,
        dest: AccountNumber,
        sources: &[AccountNumber],
    ) -> LedgerResult<Vec<TransactionId>> {
        if !self.accounts.contains(dest) {
            return Err(LedgerError::NoSuchAccount(dest));
        }
        for &source in sources {
            if source == dest {
                return Err(LedgerError::SameAccount);
            }
            if !self.accounts.contains(source) {
                return Err(LedgerError::NoSuchAccount(source));
            }
        }

        let mut ids = Vec::with_capacity(sources.len());
        for &source in sources {
            let balance = self
                .accounts
                .get(source)
                .ok_or(LedgerError::NoSuchAccount(source))?
                .balance;
            ids.push(self.transfer(source, dest, balance)?);
        }
        tracing::debug!(%dest, merged = ids.len(), "merge completed");
        Ok(ids)
    }

    /// Append a compensating transfer for the given transaction, with
    /// sender and receiver swapped. The original transaction is not
    /// marked; it stays visible in history.
    pub fn cancel(&mut self, id: TransactionId) -> LedgerResult<TransactionId> {
        let (sender, receiver, amount) = {
            let transaction = self
                .log
                .get(id)
                .ok_or(LedgerError::NoSuchTransaction(id))?;
            (transaction.sender, transaction.receiver, transaction.amount)
        };
        self.transfer(receiver, sender, amount)
    }
}
