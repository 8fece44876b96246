//! Recover - restore a ledger from the textual artifacts
//!
//! Parsing never touches live state: the caller receives a freshly built
//! `Ledger` and swaps it in wholesale, so a failed recovery leaves the
//! running ledger exactly as it was.

use crate::error::PersistError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;
use tallybank_core::{AccountNumber, Amount, TransactionId};
use tallybank_ledger::{hash, Account, AccountStore, Ledger, Transaction, TransactionLog};

/// Restore a ledger from the accounts and ledger artifacts.
///
/// Accounts parse first into a fresh store; transaction records follow in
/// file order, each one's predecessor fingerprint taken from the
/// fingerprint stored on the line before it (absent for the first). The
/// restored log is accepted only if the recomputed fingerprint of the
/// last transaction matches the stored one and the full chain verifies;
/// anything else is `InvalidLedger`.
pub fn recover(
    ledger_path: impl AsRef<Path>,
    accounts_path: impl AsRef<Path>,
) -> Result<Ledger, PersistError> {
    let accounts = read_accounts(accounts_path.as_ref())?;
    let (log, stored_fingerprints) = read_transactions(ledger_path.as_ref(), &accounts)?;

    if let (Some(last), Some(stored)) = (log.last(), stored_fingerprints.last()) {
        if last.fingerprint() != *stored {
            tracing::warn!("recover rejected: last fingerprint mismatch");
            return Err(PersistError::InvalidLedger(
                "stored fingerprint of last transaction does not match the rebuilt chain".into(),
            ));
        }
    }
    if !hash::verify(log.all()) {
        tracing::warn!("recover rejected: hash chain verification failed");
        return Err(PersistError::InvalidLedger(
            "hash chain verification failed".into(),
        ));
    }

    tracing::debug!(
        transactions = log.len(),
        accounts = accounts.len(),
        "ledger recovered"
    );
    Ok(Ledger::from_parts(accounts, log))
}

fn read_accounts(path: &Path) -> Result<AccountStore, PersistError> {
    let file = File::open(path).map_err(|e| PersistError::from_open(e, path))?;
    let reader = BufReader::new(file);

    let mut accounts = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_record(&line, 4, "account", line_no)?;
        accounts.push(Account::new(
            parse_field::<AccountNumber>(fields[0], "account number", line_no)?,
            fields[1],
            fields[2],
            parse_field::<Amount>(fields[3], "balance", line_no)?,
        ));
    }
    Ok(AccountStore::from_accounts(accounts))
}

/// Read the ledger artifact, rebuilding each transaction's predecessor
/// fingerprint from the previous record. Returns the log together with
/// the fingerprints as stored in the file, in order.
fn read_transactions(
    path: &Path,
    accounts: &AccountStore,
) -> Result<(TransactionLog, Vec<String>), PersistError> {
    let file = File::open(path).map_err(|e| PersistError::from_open(e, path))?;
    let reader = BufReader::new(file);

    let mut log = TransactionLog::new();
    let mut stored_fingerprints: Vec<String> = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        // Persisted field order is id, receiver, sender, amount, fingerprint.
        let fields = split_record(&line, 5, "transaction", line_no)?;
        let id = parse_field::<TransactionId>(fields[0], "transaction id", line_no)?;
        let receiver = parse_field::<AccountNumber>(fields[1], "receiver", line_no)?;
        let sender = parse_field::<AccountNumber>(fields[2], "sender", line_no)?;
        let amount = parse_field::<Amount>(fields[3], "amount", line_no)?;

        if id.value() != log.len() as u64 + 1 {
            return Err(PersistError::InvalidLedger(format!(
                "transaction id {} out of sequence at line {}",
                id,
                line_no + 1
            )));
        }
        for number in [sender, receiver] {
            if !accounts.contains(number) {
                return Err(PersistError::InvalidLedger(format!(
                    "transaction {} references unknown account {}",
                    id, number
                )));
            }
        }

        let prev_fingerprint = stored_fingerprints.last().cloned();
        stored_fingerprints.push(fields[4].to_string());
        log.append(Transaction {
            id,
            sender,
            receiver,
            amount,
            prev_fingerprint,
        });
    }
    Ok((log, stored_fingerprints))
}

fn split_record<'a>(
    line: &'a str,
    expected: usize,
    kind: &str,
    line_no: usize,
) -> Result<Vec<&'a str>, PersistError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != expected {
        return Err(PersistError::InvalidLedger(format!(
            "malformed {} record at line {}: expected {} fields, got {}",
            kind,
            line_no + 1,
            expected,
            fields.len()
        )));
    }
    Ok(fields)
}

fn parse_field<T: FromStr>(field: &str, name: &str, line_no: usize) -> Result<T, PersistError> {
    field.parse::<T>().map_err(|_| {
        PersistError::InvalidLedger(format!(
            "malformed {} '{}' at line {}",
            name,
            field,
            line_no + 1
        ))
    })
}
