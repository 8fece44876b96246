//! Archive/recover integration tests

use std::fs;
use std::path::PathBuf;
use tallybank_core::{Amount, TransactionId};
use tallybank_ledger::Ledger;
use tallybank_persistence::{archive, recover, PersistError};
use tempfile::TempDir;

fn sample_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    let a = ledger.create_account("Alice", "Smith", Some(Amount::new(10000)));
    let b = ledger.create_account("Bob", "Jones", Some(Amount::new(10000)));
    let c = ledger.create_account("Carol", "Miller", None);
    ledger.transfer(a, b, Amount::new(4000)).unwrap();
    ledger.transfer(b, c, Amount::new(1500)).unwrap();
    ledger.transfer(c, a, Amount::new(500)).unwrap();
    ledger
}

fn paths(dir: &TempDir) -> (PathBuf, PathBuf) {
    (
        dir.path().join("ledger.txt"),
        dir.path().join("accounts.txt"),
    )
}

#[test]
fn archive_then_recover_is_observationally_equal() {
    let dir = TempDir::new().unwrap();
    let (ledger_path, accounts_path) = paths(&dir);
    let original = sample_ledger();

    archive(&original, &ledger_path, &accounts_path).unwrap();
    let recovered = recover(&ledger_path, &accounts_path).unwrap();

    assert_eq!(recovered, original);
}

#[test]
fn recovered_ledger_accepts_further_transfers() {
    let dir = TempDir::new().unwrap();
    let (ledger_path, accounts_path) = paths(&dir);
    let original = sample_ledger();
    archive(&original, &ledger_path, &accounts_path).unwrap();

    let mut recovered = recover(&ledger_path, &accounts_path).unwrap();
    let numbers: Vec<_> = recovered.accounts().numbers().collect();
    let id = recovered
        .transfer(numbers[0], numbers[1], Amount::new(100))
        .unwrap();

    // Ids continue from the restored log and the chain stays valid.
    assert_eq!(id, TransactionId::new(4));
    assert!(tallybank_ledger::hash::verify(recovered.log().all()));
}

#[test]
fn empty_ledger_round_trips() {
    let dir = TempDir::new().unwrap();
    let (ledger_path, accounts_path) = paths(&dir);
    let original = Ledger::new();

    archive(&original, &ledger_path, &accounts_path).unwrap();
    let recovered = recover(&ledger_path, &accounts_path).unwrap();
    assert!(recovered.accounts().is_empty());
    assert!(recovered.log().is_empty());
}

#[test]
fn account_numbering_continues_after_recover() {
    let dir = TempDir::new().unwrap();
    let (ledger_path, accounts_path) = paths(&dir);
    let original = sample_ledger();
    archive(&original, &ledger_path, &accounts_path).unwrap();

    let mut recovered = recover(&ledger_path, &accounts_path).unwrap();
    let next = recovered.create_account("Dave", "Brown", None);
    assert_eq!(next.value(), 100003);
}

#[test]
fn missing_files_are_no_such_file() {
    let dir = TempDir::new().unwrap();
    let (ledger_path, accounts_path) = paths(&dir);

    let result = recover(&ledger_path, &accounts_path);
    assert!(matches!(result, Err(PersistError::NoSuchFile(_))));

    // Ledger file present but accounts file missing.
    archive(&sample_ledger(), &ledger_path, dir.path().join("a.txt")).unwrap();
    let result = recover(&ledger_path, &accounts_path);
    assert!(matches!(result, Err(PersistError::NoSuchFile(_))));
}

#[test]
fn corrupting_any_transaction_field_is_detected() {
    let dir = TempDir::new().unwrap();
    let (ledger_path, accounts_path) = paths(&dir);
    let original = sample_ledger();
    archive(&original, &ledger_path, &accounts_path).unwrap();

    let pristine = fs::read_to_string(&ledger_path).unwrap();
    let lines: Vec<&str> = pristine.lines().collect();

    // Tamper each of the five fields on each record in turn.
    for line_idx in 0..lines.len() {
        for field_idx in 0..5 {
            let mut fields: Vec<String> = lines[line_idx]
                .split(',')
                .map(|f| f.trim().to_string())
                .collect();
            fields[field_idx] = match field_idx {
                // id: never in sequence
                0 => "9".to_string(),
                // receiver/sender: a different known account
                1 | 2 if fields[field_idx] != "100000" => "100000".to_string(),
                1 | 2 => "100001".to_string(),
                // amount
                3 => "999999".to_string(),
                // fingerprint
                _ => format!("{:0>64}", "f00d"),
            };
            let mut tampered: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
            tampered[line_idx] = fields.join(", ");
            fs::write(&ledger_path, tampered.join("\n") + "\n").unwrap();

            let result = recover(&ledger_path, &accounts_path);
            assert!(
                matches!(result, Err(PersistError::InvalidLedger(_))),
                "corruption of record {} field {} was not detected",
                line_idx,
                field_idx
            );
        }
    }
}

#[test]
fn malformed_records_are_invalid_ledger() {
    let dir = TempDir::new().unwrap();
    let (ledger_path, accounts_path) = paths(&dir);
    archive(&sample_ledger(), &ledger_path, &accounts_path).unwrap();

    // Wrong field count
    fs::write(&ledger_path, "1, 100001, 100000\n").unwrap();
    assert!(matches!(
        recover(&ledger_path, &accounts_path),
        Err(PersistError::InvalidLedger(_))
    ));

    // Non-numeric amount
    fs::write(&ledger_path, "1, 100001, 100000, lots, abc\n").unwrap();
    assert!(matches!(
        recover(&ledger_path, &accounts_path),
        Err(PersistError::InvalidLedger(_))
    ));

    // Unknown account reference
    fs::write(&ledger_path, "1, 555555, 100000, 100, abc\n").unwrap();
    assert!(matches!(
        recover(&ledger_path, &accounts_path),
        Err(PersistError::InvalidLedger(_))
    ));

    // Malformed accounts record
    archive(&sample_ledger(), &ledger_path, &accounts_path).unwrap();
    fs::write(&accounts_path, "100000, Alice, Smith, not-a-number\n").unwrap();
    assert!(matches!(
        recover(&ledger_path, &accounts_path),
        Err(PersistError::InvalidLedger(_))
    ));
}

#[test]
fn failed_recover_leaves_live_ledger_untouched() {
    let dir = TempDir::new().unwrap();
    let (ledger_path, accounts_path) = paths(&dir);
    let mut live = sample_ledger();
    archive(&live, &ledger_path, &accounts_path).unwrap();

    fs::write(&ledger_path, "1, 100001, 100000, 100, tampered\n").unwrap();
    let snapshot = live.clone();
    assert!(recover(&ledger_path, &accounts_path).is_err());

    // recover never mutates in place; the live value is only replaced on
    // success, so after a failure it is exactly what it was.
    assert_eq!(live, snapshot);
    let numbers: Vec<_> = live.accounts().numbers().collect();
    live.transfer(numbers[0], numbers[1], Amount::new(10)).unwrap();
}

#[test]
fn artifact_layout_matches_fixed_format() {
    let dir = TempDir::new().unwrap();
    let (ledger_path, accounts_path) = paths(&dir);
    let ledger = sample_ledger();
    archive(&ledger, &ledger_path, &accounts_path).unwrap();

    let accounts = fs::read_to_string(&accounts_path).unwrap();
    let first_line = accounts.lines().next().unwrap();
    assert_eq!(first_line, "100000, Alice, Smith, 6500");

    // Ledger records carry receiver before sender.
    let transactions = fs::read_to_string(&ledger_path).unwrap();
    let first_tx = ledger.log().get(TransactionId::new(1)).unwrap();
    let expected = format!(
        "1, {}, {}, {}, {}",
        first_tx.receiver,
        first_tx.sender,
        first_tx.amount,
        first_tx.fingerprint()
    );
    assert_eq!(transactions.lines().next().unwrap(), expected);
}
