//! Archive - serialize a ledger to the two textual artifacts

use crate::error::PersistError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tallybank_ledger::Ledger;

/// Write the ledger artifact and the accounts artifact.
///
/// The ledger file holds one transaction per line in commit order:
/// `id, receiver, sender, amount, fingerprint` - the fingerprint of that
/// transaction, recomputed from the chain. The accounts file holds one
/// account per line, ascending by number: `number, first, last, balance`.
pub fn archive(
    ledger: &Ledger,
    ledger_path: impl AsRef<Path>,
    accounts_path: impl AsRef<Path>,
) -> Result<(), PersistError> {
    write_transactions(ledger, ledger_path.as_ref())?;
    write_accounts(ledger, accounts_path.as_ref())?;
    tracing::debug!(
        transactions = ledger.log().len(),
        accounts = ledger.accounts().len(),
        "ledger archived"
    );
    Ok(())
}

fn write_transactions(ledger: &Ledger, path: &Path) -> Result<(), PersistError> {
    let file = File::create(path).map_err(|e| PersistError::from_open(e, path))?;
    let mut writer = BufWriter::new(file);
    for transaction in ledger.log().all() {
        writeln!(
            writer,
            "{}, {}, {}, {}, {}",
            transaction.id,
            transaction.receiver,
            transaction.sender,
            transaction.amount,
            transaction.fingerprint()
        )?;
    }
    writer.flush()?;
    Ok(())
}

fn write_accounts(ledger: &Ledger, path: &Path) -> Result<(), PersistError> {
    let file = File::create(path).map_err(|e| PersistError::from_open(e, path))?;
    let mut writer = BufWriter::new(file);
    for account in ledger.accounts().iter() {
        writeln!(
            writer,
            "{}, {}, {}, {}",
            account.number, account.first, account.last, account.balance
        )?;
    }
    writer.flush()?;
    Ok(())
}
