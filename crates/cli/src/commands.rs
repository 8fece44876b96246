//! Interactive command parsing and dispatch
//!
//! The shell speaks the classic banker command set. Command words are
//! case-insensitive; lines that do not parse are ignored, matching the
//! reference shell. All ledger work is delegated to the ledger,
//! persistence and reports crates; this module only parses and prints.

use std::io::{self, Write};
use std::path::PathBuf;
use tallybank_core::{AccountNumber, Amount, TransactionId};
use tallybank_ledger::{Ledger, LedgerError};
use tallybank_persistence::{archive, recover, PersistError};
use tallybank_reports::{to_json, BalanceReport};

pub const HELP: &str = "\
EXIT exit from application
COMMANDS display the command list

LIST ACCOUNTS displays all accounts in system
LIST TRANSACTIONS displays all transactions in system

DETAILS <accno> displays all details about bank account
BALANCE <accno> displays the current balance of bank account

HISTORY <accno> displays all transactions involving an account
OUTGOING <accno> displays all transactions paid by account
INCOMING <accno> displays all transactions received by account

CREATE <first> <last> [<balance>] creates a bank account
RENAME <accno> <first> <last> renames a bank account

PAY <sender> <receiver> <amount> transfers money between account
TRANSACTION <id> displays the transaction details
CANCEL <id> makes a copy of the transaction with receiver/sender swapped

ARCHIVE <ledgerFile> <accountFile> stores the transaction history as a ledger
RECOVER <ledgerFile> <accountFile> restores a ledger

MERGE <accno ...> transfers all funds from listed accounts into the first account

MAX displays the highest balance from all accounts
MIN displays the lowest balance from all accounts
MEAN displays the average balance
MEDIAN displays the median balance
TOTAL displays the amount of money stored by bank
REPORT displays all balance statistics as JSON";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Commands,
    Exit,
    ListAccounts,
    ListTransactions,
    Details(AccountNumber),
    Balance(AccountNumber),
    History(AccountNumber),
    Outgoing(AccountNumber),
    Incoming(AccountNumber),
    Create {
        first: String,
        last: String,
        balance: Option<Amount>,
    },
    Rename {
        number: AccountNumber,
        first: String,
        last: String,
    },
    Pay {
        sender: AccountNumber,
        receiver: AccountNumber,
        // Signed so a non-positive amount reaches the validation message
        // instead of failing to parse.
        amount: i64,
    },
    Transaction(TransactionId),
    Cancel(TransactionId),
    Archive {
        ledger_file: PathBuf,
        accounts_file: PathBuf,
    },
    Recover {
        ledger_file: PathBuf,
        accounts_file: PathBuf,
    },
    Merge {
        dest: AccountNumber,
        sources: Vec<AccountNumber>,
    },
    Max,
    Min,
    Mean,
    Median,
    Total,
    Report,
}

/// Parse one input line. Returns None for blank or unrecognized input.
pub fn parse(line: &str) -> Option<Command> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let (&word, args) = words.split_first()?;
    let word = word.to_uppercase();

    match (word.as_str(), args.len()) {
        ("EXIT", 0) => Some(Command::Exit),
        ("COMMANDS", 0) => Some(Command::Commands),
        ("MAX", 0) => Some(Command::Max),
        ("MIN", 0) => Some(Command::Min),
        ("MEAN", 0) => Some(Command::Mean),
        ("MEDIAN", 0) => Some(Command::Median),
        ("TOTAL", 0) => Some(Command::Total),
        ("REPORT", 0) => Some(Command::Report),
        ("LIST", 1) => match args[0].to_uppercase().as_str() {
            "ACCOUNTS" => Some(Command::ListAccounts),
            "TRANSACTIONS" => Some(Command::ListTransactions),
            _ => None,
        },
        ("DETAILS", 1) => Some(Command::Details(args[0].parse().ok()?)),
        ("BALANCE", 1) => Some(Command::Balance(args[0].parse().ok()?)),
        ("HISTORY", 1) => Some(Command::History(args[0].parse().ok()?)),
        ("OUTGOING", 1) => Some(Command::Outgoing(args[0].parse().ok()?)),
        ("INCOMING", 1) => Some(Command::Incoming(args[0].parse().ok()?)),
        ("TRANSACTION", 1) => Some(Command::Transaction(args[0].parse().ok()?)),
        ("CANCEL", 1) => Some(Command::Cancel(args[0].parse().ok()?)),
        ("CREATE", 2) => Some(Command::Create {
            first: args[0].to_string(),
            last: args[1].to_string(),
            balance: None,
        }),
        ("CREATE", 3) => Some(Command::Create {
            first: args[0].to_string(),
            last: args[1].to_string(),
            balance: Some(args[2].parse().ok()?),
        }),
        ("RENAME", 3) => Some(Command::Rename {
            number: args[0].parse().ok()?,
            first: args[1].to_string(),
            last: args[2].to_string(),
        }),
        ("PAY", 3) => Some(Command::Pay {
            sender: args[0].parse().ok()?,
            receiver: args[1].parse().ok()?,
            amount: args[2].parse().ok()?,
        }),
        ("ARCHIVE", 2) => Some(Command::Archive {
            ledger_file: PathBuf::from(args[0]),
            accounts_file: PathBuf::from(args[1]),
        }),
        ("RECOVER", 2) => Some(Command::Recover {
            ledger_file: PathBuf::from(args[0]),
            accounts_file: PathBuf::from(args[1]),
        }),
        ("MERGE", n) if n >= 2 => {
            let mut numbers = args.iter().map(|a| a.parse::<AccountNumber>());
            let dest = numbers.next()?.ok()?;
            let sources: Vec<AccountNumber> = numbers.collect::<Result<_, _>>().ok()?;
            Some(Command::Merge { dest, sources })
        }
        _ => None,
    }
}

/// Run one command against the ledger, writing the outcome to `out`.
pub fn execute(ledger: &mut Ledger, command: Command, out: &mut impl Write) -> io::Result<()> {
    match command {
        Command::Exit => writeln!(out, "bye"),
        Command::Commands => writeln!(out, "{HELP}"),

        Command::ListAccounts => {
            if ledger.accounts().is_empty() {
                writeln!(out, "no accounts")
            } else {
                for number in ledger.accounts().numbers() {
                    writeln!(out, "{number}")?;
                }
                Ok(())
            }
        }
        Command::ListTransactions => {
            if ledger.log().is_empty() {
                writeln!(out, "no transactions")
            } else {
                for transaction in ledger.log().all() {
                    writeln!(out, "{transaction}")?;
                }
                Ok(())
            }
        }

        Command::Details(number) => match ledger.accounts().get(number) {
            Some(account) => writeln!(out, "{account}"),
            None => writeln!(out, "no such account"),
        },
        Command::Balance(number) => match ledger.accounts().get(number) {
            Some(account) => writeln!(out, "${}", account.balance),
            None => writeln!(out, "no such account"),
        },

        Command::History(number) => {
            write_filtered(out, ledger, number, "no history", |ledger| {
                ledger.log().for_account(number)
            })
        }
        Command::Outgoing(number) => {
            write_filtered(out, ledger, number, "no outgoing", |ledger| {
                ledger.log().outgoing_for(number)
            })
        }
        Command::Incoming(number) => {
            write_filtered(out, ledger, number, "no incoming", |ledger| {
                ledger.log().incoming_for(number)
            })
        }

        Command::Create {
            first,
            last,
            balance,
        } => {
            ledger.create_account(first, last, balance);
            writeln!(out, "success")
        }
        Command::Rename {
            number,
            first,
            last,
        } => match ledger.rename_account(number, first, last) {
            Ok(()) => writeln!(out, "success"),
            Err(e) => writeln!(out, "{}", ledger_message(&e)),
        },

        Command::Pay {
            sender,
            receiver,
            amount,
        } => {
            if amount <= 0 {
                return writeln!(out, "amount must be positive");
            }
            match ledger.transfer(sender, receiver, Amount::new(amount as u64)) {
                Ok(_) => writeln!(out, "success"),
                Err(e) => writeln!(out, "{}", ledger_message(&e)),
            }
        }
        Command::Transaction(id) => match ledger.log().get(id) {
            Some(transaction) => writeln!(out, "{transaction}"),
            None => writeln!(out, "no such transaction"),
        },
        Command::Cancel(id) => match ledger.cancel(id) {
            Ok(_) => writeln!(out, "success"),
            Err(e) => writeln!(out, "{}", ledger_message(&e)),
        },

        Command::Archive {
            ledger_file,
            accounts_file,
        } => match archive(ledger, &ledger_file, &accounts_file) {
            Ok(()) => writeln!(out, "success"),
            Err(e) => writeln!(out, "{}", persist_message(&e)),
        },
        Command::Recover {
            ledger_file,
            accounts_file,
        } => match recover(&ledger_file, &accounts_file) {
            Ok(recovered) => {
                // Wholesale swap: both halves replaced together.
                *ledger = recovered;
                writeln!(out, "success")
            }
            Err(e) => writeln!(out, "{}", persist_message(&e)),
        },

        Command::Merge { dest, sources } => match ledger.merge(dest, &sources) {
            Ok(_) => writeln!(out, "success"),
            Err(e) => writeln!(out, "{}", ledger_message(&e)),
        },

        Command::Max => write_stat(out, ledger, |r| r.max),
        Command::Min => write_stat(out, ledger, |r| r.min),
        Command::Mean => write_stat(out, ledger, |r| r.mean),
        Command::Median => write_stat(out, ledger, |r| r.median),
        Command::Total => write_stat(out, ledger, |r| r.total),
        Command::Report => match BalanceReport::compute(ledger.accounts()) {
            Some(report) => match to_json(&report) {
                Ok(json) => writeln!(out, "{json}"),
                Err(e) => writeln!(out, "report failed: {e}"),
            },
            None => writeln!(out, "no accounts"),
        },
    }
}

fn write_filtered<'a, F>(
    out: &mut impl Write,
    ledger: &'a Ledger,
    number: AccountNumber,
    empty_message: &str,
    select: F,
) -> io::Result<()>
where
    F: FnOnce(&'a Ledger) -> Vec<&'a tallybank_ledger::Transaction>,
{
    if !ledger.accounts().contains(number) {
        return writeln!(out, "no such account");
    }
    let transactions = select(ledger);
    if transactions.is_empty() {
        writeln!(out, "{empty_message}")
    } else {
        for transaction in transactions {
            writeln!(out, "{transaction}")?;
        }
        Ok(())
    }
}

fn write_stat(
    out: &mut impl Write,
    ledger: &Ledger,
    select: impl FnOnce(&BalanceReport) -> Amount,
) -> io::Result<()> {
    match BalanceReport::compute(ledger.accounts()) {
        Some(report) => writeln!(out, "${}", select(&report)),
        None => writeln!(out, "no accounts"),
    }
}

fn ledger_message(err: &LedgerError) -> &'static str {
    match err {
        LedgerError::NoSuchAccount(_) => "no such account",
        LedgerError::NoSuchTransaction(_) => "no such transaction",
        LedgerError::SameAccount => "sender cannot be receiver",
        LedgerError::InvalidAmount => "amount must be positive",
        LedgerError::InsufficientFunds { .. } => "insufficient funds",
        LedgerError::BalanceOverflow(_) => "balance overflow",
    }
}

fn persist_message(err: &PersistError) -> &'static str {
    match err {
        PersistError::NoSuchFile(_) | PersistError::Io(_) => "no such file",
        PersistError::InvalidLedger(_) => "invalid ledger",
    }
}
