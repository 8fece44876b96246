//! Tallybank CLI - Main entry point
//!
//! An interactive shell over a single in-memory ledger. Type COMMANDS at
//! the prompt for the command list.

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tallybank_cli::{execute, parse, Command};
use tallybank_ledger::Ledger;
use tallybank_persistence::recover;

#[derive(Parser)]
#[command(name = "tallybank")]
#[command(about = "Tallybank - single-process ledger shell", long_about = None)]
struct Cli {
    /// Ledger artifact to recover at startup (requires --accounts)
    #[arg(long, requires = "accounts")]
    ledger: Option<PathBuf>,

    /// Accounts artifact to recover at startup (requires --ledger)
    #[arg(long, requires = "ledger")]
    accounts: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut ledger = match (&cli.ledger, &cli.accounts) {
        (Some(ledger_file), Some(accounts_file)) => {
            let restored = recover(ledger_file, accounts_file)?;
            tracing::info!(
                accounts = restored.accounts().len(),
                transactions = restored.log().len(),
                "ledger recovered at startup"
            );
            restored
        }
        _ => Ledger::new(),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    write!(stdout, "$ ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        match parse(&line) {
            Some(Command::Exit) => {
                writeln!(stdout, "bye")?;
                break;
            }
            Some(command) => execute(&mut ledger, command, &mut stdout)?,
            None => {}
        }
        writeln!(stdout)?;
        write!(stdout, "$ ")?;
        stdout.flush()?;
    }

    Ok(())
}
