//! IBAN Ledger CLI
//!
//! Command-line front end for recording transfers and deposits and computing
//! account balances over JSON-array store files.
//!
//! # Usage
//!
//! ```bash
//! iban-ledger transfer --from ES91... --to ES60... --concept "Monthly rent payment" \
//!     --type ORDINARY --date 01/06/2030 --amount 750.00
//! iban-ledger deposit deposit.json
//! iban-ledger balance ES9121000418450200051332
//! iban-ledger --data-dir /srv/ledger balances > balances.csv
//! ```
//!
//! Results (transfer code, deposit signature, balance, CSV) go to stdout.
//! Logs go to stderr, filtered by `RUST_LOG` (default `warn`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Any ledger error. Rejected input is reported as `Invalid input: ...`,
//!   everything else as `Error: ...`

use iban_ledger::cli::{self, Command};
use iban_ledger::io::write_balances_csv;
use iban_ledger::{AccountManager, LedgerError};
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();
    let manager = AccountManager::new(args.to_store_config());

    if let Err(e) = run(&manager, args.command) {
        eprintln!("{}", cli::error_message(&e));
        process::exit(1);
    }
}

fn run(manager: &AccountManager, command: Command) -> Result<(), LedgerError> {
    match command {
        Command::Transfer {
            from_iban,
            to_iban,
            concept,
            transfer_type,
            date,
            amount,
        } => {
            let code = manager.transfer_request(
                &from_iban,
                &to_iban,
                &concept,
                &transfer_type,
                &date,
                &amount,
            )?;
            println!("{}", code);
        }
        Command::Deposit { input_file } => {
            let signature = manager.deposit_into_account(&input_file)?;
            println!("{}", signature);
        }
        Command::Balance { iban } => {
            let snapshot = manager.calculate_balance(&iban)?;
            println!("{:.2}", snapshot.balance);
        }
        Command::Balances { iban } => {
            let history = manager.balance_history(iban.as_deref())?;
            write_balances_csv(&history, &mut std::io::stdout())
                .map_err(|e| LedgerError::store_write(Path::new("<stdout>"), e))?;
        }
    }

    Ok(())
}
