// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::{CliArgs, Command};

use crate::types::LedgerError;
use clap::Parser;

/// Parse command-line arguments using clap
///
/// On invalid arguments or `--help`, clap prints the message and exits.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Message printed to stderr when a command fails
///
/// Rejected input is reported separately from store and business failures.
pub fn error_message(error: &LedgerError) -> String {
    if error.is_validation() {
        format!("Invalid input: {}", error)
    } else {
        format!("Error: {}", error)
    }
}
