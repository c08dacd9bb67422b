use crate::core::config::{StoreConfig, DEFAULT_DATA_DIR};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Record transfers and deposits against Spanish IBANs and compute balances
#[derive(Parser, Debug)]
#[command(name = "iban-ledger")]
#[command(about = "Record transfers and deposits against Spanish IBANs", long_about = None)]
pub struct CliArgs {
    /// Directory holding the ledger files
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        default_value = DEFAULT_DATA_DIR,
        global = true,
        help = "Directory holding the ledger JSON files"
    )]
    pub data_dir: PathBuf,

    #[arg(long = "transfers-file", value_name = "FILE", global = true)]
    pub transfers_file: Option<PathBuf>,

    #[arg(long = "deposits-file", value_name = "FILE", global = true)]
    pub deposits_file: Option<PathBuf>,

    #[arg(long = "transactions-file", value_name = "FILE", global = true)]
    pub transactions_file: Option<PathBuf>,

    #[arg(long = "balances-file", value_name = "FILE", global = true)]
    pub balances_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Ledger operations
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Record a transfer request and print its transfer code
    Transfer {
        #[arg(long = "from", value_name = "IBAN")]
        from_iban: String,
        #[arg(long = "to", value_name = "IBAN")]
        to_iban: String,
        #[arg(long)]
        concept: String,
        /// ORDINARY, INMEDIATE or URGENT
        #[arg(long = "type", value_name = "TYPE")]
        transfer_type: String,
        /// dd/mm/yyyy
        #[arg(long)]
        date: String,
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
    },

    /// Record the deposit described by a JSON file and print its signature
    Deposit {
        #[arg(value_name = "INPUT", help = "Path to the deposit JSON file")]
        input_file: PathBuf,
    },

    /// Compute and record the balance of an account
    Balance {
        #[arg(value_name = "IBAN")]
        iban: String,
    },

    /// Print the balance history as CSV
    Balances {
        #[arg(long, value_name = "IBAN")]
        iban: Option<String>,
    },
}

impl CliArgs {
    /// Build the store locations from the CLI arguments
    ///
    /// Every file defaults to its standard name under `--data-dir`; an
    /// explicit per-file option wins over the directory.
    pub fn to_store_config(&self) -> StoreConfig {
        let defaults = StoreConfig::from_dir(&self.data_dir);
        StoreConfig {
            transfers: self.transfers_file.clone().unwrap_or(defaults.transfers),
            deposits: self.deposits_file.clone().unwrap_or(defaults.deposits),
            transactions: self
                .transactions_file
                .clone()
                .unwrap_or(defaults.transactions),
            balances: self.balances_file.clone().unwrap_or(defaults.balances),
        }
    }
}
