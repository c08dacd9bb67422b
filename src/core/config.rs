//! Store location configuration

use std::path::{Path, PathBuf};

/// Default data directory
pub const DEFAULT_DATA_DIR: &str = "./data";

/// File names used inside a data directory
pub const TRANSFERS_FILE: &str = "transfers_store.json";
pub const DEPOSITS_FILE: &str = "deposits_store.json";
pub const TRANSACTIONS_FILE: &str = "transactions.json";
pub const BALANCES_FILE: &str = "balances.json";

/// Locations of the four ledger collections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Transfer requests (written)
    pub transfers: PathBuf,
    /// Account deposits (written)
    pub deposits: PathBuf,
    /// External transactions (read-only, must exist)
    pub transactions: PathBuf,
    /// Balance snapshots (written)
    pub balances: PathBuf,
}

impl StoreConfig {
    /// Place every collection under `dir` with its default file name
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        StoreConfig {
            transfers: dir.join(TRANSFERS_FILE),
            deposits: dir.join(DEPOSITS_FILE),
            transactions: dir.join(TRANSACTIONS_FILE),
            balances: dir.join(BALANCES_FILE),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::from_dir(DEFAULT_DATA_DIR)
    }
}
