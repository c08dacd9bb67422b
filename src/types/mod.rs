//! Types module
//!
//! Contains core data structures used throughout the ledger.
//! This module organizes types into logical submodules:
//! - `iban`: Validated IBAN value
//! - `transfer`: Transfer requests and transfer types
//! - `deposit`: Deposit input documents and deposit records
//! - `balance`: External transactions and balance snapshots
//! - `error`: Error types for the ledger

pub mod balance;
pub mod deposit;
pub mod error;
pub mod iban;
pub mod transfer;

pub use balance::{BalanceSnapshot, Transaction};
pub use deposit::{AccountDeposit, DepositInput};
pub use error::{DateRejection, LedgerError};
pub use iban::Iban;
pub use transfer::{TransferRequest, TransferType};

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// UTC seconds since the epoch, with microsecond precision
pub(crate) fn unix_seconds(at: DateTime<Utc>) -> f64 {
    at.timestamp_micros() as f64 / 1_000_000.0
}

/// SHA-256 hex digest over a sequence of fields
///
/// Fields are separated by a unit separator so `["ab", "c"]` and
/// `["a", "bc"]` hash differently.
pub(crate) fn content_digest(parts: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part.as_bytes());
        hasher.update([0x1f]);
    }
    hex::encode(hasher.finalize())
}
