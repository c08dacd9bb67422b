//! Balance-related types
//!
//! `Transaction` is produced outside this crate and only ever read here.
//! `BalanceSnapshot` is appended to the balance history, one per query.

use super::unix_seconds;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Externally maintained account movement
///
/// `amount` is accepted both as a JSON number and as a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "IBAN")]
    pub iban: String,
    pub amount: Decimal,
}

/// Balance of an account at a point in time
///
/// `BALANCE` is persisted as a JSON number, so a reloaded balance keeps only
/// the precision of an `f64` (about 15-17 significant digits). Balances with
/// more significant digits than that come back rounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    #[serde(rename = "IBAN")]
    pub iban: String,
    /// UTC seconds since the epoch
    pub time: f64,
    #[serde(rename = "BALANCE", with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

impl BalanceSnapshot {
    pub fn new(iban: impl Into<String>, balance: Decimal) -> Self {
        Self::new_at(iban, balance, Utc::now())
    }

    pub fn new_at(iban: impl Into<String>, balance: Decimal, at: DateTime<Utc>) -> Self {
        BalanceSnapshot {
            iban: iban.into(),
            time: unix_seconds(at),
            balance,
        }
    }
}
