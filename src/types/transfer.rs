//! Transfer request types
//!
//! This module defines the transfer type enumeration and the persisted
//! transfer request record, including its derived transfer code.

use super::{content_digest, unix_seconds, Iban, LedgerError};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Transfer execution type
///
/// The wire value of [`TransferType::Immediate`] is `INMEDIATE`. Stores and
/// callers already depend on that spelling, so it is kept as-is and
/// `IMMEDIATE` is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferType {
    #[serde(rename = "ORDINARY")]
    Ordinary,
    #[serde(rename = "INMEDIATE")]
    Immediate,
    #[serde(rename = "URGENT")]
    Urgent,
}

impl TransferType {
    /// The exact string used on the wire and in the store
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferType::Ordinary => "ORDINARY",
            TransferType::Immediate => "INMEDIATE",
            TransferType::Urgent => "URGENT",
        }
    }
}

impl FromStr for TransferType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ORDINARY" => Ok(TransferType::Ordinary),
            "INMEDIATE" => Ok(TransferType::Immediate),
            "URGENT" => Ok(TransferType::Urgent),
            _ => Err(LedgerError::invalid_transfer_type(s)),
        }
    }
}

impl fmt::Display for TransferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded transfer between two accounts
///
/// Constructed only from already-validated fields; never mutated after
/// being appended to the transfer store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub from_iban: Iban,
    pub to_iban: Iban,
    pub transfer_type: TransferType,
    pub transfer_concept: String,
    /// Execution date as supplied, `dd/mm/yyyy`
    pub transfer_date: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub transfer_amount: Decimal,
    /// Creation time, UTC seconds since the epoch
    pub time_stamp: f64,
    /// SHA-256 hex digest over every other field
    pub transfer_code: String,
}

impl TransferRequest {
    /// Create a transfer request stamped with the current UTC time
    pub fn new(
        from_iban: Iban,
        to_iban: Iban,
        transfer_concept: String,
        transfer_type: TransferType,
        transfer_date: String,
        transfer_amount: Decimal,
    ) -> Self {
        Self::new_at(
            from_iban,
            to_iban,
            transfer_concept,
            transfer_type,
            transfer_date,
            transfer_amount,
            Utc::now(),
        )
    }

    /// Create a transfer request stamped with an explicit creation time
    ///
    /// The transfer code is a pure function of the arguments.
    pub fn new_at(
        from_iban: Iban,
        to_iban: Iban,
        transfer_concept: String,
        transfer_type: TransferType,
        transfer_date: String,
        transfer_amount: Decimal,
        created_at: DateTime<Utc>,
    ) -> Self {
        let time_stamp = unix_seconds(created_at);
        let transfer_code = content_digest(&[
            "TransferRequest",
            from_iban.as_str(),
            to_iban.as_str(),
            transfer_type.as_str(),
            &transfer_concept,
            &transfer_date,
            &transfer_amount.normalize().to_string(),
            &time_stamp.to_string(),
        ]);

        TransferRequest {
            from_iban,
            to_iban,
            transfer_type,
            transfer_concept,
            transfer_date,
            transfer_amount,
            time_stamp,
            transfer_code,
        }
    }

    /// Whether both requests carry the same business data
    ///
    /// Compares origin, destination, date, amount, concept and type. The
    /// timestamp and code are ignored: two submissions of identical data are
    /// duplicates even though their codes differ.
    pub fn same_business_fields(&self, other: &TransferRequest) -> bool {
        self.from_iban == other.from_iban
            && self.to_iban == other.to_iban
            && self.transfer_date == other.transfer_date
            && self.transfer_amount == other.transfer_amount
            && self.transfer_concept == other.transfer_concept
            && self.transfer_type == other.transfer_type
    }
}
