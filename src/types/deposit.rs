//! Account deposit types
//!
//! Defines the deposit input document and the persisted deposit record with
//! its derived signature.

use super::{content_digest, unix_seconds, Iban};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Signature algorithm recorded with every deposit
pub const DEPOSIT_ALGORITHM: &str = "SHA-256";

/// Record type tag recorded with every deposit
pub const DEPOSIT_TYPE: &str = "DEPOSIT";

/// Deposit request document, `{"IBAN": "...", "AMOUNT": "EUR dddd.dd"}`
///
/// Both keys are optional at the serde level so a missing key is reported as
/// `MissingKey` rather than a generic parse failure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DepositInput {
    #[serde(rename = "IBAN")]
    pub iban: Option<String>,
    #[serde(rename = "AMOUNT")]
    pub amount: Option<String>,
}

/// A recorded deposit into an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountDeposit {
    pub alg: String,
    pub typ: String,
    pub to_iban: Iban,
    #[serde(with = "rust_decimal::serde::float")]
    pub deposit_amount: Decimal,
    /// Creation time, UTC seconds since the epoch
    pub deposit_date: f64,
    pub deposit_signature: String,
}

impl AccountDeposit {
    /// Create a deposit stamped with the current UTC time
    pub fn new(to_iban: Iban, deposit_amount: Decimal) -> Self {
        Self::new_at(to_iban, deposit_amount, Utc::now())
    }

    /// Create a deposit stamped with an explicit creation time
    pub fn new_at(to_iban: Iban, deposit_amount: Decimal, created_at: DateTime<Utc>) -> Self {
        let deposit_date = unix_seconds(created_at);
        let deposit_signature = content_digest(&[
            DEPOSIT_ALGORITHM,
            DEPOSIT_TYPE,
            to_iban.as_str(),
            &deposit_amount.normalize().to_string(),
            &deposit_date.to_string(),
        ]);

        AccountDeposit {
            alg: DEPOSIT_ALGORITHM.to_string(),
            typ: DEPOSIT_TYPE.to_string(),
            to_iban,
            deposit_amount,
            deposit_date,
            deposit_signature,
        }
    }
}
