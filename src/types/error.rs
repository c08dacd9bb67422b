//! Error types for the IBAN ledger
//!
//! This module defines every error that can abort a ledger operation.
//! Messages are descriptive and meant to be surfaced verbatim to the caller.
//!
//! # Error Categories
//!
//! - **Validation Errors**: IBAN format/check digit, concept, transfer type,
//!   date, amounts. Always raised before anything is persisted.
//! - **Business Errors**: duplicate transfers, unknown IBANs, zero deposits
//! - **Store Errors**: missing required store, malformed JSON, read/write failures
//!
//! None of these are retried internally; all are terminal for the current operation.

use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Reason a transfer date was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRejection {
    /// Not `dd/mm/yyyy` or not a real calendar date
    BadFormat,
    /// Earlier than the current UTC date
    PastDate,
    /// Year outside 2025..=2050
    YearOutOfRange,
}

impl fmt::Display for DateRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateRejection::BadFormat => write!(f, "Invalid date format"),
            DateRejection::YearOutOfRange => {
                write!(f, "Invalid date format, year must be within 2025-2050")
            }
            DateRejection::PastDate => write!(f, "Transfer date must be today or later."),
        }
    }
}

/// Main error type for the ledger
///
/// Each variant carries the context needed to diagnose the failure
/// (offending value, store path, missing key).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// IBAN is not `ES` followed by 22 digits
    #[error("Invalid IBAN format: '{iban}'")]
    InvalidFormat {
        /// The rejected IBAN string
        iban: String,
    },

    /// IBAN check digits do not match the MOD-97-10 checksum
    #[error("Invalid IBAN control digit: '{iban}' (expected {expected:02}, found {actual:02})")]
    InvalidCheckDigit {
        /// The rejected IBAN string
        iban: String,
        /// Check digits computed from the rest of the IBAN
        expected: u32,
        /// Check digits present in the IBAN
        actual: u32,
    },

    /// Transfer concept does not satisfy the length/word rules
    #[error("Invalid concept format: '{concept}'")]
    InvalidConcept {
        /// The rejected concept
        concept: String,
    },

    /// Transfer type is not one of the known values
    #[error("Invalid transfer type: '{transfer_type}'")]
    InvalidTransferType {
        /// The rejected transfer type string
        transfer_type: String,
    },

    /// Transfer date rejected
    #[error("{reason}: '{date}'")]
    InvalidDate {
        /// The rejected date string
        date: String,
        /// Which date rule failed
        reason: DateRejection,
    },

    /// Transfer amount malformed, too precise or out of range
    #[error("Invalid transfer amount: '{amount}'")]
    InvalidAmount {
        /// The rejected amount text
        amount: String,
    },

    /// Deposit amount does not match `EUR dddd.dd`
    #[error("Error - Invalid deposit amount: '{amount}'")]
    InvalidDepositAmount {
        /// The rejected amount text
        amount: String,
    },

    /// Deposit amount is zero
    #[error("Error - Deposit must be greater than 0")]
    ZeroDeposit,

    /// Deposit input lacks a required key
    #[error("Error - Invalid Key in JSON: missing '{key}'")]
    MissingKey {
        /// Name of the missing key
        key: String,
    },

    /// A transfer with the same business fields is already recorded
    #[error("Duplicated transfer in transfer list")]
    DuplicateTransfer,

    /// No transaction references the requested IBAN
    #[error("IBAN not found: '{iban}'")]
    IbanNotFound {
        /// The IBAN that was looked up
        iban: String,
    },

    /// Summing an account's transactions exceeds the decimal range
    #[error("Arithmetic overflow in {operation} for IBAN '{iban}'")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// The IBAN being summed
        iban: String,
    },

    /// A required store file does not exist
    #[error("Wrong file or file path: {path}")]
    StoreNotFound {
        /// Path of the missing file
        path: String,
    },

    /// A store file is not valid JSON of the expected shape
    #[error("JSON Decode Error - Wrong JSON Format in {path}: {message}")]
    MalformedStore {
        /// Path of the offending file
        path: String,
        /// Parser message
        message: String,
    },

    /// A store file exists but could not be read
    #[error("Error reading JSON file {path}: {message}")]
    StoreReadError {
        /// Path of the file
        path: String,
        /// Underlying I/O message
        message: String,
    },

    /// A store file could not be written
    #[error("Error writing to JSON file {path}: {message}")]
    StoreWriteError {
        /// Path of the file
        path: String,
        /// Underlying I/O or serialization message
        message: String,
    },
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InvalidFormat error
    pub fn invalid_format(iban: &str) -> Self {
        LedgerError::InvalidFormat {
            iban: iban.to_string(),
        }
    }

    /// Create an InvalidCheckDigit error
    pub fn invalid_check_digit(iban: &str, expected: u32, actual: u32) -> Self {
        LedgerError::InvalidCheckDigit {
            iban: iban.to_string(),
            expected,
            actual,
        }
    }

    /// Create an InvalidConcept error
    pub fn invalid_concept(concept: &str) -> Self {
        LedgerError::InvalidConcept {
            concept: concept.to_string(),
        }
    }

    /// Create an InvalidTransferType error
    pub fn invalid_transfer_type(transfer_type: &str) -> Self {
        LedgerError::InvalidTransferType {
            transfer_type: transfer_type.to_string(),
        }
    }

    /// Create an InvalidDate error
    pub fn invalid_date(date: &str, reason: DateRejection) -> Self {
        LedgerError::InvalidDate {
            date: date.to_string(),
            reason,
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str) -> Self {
        LedgerError::InvalidAmount {
            amount: amount.to_string(),
        }
    }

    /// Create an InvalidDepositAmount error
    pub fn invalid_deposit_amount(amount: &str) -> Self {
        LedgerError::InvalidDepositAmount {
            amount: amount.to_string(),
        }
    }

    /// Create a MissingKey error
    pub fn missing_key(key: &str) -> Self {
        LedgerError::MissingKey {
            key: key.to_string(),
        }
    }

    /// Create an IbanNotFound error
    pub fn iban_not_found(iban: &str) -> Self {
        LedgerError::IbanNotFound {
            iban: iban.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, iban: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            iban: iban.to_string(),
        }
    }

    /// Create a StoreNotFound error
    pub fn store_not_found(path: &Path) -> Self {
        LedgerError::StoreNotFound {
            path: path.display().to_string(),
        }
    }

    /// Create a MalformedStore error
    pub fn malformed_store(path: &Path, message: impl fmt::Display) -> Self {
        LedgerError::MalformedStore {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }

    /// Create a StoreReadError error
    pub fn store_read(path: &Path, message: impl fmt::Display) -> Self {
        LedgerError::StoreReadError {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }

    /// Create a StoreWriteError error
    pub fn store_write(path: &Path, message: impl fmt::Display) -> Self {
        LedgerError::StoreWriteError {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }

    /// Whether the error was raised by input validation, before any store access
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LedgerError::InvalidFormat { .. }
                | LedgerError::InvalidCheckDigit { .. }
                | LedgerError::InvalidConcept { .. }
                | LedgerError::InvalidTransferType { .. }
                | LedgerError::InvalidDate { .. }
                | LedgerError::InvalidAmount { .. }
                | LedgerError::InvalidDepositAmount { .. }
                | LedgerError::ZeroDeposit
                | LedgerError::MissingKey { .. }
        )
    }
}
