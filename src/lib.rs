//! IBAN Ledger Library
//! # Overview
//!
//! This library validates and records monetary movements against Spanish IBAN
//! accounts and computes per-account balances. Every collection is persisted
//! as an append-only JSON array in its own file.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Iban, TransferRequest, AccountDeposit, etc.)
//! - [`validation`] - IBAN checksum and field validators
//! - [`io`] - JSON-array stores and CSV output
//! - [`core`] - Business logic components:
//!   - [`core::account_manager`] - Validation and persistence orchestration
//!   - [`core::traits`] - Store abstraction
//!   - [`core::config`] - Store locations
//! - [`cli`] - CLI arguments parsing
//!
//! # Collections
//!
//! - **transfers**: Transfer requests; duplicates (same six business fields) rejected
//! - **deposits**: Account deposits; never deduplicated
//! - **transactions**: External movements, read-only here and required to exist
//! - **balances**: One balance snapshot appended per balance query
//!
//! # Validation
//!
//! - IBAN: `ES` + 22 digits, MOD 97-10 check digits
//! - Concept: 10-30 characters, two or more words of letters
//! - Transfer type: `ORDINARY`, `INMEDIATE` or `URGENT`
//! - Date: `dd/mm/yyyy`, today or later (UTC), year 2025-2050
//! - Transfer amount: at most 2 decimals, 10.00-10000.00
//! - Deposit amount: `EUR dddd.dd`, greater than zero

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;
pub mod validation;

pub use core::{AccountManager, RecordStore, StoreConfig};
pub use io::{JsonStore, MissingFilePolicy};
pub use types::{
    AccountDeposit, BalanceSnapshot, DateRejection, Iban, LedgerError, Transaction,
    TransferRequest, TransferType,
};
pub use validation::validate_iban;
