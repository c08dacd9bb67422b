//! Core business logic module
//!
//! This module contains the ledger components:
//! - `traits` - Store abstraction the manager persists through
//! - `config` - Store locations
//! - `balance` - Balance summation over external transactions
//! - `account_manager` - Validation and persistence orchestration

pub mod account_manager;
pub mod balance;
pub mod config;
pub mod traits;

pub use account_manager::AccountManager;
pub use config::StoreConfig;
pub use traits::RecordStore;
