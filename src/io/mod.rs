//! I/O module
//!
//! Handles persistence and output.
//!
//! # Components
//!
//! - `json_store` - JSON-array file stores and single-document reads
//! - `csv_format` - CSV output of the balance history

pub mod csv_format;
pub mod json_store;

pub use csv_format::write_balances_csv;
pub use json_store::{read_json, write_json, JsonStore, MissingFilePolicy};
