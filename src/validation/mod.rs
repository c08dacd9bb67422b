//! Validation module
//!
//! Pure validators applied to primitive inputs before any record is built:
//! - `iban` - IBAN structure and MOD 97-10 check digits
//! - `fields` - concept, transfer type, date, transfer amount, deposit amount

pub mod fields;
pub mod iban;

pub use fields::{
    validate_concept, validate_deposit_amount, validate_transfer_amount, validate_transfer_date,
    validate_transfer_date_on, validate_transfer_type,
};
pub use iban::validate_iban;
