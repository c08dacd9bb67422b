//! Field validators for transfer and deposit requests
//!
//! Each validator is a pure predicate/normalizer over a primitive input.
//! The only non-pure input, the current UTC date, is passed explicitly to
//! [`validate_transfer_date_on`] so date rules can be tested deterministically.

use crate::types::{DateRejection, LedgerError, TransferType};
use chrono::{Datelike, NaiveDate, Utc};
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

/// Allowed concept length, inclusive
pub const CONCEPT_LENGTH: std::ops::RangeInclusive<usize> = 10..=30;

/// Allowed transfer year, inclusive
pub const TRANSFER_YEARS: std::ops::RangeInclusive<i32> = 2025..=2050;

/// Smallest transfer amount accepted (10.00)
pub const MIN_TRANSFER_AMOUNT: Decimal = Decimal::from_parts(1000, 0, 0, false, 2);

/// Largest transfer amount accepted (10000.00)
pub const MAX_TRANSFER_AMOUNT: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 2);

const DATE_FORMAT: &str = "%d/%m/%Y";

static CONCEPT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z]+( [a-zA-Z]+)+$").expect("concept pattern is a valid regex")
});

// Underconstrains days/months; calendar validity is left to the date parser
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-2][0-9]|3[0-1])/(0[0-9]|1[0-2])/[0-9]{4}$")
        .expect("date pattern is a valid regex")
});

static DEPOSIT_AMOUNT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^EUR [0-9]{4}\.[0-9]{2}$").expect("deposit amount pattern is a valid regex")
});

/// Validate a transfer concept
///
/// At least two words of ASCII letters separated by single spaces,
/// 10 to 30 characters in total.
pub fn validate_concept(concept: &str) -> Result<(), LedgerError> {
    if CONCEPT_LENGTH.contains(&concept.len()) && CONCEPT_PATTERN.is_match(concept) {
        Ok(())
    } else {
        Err(LedgerError::invalid_concept(concept))
    }
}

/// Validate a transfer type, returning the parsed value
pub fn validate_transfer_type(transfer_type: &str) -> Result<TransferType, LedgerError> {
    transfer_type.parse()
}

/// Validate a transfer date against today's UTC date
pub fn validate_transfer_date(date: &str) -> Result<NaiveDate, LedgerError> {
    validate_transfer_date_on(date, Utc::now().date_naive())
}

/// Validate a transfer date against an explicit "today"
///
/// # Errors
///
/// Returns `InvalidDate` with:
/// - `BadFormat` if the text is not `dd/mm/yyyy` or not a real calendar date
/// - `PastDate` if the date is before `today`
/// - `YearOutOfRange` if the year is outside 2025..=2050
pub fn validate_transfer_date_on(date: &str, today: NaiveDate) -> Result<NaiveDate, LedgerError> {
    if !DATE_PATTERN.is_match(date) {
        return Err(LedgerError::invalid_date(date, DateRejection::BadFormat));
    }

    let parsed = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| LedgerError::invalid_date(date, DateRejection::BadFormat))?;

    if parsed < today {
        return Err(LedgerError::invalid_date(date, DateRejection::PastDate));
    }

    if !TRANSFER_YEARS.contains(&parsed.year()) {
        return Err(LedgerError::invalid_date(
            date,
            DateRejection::YearOutOfRange,
        ));
    }

    Ok(parsed)
}

/// Validate a transfer amount
///
/// The text must parse as a decimal number with at most two significant
/// fractional digits (trailing zeros are not significant, so `10.000` is
/// accepted as `10.00`) and lie within 10.00..=10000.00.
///
/// # Returns
///
/// The amount rounded to its two-decimal form.
pub fn validate_transfer_amount(amount: &str) -> Result<Decimal, LedgerError> {
    let value = Decimal::from_str(amount.trim())
        .map_err(|_| LedgerError::invalid_amount(amount))?;

    if value.normalize().scale() > 2 {
        return Err(LedgerError::invalid_amount(amount));
    }

    if value < MIN_TRANSFER_AMOUNT || value > MAX_TRANSFER_AMOUNT {
        return Err(LedgerError::invalid_amount(amount));
    }

    let mut value = value.normalize();
    value.rescale(2);
    Ok(value)
}

/// Validate a deposit amount of the form `EUR dddd.dd`
///
/// # Errors
///
/// - `InvalidDepositAmount` if the text does not match the literal pattern
/// - `ZeroDeposit` if the numeric value is zero
pub fn validate_deposit_amount(amount: &str) -> Result<Decimal, LedgerError> {
    if !DEPOSIT_AMOUNT_PATTERN.is_match(amount) {
        return Err(LedgerError::invalid_deposit_amount(amount));
    }

    let value = Decimal::from_str(&amount[4..])
        .map_err(|_| LedgerError::invalid_deposit_amount(amount))?;

    if value.is_zero() {
        return Err(LedgerError::ZeroDeposit);
    }

    Ok(value)
}
