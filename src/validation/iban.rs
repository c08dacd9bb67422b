//! IBAN validation
//!
//! Structural check (`ES` followed by 22 digits) and ISO 7064 MOD 97-10
//! check-digit verification. Pure functions, no side effects.
//!
//! # Checksum
//!
//! 1. Replace the check digits with `00`
//! 2. Move the first four characters to the end
//! 3. Map every letter to its two-digit value (A=10 ... Z=35)
//! 4. Check digits = `98 - (number mod 97)`
//!
//! The numeral is never materialized as a big integer: the remainder is
//! folded digit by digit, which is equivalent for any length.

use crate::types::{Iban, LedgerError};
use regex::Regex;
use std::sync::LazyLock;

/// Fixed length of a Spanish IBAN
pub const IBAN_LENGTH: usize = 24;

static IBAN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ES[0-9]{22}$").expect("IBAN pattern is a valid regex")
});

/// Validate a Spanish IBAN
///
/// # Arguments
///
/// * `iban` - The candidate IBAN string
///
/// # Returns
///
/// * `Ok(Iban)` - The same string, wrapped as a validated value
/// * `Err(LedgerError::InvalidFormat)` - Not `ES` + 22 digits
/// * `Err(LedgerError::InvalidCheckDigit)` - Check digits do not match
pub fn validate_iban(iban: &str) -> Result<Iban, LedgerError> {
    check_iban_format(iban)?;

    let expected = calculate_check_digits(iban);
    let actual: u32 = iban[2..4]
        .parse()
        .map_err(|_| LedgerError::invalid_format(iban))?;

    if expected != actual {
        return Err(LedgerError::invalid_check_digit(iban, expected, actual));
    }

    Ok(Iban::new_unchecked(iban.to_string()))
}

fn check_iban_format(iban: &str) -> Result<(), LedgerError> {
    if iban.len() == IBAN_LENGTH && IBAN_PATTERN.is_match(iban) {
        Ok(())
    } else {
        Err(LedgerError::invalid_format(iban))
    }
}

/// Compute the MOD 97-10 check digits for an IBAN
///
/// The current check digits (characters 3-4) are ignored. The input must be
/// ASCII alphanumeric; callers validate the structure first.
pub fn calculate_check_digits(iban: &str) -> u32 {
    let rearranged = format!("{}{}00", &iban[4..], &iban[..2]);
    98 - mod97(&rearranged)
}

/// Remainder of the letter-mapped numeral modulo 97
fn mod97(rearranged: &str) -> u32 {
    rearranged.chars().fold(0u32, |acc, c| match c.to_digit(36) {
        // Letters map to two digits, plain digits to one
        Some(value) if value >= 10 => (acc * 100 + value) % 97,
        Some(value) => (acc * 10 + value) % 97,
        None => acc,
    })
}
