//! Balance summation over external transactions

use crate::types::{LedgerError, Transaction};
use rust_decimal::Decimal;

/// Sum the amounts of every transaction on `iban`
///
/// Returns `Ok(None)` if no transaction matches, which is distinct from a
/// matched balance of zero.
///
/// # Errors
///
/// Returns `ArithmeticOverflow` if the running sum leaves the `Decimal` range.
pub fn sum_for_iban(
    transactions: &[Transaction],
    iban: &str,
) -> Result<Option<Decimal>, LedgerError> {
    let mut sum = None;
    for transaction in transactions.iter().filter(|t| t.iban == iban) {
        let total = sum
            .unwrap_or(Decimal::ZERO)
            .checked_add(transaction.amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("balance", iban))?;
        sum = Some(total);
    }
    Ok(sum)
}
