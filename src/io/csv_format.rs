//! CSV output of the balance history
//!
//! Pure with respect to the ledger: takes snapshots already loaded from the
//! balance store and writes them to any writer.

use crate::types::BalanceSnapshot;
use std::io::Write;

/// Write balance snapshots in CSV format
///
/// Writes columns `IBAN,time,BALANCE` in the order given, which for the
/// balance store is insertion order. Balances are written with 2 decimals.
///
/// # Arguments
///
/// * `snapshots` - Snapshots to write
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_balances_csv(
    snapshots: &[BalanceSnapshot],
    output: &mut dyn Write,
) -> Result<(), String> {
    let mut writer = csv::Writer::from_writer(output);

    writer
        .write_record(["IBAN", "time", "BALANCE"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    for snapshot in snapshots {
        writer
            .write_record(&[
                snapshot.iban.clone(),
                snapshot.time.to_string(),
                format!("{:.2}", snapshot.balance),
            ])
            .map_err(|e| format!("Failed to write balance record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}
