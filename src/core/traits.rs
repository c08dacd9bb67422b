//! Core traits for record persistence
//!
//! This module defines the store abstraction the account manager persists
//! through, so the JSON-file backend can be swapped for a locked or
//! transactional one without touching call sites.

use crate::types::LedgerError;

/// Trait for an ordered, append-only collection of records
///
/// Insertion order is preserved; records are never updated or deleted in
/// place by the ledger.
pub trait RecordStore<T> {
    /// Load the whole collection
    fn load(&self) -> Result<Vec<T>, LedgerError>;

    /// Replace the whole collection
    fn save(&self, records: &[T]) -> Result<(), LedgerError>;

    /// Load, modify and save the collection as one step
    ///
    /// Nothing is written if the closure returns an error.
    fn update<F, R>(&self, f: F) -> Result<R, LedgerError>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R, LedgerError>,
    {
        let mut records = self.load()?;
        let result = f(&mut records)?;
        self.save(&records)?;
        Ok(result)
    }

    /// Append one record and persist the collection
    fn append(&self, record: T) -> Result<(), LedgerError> {
        self.update(|records| {
            records.push(record);
            Ok(())
        })
    }
}
