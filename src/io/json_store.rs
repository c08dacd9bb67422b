//! JSON-array file store
//!
//! Each collection lives in one UTF-8 file holding a single JSON array.
//! Appending is a full-file rewrite: load the array, push, write it back
//! with 2-space indentation.
//!
//! # Missing files
//!
//! - [`MissingFilePolicy::Empty`]: a missing file is an empty collection
//!   (transfers, deposits, balances)
//! - [`MissingFilePolicy::Required`]: a missing file is `StoreNotFound`
//!   (transactions, deposit input documents)
//!
//! # Concurrency
//!
//! Read-modify-write cycles through [`JsonStore::update`] hold a mutex keyed by
//! the store's path for the whole cycle, so stores sharing a file inside one
//! process cannot lose each other's updates. Other processes writing the same
//! file are not coordinated with.

use crate::core::traits::RecordStore;
use crate::types::LedgerError;
use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock, Mutex};
use tracing::debug;

/// What loading a file that does not exist yields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingFilePolicy {
    /// Treat the file as an empty collection
    Empty,
    /// Fail with `StoreNotFound`
    Required,
}

/// Per-path write locks shared by every store in the process
static STORE_LOCKS: LazyLock<DashMap<PathBuf, Arc<Mutex<()>>>> = LazyLock::new(DashMap::new);

fn lock_for(path: &Path) -> Arc<Mutex<()>> {
    let key = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    STORE_LOCKS
        .entry(key)
        .or_insert_with(|| Arc::new(Mutex::new(())))
        .value()
        .clone()
}

/// Read and parse a JSON document
///
/// # Errors
///
/// - `StoreNotFound` if the file is missing and `policy` is `Required`
/// - `StoreReadError` for any other I/O failure
/// - `MalformedStore` if the content is not valid JSON of type `D`
///
/// Returns `Ok(None)` if the file is missing and `policy` is `Empty`.
pub fn read_json<D: DeserializeOwned>(
    path: &Path,
    policy: MissingFilePolicy,
) -> Result<Option<D>, LedgerError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return match policy {
                MissingFilePolicy::Empty => Ok(None),
                MissingFilePolicy::Required => Err(LedgerError::store_not_found(path)),
            };
        }
        Err(e) => return Err(LedgerError::store_read(path, e)),
    };

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| LedgerError::malformed_store(path, e))
}

/// Serialize a value with 2-space indentation and write it to `path`
pub fn write_json<S: Serialize + ?Sized>(path: &Path, value: &S) -> Result<(), LedgerError> {
    let content =
        serde_json::to_string_pretty(value).map_err(|e| LedgerError::store_write(path, e))?;
    fs::write(path, content).map_err(|e| LedgerError::store_write(path, e))
}

/// A collection of `T` backed by one JSON-array file
#[derive(Debug, Clone)]
pub struct JsonStore<T> {
    path: PathBuf,
    policy: MissingFilePolicy,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonStore<T> {
    /// Create a store for `path` with the given missing-file policy
    ///
    /// No I/O happens until the store is loaded or saved.
    pub fn new(path: impl Into<PathBuf>, policy: MissingFilePolicy) -> Self {
        JsonStore {
            path: path.into(),
            policy,
            _records: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn policy(&self) -> MissingFilePolicy {
        self.policy
    }
}

impl<T> RecordStore<T> for JsonStore<T>
where
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> Result<Vec<T>, LedgerError> {
        let records: Vec<T> = read_json(&self.path, self.policy)?.unwrap_or_default();
        debug!(path = %self.path.display(), count = records.len(), "loaded store");
        Ok(records)
    }

    fn save(&self, records: &[T]) -> Result<(), LedgerError> {
        write_json(&self.path, records)?;
        debug!(path = %self.path.display(), count = records.len(), "saved store");
        Ok(())
    }

    fn update<F, R>(&self, f: F) -> Result<R, LedgerError>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R, LedgerError>,
    {
        let lock = lock_for(&self.path);
        let _guard = lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut records = self.load()?;
        let result = f(&mut records)?;
        self.save(&records)?;
        Ok(result)
    }
}
