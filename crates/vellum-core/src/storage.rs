//! String key-value persistence seam used by both controllers.
//!
//! # Design
//! - Values are raw strings (`mode` → `dark`), never JSON-encoded.
//! - Implementations use interior mutability; the core is single-threaded.
//! - Every failure is reported as a [`StorageError`]; callers decide whether to recover.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::error::StorageError;

/// Persistent string store (browser local storage in production).
pub trait KeyValueStore {
    /// Read the value stored under `key`, `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store is unavailable or rejects the read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store is unavailable or rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store; used when no durable storage exists (non-browser contexts).
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `entries`.
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RefCell::new(
                entries
                    .into_iter()
                    .map(|(key, value)| (key.into(), value.into()))
                    .collect(),
            ),
        }
    }

    /// Snapshot of the stored entries.
    #[must_use]
    pub fn entries(&self) -> BTreeMap<String, String> {
        self.entries.borrow().clone()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read `key`, logging any failure before handing it back as `Err(())`.
pub(crate) fn read_or_log(store: &dyn KeyValueStore, key: &str) -> Result<Option<String>, ()> {
    store.get(key).map_err(|err| {
        tracing::warn!(key, error = %err, "preference read failed; using default");
    })
}

/// Write `key`, logging any failure.
pub(crate) fn write_or_log(store: &dyn KeyValueStore, key: &str, value: &str) {
    if let Err(err) = store.set(key, value) {
        tracing::warn!(key, value, error = %err, "preference write failed; keeping in-memory state");
    }
}
