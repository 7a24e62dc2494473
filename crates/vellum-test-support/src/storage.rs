//! Key-value stores that record traffic and inject failures.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use vellum_core::{KeyValueStore, StorageError};

/// One call observed by a [`RecordingStore`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageCall {
    /// `get(key)`.
    Get(String),
    /// `set(key, value)`.
    Set(String, String),
}

/// In-memory store that logs every call and can be told to fail reads or writes.
#[derive(Debug, Default)]
pub struct RecordingStore {
    entries: RefCell<BTreeMap<String, String>>,
    calls: RefCell<Vec<StorageCall>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

impl RecordingStore {
    /// Empty, healthy store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Healthy store seeded with `entries`.
    #[must_use]
    pub fn seeded(entries: &[(&str, &str)]) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().extend(
            entries
                .iter()
                .map(|(key, value)| ((*key).to_string(), (*value).to_string())),
        );
        store
    }

    /// Store whose reads always fail, like a browser with storage blocked.
    #[must_use]
    pub fn failing_reads() -> Self {
        let store = Self::new();
        store.fail_reads.set(true);
        store
    }

    /// Store whose reads and writes always fail.
    #[must_use]
    pub fn unavailable() -> Self {
        let store = Self::failing_reads();
        store.fail_writes.set(true);
        store
    }

    /// Toggle write failures at runtime.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Stored value for `key`, bypassing the call log.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Every call observed so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<StorageCall> {
        self.calls.borrow().clone()
    }

    /// Values written to `key`, in order (failed writes included).
    #[must_use]
    pub fn writes_to(&self, key: &str) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                StorageCall::Set(written, value) if written == key => Some(value.clone()),
                _ => None,
            })
            .collect()
    }

    /// Forget recorded calls, keeping stored entries.
    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl KeyValueStore for RecordingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.calls
            .borrow_mut()
            .push(StorageCall::Get(key.to_string()));
        if self.fail_reads.get() {
            return Err(StorageError::Read {
                key: key.to_string(),
                detail: "reads disabled by test".to_string(),
            });
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.calls
            .borrow_mut()
            .push(StorageCall::Set(key.to_string(), value.to_string()));
        if self.fail_writes.get() {
            return Err(StorageError::Write {
                key: key.to_string(),
                detail: "writes disabled by test".to_string(),
            });
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
