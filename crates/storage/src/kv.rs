//! Key-value store abstraction (mechanics only).
//!
//! Models the browser-local storage contract: string keys, string values,
//! synchronous access, writes that can fail (quota) while reads only ever
//! miss.

use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;

/// Storage-level error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The value could not be written (e.g. quota exceeded).
    #[error("storage write failed: {0}")]
    Write(String),

    /// The backing store is not usable at all.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A string key-value store.
///
/// Reads are infallible (a broken read is a miss); writes surface their
/// failure so the adapter above can report it and continue.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str);
}

impl<T: KvStore + ?Sized> KvStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// In-memory store for tests/dev.
///
/// An optional quota (in bytes, per value) makes write-failure paths
/// testable without a real full disk.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: Mutex<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that rejects values larger than `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            quota: Some(bytes),
        }
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Some(quota) = self.quota {
            if value.len() > quota {
                return Err(StoreError::Write(format!(
                    "quota exceeded: {} > {} bytes",
                    value.len(),
                    quota
                )));
            }
        }
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_misses_on_absent_key() {
        let store = MemoryKvStore::new();
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = MemoryKvStore::new();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k"), Some("v".to_string()));

        store.remove("k");
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn quota_rejects_oversized_values() {
        let store = MemoryKvStore::with_quota(4);
        let err = store.set("k", "too large").unwrap_err();
        assert!(matches!(err, StoreError::Write(_)));
        assert_eq!(store.get("k"), None);
    }
}
