//! In-memory implementation of `KeyValueStore`.
//!
//! `InMemoryKeyValueStore` keeps every entry in a `HashMap` behind an
//! `Arc<Mutex<_>>`. Clones share the same map, so a test can hand one clone
//! to a `SessionStore` and inspect or corrupt the record through another.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use healthverse_contracts::error::{HealthverseError, HealthverseResult};
use healthverse_core::traits::KeyValueStore;

/// A process-local key-value store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    pub(crate) entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with one entry, replacing any previous value.
    pub fn with_entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.into(), value.into());
        }
        self
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> HealthverseResult<MutexGuard<'_, HashMap<String, String>>> {
        self.entries.lock().map_err(|e| HealthverseError::Storage {
            reason: format!("key-value lock poisoned: {}", e),
        })
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> HealthverseResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> HealthverseResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> HealthverseResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}
