//! JSON-file implementation of `KeyValueStore`.
//!
//! The whole store is one JSON object of string values:
//!
//! ```json
//! { "healthverse_user": "{\"id\":\"...\",\"role\":null,...}" }
//! ```
//!
//! Every write rewrites the file through a sibling temp file and a rename, so
//! a reader never observes a half-written document. A missing file is an
//! empty store.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tracing::{debug, warn};

use healthverse_contracts::error::{HealthverseError, HealthverseResult};
use healthverse_core::traits::KeyValueStore;

type Entries = BTreeMap<String, String>;

/// A key-value store persisted to a single JSON file.
#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Use `path` as the backing file. Nothing is read or created until the
    /// first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> HealthverseResult<Entries> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => {
                return Err(HealthverseError::Storage {
                    reason: format!("failed to read '{}': {}", self.path.display(), e),
                })
            }
        };

        if contents.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&contents).map_err(|e| HealthverseError::Storage {
            reason: format!("'{}' is not a JSON string map: {}", self.path.display(), e),
        })
    }

    /// Entries to rewrite from. An unreadable document is replaced rather
    /// than blocking every future write.
    fn entries_for_write(&self) -> Entries {
        match self.read_entries() {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "replacing unreadable store file");
                Entries::new()
            }
        }
    }

    fn write_entries(&self, entries: &Entries) -> HealthverseResult<()> {
        let storage_err = |action: &str, e: std::io::Error| HealthverseError::Storage {
            reason: format!("failed to {} '{}': {}", action, self.path.display(), e),
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| storage_err("create directory for", e))?;
        }

        let body = serde_json::to_string_pretty(entries).map_err(|e| HealthverseError::Storage {
            reason: format!("failed to serialize store: {}", e),
        })?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, body).map_err(|e| storage_err("write", e))?;
        fs::rename(&tmp, &self.path).map_err(|e| storage_err("replace", e))?;

        debug!(path = %self.path.display(), entries = entries.len(), "store file written");
        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> HealthverseResult<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> HealthverseResult<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.entries_for_write();
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> HealthverseResult<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.entries_for_write();
        if entries.remove(key).is_none() && !self.path.exists() {
            return Ok(());
        }
        self.write_entries(&entries)
    }
}
