//! Persistence Adapter
//!
//! Stores the list snapshot as JSON under a single fixed key. The backing
//! store is abstracted so the browser's `localStorage` and an in-memory map
//! can be swapped freely.

use std::collections::HashMap;

use wasm_bindgen::{JsCast, JsValue};

use crate::error::{SnapshotError, StorageError};
use crate::models::{Snapshot, SNAPSHOT_VERSION};

/// Minimal string key-value store
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

// ========================
// Browser localStorage
// ========================

/// `window.localStorage`
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(describe_js_error(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(describe_js_error(&e)))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(|e| {
            if is_quota_error(&e) {
                StorageError::QuotaExceeded
            } else {
                StorageError::Unavailable(describe_js_error(&e))
            }
        })
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|e| StorageError::Unavailable(describe_js_error(&e)))
    }
}

fn is_quota_error(err: &JsValue) -> bool {
    err.dyn_ref::<web_sys::DomException>()
        .map(|e| {
            let name = e.name();
            // Firefox reports its own name for the same condition
            name == "QuotaExceededError" || name == "NS_ERROR_DOM_QUOTA_REACHED"
        })
        .unwrap_or(false)
}

fn describe_js_error(err: &JsValue) -> String {
    if let Some(e) = err.dyn_ref::<web_sys::DomException>() {
        return format!("{}: {}", e.name(), e.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

// ========================
// In-memory store
// ========================

/// Map-backed store, used when `localStorage` is unavailable
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

// ========================
// Adapter
// ========================

/// Reads and writes the snapshot under one key
pub struct PersistenceAdapter<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> PersistenceAdapter<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Overwrite the stored snapshot
    pub fn save(&mut self, snapshot: &Snapshot) -> Result<(), StorageError> {
        let json =
            serde_json::to_string(snapshot).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.store.set_item(&self.key, &json)?;
        log::debug!("Saved {} items under '{}'", snapshot.items.len(), self.key);
        Ok(())
    }

    /// Read the stored snapshot, `None` if nothing was ever saved
    pub fn load(&self) -> Result<Option<Snapshot>, SnapshotError> {
        let Some(json) = self.store.get_item(&self.key)? else {
            return Ok(None);
        };
        let snapshot: Snapshot = serde_json::from_str(&json)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(snapshot.version));
        }
        Ok(Some(snapshot))
    }

    /// Drop the stored snapshot entirely
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.store.remove_item(&self.key)?;
        log::debug!("Cleared '{}'", self.key);
        Ok(())
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    #[cfg(test)]
    pub fn into_store(self) -> S {
        self.store
    }
}

/// Store doubles for tests
#[cfg(test)]
pub mod testing {
    use super::{KeyValueStore, MemoryStorage};
    use crate::error::StorageError;

    /// `MemoryStorage` that counts writes and can be told to reject them
    #[derive(Debug, Default)]
    pub struct FlakyStorage {
        inner: MemoryStorage,
        fail_writes: Option<StorageError>,
        writes: usize,
    }

    impl FlakyStorage {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make every subsequent write fail with `err`
        pub fn fail_writes_with(&mut self, err: StorageError) {
            self.fail_writes = Some(err);
        }

        pub fn heal(&mut self) {
            self.fail_writes = None;
        }

        /// Successful and failed write attempts (set and remove)
        pub fn write_count(&self) -> usize {
            self.writes
        }

        pub fn raw(&self, key: &str) -> Option<String> {
            self.inner.entries.get(key).cloned()
        }

        fn check_write(&mut self) -> Result<(), StorageError> {
            self.writes += 1;
            match &self.fail_writes {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    impl KeyValueStore for FlakyStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get_item(key)
        }

        fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.check_write()?;
            self.inner.set_item(key, value)
        }

        fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
            self.check_write()?;
            self.inner.remove_item(key)
        }
    }
}
