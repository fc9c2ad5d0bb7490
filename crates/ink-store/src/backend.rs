//! Byte-level store backends.

use crate::StoreError;
use std::collections::HashMap;
use std::sync::Mutex;

/// A raw key-value backend the typed [`Store`](crate::Store) sits on top of.
///
/// Implementations own durability semantics: the in-memory backend lives for
/// the process, the Spin backend survives restarts.
pub trait StoreBackend {
    /// Read the raw bytes stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Check whether `key` is present.
    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get(key)?.is_some())
    }
}

/// In-memory backend for native builds and tests.
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    fn locked(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>>, StoreError> {
        self.entries
            .lock()
            .map_err(|_| StoreError::BackendError("memory backend lock poisoned".to_string()))
    }
}

impl StoreBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.locked()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.locked()?.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.locked()?.remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.locked()?.contains_key(key))
    }
}

/// Backend over Spin's Key-Value Store.
#[cfg(target_arch = "wasm32")]
pub struct SpinBackend {
    store: spin_sdk::key_value::Store,
}

#[cfg(target_arch = "wasm32")]
impl SpinBackend {
    /// Open the default Key-Value store.
    pub fn open_default() -> Result<Self, StoreError> {
        let store = spin_sdk::key_value::Store::open_default()
            .map_err(|e| StoreError::OpenError(e.to_string()))?;
        Ok(Self { store })
    }

    /// Open a named Key-Value store.
    pub fn open(name: &str) -> Result<Self, StoreError> {
        let store = spin_sdk::key_value::Store::open(name)
            .map_err(|e| StoreError::OpenError(e.to_string()))?;
        Ok(Self { store })
    }
}

#[cfg(target_arch = "wasm32")]
impl StoreBackend for SpinBackend {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        self.store
            .get(key)
            .map_err(|e| StoreError::BackendError(e.to_string()))
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.store
            .set(key, value)
            .map_err(|e| StoreError::BackendError(e.to_string()))
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.store
            .delete(key)
            .map_err(|e| StoreError::BackendError(e.to_string()))
    }

    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        self.store
            .exists(key)
            .map_err(|e| StoreError::BackendError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_roundtrip() {
        let backend = MemoryBackend::new();
        backend.set("k", b"v").unwrap();
        assert_eq!(backend.get("k").unwrap(), Some(b"v".to_vec()));
        assert!(backend.exists("k").unwrap());
    }

    #[test]
    fn test_memory_delete_is_idempotent() {
        let backend = MemoryBackend::new();
        backend.set("k", b"v").unwrap();
        backend.delete("k").unwrap();
        backend.delete("k").unwrap();
        assert_eq!(backend.get("k").unwrap(), None);
    }
}
