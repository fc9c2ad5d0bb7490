//! Typed store with automatic JSON serialization.

use crate::{StoreBackend, StoreError};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

/// Typed key-value store over an injected backend.
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`. Cloning is cheap and clones share
/// the same backend, so several components can persist through one root.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn StoreBackend>,
}

impl Store {
    /// Create a store over the given backend.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let store = Store::new(MemoryBackend::new());
    /// ```
    pub fn new(backend: impl StoreBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Get a value from the store.
    ///
    /// Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.backend.get(key)? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value in the store.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value)?;
        self.backend.set(key, &bytes)
    }

    /// Delete a value from the store.
    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.backend.delete(key)
    }

    /// Check if a key exists in the store.
    pub fn exists(&self, key: &str) -> Result<bool, StoreError> {
        self.backend.exists(key)
    }
}

/// Helper to build store keys with namespacing.
///
/// # Example
///
/// ```rust,ignore
/// let key = store_key!("gallery", "favorites");
/// // Returns "gallery:favorites"
/// ```
#[macro_export]
macro_rules! store_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryBackend;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Snapshot {
        name: String,
        count: u32,
    }

    #[test]
    fn test_typed_roundtrip() {
        let store = Store::new(MemoryBackend::new());
        let snapshot = Snapshot {
            name: "default".to_string(),
            count: 3,
        };

        store.set("snap", &snapshot).unwrap();
        let loaded: Option<Snapshot> = store.get("snap").unwrap();
        assert_eq!(loaded, Some(snapshot));
    }

    #[test]
    fn test_missing_key_is_none() {
        let store = Store::new(MemoryBackend::new());
        let loaded: Option<Snapshot> = store.get("absent").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_store_key_macro() {
        assert_eq!(store_key!("gallery", "favorites"), "gallery:favorites");
        assert_eq!(store_key!("preset", 42), "preset:42");
    }
}
