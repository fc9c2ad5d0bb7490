//! Key-value persistence layer for the Ink catalog platform.
//!
//! Provides a typed, JSON-serializing store over a pluggable byte-level
//! backend. Callers construct a [`Store`] with whichever backend suits the
//! deployment: Spin's Key-Value Store on `wasm32`, an in-memory map for
//! native builds and tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use ink_store::{MemoryBackend, Store};
//!
//! let store = Store::new(MemoryBackend::new());
//!
//! store.set("gallery:favorites", &vec!["design-1".to_string()])?;
//! let favorites: Option<Vec<String>> = store.get("gallery:favorites")?;
//! ```

mod backend;
mod error;
mod kv;

pub use backend::MemoryBackend;
#[cfg(target_arch = "wasm32")]
pub use backend::SpinBackend;
pub use backend::StoreBackend;
pub use error::StoreError;
pub use kv::Store;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{MemoryBackend, Store, StoreBackend, StoreError};
}
