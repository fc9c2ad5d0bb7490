//! Catalog error types.

use thiserror::Error;

/// Errors that can occur in catalog operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Malformed input to a mutating operation.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Preset not found.
    #[error("Preset not found: {0}")]
    PresetNotFound(String),

    /// Persistence failure.
    #[error("Store error: {0}")]
    StoreError(#[from] ink_store::StoreError),

    /// Catalog-source fetch failure.
    #[error("Fetch error: {0}")]
    FetchError(#[from] ink_data::FetchError),
}
