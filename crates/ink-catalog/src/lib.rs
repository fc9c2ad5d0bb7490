//! Catalog domain types and filter/sort engine for the Ink platform.
//!
//! This crate owns the deterministic core of the gallery: the design
//! collection, the declarative [`FilterState`], and the derived view the UI
//! paginates over.
//!
//! - **Engine**: [`CatalogEngine`] recomputes the filtered, stably sorted
//!   view synchronously on every state change.
//! - **Presets**: [`PresetStore`] persists named filter snapshots through
//!   an injected [`ink_store::Store`].
//! - **Sources**: [`CatalogSource`] is the paged-fetch seam; callers
//!   accumulate pages and hand the whole set back to the engine.
//!
//! # Example
//!
//! ```rust,ignore
//! use ink_catalog::prelude::*;
//! use ink_store::{MemoryBackend, Store};
//!
//! let mut engine = CatalogEngine::new(Store::new(MemoryBackend::new()))?;
//!
//! let source = MockCatalogSource::default();
//! engine.set_items(source.fetch_page(1, 12)?);
//!
//! engine.set_filters(
//!     FilterUpdate::new()
//!         .styles(vec!["Realistic".to_string()])
//!         .sort(SortBy::Popular),
//! );
//!
//! for design in engine.view() {
//!     println!("{} by {}", design.title, design.artist_name);
//! }
//! ```

pub mod design;
pub mod engine;
pub mod error;
pub mod facets;
pub mod filter;
pub mod ids;
pub mod preset;
pub mod source;

pub use design::Design;
pub use engine::{CatalogEngine, FAVORITES_KEY};
pub use error::CatalogError;
pub use facets::{Facet, FacetCounts, FacetValue};
pub use filter::{FilterState, FilterUpdate, SortBy};
pub use ids::{DesignId, PresetId};
pub use preset::{FilterPreset, PresetStore, PRESETS_KEY};
pub use source::{CatalogSource, HttpCatalogSource, MockCatalogSource};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::design::Design;
    pub use crate::engine::CatalogEngine;
    pub use crate::error::CatalogError;
    pub use crate::facets::{Facet, FacetCounts, FacetValue};
    pub use crate::filter::{FilterState, FilterUpdate, SortBy};
    pub use crate::ids::{DesignId, PresetId};
    pub use crate::preset::{FilterPreset, PresetStore};
    pub use crate::source::{CatalogSource, HttpCatalogSource, MockCatalogSource};
}
