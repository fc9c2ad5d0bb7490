//! Catalog engine: collection ownership, filtering, sorting, favorites.

use crate::design::Design;
use crate::error::CatalogError;
use crate::filter::{FilterState, FilterUpdate, SortBy};
use crate::ids::DesignId;
use ink_data::{AnalyticsSink, NullSink};
use ink_store::Store;
use serde_json::json;
use std::collections::HashMap;

/// Store key under which the favorites set persists.
pub const FAVORITES_KEY: &str = "gallery:favorites";

/// Owns the design collection and the active [`FilterState`], and keeps a
/// derived (filtered, stably sorted) view in sync with both.
///
/// All operations are synchronous; the derived view is recomputed in place
/// on every relevant state change and is a pure function of
/// (collection, filters). The engine performs no I/O beyond the injected
/// favorites store — page loading belongs to a
/// [`CatalogSource`](crate::CatalogSource), whose accumulated results are
/// handed in through [`set_items`](Self::set_items).
pub struct CatalogEngine {
    items: Vec<Design>,
    filters: FilterState,
    view: Vec<Design>,
    favorites: Vec<DesignId>,
    store: Store,
    analytics: Box<dyn AnalyticsSink>,
}

impl CatalogEngine {
    /// Create an engine over the given store, loading any persisted
    /// favorites.
    pub fn new(store: Store) -> Result<Self, CatalogError> {
        let favorites = store.get(FAVORITES_KEY)?.unwrap_or_default();
        Ok(Self {
            items: Vec::new(),
            filters: FilterState::default(),
            view: Vec::new(),
            favorites,
            store,
            analytics: Box::new(NullSink),
        })
    }

    /// Attach an analytics sink. Events are fire-and-forget.
    pub fn with_analytics(mut self, sink: impl AnalyticsSink + 'static) -> Self {
        self.analytics = Box::new(sink);
        self
    }

    /// Replace the collection wholesale and recompute the view.
    ///
    /// Duplicate ids resolve last-write-wins: the later entry replaces the
    /// earlier one at the earlier entry's position, so collection order
    /// (and with it sort-tie order) stays stable. Callers accumulating
    /// pages simply pass the full concatenation each time; a page that
    /// arrives after a filter change is still merged, since the view is
    /// re-derived over the whole set regardless of arrival order.
    pub fn set_items(&mut self, items: Vec<Design>) {
        let mut positions: HashMap<DesignId, usize> = HashMap::with_capacity(items.len());
        let mut deduped: Vec<Design> = Vec::with_capacity(items.len());
        for design in items {
            match positions.get(&design.id) {
                Some(&at) => deduped[at] = design,
                None => {
                    positions.insert(design.id.clone(), deduped.len());
                    deduped.push(design);
                }
            }
        }

        tracing::debug!(count = deduped.len(), "catalog collection replaced");
        self.items = deduped;
        self.derive();
    }

    /// Merge a partial filter update and recompute the view.
    pub fn set_filters(&mut self, update: FilterUpdate) {
        self.filters.apply(update);
        self.derive();
        self.analytics.record(
            "filters_changed",
            &json!({
                "sortBy": self.filters.sort_by.as_str(),
                "matches": self.view.len(),
            }),
        );
    }

    /// Restore the canonical default filters and recompute. Idempotent.
    pub fn reset_filters(&mut self) {
        self.filters = FilterState::default();
        self.derive();
        self.analytics.record("filters_reset", &json!({}));
    }

    /// The active filter state.
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// The full (de-duplicated) collection, in submission order.
    pub fn items(&self) -> &[Design] {
        &self.items
    }

    /// The derived view: filtered and stably sorted. Callers paginate over
    /// this slice.
    pub fn view(&self) -> &[Design] {
        &self.view
    }

    /// Toggle a design in the persisted favorites set.
    ///
    /// Returns whether the design is a favorite after the toggle.
    /// Independent of filters and the derived view.
    pub fn toggle_favorite(&mut self, id: &DesignId) -> Result<bool, CatalogError> {
        let now_favorite = match self.favorites.iter().position(|f| f == id) {
            Some(at) => {
                self.favorites.remove(at);
                false
            }
            None => {
                self.favorites.push(id.clone());
                true
            }
        };
        self.store.set(FAVORITES_KEY, &self.favorites)?;
        self.analytics.record(
            "favorite_toggled",
            &json!({ "designId": id.as_str(), "favorited": now_favorite }),
        );
        Ok(now_favorite)
    }

    /// Whether a design is currently favorited.
    pub fn is_favorite(&self, id: &DesignId) -> bool {
        self.favorites.iter().any(|f| f == id)
    }

    /// The favorites set, in the order designs were favorited.
    pub fn favorites(&self) -> &[DesignId] {
        &self.favorites
    }

    /// Recompute the derived view from (collection, filters).
    ///
    /// `Vec::sort_by` is stable, so designs with equal sort keys keep
    /// their collection order.
    fn derive(&mut self) {
        let mut view: Vec<Design> = self
            .items
            .iter()
            .filter(|d| self.filters.matches(d))
            .cloned()
            .collect();

        match self.filters.sort_by {
            SortBy::Recent => view.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortBy::Popular => view.sort_by(|a, b| b.likes.cmp(&a.likes)),
            SortBy::Rating => view.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        }

        self.view = view;
    }
}
