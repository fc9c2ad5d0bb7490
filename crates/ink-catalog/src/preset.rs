//! Durable named filter presets.

use crate::error::CatalogError;
use crate::filter::FilterState;
use crate::ids::PresetId;
use ink_store::Store;
use serde::{Deserialize, Serialize};

/// Store key under which the preset list persists.
pub const PRESETS_KEY: &str = "gallery:presets";

/// A named, persisted snapshot of a [`FilterState`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterPreset {
    pub id: PresetId,
    pub name: String,
    pub filters: FilterState,
    /// Creation time, Unix seconds.
    pub created_at: i64,
}

/// CRUD over named filter presets, persisted through the injected store.
///
/// Presets survive restarts; the catalog collection and derived view never
/// go through here.
pub struct PresetStore {
    store: Store,
}

impl PresetStore {
    /// Create a preset store over the given persistence root.
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Save the given filters under `name`.
    ///
    /// The name must be non-empty after trimming. A fresh id and timestamp
    /// are assigned; saving the same name twice creates two presets.
    pub fn save(&self, name: &str, filters: &FilterState) -> Result<FilterPreset, CatalogError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::ValidationError(
                "preset name must not be empty".to_string(),
            ));
        }

        let preset = FilterPreset {
            id: PresetId::generate(),
            name: name.to_string(),
            filters: filters.clone(),
            created_at: current_timestamp(),
        };

        let mut presets = self.load_all()?;
        presets.push(preset.clone());
        self.store.set(PRESETS_KEY, &presets)?;
        tracing::debug!(name = %preset.name, "filter preset saved");
        Ok(preset)
    }

    /// All saved presets, in creation order.
    pub fn list(&self) -> Result<Vec<FilterPreset>, CatalogError> {
        self.load_all()
    }

    /// Load the filter state of the preset with the given id.
    pub fn load(&self, id: &PresetId) -> Result<FilterState, CatalogError> {
        self.load_all()?
            .into_iter()
            .find(|p| &p.id == id)
            .map(|p| p.filters)
            .ok_or_else(|| CatalogError::PresetNotFound(id.to_string()))
    }

    /// Delete the preset with the given id. Deleting an absent id is a
    /// no-op.
    pub fn delete(&self, id: &PresetId) -> Result<(), CatalogError> {
        let mut presets = self.load_all()?;
        let before = presets.len();
        presets.retain(|p| &p.id != id);
        if presets.len() != before {
            self.store.set(PRESETS_KEY, &presets)?;
        }
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<FilterPreset>, CatalogError> {
        Ok(self.store.get(PRESETS_KEY)?.unwrap_or_default())
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{FilterUpdate, SortBy};
    use ink_store::{MemoryBackend, Store};

    fn preset_store() -> PresetStore {
        PresetStore::new(Store::new(MemoryBackend::new()))
    }

    fn sample_filters() -> FilterState {
        let mut filters = FilterState::default();
        filters.apply(
            FilterUpdate::new()
                .styles(vec!["Watercolor".to_string()])
                .ai_only(true)
                .sort(SortBy::Rating),
        );
        filters
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let presets = preset_store();
        let filters = sample_filters();

        let saved = presets.save("my search", &filters).unwrap();
        let loaded = presets.load(&saved.id).unwrap();
        assert_eq!(loaded, filters);
    }

    #[test]
    fn test_empty_name_rejected() {
        let presets = preset_store();
        let result = presets.save("   ", &FilterState::default());
        assert!(matches!(result, Err(CatalogError::ValidationError(_))));
        assert!(presets.list().unwrap().is_empty());
    }

    #[test]
    fn test_list_in_creation_order() {
        let presets = preset_store();
        presets.save("first", &FilterState::default()).unwrap();
        presets.save("second", &FilterState::default()).unwrap();

        let names: Vec<String> = presets.list().unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_load_missing_is_not_found() {
        let presets = preset_store();
        let result = presets.load(&PresetId::new("absent"));
        assert!(matches!(result, Err(CatalogError::PresetNotFound(_))));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let presets = preset_store();
        let saved = presets.save("doomed", &FilterState::default()).unwrap();

        presets.delete(&saved.id).unwrap();
        presets.delete(&saved.id).unwrap();
        assert!(presets.list().unwrap().is_empty());
    }

    #[test]
    fn test_presets_survive_reopen() {
        let store = Store::new(MemoryBackend::new());
        let saved = PresetStore::new(store.clone())
            .save("durable", &sample_filters())
            .unwrap();

        let reopened = PresetStore::new(store);
        assert_eq!(reopened.load(&saved.id).unwrap(), sample_filters());
    }
}
