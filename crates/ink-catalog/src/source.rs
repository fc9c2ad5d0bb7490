//! Paged catalog sources.
//!
//! The engine never fetches; callers drive a [`CatalogSource`] (infinite
//! scroll: fetch page, append, hand the accumulated set to
//! [`CatalogEngine::set_items`](crate::CatalogEngine::set_items)).

use crate::design::Design;
use ink_data::{FetchClient, FetchError};

/// A paged source of catalog designs. Pages are 1-indexed.
pub trait CatalogSource {
    /// Fetch one page of designs.
    fn fetch_page(&self, page: u32, page_size: u32) -> Result<Vec<Design>, FetchError>;
}

/// Catalog source over an HTTP collaborator returning camelCase JSON arrays.
pub struct HttpCatalogSource {
    client: FetchClient,
    path: String,
}

impl HttpCatalogSource {
    /// Create a source hitting `path` on the given client.
    pub fn new(client: FetchClient, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
        }
    }
}

impl CatalogSource for HttpCatalogSource {
    fn fetch_page(&self, page: u32, page_size: u32) -> Result<Vec<Design>, FetchError> {
        let url = format!("{}?page={}&pageSize={}", self.path, page, page_size);
        self.client.get(url).send()?.json()
    }
}

const MOCK_STYLES: [&str; 6] = [
    "Realistic",
    "Traditional",
    "Geometric",
    "Watercolor",
    "Minimalist",
    "Neo-Traditional",
];
const MOCK_BODY_PARTS: [&str; 6] = ["Arm", "Leg", "Back", "Chest", "Shoulder", "Wrist"];
const MOCK_ARTISTS: [&str; 6] = [
    "Alex Chen",
    "Sarah Kim",
    "Mike Rodriguez",
    "Emma Thompson",
    "David Park",
    "Lisa Wang",
];
const MOCK_COLORS: [&str; 6] = ["Black", "Red", "Blue", "Green", "Purple", "Orange"];

/// Anchor timestamp for mock creation times; items get older as the seed
/// grows, so page 1 is the most recent.
const MOCK_EPOCH: i64 = 1_735_689_600;

/// Deterministic mock catalog for demos and tests.
///
/// Attributes rotate through fixed rosters and numeric fields derive from
/// the item's global index, so the same (page, page_size) always yields the
/// same designs.
pub struct MockCatalogSource {
    total_pages: u32,
}

impl Default for MockCatalogSource {
    fn default() -> Self {
        Self { total_pages: 10 }
    }
}

impl MockCatalogSource {
    /// Create a mock source with the given number of available pages.
    pub fn new(total_pages: u32) -> Self {
        Self { total_pages }
    }

    /// Whether another page exists after `page`.
    pub fn has_next_page(&self, page: u32) -> bool {
        page < self.total_pages
    }
}

impl CatalogSource for MockCatalogSource {
    fn fetch_page(&self, page: u32, page_size: u32) -> Result<Vec<Design>, FetchError> {
        if page == 0 || page > self.total_pages {
            return Ok(Vec::new());
        }

        let designs = (0..page_size)
            .map(|i| {
                let seed = ((page - 1) * page_size + i) as u64;
                let slot = (i as usize) % 6;
                Design::new(
                    format!("{}-{}", page, i),
                    format!("Design {}", seed + 1),
                    MOCK_ARTISTS[slot],
                    MOCK_STYLES[slot],
                    MOCK_BODY_PARTS[slot],
                )
                .with_colors(vec![
                    MOCK_COLORS[slot].to_string(),
                    MOCK_COLORS[(slot + 1) % 6].to_string(),
                ])
                .with_ai_enhanced(seed % 2 == 0)
                .with_popularity((seed * 37 % 491 + 10) as u32, (seed * 91 % 1951 + 50) as u32)
                .with_rating((seed * 53 % 51) as f64 / 10.0)
                .with_created_at(MOCK_EPOCH - (seed as i64) * 3_600)
            })
            .collect();

        Ok(designs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_pages_are_deterministic() {
        let source = MockCatalogSource::default();
        let a = source.fetch_page(3, 12).unwrap();
        let b = source.fetch_page(3, 12).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 12);
    }

    #[test]
    fn test_mock_ids_unique_across_pages() {
        let source = MockCatalogSource::default();
        let mut ids: Vec<String> = Vec::new();
        for page in 1..=3 {
            for design in source.fetch_page(page, 12).unwrap() {
                ids.push(design.id.into_inner());
            }
        }
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_mock_recency_descends_across_pages() {
        let source = MockCatalogSource::default();
        let page1 = source.fetch_page(1, 12).unwrap();
        let page2 = source.fetch_page(2, 12).unwrap();
        assert!(page1[0].created_at > page2[0].created_at);
    }

    #[test]
    fn test_mock_exhausts_after_total_pages() {
        let source = MockCatalogSource::new(2);
        assert!(source.has_next_page(1));
        assert!(!source.has_next_page(2));
        assert!(source.fetch_page(3, 12).unwrap().is_empty());
    }

    #[test]
    fn test_mock_ratings_within_bounds() {
        let source = MockCatalogSource::default();
        for design in source.fetch_page(1, 48).unwrap() {
            assert!((0.0..=5.0).contains(&design.rating));
        }
    }
}
