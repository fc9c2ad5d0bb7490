//! Filter state and sort options for the catalog.

use crate::design::Design;
use serde::{Deserialize, Serialize};

/// Sort options for the derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Newest first (descending creation time).
    #[default]
    Recent,
    /// Most liked first.
    Popular,
    /// Highest rated first.
    Rating,
}

impl SortBy {
    /// Parse a wire string; unknown values fall back to `Recent`.
    pub fn from_str(s: &str) -> Self {
        match s {
            "popular" => Self::Popular,
            "rating" => Self::Rating,
            _ => Self::Recent,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Popular => "popular",
            Self::Rating => "rating",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Recent => "Most Recent",
            Self::Popular => "Most Popular",
            Self::Rating => "Highest Rated",
        }
    }
}

/// The declarative query over the catalog.
///
/// Axes compose with AND semantics; values within one axis are OR (an empty
/// axis is unconstrained). `Default` is the canonical reset state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Selected styles.
    pub styles: Vec<String>,
    /// Selected body parts.
    pub body_parts: Vec<String>,
    /// Selected colors; a design matches when the intersection is non-empty.
    pub colors: Vec<String>,
    /// Selected artists.
    pub artists: Vec<String>,
    /// Case-insensitive substring over title, artist, style, and body part.
    pub search_query: String,
    /// Keep only AI-enhanced designs.
    pub is_ai_only: bool,
    /// Ordering of the derived view.
    pub sort_by: SortBy,
}

impl FilterState {
    /// Check whether a design passes every active axis.
    pub fn matches(&self, design: &Design) -> bool {
        if !self.search_query.is_empty() {
            let query = self.search_query.to_lowercase();
            let hit = design.title.to_lowercase().contains(&query)
                || design.artist_name.to_lowercase().contains(&query)
                || design.style.to_lowercase().contains(&query)
                || design.body_part.to_lowercase().contains(&query);
            if !hit {
                return false;
            }
        }

        if !axis_matches(&self.styles, &design.style) {
            return false;
        }
        if !axis_matches(&self.body_parts, &design.body_part) {
            return false;
        }
        if !self.colors.is_empty()
            && !design.colors.iter().any(|c| self.colors.contains(c))
        {
            return false;
        }
        if !axis_matches(&self.artists, &design.artist_name) {
            return false;
        }
        if self.is_ai_only && !design.is_ai_enhanced {
            return false;
        }

        true
    }

    /// Merge a partial update into this state; unspecified fields keep
    /// their current values.
    pub fn apply(&mut self, update: FilterUpdate) {
        if let Some(styles) = update.styles {
            self.styles = styles;
        }
        if let Some(body_parts) = update.body_parts {
            self.body_parts = body_parts;
        }
        if let Some(colors) = update.colors {
            self.colors = colors;
        }
        if let Some(artists) = update.artists {
            self.artists = artists;
        }
        if let Some(search_query) = update.search_query {
            self.search_query = search_query;
        }
        if let Some(is_ai_only) = update.is_ai_only {
            self.is_ai_only = is_ai_only;
        }
        if let Some(sort_by) = update.sort_by {
            self.sort_by = sort_by;
        }
    }
}

/// Empty axis means unconstrained; otherwise any selected value matches.
fn axis_matches(selected: &[String], value: &str) -> bool {
    selected.is_empty() || selected.iter().any(|s| s == value)
}

/// A partial [`FilterState`]; `None` fields are left unchanged on merge.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FilterUpdate {
    pub styles: Option<Vec<String>>,
    pub body_parts: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
    pub artists: Option<Vec<String>>,
    pub search_query: Option<String>,
    pub is_ai_only: Option<bool>,
    pub sort_by: Option<SortBy>,
}

impl FilterUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select styles.
    pub fn styles(mut self, styles: Vec<String>) -> Self {
        self.styles = Some(styles);
        self
    }

    /// Select body parts.
    pub fn body_parts(mut self, body_parts: Vec<String>) -> Self {
        self.body_parts = Some(body_parts);
        self
    }

    /// Select colors.
    pub fn colors(mut self, colors: Vec<String>) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Select artists.
    pub fn artists(mut self, artists: Vec<String>) -> Self {
        self.artists = Some(artists);
        self
    }

    /// Set the free-text search query.
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }

    /// Restrict to AI-enhanced designs.
    pub fn ai_only(mut self, on: bool) -> Self {
        self.is_ai_only = Some(on);
        self
    }

    /// Set the sort order.
    pub fn sort(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn design() -> Design {
        Design::new("d-1", "Dragon Sleeve", "Alex Chen", "Realistic", "Arm")
            .with_colors(vec!["Black".to_string(), "Red".to_string()])
            .with_ai_enhanced(true)
    }

    #[test]
    fn test_default_matches_everything() {
        assert!(FilterState::default().matches(&design()));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut filters = FilterState::default();
        filters.search_query = "dRaGoN".to_string();
        assert!(filters.matches(&design()));

        filters.search_query = "koi".to_string();
        assert!(!filters.matches(&design()));
    }

    #[test]
    fn test_search_covers_artist_style_and_body_part() {
        let mut filters = FilterState::default();
        for query in ["chen", "realistic", "arm"] {
            filters.search_query = query.to_string();
            assert!(filters.matches(&design()), "query {query:?} should match");
        }
    }

    #[test]
    fn test_axes_compose_with_and() {
        let mut filters = FilterState::default();
        filters.styles = vec!["Realistic".to_string()];
        filters.artists = vec!["Sarah Kim".to_string()];
        // Style matches but artist doesn't.
        assert!(!filters.matches(&design()));
    }

    #[test]
    fn test_color_intersection() {
        let mut filters = FilterState::default();
        filters.colors = vec!["Red".to_string(), "Blue".to_string()];
        assert!(filters.matches(&design()));

        filters.colors = vec!["Blue".to_string()];
        assert!(!filters.matches(&design()));
    }

    #[test]
    fn test_ai_only() {
        let mut filters = FilterState::default();
        filters.is_ai_only = true;
        assert!(filters.matches(&design()));
        assert!(!filters.matches(&design().with_ai_enhanced(false)));
    }

    #[test]
    fn test_partial_apply_keeps_unspecified_fields() {
        let mut filters = FilterState::default();
        filters.apply(FilterUpdate::new().styles(vec!["Geometric".to_string()]));
        filters.apply(FilterUpdate::new().sort(SortBy::Popular));

        assert_eq!(filters.styles, vec!["Geometric".to_string()]);
        assert_eq!(filters.sort_by, SortBy::Popular);
        assert!(filters.search_query.is_empty());
    }

    #[test]
    fn test_unknown_sort_falls_back_to_recent() {
        assert_eq!(SortBy::from_str("trending"), SortBy::Recent);
        assert_eq!(SortBy::from_str("popular"), SortBy::Popular);
    }
}
