//! Design domain type.

use crate::ids::DesignId;
use serde::{Deserialize, Serialize};

/// A browsable tattoo design in the catalog.
///
/// Mirrors the camelCase JSON shape the catalog API returns. `rating` is
/// clamped into [0, 5] by [`Design::with_rating`]; deserialized values are
/// trusted to be well-formed per the catalog-source contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    /// Unique, stable identifier.
    pub id: DesignId,
    /// Display title.
    pub title: String,
    /// Name of the creating artist.
    pub artist_name: String,
    /// Tattoo style (e.g., "Realistic", "Geometric").
    pub style: String,
    /// Intended body placement (e.g., "Arm", "Back").
    pub body_part: String,
    /// Color names used in the design; may match several color filters.
    #[serde(default)]
    pub colors: Vec<String>,
    /// Whether the design was AI-enhanced.
    #[serde(default)]
    pub is_ai_enhanced: bool,
    /// Like count.
    #[serde(default)]
    pub likes: u32,
    /// View count.
    #[serde(default)]
    pub views: u32,
    /// Average rating in [0, 5].
    #[serde(default)]
    pub rating: f64,
    /// Creation time, Unix seconds.
    #[serde(default)]
    pub created_at: i64,
}

impl Design {
    /// Create a design with the required categorical attributes and zeroed
    /// numeric fields.
    pub fn new(
        id: impl Into<DesignId>,
        title: impl Into<String>,
        artist_name: impl Into<String>,
        style: impl Into<String>,
        body_part: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist_name: artist_name.into(),
            style: style.into(),
            body_part: body_part.into(),
            colors: Vec::new(),
            is_ai_enhanced: false,
            likes: 0,
            views: 0,
            rating: 0.0,
            created_at: 0,
        }
    }

    /// Set the color list.
    pub fn with_colors(mut self, colors: Vec<String>) -> Self {
        self.colors = colors;
        self
    }

    /// Mark the design as AI-enhanced.
    pub fn with_ai_enhanced(mut self, enhanced: bool) -> Self {
        self.is_ai_enhanced = enhanced;
        self
    }

    /// Set like and view counts.
    pub fn with_popularity(mut self, likes: u32, views: u32) -> Self {
        self.likes = likes;
        self.views = views;
        self
    }

    /// Set the rating, clamped into [0, 5].
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating.clamp(0.0, 5.0);
        self
    }

    /// Set the creation timestamp (Unix seconds).
    pub fn with_created_at(mut self, created_at: i64) -> Self {
        self.created_at = created_at;
        self
    }
}
