//! Facet counts for filter sidebars.

use crate::design::Design;
use crate::filter::FilterState;
use std::collections::HashMap;

/// A single facet value with its occurrence count.
#[derive(Debug, Clone, PartialEq)]
pub struct FacetValue {
    pub value: String,
    pub count: u32,
    pub selected: bool,
}

/// A filterable axis with its observed values.
#[derive(Debug, Clone)]
pub struct Facet {
    pub name: String,
    pub key: String,
    pub values: Vec<FacetValue>,
}

/// Per-axis value counts over a collection, for rendering filter options.
#[derive(Debug, Clone)]
pub struct FacetCounts {
    pub styles: Facet,
    pub body_parts: Facet,
    pub colors: Facet,
    pub artists: Facet,
}

impl FacetCounts {
    /// Count facet values across `designs`, marking values selected in
    /// `filters`. Values sort by descending count, then alphabetically, so
    /// the output is deterministic.
    pub fn from_designs(designs: &[Design], filters: &FilterState) -> Self {
        let mut style_counts: HashMap<&str, u32> = HashMap::new();
        let mut body_part_counts: HashMap<&str, u32> = HashMap::new();
        let mut color_counts: HashMap<&str, u32> = HashMap::new();
        let mut artist_counts: HashMap<&str, u32> = HashMap::new();

        for design in designs {
            *style_counts.entry(&design.style).or_insert(0) += 1;
            *body_part_counts.entry(&design.body_part).or_insert(0) += 1;
            *artist_counts.entry(&design.artist_name).or_insert(0) += 1;
            for color in &design.colors {
                *color_counts.entry(color).or_insert(0) += 1;
            }
        }

        Self {
            styles: build_facet("Style", "styles", style_counts, &filters.styles),
            body_parts: build_facet("Body Part", "bodyParts", body_part_counts, &filters.body_parts),
            colors: build_facet("Color", "colors", color_counts, &filters.colors),
            artists: build_facet("Artist", "artists", artist_counts, &filters.artists),
        }
    }
}

fn build_facet(
    name: &str,
    key: &str,
    counts: HashMap<&str, u32>,
    selected: &[String],
) -> Facet {
    let mut values: Vec<FacetValue> = counts
        .into_iter()
        .map(|(value, count)| FacetValue {
            selected: selected.iter().any(|s| s == value),
            value: value.to_string(),
            count,
        })
        .collect();
    values.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));

    Facet {
        name: name.to_string(),
        key: key.to_string(),
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn designs() -> Vec<Design> {
        vec![
            Design::new("1", "Koi", "Alex Chen", "Realistic", "Arm")
                .with_colors(vec!["Black".to_string(), "Red".to_string()]),
            Design::new("2", "Wolf", "Alex Chen", "Realistic", "Back")
                .with_colors(vec!["Black".to_string()]),
            Design::new("3", "Mandala", "Sarah Kim", "Geometric", "Arm")
                .with_colors(vec!["Blue".to_string()]),
        ]
    }

    #[test]
    fn test_counts_and_ordering() {
        let facets = FacetCounts::from_designs(&designs(), &FilterState::default());

        assert_eq!(facets.styles.values[0].value, "Realistic");
        assert_eq!(facets.styles.values[0].count, 2);
        assert_eq!(facets.colors.values[0].value, "Black");
        assert_eq!(facets.colors.values[0].count, 2);
        // Ties break alphabetically.
        assert_eq!(facets.colors.values[1].value, "Blue");
        assert_eq!(facets.colors.values[2].value, "Red");
    }

    #[test]
    fn test_selected_flags() {
        let mut filters = FilterState::default();
        filters.styles = vec!["Geometric".to_string()];
        let facets = FacetCounts::from_designs(&designs(), &filters);

        let geometric = facets
            .styles
            .values
            .iter()
            .find(|v| v.value == "Geometric")
            .unwrap();
        assert!(geometric.selected);
        let realistic = facets
            .styles
            .values
            .iter()
            .find(|v| v.value == "Realistic")
            .unwrap();
        assert!(!realistic.selected);
    }
}
