//! Pricing factors: the declarative inputs to a quote.

use crate::error::PricingError;
use serde::{Deserialize, Serialize};

/// Body placements with pricing impact. A closed set: unknown keys are
/// rejected at the parse boundary, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    #[default]
    Arm,
    Leg,
    Back,
    Chest,
    Face,
    Hand,
    Neck,
}

impl Placement {
    /// Every placement, for rendering option lists.
    pub const ALL: [Placement; 7] = [
        Placement::Arm,
        Placement::Leg,
        Placement::Back,
        Placement::Chest,
        Placement::Face,
        Placement::Hand,
        Placement::Neck,
    ];

    /// Parse a placement key, case-insensitively.
    pub fn parse(s: &str) -> Result<Self, PricingError> {
        match s.to_lowercase().as_str() {
            "arm" => Ok(Self::Arm),
            "leg" => Ok(Self::Leg),
            "back" => Ok(Self::Back),
            "chest" => Ok(Self::Chest),
            "face" => Ok(Self::Face),
            "hand" => Ok(Self::Hand),
            "neck" => Ok(Self::Neck),
            other => Err(PricingError::UnknownPlacement(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arm => "arm",
            Self::Leg => "leg",
            Self::Back => "back",
            Self::Chest => "chest",
            Self::Face => "face",
            Self::Hand => "hand",
            Self::Neck => "neck",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Arm => "Arm",
            Self::Leg => "Leg",
            Self::Back => "Back",
            Self::Chest => "Chest",
            Self::Face => "Face",
            Self::Hand => "Hand",
            Self::Neck => "Neck",
        }
    }
}

/// Bounds for the size and complexity sliders.
pub const FACTOR_MIN: u8 = 1;
pub const FACTOR_MAX: u8 = 10;

/// Inputs to a price quote. Out-of-range values clamp on merge; they are
/// never stored as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingFactors {
    /// Size on a 1-10 scale.
    pub size: u8,
    /// Complexity on a 1-10 scale.
    pub complexity: u8,
    /// Number of colors, at least 1.
    pub color_count: u32,
    /// Body placement.
    pub placement: Placement,
}

impl Default for PricingFactors {
    fn default() -> Self {
        Self {
            size: 5,
            complexity: 5,
            color_count: 3,
            placement: Placement::Arm,
        }
    }
}

impl PricingFactors {
    /// Merge a partial update, clamping each field into its declared range.
    pub fn apply(&mut self, update: FactorUpdate) {
        if let Some(size) = update.size {
            self.size = size.clamp(FACTOR_MIN, FACTOR_MAX);
        }
        if let Some(complexity) = update.complexity {
            self.complexity = complexity.clamp(FACTOR_MIN, FACTOR_MAX);
        }
        if let Some(color_count) = update.color_count {
            self.color_count = color_count.max(1);
        }
        if let Some(placement) = update.placement {
            self.placement = placement;
        }
    }
}

/// A partial [`PricingFactors`]; `None` fields are left unchanged on merge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FactorUpdate {
    pub size: Option<u8>,
    pub complexity: Option<u8>,
    pub color_count: Option<u32>,
    pub placement: Option<Placement>,
}

impl FactorUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the size.
    pub fn size(mut self, size: u8) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the complexity.
    pub fn complexity(mut self, complexity: u8) -> Self {
        self.complexity = Some(complexity);
        self
    }

    /// Set the color count.
    pub fn colors(mut self, color_count: u32) -> Self {
        self.color_count = Some(color_count);
        self
    }

    /// Set the placement.
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_parse_case_insensitive() {
        assert_eq!(Placement::parse("Back").unwrap(), Placement::Back);
        assert_eq!(Placement::parse("NECK").unwrap(), Placement::Neck);
    }

    #[test]
    fn test_placement_parse_rejects_unknown() {
        assert_eq!(
            Placement::parse("torso"),
            Err(PricingError::UnknownPlacement("torso".to_string()))
        );
    }

    #[test]
    fn test_size_and_complexity_clamp() {
        let mut factors = PricingFactors::default();
        factors.apply(FactorUpdate::new().size(0).complexity(12));
        assert_eq!(factors.size, 1);
        assert_eq!(factors.complexity, 10);
    }

    #[test]
    fn test_color_count_floor() {
        let mut factors = PricingFactors::default();
        factors.apply(FactorUpdate::new().colors(0));
        assert_eq!(factors.color_count, 1);
    }

    #[test]
    fn test_partial_update_keeps_other_fields() {
        let mut factors = PricingFactors::default();
        factors.apply(FactorUpdate::new().placement(Placement::Face));
        assert_eq!(factors.placement, Placement::Face);
        assert_eq!(factors.size, 5);
        assert_eq!(factors.color_count, 3);
    }
}
