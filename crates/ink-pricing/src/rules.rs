//! Injected pricing rules.
//!
//! The quote formula's constants live here rather than in the engine, so
//! rules can be varied and tested without touching the calculation.

use crate::factors::Placement;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The rule table a [`QuoteEngine`](crate::QuoteEngine) prices against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRules {
    /// Base price in currency units.
    pub base_price: f64,
    /// Multiplier growth per size point above 1.
    pub size_step: f64,
    /// Multiplier growth per complexity point above 1.
    pub complexity_step: f64,
    /// Colors included in the base price.
    pub included_colors: u32,
    /// Cost of each color beyond the included ones.
    pub extra_color_cost: f64,
    /// Placement price multipliers; placements absent from the table
    /// price as 1.0.
    pub placement_multipliers: HashMap<Placement, f64>,
}

impl Default for PricingRules {
    fn default() -> Self {
        let placement_multipliers = HashMap::from([
            (Placement::Arm, 1.0),
            (Placement::Leg, 1.1),
            (Placement::Back, 1.5),
            (Placement::Chest, 1.3),
            (Placement::Face, 2.0),
            (Placement::Hand, 1.8),
            (Placement::Neck, 1.6),
        ]);

        Self {
            base_price: 200.0,
            size_step: 0.11,
            complexity_step: 0.17,
            included_colors: 2,
            extra_color_cost: 20.0,
            placement_multipliers,
        }
    }
}

impl PricingRules {
    /// The multiplier for a placement (1.0 when unlisted).
    pub fn placement_multiplier(&self, placement: Placement) -> f64 {
        self.placement_multipliers
            .get(&placement)
            .copied()
            .unwrap_or(1.0)
    }
}
