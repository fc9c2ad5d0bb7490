//! The quote engine: deterministic price breakdowns.

use crate::discount::{current_timestamp, DiscountCode, DiscountRegistry};
use crate::error::PricingError;
use crate::factors::{FactorUpdate, PricingFactors};
use crate::rules::PricingRules;
use ink_data::{AnalyticsSink, NullSink};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Fully-derived output of the pricing formula.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub base_price: f64,
    pub size_multiplier: f64,
    pub complexity_multiplier: f64,
    pub color_cost: f64,
    pub placement_cost: f64,
    pub discount: f64,
    /// Final price, floored at 0.
    pub total: f64,
}

impl PriceBreakdown {
    /// Price the given factors under the given rules and optional discount.
    ///
    /// Pure: the same inputs always produce the same breakdown.
    pub fn compute(
        rules: &PricingRules,
        factors: &PricingFactors,
        discount: Option<&DiscountCode>,
    ) -> Self {
        let base_price = rules.base_price;
        let size_multiplier = 1.0 + f64::from(factors.size.saturating_sub(1)) * rules.size_step;
        let complexity_multiplier =
            1.0 + f64::from(factors.complexity.saturating_sub(1)) * rules.complexity_step;
        let extra_colors = factors.color_count.saturating_sub(rules.included_colors);
        let color_cost = f64::from(extra_colors) * rules.extra_color_cost;
        let placement_cost = base_price * (rules.placement_multiplier(factors.placement) - 1.0);

        let subtotal =
            base_price * size_multiplier * complexity_multiplier + color_cost + placement_cost;
        let discount_amount = discount
            .map(|d| subtotal * d.percentage / 100.0)
            .unwrap_or(0.0);

        Self {
            base_price,
            size_multiplier,
            complexity_multiplier,
            color_cost,
            placement_cost,
            discount: discount_amount,
            total: (subtotal - discount_amount).max(0.0),
        }
    }

    /// The pre-discount subtotal.
    pub fn subtotal(&self) -> f64 {
        self.base_price * self.size_multiplier * self.complexity_multiplier
            + self.color_cost
            + self.placement_cost
    }

    /// Whether a discount is applied.
    pub fn has_discount(&self) -> bool {
        self.discount > 0.0
    }
}

/// Owns [`PricingFactors`] and the active discount, and keeps a
/// [`PriceBreakdown`] in sync with both.
///
/// Recomputation is synchronous and pure given (factors, active code);
/// there is no hidden state and no artificial delay.
pub struct QuoteEngine {
    rules: PricingRules,
    registry: Box<dyn DiscountRegistry>,
    factors: PricingFactors,
    active: Option<DiscountCode>,
    breakdown: PriceBreakdown,
    analytics: Box<dyn AnalyticsSink>,
}

impl QuoteEngine {
    /// Create an engine over the given rules and discount registry.
    pub fn new(rules: PricingRules, registry: impl DiscountRegistry + 'static) -> Self {
        let factors = PricingFactors::default();
        let breakdown = PriceBreakdown::compute(&rules, &factors, None);
        Self {
            rules,
            registry: Box::new(registry),
            factors,
            active: None,
            breakdown,
            analytics: Box::new(NullSink),
        }
    }

    /// Attach an analytics sink. Events are fire-and-forget.
    pub fn with_analytics(mut self, sink: impl AnalyticsSink + 'static) -> Self {
        self.analytics = Box::new(sink);
        self
    }

    /// Merge a partial factor update (clamping per field) and recompute.
    pub fn update_factors(&mut self, update: FactorUpdate) {
        self.factors.apply(update);
        self.recompute();
        self.analytics.record(
            "quote_factors_updated",
            &json!({
                "placement": self.factors.placement.as_str(),
                "total": self.breakdown.total,
            }),
        );
    }

    /// Apply a discount code.
    ///
    /// The code must exist in the registry, be unexpired, and meet its
    /// minimum subtotal; otherwise the active discount is left unchanged
    /// and the rejection reason is returned. An accepted code replaces any
    /// previously active one.
    pub fn apply_discount_code(&mut self, code: &str) -> Result<(), PricingError> {
        let found = self
            .registry
            .lookup(code)
            .ok_or_else(|| PricingError::InvalidDiscountCode(code.to_string()))?;

        if found.is_expired_at(current_timestamp()) {
            return Err(PricingError::DiscountExpired(found.code));
        }

        if let Some(min_amount) = found.min_amount {
            let subtotal = PriceBreakdown::compute(&self.rules, &self.factors, None).subtotal();
            if subtotal < min_amount {
                return Err(PricingError::DiscountBelowMinimum {
                    code: found.code,
                    min_amount,
                });
            }
        }

        tracing::debug!(code = %found.code, percentage = found.percentage, "discount applied");
        self.analytics.record(
            "discount_applied",
            &json!({ "code": found.code.as_str(), "percentage": found.percentage }),
        );
        self.active = Some(found);
        self.recompute();
        Ok(())
    }

    /// Clear the active discount and recompute.
    pub fn remove_discount_code(&mut self) {
        if self.active.take().is_some() {
            self.recompute();
            self.analytics.record("discount_removed", &json!({}));
        }
    }

    /// The current factors.
    pub fn factors(&self) -> &PricingFactors {
        &self.factors
    }

    /// The active discount, if any.
    pub fn active_discount(&self) -> Option<&DiscountCode> {
        self.active.as_ref()
    }

    /// The current price breakdown.
    pub fn breakdown(&self) -> &PriceBreakdown {
        &self.breakdown
    }

    fn recompute(&mut self) {
        self.breakdown = PriceBreakdown::compute(&self.rules, &self.factors, self.active.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::StaticRegistry;
    use crate::factors::Placement;

    const FAR_FUTURE: i64 = 4_102_444_800; // 2100-01-01

    fn registry() -> StaticRegistry {
        StaticRegistry::new([
            DiscountCode::new("SAVE25", 25.0, FAR_FUTURE),
            DiscountCode::new("SAVE10", 10.0, FAR_FUTURE),
            DiscountCode::new("TOTAL", 100.0, FAR_FUTURE),
            DiscountCode::new("EXPIRED2020", 25.0, 1_577_836_800),
            DiscountCode::new("BIGSPEND", 30.0, FAR_FUTURE).with_min_amount(500.0),
        ])
    }

    fn engine() -> QuoteEngine {
        QuoteEngine::new(PricingRules::default(), registry())
    }

    fn baseline(engine: &mut QuoteEngine) {
        engine.update_factors(
            FactorUpdate::new()
                .size(1)
                .complexity(1)
                .colors(2)
                .placement(Placement::Arm),
        );
    }

    #[test]
    fn test_baseline_quote_is_exactly_base_price() {
        let mut engine = engine();
        baseline(&mut engine);

        let breakdown = engine.breakdown();
        assert_eq!(breakdown.size_multiplier, 1.0);
        assert_eq!(breakdown.complexity_multiplier, 1.0);
        assert_eq!(breakdown.color_cost, 0.0);
        assert_eq!(breakdown.placement_cost, 0.0);
        assert_eq!(breakdown.total, 200.0);
    }

    #[test]
    fn test_quarter_discount_on_baseline() {
        let mut engine = engine();
        baseline(&mut engine);
        engine.apply_discount_code("SAVE25").unwrap();
        assert_eq!(engine.breakdown().total, 150.0);
    }

    #[test]
    fn test_total_monotonic_in_size() {
        let mut engine = engine();
        let mut previous = f64::MIN;
        for size in 1..=10 {
            engine.update_factors(FactorUpdate::new().size(size));
            let total = engine.breakdown().total;
            assert!(total >= previous, "size {size} decreased the total");
            previous = total;
        }
    }

    #[test]
    fn test_each_extra_color_adds_exactly_twenty() {
        let mut engine = engine();
        baseline(&mut engine);
        let base = engine.breakdown().total;

        for extra in 1..=4 {
            engine.update_factors(FactorUpdate::new().colors(2 + extra));
            let expected = base + f64::from(extra) * 20.0;
            assert!((engine.breakdown().total - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_placement_cost_uses_rule_table() {
        let mut engine = engine();
        baseline(&mut engine);
        engine.update_factors(FactorUpdate::new().placement(Placement::Face));
        // base * (2.0 - 1.0)
        assert_eq!(engine.breakdown().placement_cost, 200.0);
        assert_eq!(engine.breakdown().total, 400.0);
    }

    #[test]
    fn test_total_never_negative_at_full_discount() {
        let mut engine = engine();
        baseline(&mut engine);
        engine.apply_discount_code("TOTAL").unwrap();
        assert_eq!(engine.breakdown().total, 0.0);
    }

    #[test]
    fn test_expired_code_rejected_and_state_unchanged() {
        let mut engine = engine();
        baseline(&mut engine);
        engine.apply_discount_code("SAVE10").unwrap();
        let before = *engine.breakdown();

        let result = engine.apply_discount_code("EXPIRED2020");
        assert_eq!(
            result,
            Err(PricingError::DiscountExpired("EXPIRED2020".to_string()))
        );
        assert_eq!(engine.active_discount().unwrap().code, "SAVE10");
        assert_eq!(engine.breakdown(), &before);
    }

    #[test]
    fn test_unknown_code_rejected() {
        let mut engine = engine();
        let result = engine.apply_discount_code("NOPE");
        assert_eq!(
            result,
            Err(PricingError::InvalidDiscountCode("NOPE".to_string()))
        );
        assert!(engine.active_discount().is_none());
    }

    #[test]
    fn test_minimum_subtotal_enforced() {
        let mut engine = engine();
        baseline(&mut engine);
        // Baseline subtotal is 200, under the 500 minimum.
        let result = engine.apply_discount_code("BIGSPEND");
        assert!(matches!(
            result,
            Err(PricingError::DiscountBelowMinimum { min_amount, .. }) if min_amount == 500.0
        ));

        engine.update_factors(FactorUpdate::new().size(10).complexity(10));
        engine.apply_discount_code("BIGSPEND").unwrap();
        assert!(engine.breakdown().has_discount());
    }

    #[test]
    fn test_new_code_replaces_previous() {
        let mut engine = engine();
        baseline(&mut engine);
        engine.apply_discount_code("SAVE10").unwrap();
        engine.apply_discount_code("SAVE25").unwrap();
        assert_eq!(engine.active_discount().unwrap().code, "SAVE25");
        assert_eq!(engine.breakdown().total, 150.0);
    }

    #[test]
    fn test_remove_discount_restores_subtotal() {
        let mut engine = engine();
        baseline(&mut engine);
        engine.apply_discount_code("SAVE25").unwrap();
        engine.remove_discount_code();
        assert!(engine.active_discount().is_none());
        assert_eq!(engine.breakdown().total, 200.0);
    }

    #[test]
    fn test_lookup_is_case_insensitive_through_engine() {
        let mut engine = engine();
        baseline(&mut engine);
        engine.apply_discount_code("save25").unwrap();
        assert_eq!(engine.breakdown().total, 150.0);
    }

    #[test]
    fn test_compute_is_pure() {
        let rules = PricingRules::default();
        let factors = PricingFactors::default();
        let a = PriceBreakdown::compute(&rules, &factors, None);
        let b = PriceBreakdown::compute(&rules, &factors, None);
        assert_eq!(a, b);
    }
}
