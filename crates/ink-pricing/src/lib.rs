//! Deterministic quote engine and pricing rules for the Ink platform.
//!
//! The [`QuoteEngine`] owns [`PricingFactors`] and an optional active
//! [`DiscountCode`], and keeps a [`PriceBreakdown`] synchronously in sync
//! with both. Constants live in an injected [`PricingRules`] table and
//! valid codes come from an injected [`DiscountRegistry`], so the
//! calculation itself carries no configuration.
//!
//! # Example
//!
//! ```rust,ignore
//! use ink_pricing::prelude::*;
//!
//! let registry = StaticRegistry::new([
//!     DiscountCode::new("SAVE10", 10.0, valid_until),
//! ]);
//! let mut quote = QuoteEngine::new(PricingRules::default(), registry);
//!
//! quote.update_factors(FactorUpdate::new().size(7).placement(Placement::Back));
//! quote.apply_discount_code("save10")?;
//!
//! println!("total: {:.2}", quote.breakdown().total);
//! ```

pub mod discount;
pub mod error;
pub mod factors;
pub mod quote;
pub mod rules;
pub mod tiers;

pub use discount::{DiscountCode, DiscountRegistry, StaticRegistry};
pub use error::PricingError;
pub use factors::{FactorUpdate, Placement, PricingFactors, FACTOR_MAX, FACTOR_MIN};
pub use quote::{PriceBreakdown, QuoteEngine};
pub use rules::PricingRules;
pub use tiers::{standard_tiers, BillingInterval, SubscriptionTier, TierFeatures};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::discount::{DiscountCode, DiscountRegistry, StaticRegistry};
    pub use crate::error::PricingError;
    pub use crate::factors::{FactorUpdate, Placement, PricingFactors};
    pub use crate::quote::{PriceBreakdown, QuoteEngine};
    pub use crate::rules::PricingRules;
    pub use crate::tiers::{standard_tiers, BillingInterval, SubscriptionTier};
}
