//! Subscription tier catalog data.
//!
//! Display data for the pricing page. Billing and payment processing live
//! with an external collaborator; nothing here touches money movement.

use serde::{Deserialize, Serialize};

/// Billing interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillingInterval {
    #[default]
    Month,
    Year,
}

/// Feature matrix for a tier. `-1` means unlimited for the count fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TierFeatures {
    pub ai_generations: i32,
    pub design_revisions: i32,
    pub premium_styles: bool,
    pub priority_support: bool,
    pub collaboration_tools: bool,
    pub export_formats: Vec<String>,
}

impl TierFeatures {
    /// Whether AI generations are unlimited.
    pub fn unlimited_generations(&self) -> bool {
        self.ai_generations < 0
    }
}

/// A subscription tier as shown on the pricing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionTier {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub interval: BillingInterval,
    pub features: TierFeatures,
    #[serde(default)]
    pub popular: bool,
}

/// The built-in Basic / Premium / Enterprise roster.
pub fn standard_tiers() -> Vec<SubscriptionTier> {
    vec![
        SubscriptionTier {
            id: "basic".to_string(),
            name: "Basic".to_string(),
            price: 9.99,
            interval: BillingInterval::Month,
            features: TierFeatures {
                ai_generations: 10,
                design_revisions: 3,
                premium_styles: false,
                priority_support: false,
                collaboration_tools: false,
                export_formats: vec!["PNG".to_string()],
            },
            popular: false,
        },
        SubscriptionTier {
            id: "premium".to_string(),
            name: "Premium".to_string(),
            price: 19.99,
            interval: BillingInterval::Month,
            features: TierFeatures {
                ai_generations: 50,
                design_revisions: 10,
                premium_styles: true,
                priority_support: true,
                collaboration_tools: true,
                export_formats: vec!["PNG".to_string(), "SVG".to_string(), "PDF".to_string()],
            },
            popular: true,
        },
        SubscriptionTier {
            id: "enterprise".to_string(),
            name: "Enterprise".to_string(),
            price: 49.99,
            interval: BillingInterval::Month,
            features: TierFeatures {
                ai_generations: -1,
                design_revisions: -1,
                premium_styles: true,
                priority_support: true,
                collaboration_tools: true,
                export_formats: vec![
                    "PNG".to_string(),
                    "SVG".to_string(),
                    "PDF".to_string(),
                    "AI".to_string(),
                ],
            },
            popular: false,
        },
    ]
}
