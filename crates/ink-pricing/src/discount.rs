//! Discount codes and the registry seam.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A percentage-off code with an expiry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiscountCode {
    /// The code as entered by the customer; lookup is case-insensitive.
    pub code: String,
    /// Percentage off, in (0, 100].
    pub percentage: f64,
    /// Expiry, Unix seconds. The code is valid strictly before this.
    pub valid_until: i64,
    /// Minimum subtotal required, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<f64>,
}

impl DiscountCode {
    /// Create a code.
    pub fn new(code: impl Into<String>, percentage: f64, valid_until: i64) -> Self {
        Self {
            code: code.into(),
            percentage,
            valid_until,
            min_amount: None,
        }
    }

    /// Require a minimum subtotal.
    pub fn with_min_amount(mut self, min_amount: f64) -> Self {
        self.min_amount = Some(min_amount);
        self
    }

    /// Whether the code is expired at `now` (Unix seconds).
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.valid_until
    }

    /// Whether the code is expired right now.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp())
    }
}

/// Source of valid discount codes. Injected into the quote engine so
/// pricing rules stay out of the calculation core.
pub trait DiscountRegistry {
    /// Look up a code, case-insensitively.
    fn lookup(&self, code: &str) -> Option<DiscountCode>;
}

/// In-memory registry over a fixed set of codes.
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    codes: HashMap<String, DiscountCode>,
}

impl StaticRegistry {
    /// Build a registry from the given codes.
    pub fn new(codes: impl IntoIterator<Item = DiscountCode>) -> Self {
        Self {
            codes: codes
                .into_iter()
                .map(|c| (c.code.to_uppercase(), c))
                .collect(),
        }
    }
}

impl DiscountRegistry for StaticRegistry {
    fn lookup(&self, code: &str) -> Option<DiscountCode> {
        self.codes.get(&code.to_uppercase()).cloned()
    }
}

/// Get current Unix timestamp.
pub(crate) fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
