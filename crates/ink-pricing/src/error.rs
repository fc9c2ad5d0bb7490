//! Pricing error types.

use thiserror::Error;

/// Errors that can occur in pricing operations.
///
/// The discount variants are expected business outcomes, not programming
/// errors: a rejected code leaves the active discount unchanged.
#[derive(Error, Debug, PartialEq)]
pub enum PricingError {
    /// Unrecognized placement key.
    #[error("Unknown placement: {0}")]
    UnknownPlacement(String),

    /// Discount code not present in the registry.
    #[error("Invalid discount code: {0}")]
    InvalidDiscountCode(String),

    /// Discount code past its expiry.
    #[error("Discount expired: {0}")]
    DiscountExpired(String),

    /// Quote subtotal under the code's minimum.
    #[error("Discount {code} requires a minimum subtotal of {min_amount}")]
    DiscountBelowMinimum { code: String, min_amount: f64 },
}
