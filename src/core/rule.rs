//! Discount rules
//!
//! A rule is a pure value-to-value transformation. Rules are stateless,
//! deterministic and validated at construction, so applying one can never
//! fail. The only built-in rule is the percentage discount, but the trait
//! seam exists so pipelines can carry arbitrary future rules without
//! assuming anything about their math.

use crate::types::DiscountError;
use rust_decimal::Decimal;

/// A pure discount transformation applied to one monetary value
///
/// Implementations must be stateless and deterministic: calling `apply`
/// twice with the same input yields the same output. `Send + Sync` is
/// required so composed rules can live inside report strategies.
pub trait Rule: Send + Sync {
    /// Transform a monetary value
    fn apply(&self, value: Decimal) -> Decimal;
}

/// Percentage discount: `apply(v) = v - v * rate`
///
/// The rate must lie in [0, 1]. A rate of 0.10 subtracts 10% of the
/// incoming value; the incoming value is whatever the previous rule in a
/// pipeline produced, which is how sequential compounding arises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentOff {
    rate: Decimal,
}

impl PercentOff {
    /// Create a percentage discount rule
    ///
    /// # Arguments
    ///
    /// * `rate` - The fraction to subtract, in [0, 1]
    ///
    /// # Returns
    ///
    /// * `Ok(PercentOff)` for a rate in range
    /// * `Err(DiscountError::InvalidRule)` otherwise
    pub fn new(rate: Decimal) -> Result<Self, DiscountError> {
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(DiscountError::invalid_rule(rate));
        }

        Ok(PercentOff { rate })
    }

    /// The standard member discount (10%)
    pub fn member() -> Self {
        PercentOff {
            rate: Decimal::new(10, 2),
        }
    }

    /// The additional vip discount (5%)
    ///
    /// Applied after the member discount in the standard pipeline, so it
    /// discounts the already-discounted price.
    pub fn vip() -> Self {
        PercentOff {
            rate: Decimal::new(5, 2),
        }
    }

    /// The discount rate
    pub fn rate(&self) -> Decimal {
        self.rate
    }
}

impl Rule for PercentOff {
    fn apply(&self, value: Decimal) -> Decimal {
        value - value * self.rate
    }
}
