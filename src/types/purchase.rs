//! Purchase record types for the Rust Discount Engine
//!
//! This module defines the immutable purchase record that every
//! aggregation operates on.

use crate::types::DiscountError;
use rust_decimal::Decimal;

/// One purchased item with a name and a monetary value
///
/// Records are immutable once constructed and carry no identity beyond
/// structural equality of (item, value). Item names are not unique;
/// the same item may repeat across a purchase list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseRecord {
    /// Non-empty item name
    item: String,

    /// Monetary value, exact decimal, non-negative
    ///
    /// Stored as a rust_decimal Decimal so that summation is exact and
    /// independent of ordering. Binary floating point is never used for
    /// money in this crate.
    value: Decimal,
}

impl PurchaseRecord {
    /// Create a new purchase record
    ///
    /// Validation happens here and nowhere else: a record that exists is
    /// well-formed, so aggregation never has to re-check its inputs.
    ///
    /// # Arguments
    ///
    /// * `item` - The item name; must be non-empty
    /// * `value` - The monetary value; must be non-negative
    ///
    /// # Returns
    ///
    /// * `Ok(PurchaseRecord)` if the record is well-formed
    /// * `Err(DiscountError::InvalidRecord)` for an empty item name or a
    ///   negative value
    pub fn new(item: impl Into<String>, value: Decimal) -> Result<Self, DiscountError> {
        let item = item.into();

        if item.is_empty() {
            return Err(DiscountError::empty_item());
        }

        if value < Decimal::ZERO {
            return Err(DiscountError::negative_value(&item, value));
        }

        Ok(PurchaseRecord { item, value })
    }

    /// The item name
    pub fn item(&self) -> &str {
        &self.item
    }

    /// The monetary value
    pub fn value(&self) -> Decimal {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::whole_units("cookie", Decimal::new(1500, 0))]
    #[case::fractional("milk", Decimal::new(119999, 2))]
    #[case::zero_value("freebie", Decimal::ZERO)]
    fn test_new_accepts_well_formed_records(#[case] item: &str, #[case] value: Decimal) {
        let record = PurchaseRecord::new(item, value).unwrap();

        assert_eq!(record.item(), item);
        assert_eq!(record.value(), value);
    }

    #[test]
    fn test_new_rejects_negative_value() {
        let result = PurchaseRecord::new("bread", Decimal::new(-4500, 0));

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            DiscountError::InvalidRecord { .. }
        ));
    }

    #[test]
    fn test_new_rejects_empty_item() {
        let result = PurchaseRecord::new("", Decimal::new(1500, 0));

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            DiscountError::InvalidRecord { .. }
        ));
    }

    #[test]
    fn test_structural_equality() {
        let a = PurchaseRecord::new("bread", Decimal::new(4500, 0)).unwrap();
        let b = PurchaseRecord::new("bread", Decimal::new(4500, 0)).unwrap();
        let c = PurchaseRecord::new("bread", Decimal::new(4501, 0)).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
