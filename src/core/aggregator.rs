//! Aggregation over purchase records
//!
//! Pure, stateless functions that reduce a record sequence to a monetary
//! total or to group-by subtotals. Totals map every record's value
//! through a rule before summing; group-by subtotals sum raw values and
//! are independent of any discount pipeline (they are a reporting
//! concern).
//!
//! Sums use exact decimal addition, so summation order cannot affect the
//! result. Empty input sums to zero; only the required-element lookups
//! (`most_expensive`) treat emptiness as an error.

use crate::core::rule::Rule;
use crate::types::{DiscountError, PurchaseRecord};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Sum every record's value after transforming it through a rule
///
/// Empty input yields zero (the additive identity), not an error.
/// With the identity rule this is the raw total.
pub fn total(records: &[PurchaseRecord], rule: &dyn Rule) -> Decimal {
    records
        .iter()
        .map(|record| rule.apply(record.value()))
        .sum()
}

/// Sum transformed values over the records matching a predicate
///
/// Records not matching the predicate are excluded entirely; their
/// transformed value is never computed.
pub fn total_where<P>(records: &[PurchaseRecord], predicate: P, rule: &dyn Rule) -> Decimal
where
    P: Fn(&PurchaseRecord) -> bool,
{
    records
        .iter()
        .filter(|record| predicate(record))
        .map(|record| rule.apply(record.value()))
        .sum()
}

/// Group records by a derived key and sum raw values per group
///
/// The sums are of undiscounted values; grouping is a reporting
/// operation independent of the discount pipeline. A BTreeMap keeps the
/// keys sorted so downstream output is deterministic.
pub fn totals_by<K, F>(records: &[PurchaseRecord], key_fn: F) -> BTreeMap<K, Decimal>
where
    K: Ord,
    F: Fn(&PurchaseRecord) -> K,
{
    let mut groups = BTreeMap::new();
    for record in records {
        let subtotal = groups.entry(key_fn(record)).or_insert(Decimal::ZERO);
        *subtotal += record.value();
    }
    groups
}

/// Group by item name and sum raw values per item
pub fn totals_by_item(records: &[PurchaseRecord]) -> BTreeMap<String, Decimal> {
    totals_by(records, |record| record.item().to_string())
}

/// Build a predicate matching records with the given item name
pub fn item_selector(name: &str) -> impl Fn(&PurchaseRecord) -> bool {
    let name = name.to_string();
    move |record| record.item() == name
}

/// The record with the highest value
///
/// # Returns
///
/// * `Ok(&PurchaseRecord)` - the most expensive record (the last one in
///   list order when several tie)
/// * `Err(DiscountError::EmptyReduction)` - the list is empty; this
///   operation requires at least one element
pub fn most_expensive(records: &[PurchaseRecord]) -> Result<&PurchaseRecord, DiscountError> {
    records
        .iter()
        .max_by(|a, b| a.value().cmp(&b.value()))
        .ok_or_else(|| DiscountError::empty_reduction("most expensive purchase"))
}

/// The first record matching a predicate, if any
pub fn first_matching<P>(records: &[PurchaseRecord], predicate: P) -> Option<&PurchaseRecord>
where
    P: Fn(&PurchaseRecord) -> bool,
{
    records.iter().find(|record| predicate(record))
}
