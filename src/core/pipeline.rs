//! Discount pipeline composition
//!
//! A pipeline is an ordered sequence of rules composed into a single
//! transformation. Application order matches list order: the first rule
//! sees the original value, the second rule sees the first rule's result,
//! and so on. This models "apply the member discount to the full price,
//! then the vip discount to the already-discounted price" - sequential
//! compounding, not independent percentages of the original.
//!
//! Rules are not assumed to commute. Percentage discounts happen to, but
//! the composer preserves ordering so future rules (flat amounts, caps)
//! behave correctly.

use crate::core::rule::Rule;
use rust_decimal::Decimal;
use std::fmt;

/// An ordered composition of discount rules
///
/// The empty pipeline is the identity transformation; composing zero
/// rules is valid and is not an error. A `Pipeline` implements [`Rule`]
/// itself, so pipelines nest and compose like any other rule.
#[derive(Default)]
pub struct Pipeline {
    rules: Vec<Box<dyn Rule>>,
}

impl Pipeline {
    /// The identity pipeline (no rules)
    pub fn identity() -> Self {
        Pipeline { rules: Vec::new() }
    }

    /// Compose an ordered list of rules
    ///
    /// Rules apply left-to-right in list order. An empty list yields the
    /// identity pipeline.
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Pipeline { rules }
    }

    /// Append a rule to the end of the pipeline
    ///
    /// The appended rule sees the output of every rule already present.
    pub fn push(&mut self, rule: impl Rule + 'static) {
        self.rules.push(Box::new(rule));
    }

    /// Number of rules in the pipeline
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the pipeline is the identity
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule in sequence to a monetary value
    pub fn apply(&self, value: Decimal) -> Decimal {
        self.rules.iter().fold(value, |acc, rule| rule.apply(acc))
    }
}

impl Rule for Pipeline {
    fn apply(&self, value: Decimal) -> Decimal {
        Pipeline::apply(self, value)
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("rules", &self.rules.len())
            .finish()
    }
}
