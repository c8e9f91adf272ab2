//! Error types for the Rust Discount Engine
//!
//! This module defines all error types that can occur while building
//! discount rules and aggregating purchase records. Errors are designed
//! to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Record Errors**: malformed purchase records rejected at construction
//! - **Rule Errors**: discount rates outside the valid range
//! - **Reduction Errors**: required-element aggregates over empty input
//! - **File I/O Errors**: file not found, permission denied, etc.
//! - **CSV Parsing Errors**: malformed CSV, invalid data types, etc.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the discount engine
///
/// This enum represents all possible errors that can occur while
/// constructing records and rules or aggregating totals. Each variant
/// includes relevant context to help diagnose and resolve the issue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiscountError {
    /// A purchase record failed validation at construction
    ///
    /// Raised for a negative monetary value or an empty item name.
    /// Malformed records fail fast at the boundary, never mid-pipeline.
    #[error("Invalid record for item '{item}': {message}")]
    InvalidRecord {
        /// The item name of the offending record (may be empty)
        item: String,
        /// Description of the validation failure
        message: String,
    },

    /// A discount rate outside the valid range [0, 1] was supplied
    ///
    /// Rules are validated at construction; a rule that passed
    /// construction can always be applied.
    #[error("Invalid discount rate {rate}: must lie in [0, 1]")]
    InvalidRule {
        /// The out-of-range rate
        rate: Decimal,
    },

    /// A required-element aggregate was requested over an empty sequence
    ///
    /// Only operations whose contract requires at least one element raise
    /// this (e.g. finding the most expensive purchase). Plain totals
    /// define the empty sum as zero and never fail.
    #[error("Cannot compute {operation} over an empty purchase list")]
    EmptyReduction {
        /// The operation that required at least one element
        operation: String,
    },

    /// I/O error occurred while reading or writing files
    ///
    /// This is typically a fatal error (file permissions, disk full, etc.).
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// This is a recoverable error - the malformed record is skipped
    /// and processing continues with the next record.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

// Conversion from io::Error to DiscountError
impl From<std::io::Error> for DiscountError {
    fn from(error: std::io::Error) -> Self {
        DiscountError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to DiscountError
impl From<csv::Error> for DiscountError {
    fn from(error: csv::Error) -> Self {
        // Extract line number if available
        let line = error.position().map(|pos| pos.line());

        DiscountError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl DiscountError {
    /// Create an InvalidRecord error for a negative monetary value
    pub fn negative_value(item: &str, value: Decimal) -> Self {
        DiscountError::InvalidRecord {
            item: item.to_string(),
            message: format!("value {} is negative", value),
        }
    }

    /// Create an InvalidRecord error for an empty item name
    pub fn empty_item() -> Self {
        DiscountError::InvalidRecord {
            item: String::new(),
            message: "item name is empty".to_string(),
        }
    }

    /// Create an InvalidRule error
    pub fn invalid_rule(rate: Decimal) -> Self {
        DiscountError::InvalidRule { rate }
    }

    /// Create an EmptyReduction error
    pub fn empty_reduction(operation: &str) -> Self {
        DiscountError::EmptyReduction {
            operation: operation.to_string(),
        }
    }
}
