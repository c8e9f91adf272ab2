//! Grand-total report
//!
//! Streams purchase records from CSV, applies the composed discount
//! pipeline to every record value, and writes a single-row report with
//! the record count, the raw total, and the discounted total. An
//! optional item filter restricts the aggregation to matching records;
//! non-matching records are never transformed.

use crate::core::aggregator::{item_selector, total, total_where};
use crate::core::Pipeline;
use crate::io::csv_format::write_total_csv;
use crate::io::sync_reader::SyncReader;
use crate::report::ReportStrategy;
use crate::types::PurchaseRecord;
use rust_decimal::Decimal;
use std::io::Write;
use std::path::Path;

/// Discounted grand-total report
///
/// Orchestrates the flow between CSV reading, pipeline application,
/// aggregation, and output generation.
///
/// # Error Handling
///
/// Fatal errors (file not found, I/O errors) are returned immediately.
/// Individual record errors are logged to stderr and processing continues.
pub struct TotalReport {
    pipeline: Pipeline,
    item_filter: Option<String>,
}

impl TotalReport {
    /// Create a total report over the given pipeline and optional filter
    pub fn new(pipeline: Pipeline, item_filter: Option<String>) -> Self {
        TotalReport {
            pipeline,
            item_filter,
        }
    }
}

impl ReportStrategy for TotalReport {
    /// Process purchases from input file and write the total report
    ///
    /// This method orchestrates the complete report pipeline:
    /// 1. Creates a SyncReader to stream purchase records from the CSV file
    /// 2. Collects well-formed records, logging and skipping malformed rows
    /// 3. Computes the record count, raw total, and discounted total
    ///    (restricted by the item filter when one is set)
    /// 4. Writes the report row using csv_format::write_total_csv
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), String> {
        let reader = SyncReader::new(input_path)?;

        let mut records: Vec<PurchaseRecord> = Vec::new();
        for result in reader {
            match result {
                Ok(record) => records.push(record),
                Err(e) => {
                    // Log conversion errors to stderr and keep going
                    eprintln!("CSV parsing error: {}", e);
                }
            }
        }

        let identity = Pipeline::identity();
        let (count, raw_total, discounted_total): (usize, Decimal, Decimal) =
            match &self.item_filter {
                Some(name) => {
                    let selector = item_selector(name);
                    let count = records.iter().filter(|r| selector(r)).count();
                    (
                        count,
                        total_where(&records, &selector, &identity),
                        total_where(&records, &selector, &self.pipeline),
                    )
                }
                None => (
                    records.len(),
                    total(&records, &identity),
                    total(&records, &self.pipeline),
                ),
            };

        write_total_csv(count, raw_total, discounted_total, output)?;

        Ok(())
    }
}
