//! Report strategy module
//!
//! This module defines the Strategy pattern for complete report pipelines,
//! encompassing CSV reading, aggregation, and report output. This allows
//! different report implementations (grand total, per-item subtotals,
//! most expensive record) to be selected at runtime.

use crate::cli::ReportType;
use crate::core::Pipeline;
use std::io::Write;
use std::path::Path;

pub mod grouped;
pub mod top;
pub mod total;

pub use grouped::GroupedReport;
pub use top::TopReport;
pub use total::TotalReport;

/// Report strategy trait for complete aggregation pipelines
///
/// This trait defines the interface for the different report
/// implementations. Each strategy must be able to read purchase records
/// from a CSV file, aggregate them, and write the report to output.
pub trait ReportStrategy: Send + Sync {
    /// Process purchases from input file and write the report to output
    ///
    /// # Arguments
    ///
    /// * `input_path` - Path to the input CSV file containing purchase records
    /// * `output` - Mutable reference to a writer for outputting the report
    ///
    /// # Returns
    ///
    /// * `Ok(())` if processing completed successfully (or with recoverable errors)
    /// * `Err(String)` if a fatal error occurred (file not found, I/O error,
    ///   or an aggregate whose contract the input cannot satisfy)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened (file not found, permission denied)
    /// - A fatal I/O error occurs during reading or writing
    /// - Output cannot be written
    ///
    /// Individual record conversion errors are logged to stderr and the
    /// offending row is skipped; processing continues with the next row.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), String>;
}

/// Create a report strategy based on the specified report type
///
/// This factory function selects and instantiates the appropriate report
/// implementation at runtime from the CLI report type, the composed
/// discount pipeline, and the optional item filter.
///
/// # Arguments
///
/// * `report_type` - The type of report to create
/// * `pipeline` - The composed discount pipeline (ignored by reports that
///   operate on raw values)
/// * `item_filter` - Optional item name restricting the aggregated records
///
/// # Returns
///
/// A boxed trait object implementing the ReportStrategy trait
pub fn create_report(
    report_type: ReportType,
    pipeline: Pipeline,
    item_filter: Option<String>,
) -> Box<dyn ReportStrategy> {
    match report_type {
        ReportType::Total => Box::new(TotalReport::new(pipeline, item_filter)),
        ReportType::Grouped => Box::new(GroupedReport::new(item_filter)),
        ReportType::Top => Box::new(TopReport),
    }
}
