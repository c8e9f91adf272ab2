//! Per-item subtotal report
//!
//! Groups purchase records by item name and writes one row per item with
//! the raw (undiscounted) subtotal. Grouping is a reporting concern and
//! is independent of any discount pipeline.

use crate::core::aggregator::{item_selector, totals_by_item};
use crate::io::csv_format::write_grouped_csv;
use crate::io::sync_reader::SyncReader;
use crate::report::ReportStrategy;
use crate::types::PurchaseRecord;
use std::io::Write;
use std::path::Path;

/// Raw subtotals grouped by item name
///
/// Rows are written in item-name order for deterministic output. An
/// optional item filter restricts the report to a single item's group.
pub struct GroupedReport {
    item_filter: Option<String>,
}

impl GroupedReport {
    /// Create a grouped report with an optional item filter
    pub fn new(item_filter: Option<String>) -> Self {
        GroupedReport { item_filter }
    }
}

impl ReportStrategy for GroupedReport {
    /// Process purchases from input file and write per-item subtotals
    ///
    /// Malformed rows are logged to stderr and skipped, matching the
    /// recoverable-error behavior of the other reports.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), String> {
        let reader = SyncReader::new(input_path)?;

        let mut records: Vec<PurchaseRecord> = Vec::new();
        for result in reader {
            match result {
                Ok(record) => records.push(record),
                Err(e) => {
                    eprintln!("CSV parsing error: {}", e);
                }
            }
        }

        if let Some(name) = &self.item_filter {
            let selector = item_selector(name);
            records.retain(|record| selector(record));
        }

        let groups = totals_by_item(&records);
        write_grouped_csv(&groups, output)?;

        Ok(())
    }
}
