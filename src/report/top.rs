//! Most-expensive-record report
//!
//! Writes a single row naming the purchase with the highest value. This
//! is the one report whose contract requires at least one record: empty
//! input is a fatal error, not an empty report.

use crate::core::aggregator::most_expensive;
use crate::io::csv_format::write_top_csv;
use crate::io::sync_reader::SyncReader;
use crate::report::ReportStrategy;
use crate::types::PurchaseRecord;
use std::io::Write;
use std::path::Path;

/// The single most expensive purchase
#[derive(Debug, Clone, Copy)]
pub struct TopReport;

impl ReportStrategy for TopReport {
    /// Process purchases from input file and write the most expensive one
    ///
    /// # Errors
    ///
    /// Besides the usual fatal I/O errors, fails with the empty-reduction
    /// message when no well-formed record survives parsing.
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

        let top = most_expensive(&records).map_err(|e| e.to_string())?;
        write_top_csv(top, output)?;

        Ok(())
    }
}
