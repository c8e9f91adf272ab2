//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over purchase records from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Iterator Interface
//!
//! SyncReader implements the Iterator trait, yielding
//! Result<PurchaseRecord, String> for each CSV row:
//!
//! ```no_run
//! use rust_discount_engine::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("purchases.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("Read purchase: {:?}", record),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual record parsing errors are yielded as Err variants in the
//!   iterator, with line numbers for debugging
//!
//! # Memory Efficiency
//!
//! The reader streams CSV records one at a time and never loads the
//! entire file into memory.

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::PurchaseRecord;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Synchronous CSV reader
///
/// Provides an iterator interface over purchase records.
/// Maintains streaming behavior with constant memory usage.
///
/// # Examples
///
/// ```no_run
/// use rust_discount_engine::io::sync_reader::SyncReader;
/// use std::path::Path;
///
/// let reader = SyncReader::new(Path::new("purchases.csv")).unwrap();
/// let records: Vec<_> = reader.filter_map(Result::ok).collect();
/// println!("Successfully parsed {} records", records.len());
/// ```
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    line_num: usize,
}

impl SyncReader {
    /// Create a new SyncReader from a file path
    ///
    /// Opens the CSV file and prepares it for streaming iteration.
    /// The CSV reader is configured to:
    /// - Trim whitespace from all fields
    /// - Allow flexible field counts (for a missing value field)
    /// - Use an 8KB buffer for efficient I/O
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the CSV file
    ///
    /// # Returns
    ///
    /// * `Ok(SyncReader)` if file opened successfully
    /// * `Err(String)` if file could not be opened
    pub fn new(path: &Path) -> Result<Self, String> {
        let file = File::open(path)
            .map_err(|e| format!("Failed to open file '{}': {}", path.display(), e))?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 0,
        })
    }
}

impl Iterator for SyncReader {
    type Item = Result<PurchaseRecord, String>;

    /// Get the next purchase record from the CSV file
    ///
    /// This method:
    /// 1. Reads the next CSV row and deserializes it to CsvRecord
    /// 2. Converts the CsvRecord to PurchaseRecord using
    ///    csv_format::convert_csv_record
    /// 3. Includes line numbers in error messages for debugging
    ///
    /// # Returns
    ///
    /// * `Some(Ok(PurchaseRecord))` - Successfully parsed record
    /// * `Some(Err(String))` - Parse or conversion error with line number
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        // Get next CSV record
        let mut deserializer = self.reader.deserialize::<CsvRecord>();

        match deserializer.next()? {
            Ok(csv_record) => {
                self.line_num += 1;
                // Convert CSV record to PurchaseRecord
                // Add line number context to any conversion errors
                Some(
                    convert_csv_record(csv_record)
                        .map_err(|e| format!("Line {}: {}", self.line_num + 1, e)),
                )
            }
            Err(e) => {
                self.line_num += 1;
                Some(Err(format!(
                    "Line {}: CSV parse error: {}",
                    self.line_num + 1,
                    e
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_sync_reader_new_opens_file() {
        let csv_content = "item,value\ncookie,1500\n";
        let file = create_temp_csv(csv_content);

        let result = SyncReader::new(file.path());
        assert!(result.is_ok());
    }

    #[test]
    fn test_sync_reader_new_fails_on_missing_file() {
        let result = SyncReader::new(Path::new("nonexistent.csv"));
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Failed to open file"));
    }

    #[test]
    fn test_sync_reader_iterates_valid_record() {
        let csv_content = "item,value\ncookie,1500\n";
        let file = create_temp_csv(csv_content);

        let reader = SyncReader::new(file.path()).unwrap();
        let records: Vec<_> = reader.collect();

        assert_eq!(records.len(), 1);
        assert!(records[0].is_ok());

        let record = records[0].as_ref().unwrap();
        assert_eq!(record.item(), "cookie");
        assert_eq!(record.value(), Decimal::new(1500, 0));
    }

    #[test]
    fn test_sync_reader_iterates_multiple_records() {
        let csv_content = "item,value\ncookie,1500\nserial,2500\nbread,4500\n";
        let file = create_temp_csv(csv_content);

        let reader = SyncReader::new(file.path()).unwrap();
        let records: Vec<_> = reader.collect();

        assert_eq!(records.len(), 3);
        assert!(records[0].is_ok());
        assert!(records[1].is_ok());
        assert!(records[2].is_ok());
    }

    #[test]
    fn test_sync_reader_handles_malformed_record() {
        let csv_content = "item,value\ncookie,invalid\n";
        let file = create_temp_csv(csv_content);

        let reader = SyncReader::new(file.path()).unwrap();
        let records: Vec<_> = reader.collect();

        assert_eq!(records.len(), 1);
        assert!(records[0].is_err());
        let error = records[0].as_ref().unwrap_err();
        assert!(error.contains("Line 2"));
        assert!(error.contains("Invalid value"));
    }

    #[test]
    fn test_sync_reader_includes_line_numbers_in_errors() {
        let csv_content = "item,value\ncookie,1500\nserial,invalid\nbread,4500\n";
        let file = create_temp_csv(csv_content);

        let reader = SyncReader::new(file.path()).unwrap();
        let records: Vec<_> = reader.collect();

        assert_eq!(records.len(), 3);
        assert!(records[0].is_ok());
        assert!(records[1].is_err());
        assert!(records[2].is_ok());

        let error = records[1].as_ref().unwrap_err();
        assert!(error.contains("Line 3")); // Line 3 because of header
    }

    #[test]
    fn test_sync_reader_handles_whitespace() {
        let csv_content = "item,value\n  cookie  ,  1500  \n";
        let file = create_temp_csv(csv_content);

        let reader = SyncReader::new(file.path()).unwrap();
        let records: Vec<_> = reader.collect();

        assert_eq!(records.len(), 1);
        assert!(records[0].is_ok());

        let record = records[0].as_ref().unwrap();
        assert_eq!(record.item(), "cookie");
        assert_eq!(record.value(), Decimal::new(1500, 0));
    }

    #[test]
    fn test_sync_reader_rejects_negative_value() {
        let csv_content = "item,value\nbread,-4500\n";
        let file = create_temp_csv(csv_content);

        let reader = SyncReader::new(file.path()).unwrap();
        let records: Vec<_> = reader.collect();

        assert_eq!(records.len(), 1);
        assert!(records[0].is_err());
        assert!(records[0].as_ref().unwrap_err().contains("is negative"));
    }

    #[test]
    fn test_sync_reader_handles_empty_file_after_header() {
        let csv_content = "item,value\n";
        let file = create_temp_csv(csv_content);

        let reader = SyncReader::new(file.path()).unwrap();
        let records: Vec<_> = reader.collect();

        assert_eq!(records.len(), 0);
    }

    #[test]
    fn test_sync_reader_continues_after_error() {
        let csv_content = "item,value\ncookie,1500\n,999\nbread,4500\n";
        let file = create_temp_csv(csv_content);

        let reader = SyncReader::new(file.path()).unwrap();
        let records: Vec<_> = reader.collect();

        assert_eq!(records.len(), 3);
        assert!(records[0].is_ok());
        assert!(records[1].is_err());
        assert!(records[2].is_ok());
    }

    #[test]
    fn test_sync_reader_filter_map_pattern() {
        let csv_content = "item,value\ncookie,1500\nserial,invalid\nbread,4500\n";
        let file = create_temp_csv(csv_content);

        let reader = SyncReader::new(file.path()).unwrap();
        let valid_records: Vec<_> = reader.filter_map(Result::ok).collect();

        assert_eq!(valid_records.len(), 2);
        assert_eq!(valid_records[0].item(), "cookie");
        assert_eq!(valid_records[1].item(), "bread");
    }

    #[test]
    fn test_sync_reader_keeps_decimal_precision() {
        let csv_content = "item,value\nmilk,0.1\nbread,0.2\n";
        let file = create_temp_csv(csv_content);

        let reader = SyncReader::new(file.path()).unwrap();
        let records: Vec<_> = reader.filter_map(Result::ok).collect();

        let sum: Decimal = records.iter().map(|r| r.value()).sum();
        assert_eq!(sum, Decimal::new(3, 1)); // exactly 0.3
    }
}
