//! CSV format handling for purchase records and report output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain types
//! - Report output serialization
//! - Money display formatting (round half up, two decimal places)
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::PurchaseRecord;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Write;
use std::str::FromStr;

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns: item, value
/// The value field is kept as a string so parse failures produce a
/// descriptive error instead of a serde type error.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub item: String,
    pub value: Option<String>,
}

/// Convert a CsvRecord to a PurchaseRecord
///
/// This function:
/// - Rejects empty item names
/// - Parses the value string into a Decimal
/// - Delegates range validation (non-negative value) to PurchaseRecord
///
/// # Arguments
///
/// * `csv_record` - The deserialized CSV record
///
/// # Returns
///
/// Result containing either:
/// - Ok(PurchaseRecord) - Successfully converted record
/// - Err(String) - Error message describing the conversion failure
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<PurchaseRecord, String> {
    let item = csv_record.item.trim();
    if item.is_empty() {
        return Err("Record has an empty item name".to_string());
    }

    let value = match csv_record.value {
        Some(value_str) if !value_str.trim().is_empty() => {
            match Decimal::from_str(value_str.trim()) {
                Ok(decimal) => decimal,
                Err(_) => {
                    return Err(format!("Invalid value '{}' for item {}", value_str, item))
                }
            }
        }
        _ => return Err(format!("Item {} requires a value", item)),
    };

    PurchaseRecord::new(item, value).map_err(|e| e.to_string())
}

/// Format a monetary value for display
///
/// Rounds to two fractional digits using round half up
/// (`MidpointAwayFromZero`) and renders with exactly two decimal places.
/// This is the only place rounding happens; intermediate sums keep full
/// precision.
pub fn format_money(value: Decimal) -> String {
    format!(
        "{:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Write the grand-total report to CSV format
///
/// Writes a single row with columns: records, raw_total, discounted_total
///
/// # Arguments
///
/// * `records` - Number of records aggregated
/// * `raw_total` - Sum of raw values
/// * `discounted_total` - Sum of pipeline-transformed values
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_total_csv(
    records: usize,
    raw_total: Decimal,
    discounted_total: Decimal,
    output: &mut dyn Write,
) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["records", "raw_total", "discounted_total"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    writer
        .write_record(&[
            records.to_string(),
            format_money(raw_total),
            format_money(discounted_total),
        ])
        .map_err(|e| format!("Failed to write total record: {}", e))?;

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}

/// Write per-item subtotals to CSV format
///
/// Writes groups in CSV format with columns: item, total
/// The BTreeMap iteration order keeps rows sorted by item name for
/// deterministic output.
///
/// # Arguments
///
/// * `groups` - Mapping from item name to raw subtotal
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_grouped_csv(
    groups: &BTreeMap<String, Decimal>,
    output: &mut dyn Write,
) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["item", "total"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    for (item, subtotal) in groups {
        writer
            .write_record(&[item.clone(), format_money(*subtotal)])
            .map_err(|e| format!("Failed to write group record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}

/// Write the single most expensive record to CSV format
///
/// Writes one row with columns: item, value
///
/// # Arguments
///
/// * `record` - The record to write
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_top_csv(record: &PurchaseRecord, output: &mut dyn Write) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["item", "value"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    writer
        .write_record(&[record.item().to_string(), format_money(record.value())])
        .map_err(|e| format!("Failed to write top record: {}", e))?;

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("cookie", "1500", Decimal::new(1500, 0))]
    #[case("milk", "1200.50", Decimal::new(120050, 2))]
    #[case("freebie", "0", Decimal::ZERO)]
    fn test_convert_csv_record_valid(
        #[case] item: &str,
        #[case] value: &str,
        #[case] expected: Decimal,
    ) {
        let csv_record = CsvRecord {
            item: item.to_string(),
            value: Some(value.to_string()),
        };

        let result = convert_csv_record(csv_record);
        assert!(result.is_ok());

        let record = result.unwrap();
        assert_eq!(record.item(), item);
        assert_eq!(record.value(), expected);
    }

    #[rstest]
    #[case::empty_item("", Some("1500"), "empty item name")]
    #[case::whitespace_item("   ", Some("1500"), "empty item name")]
    #[case::missing_value("cookie", None, "requires a value")]
    #[case::empty_value("cookie", Some(""), "requires a value")]
    #[case::whitespace_value("cookie", Some("  "), "requires a value")]
    #[case::invalid_value("cookie", Some("not_a_number"), "Invalid value")]
    #[case::negative_value("bread", Some("-4500"), "is negative")]
    fn test_convert_csv_record_errors(
        #[case] item: &str,
        #[case] value: Option<&str>,
        #[case] expected_error: &str,
    ) {
        let csv_record = CsvRecord {
            item: item.to_string(),
            value: value.map(|s| s.to_string()),
        };

        let result = convert_csv_record(csv_record);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains(expected_error));
    }

    #[rstest]
    #[case("  1500  ", Decimal::new(1500, 0))] // whitespace trimming
    #[case("100.1234", Decimal::new(1001234, 4))] // four decimal places kept
    fn test_convert_csv_record_value_parsing(#[case] value_str: &str, #[case] expected: Decimal) {
        let csv_record = CsvRecord {
            item: "cookie".to_string(),
            value: Some(value_str.to_string()),
        };

        let result = convert_csv_record(csv_record);
        assert!(result.is_ok());
        assert_eq!(result.unwrap().value(), expected);
    }

    #[rstest]
    #[case::whole_number(Decimal::new(11230, 0), "11230.00")]
    #[case::two_places(Decimal::new(2345265, 2), "23452.65")]
    #[case::pads_zeroes(Decimal::new(5, 1), "0.50")]
    #[case::half_up_rounds_up(Decimal::new(45, 3), "0.05")] // 0.045 -> 0.05, not banker's 0.04
    #[case::three_places_down(Decimal::new(10044, 3), "10.04")]
    #[case::three_places_up(Decimal::new(9999, 3), "10.00")]
    #[case::zero(Decimal::ZERO, "0.00")]
    fn test_format_money(#[case] value: Decimal, #[case] expected: &str) {
        assert_eq!(format_money(value), expected);
    }

    #[rstest]
    #[case::plain(
        10,
        Decimal::new(27430, 0),
        Decimal::new(2345265, 2),
        "records,raw_total,discounted_total\n10,27430.00,23452.65\n"
    )]
    #[case::empty_input(
        0,
        Decimal::ZERO,
        Decimal::ZERO,
        "records,raw_total,discounted_total\n0,0.00,0.00\n"
    )]
    fn test_write_total_csv(
        #[case] records: usize,
        #[case] raw: Decimal,
        #[case] discounted: Decimal,
        #[case] expected_output: &str,
    ) {
        let mut output = Vec::new();
        let result = write_total_csv(records, raw, discounted, &mut output);
        assert!(result.is_ok());

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(output_str, expected_output);
    }

    #[test]
    fn test_write_grouped_csv_sorted_rows() {
        let mut groups = BTreeMap::new();
        groups.insert("milk".to_string(), Decimal::new(2400, 0));
        groups.insert("bread".to_string(), Decimal::new(18000, 0));
        groups.insert("cookie".to_string(), Decimal::new(3000, 0));

        let mut output = Vec::new();
        let result = write_grouped_csv(&groups, &mut output);
        assert!(result.is_ok());

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(
            output_str,
            "item,total\nbread,18000.00\ncookie,3000.00\nmilk,2400.00\n"
        );
    }

    #[test]
    fn test_write_grouped_csv_empty_groups() {
        let groups = BTreeMap::new();

        let mut output = Vec::new();
        let result = write_grouped_csv(&groups, &mut output);
        assert!(result.is_ok());

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(output_str, "item,total\n");
    }

    #[test]
    fn test_write_top_csv() {
        let record = PurchaseRecord::new("bread", Decimal::new(4500, 0)).unwrap();

        let mut output = Vec::new();
        let result = write_top_csv(&record, &mut output);
        assert!(result.is_ok());

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(output_str, "item,value\nbread,4500.00\n");
    }
}
