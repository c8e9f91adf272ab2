//! I/O module
//!
//! Handles CSV parsing and output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, report
//!   serialization, money display formatting)
//! - `sync_reader` - Synchronous CSV reader with iterator interface

pub mod csv_format;
pub mod sync_reader;

pub use csv_format::{
    convert_csv_record, format_money, write_grouped_csv, write_top_csv, write_total_csv, CsvRecord,
};
pub use sync_reader::SyncReader;
