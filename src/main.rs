//! Rust Discount Engine CLI
//!
//! Command-line interface for aggregating purchase records from CSV files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- purchases.csv > report.csv
//! cargo run -- --tier member purchases.csv > report.csv
//! cargo run -- --tier vip --item bread purchases.csv > report.csv
//! cargo run -- --report grouped purchases.csv > report.csv
//! ```
//!
//! The program reads purchase records from the input CSV file, applies the
//! discount pipeline for the selected customer tier, and writes the selected
//! report to stdout.
//!
//! # Reports
//!
//! - **total**: record count, raw total, and discounted total (default)
//! - **grouped**: raw subtotals per item name
//! - **top**: the single most expensive record
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, empty input for 'top', etc.)

use rust_discount_engine::cli;
use rust_discount_engine::report;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Compose the discount pipeline for the selected tier and create the
    // appropriate report strategy
    let pipeline = args.to_pipeline();
    let report = report::create_report(args.report, pipeline, args.item.clone());

    // Produce the report
    // Output goes to stdout
    let mut output = std::io::stdout();
    if let Err(e) = report.process(&args.input_file, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
