//! Output formatting module.
//!
//! Provides formatters for plain text and JSON output of scan reports.

mod json_format;
mod plain;

pub use json_format::print_json;
pub use plain::{print_error, print_plain, print_scan_header, print_warning, write_plain};

use crate::cli::OutputFormat;
use crate::scanner::ScanReport;
use std::io;

/// Format and print a report according to the specified format.
pub fn print_report(report: &ScanReport, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Plain => plain::print_plain(report),
        OutputFormat::Json => json_format::print_json(report),
    }
}
