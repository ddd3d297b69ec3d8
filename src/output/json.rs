//! JSON output formatting

use std::io;

use crate::tree::ScanReport;

/// Print a scan report as pretty-printed JSON to stdout.
pub fn print_json(report: &ScanReport) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
