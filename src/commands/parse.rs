//! Parse command
//!
//! Reads a hints report from a file and builds the goal tables. The parse
//! itself cannot fail; only the file read can.

use crate::report::HintReport;
use std::fs;
use std::io;
use std::path::Path;

/// Load and parse a hints report file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read. Malformed report text is
/// not an error; it parses to zero/empty fields.
pub fn load_report(path: &Path) -> io::Result<HintReport> {
    let text = fs::read_to_string(path)?;
    Ok(HintReport::parse(&text))
}
