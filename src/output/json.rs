//! JSON report output writer.
//!
//! Writes IncludeReport structs to JSON files with proper formatting.

use super::prepare_output_path;
use super::schema::IncludeReport;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write a report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `report` - Report data to write
/// * `output_path` - Path to output JSON file
///
/// # Returns
/// Ok if file written successfully
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let report = build_report(&parsed, &inverted, costs.costs(), 20);
/// write_report(&report, "includes.json")?;
/// ```
pub fn write_report(
    report: &IncludeReport,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    info!("Writing report to: {}", output_path.display());

    prepare_output_path(output_path)?;

    let mut writer = BufWriter::new(File::create(output_path)?);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush()?;

    debug!(
        "Report written: {} headers, {} directories",
        report.heaviest_headers.len(),
        report.directories.len()
    );

    Ok(())
}

/// Serialize a report to a string (for tests and stdout output)
pub fn report_to_string(report: &IncludeReport) -> Result<String, OutputError> {
    serde_json::to_string_pretty(report).map_err(OutputError::SerializationFailed)
}

/// Read a report from a JSON file
///
/// **Public** - used by the validate command and tests
///
/// # Arguments
/// * `input_path` - Path to JSON file
///
/// # Returns
/// Parsed IncludeReport
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (I/O errors share one variant)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_report(input_path: impl AsRef<Path>) -> Result<IncludeReport, OutputError> {
    let input_path = input_path.as_ref();
    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path)?;
    let report: IncludeReport = serde_json::from_reader(BufReader::new(file))?;

    debug!(
        "Report loaded: version {}, trace {}",
        report.version, report.trace_file
    );

    Ok(report)
}
