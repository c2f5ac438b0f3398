use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)
        .with_context(|| format!("Invalid report {}", file_path.display()))?;

    if report.version != SCHEMA_VERSION {
        anyhow::bail!(
            "Unsupported report version {} (expected {})",
            report.version,
            SCHEMA_VERSION
        );
    }

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Trace: {} ({})", report.trace_file, report.dialect);
    println!("  Files: {}", report.file_count);
    println!("  Includes: {}", report.include_count);
    println!("  Total Size: {} bytes", report.total_size);
    println!("  Heaviest Headers: {}", report.heaviest_headers.len());

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("include-trace v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Include graphs and size rollups from gcc -H and msvc /showIncludes traces.");
}
