//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Reads and parses the trace into an include graph
//! 2. Replays the include order
//! 3. Builds the directory rollup
//! 4. Calculates metrics
//! 5. Writes output files

use super::models::AnalyzeArgs;
use crate::aggregator::{
    calculate_heaviest_headers, calculate_size_distribution, collect_directory_sizes,
    invert_to_paths,
};
use crate::graph::DependencyGraph;
use crate::output::{write_dot, write_report, write_text, IncludeReport};
use crate::parser::{parse_trace_file, DiskSizer, ParsedTrace};
use crate::utils::config::{MAX_TOP_HEADERS, SCHEMA_VERSION};
use crate::visitor::{
    render_include_order, visit_includes, ExpansionCostCounter, IncludeOrderRecorder,
};
use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info};
use std::time::Instant;

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Unreadable or malformed trace
/// * Missing header files
/// * File write errors
pub fn execute_analyze(args: AnalyzeArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Analyzing trace: {}", args.trace.display());

    // Step 1: Parse trace
    info!("Step 1/5: Parsing trace...");
    let sizer = match &args.base_dir {
        Some(dir) => DiskSizer::with_base_dir(dir),
        None => DiskSizer::new(),
    };
    let parsed = parse_trace_file(
        &args.trace,
        args.dialect,
        args.note_prefix.as_deref(),
        &sizer,
    )
    .with_context(|| format!("Failed to parse trace {}", args.trace.display()))?;

    debug!(
        "Parsed {} trace: {} files, {} includes",
        parsed.dialect,
        parsed.graph.vertex_count() - 1,
        parsed.graph.edge_count()
    );

    // Step 2: Replay include order
    info!("Step 2/5: Replaying include order...");
    let mut costs = ExpansionCostCounter::new();
    visit_includes(&parsed.graph, &mut costs).context("Failed to replay include order")?;

    // Step 3: Directory rollup
    info!("Step 3/5: Building directory rollup...");
    let inverted = invert_to_paths(&parsed.graph);

    // Step 4: Metrics
    info!("Step 4/5: Calculating metrics...");
    let distribution = calculate_size_distribution(&parsed.graph);
    info!("Size distribution: {}", distribution.summary());
    let report = build_report(&parsed, &inverted, costs.costs(), args.top_headers);

    // Step 5: Write outputs
    info!("Step 5/5: Writing output files...");
    if let Some(path) = &args.output_dot {
        write_dot(&parsed.graph, path).context("Failed to write include graph")?;
        info!("✓ Include graph written to: {}", path.display());
    }

    if let Some(path) = &args.output_paths_dot {
        write_dot(&inverted, path).context("Failed to write directory rollup graph")?;
        info!("✓ Directory rollup written to: {}", path.display());
    }

    if let Some(path) = &args.output_order {
        let mut recorder = IncludeOrderRecorder::new();
        visit_includes(&parsed.graph, &mut recorder).context("Failed to replay include order")?;
        write_text(&render_include_order(recorder.occurrences()), path)
            .context("Failed to write include order")?;
        info!("✓ Include order written to: {}", path.display());
    }

    if let Some(path) = &args.output_json {
        write_report(&report, path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", path.display());
    }

    if args.print_summary {
        print_summary(&report);
    }

    let elapsed = start_time.elapsed();
    info!("Analysis completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Assemble the JSON report from an analyzed trace
///
/// **Public** - used by execute_analyze and tests
pub fn build_report(
    parsed: &ParsedTrace,
    inverted: &DependencyGraph,
    expansion_costs: &[u64],
    top_n: usize,
) -> IncludeReport {
    let graph = &parsed.graph;
    IncludeReport {
        version: SCHEMA_VERSION.to_string(),
        trace_file: parsed.source.display().to_string(),
        dialect: parsed.dialect,
        file_count: graph.vertex_count() - 1,
        include_count: graph.edge_count(),
        total_size: graph.vertex(graph.root()).aggregate_size,
        heaviest_headers: calculate_heaviest_headers(graph, expansion_costs, top_n),
        directories: collect_directory_sizes(inverted, top_n),
        generated_at: Utc::now().to_rfc3339(),
    }
}

/// Print text summary to stdout
///
/// **Private** - internal helper for execute_analyze
fn print_summary(report: &IncludeReport) {
    println!("\n{}", "=".repeat(80));
    println!("INCLUDE SUMMARY");
    println!("{}", "=".repeat(80));
    println!("Trace:       {} ({})", report.trace_file, report.dialect);
    println!("Files:       {}", report.file_count);
    println!("Includes:    {}", report.include_count);
    println!("Total Size:  {} bytes", report.total_size);
    println!("\nHeaviest headers (aggregate / expansion cost / includes):");
    for (i, header) in report.heaviest_headers.iter().take(10).enumerate() {
        println!(
            "{:3}. {:>10} {:>10} {:>5}  {:5.1}%  {}",
            i + 1,
            header.aggregate_size,
            header.expansion_cost,
            header.include_count,
            header.percentage,
            header.name
        );
    }
    println!("\nLargest directories:");
    for dir in report.directories.iter().take(10) {
        println!("  {:>10}  {:5.1}%  {}", dir.size, dir.percentage, dir.path);
    }
    println!("{}", "=".repeat(80));
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.trace.as_os_str().is_empty() {
        anyhow::bail!("Trace path cannot be empty");
    }

    if let Some(prefix) = &args.note_prefix {
        if prefix.trim().is_empty() {
            anyhow::bail!("Note prefix cannot be empty");
        }
    }

    if args.top_headers == 0 {
        anyhow::bail!("top_headers must be greater than 0");
    }

    if args.top_headers > MAX_TOP_HEADERS {
        anyhow::bail!("top_headers is too large (max {})", MAX_TOP_HEADERS);
    }

    let outputs = [
        &args.output_dot,
        &args.output_paths_dot,
        &args.output_json,
        &args.output_order,
    ];
    if outputs.iter().all(|output| output.is_none()) && !args.print_summary {
        anyhow::bail!("Nothing to do: request at least one output or --summary");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Dialect;
    use std::path::PathBuf;

    fn args() -> AnalyzeArgs {
        AnalyzeArgs {
            trace: PathBuf::from("includes.txt"),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_args_valid() {
        assert!(validate_args(&args()).is_ok());
    }

    #[test]
    fn test_validate_args_empty_trace() {
        let args = AnalyzeArgs {
            trace: PathBuf::new(),
            ..args()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_top_headers_bounds() {
        assert!(validate_args(&AnalyzeArgs { top_headers: 0, ..args() }).is_err());
        assert!(validate_args(&AnalyzeArgs { top_headers: 2000, ..args() }).is_err());
    }

    #[test]
    fn test_validate_args_prefix() {
        let args = AnalyzeArgs {
            dialect: Some(Dialect::Gcc),
            note_prefix: Some("Hinweis: Einlesen der Datei:".to_string()),
            ..args()
        };
        assert!(validate_args(&args).is_ok());
        assert!(validate_args(&AnalyzeArgs {
            note_prefix: Some("  ".to_string()),
            ..args
        })
        .is_err());
    }

    #[test]
    fn test_validate_args_no_outputs() {
        let args = AnalyzeArgs {
            output_json: None,
            ..args()
        };
        assert!(validate_args(&args).is_err());
        assert!(validate_args(&AnalyzeArgs { print_summary: true, ..args }).is_ok());
    }
}
