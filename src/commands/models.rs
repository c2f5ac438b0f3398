use crate::parser::Dialect;
use crate::utils::config::DEFAULT_TOP_HEADERS;
use std::path::PathBuf;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Show-includes trace to analyze
    pub trace: PathBuf,

    /// Dialect override (None = sniff from the trace)
    pub dialect: Option<Dialect>,

    /// Translated msvc note prefix, implies the msvc dialect
    pub note_prefix: Option<String>,

    /// Directory relative header paths are resolved against
    pub base_dir: Option<PathBuf>,

    /// Output path for the include graph in DOT format
    pub output_dot: Option<PathBuf>,

    /// Output path for the directory rollup graph in DOT format
    pub output_paths_dot: Option<PathBuf>,

    /// Output path for the JSON report
    pub output_json: Option<PathBuf>,

    /// Output path for the replayed include order
    pub output_order: Option<PathBuf>,

    /// Number of heaviest headers and directories in the report
    pub top_headers: usize,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            trace: PathBuf::from("includes.txt"),
            dialect: None,
            note_prefix: None,
            base_dir: None,
            output_dot: None,
            output_paths_dot: None,
            output_json: Some(PathBuf::from("includes.json")),
            output_order: None,
            top_headers: DEFAULT_TOP_HEADERS,
            print_summary: false,
        }
    }
}
