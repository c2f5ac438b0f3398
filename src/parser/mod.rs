//! Trace parsing.
//!
//! This module handles:
//! - Recognizing the gcc and msvc show-includes dialects
//! - Building the include graph with per-file and aggregate sizes
//! - Looking up file sizes on disk

pub mod dialect;
pub mod include_trace;
pub mod size;

// Re-export main types
pub use dialect::{detect_dialect, Dialect, TraceGrammar, TraceLine};
pub use include_trace::{normalize_path, parse_trace, parse_trace_file, ParsedTrace};
pub use size::{DiskSizer, FileSizer, RecordedSizes};
