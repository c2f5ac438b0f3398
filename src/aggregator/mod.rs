//! Aggregation of include graphs into rollups and metrics.
//!
//! This module transforms parsed include graphs into:
//! - Directory rollup trees (size per path prefix)
//! - Heaviest header rankings
//! - File size distribution statistics

pub mod metrics;
pub mod path_inverter;

// Re-export main types and functions
pub use metrics::{
    calculate_heaviest_headers, calculate_size_distribution, collect_directory_sizes,
    SizeDistribution,
};
pub use path_inverter::{invert_to_paths, path_prefixes};
