//! Size metrics for include graphs.
//!
//! Heaviest headers are the files that pull in the most distinct header
//! bytes. They are the first candidates for forward declarations or
//! splitting.

use crate::graph::DependencyGraph;
use crate::output::schema::{DirectorySize, HeavyHeader};
use log::debug;

/// Rank headers by aggregate size
///
/// **Public** - main entry point for metrics calculation
///
/// # Arguments
/// * `graph` - Include graph from the trace parser
/// * `expansion_costs` - Per-vertex expansion cost, indexed by vertex
/// * `top_n` - Number of headers to return
///
/// # Returns
/// Headers sorted by aggregate size (descending), ties broken by name
pub fn calculate_heaviest_headers(
    graph: &DependencyGraph,
    expansion_costs: &[u64],
    top_n: usize,
) -> Vec<HeavyHeader> {
    let total = graph.vertex(graph.root()).aggregate_size;
    debug!("Ranking top {} of {} headers", top_n, graph.vertex_count().saturating_sub(1));

    let mut headers: Vec<HeavyHeader> = graph
        .files()
        .map(|(id, vertex)| HeavyHeader {
            name: vertex.name.clone(),
            size: vertex.size,
            aggregate_size: vertex.aggregate_size,
            expansion_cost: expansion_costs.get(id.index()).copied().unwrap_or(0),
            include_count: vertex.include_count,
            percentage: percentage_of(vertex.aggregate_size, total),
        })
        .collect();

    headers.sort_by(|a, b| {
        b.aggregate_size
            .cmp(&a.aggregate_size)
            .then_with(|| a.name.cmp(&b.name))
    });
    headers.truncate(top_n);
    headers
}

/// Largest directories of a path-inverted graph
///
/// Only directory prefixes are listed; prefixes that are files themselves
/// (no children) are skipped.
pub fn collect_directory_sizes(inverted: &DependencyGraph, top_n: usize) -> Vec<DirectorySize> {
    let total = inverted.vertex(inverted.root()).aggregate_size;

    let mut directories: Vec<DirectorySize> = inverted
        .files()
        .filter(|(id, _)| !inverted.children(*id).is_empty())
        .map(|(id, vertex)| DirectorySize {
            path: vertex.name.clone(),
            size: vertex.size,
            file_count: count_leaves(inverted, id),
            percentage: percentage_of(vertex.size, total),
        })
        .collect();

    directories.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path)));
    directories.truncate(top_n);
    directories
}

fn count_leaves(graph: &DependencyGraph, start: crate::graph::VertexId) -> usize {
    graph
        .reachable_from(start)
        .into_iter()
        .filter(|id| graph.children(*id).is_empty())
        .count()
}

fn percentage_of(part: u64, total: u64) -> f64 {
    if total > 0 {
        (part as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

/// Calculate own-size distribution over the files of a graph
///
/// **Public** - provides summary statistics
pub fn calculate_size_distribution(graph: &DependencyGraph) -> SizeDistribution {
    let mut sizes: Vec<u64> = graph.files().map(|(_, v)| v.size).collect();
    if sizes.is_empty() {
        return SizeDistribution::default();
    }

    let total: u64 = sizes.iter().sum();
    let count = sizes.len();
    let mean = total / count as u64;

    sizes.sort_unstable_by(|a, b| b.cmp(a));
    let median = sizes[count / 2];

    // Largest 10% of files
    let top_10_percent_count = (count as f64 * 0.1).ceil() as usize;
    let top_10_percent_bytes: u64 = sizes.iter().take(top_10_percent_count).sum();

    SizeDistribution {
        total_bytes: total,
        file_count: count,
        mean_file_size: mean,
        median_file_size: median,
        largest_file_size: sizes[0],
        top_10_percent_bytes,
        top_10_percent_percentage: percentage_of(top_10_percent_bytes, total),
    }
}

/// File size statistics
///
/// **Public** - returned from calculate_size_distribution
#[derive(Debug, Clone, Default)]
pub struct SizeDistribution {
    /// Bytes across all distinct files
    pub total_bytes: u64,

    /// Number of distinct files
    pub file_count: usize,

    pub mean_file_size: u64,
    pub median_file_size: u64,
    pub largest_file_size: u64,

    /// Bytes in the largest 10% of files
    pub top_10_percent_bytes: u64,

    /// Percentage of all bytes in the largest 10%
    pub top_10_percent_percentage: f64,
}

impl SizeDistribution {
    /// Returns true if the largest 10% of files hold more than 80% of bytes
    pub fn is_highly_concentrated(&self) -> bool {
        self.top_10_percent_percentage > 80.0
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Total: {} bytes | Files: {} | Mean: {} | Median: {} | Largest: {} | Top 10%: {:.1}%",
            self.total_bytes,
            self.file_count,
            self.mean_file_size,
            self.median_file_size,
            self.largest_file_size,
            self.top_10_percent_percentage
        )
    }
}
