//! Output JSON schema definitions for include reports.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::parser::Dialect;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncludeReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Trace file that was analyzed
    pub trace_file: String,

    pub dialect: Dialect,

    /// Distinct files in the graph (root excluded)
    pub file_count: usize,

    /// Include edges, one per `#include` occurrence
    pub include_count: usize,

    /// Root aggregate size: bytes of distinct headers pulled in
    pub total_size: u64,

    /// Headers ranked by aggregate size
    pub heaviest_headers: Vec<HeavyHeader>,

    /// Directories ranked by rolled-up own size of distinct files
    pub directories: Vec<DirectorySize>,

    /// Timestamp when report was generated
    pub generated_at: String,
}

/// A header and what it pulls in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeavyHeader {
    /// Normalized path
    pub name: String,

    /// Own size in bytes
    pub size: u64,

    /// Own size plus distinct descendant bytes (graph semantics)
    pub aggregate_size: u64,

    /// Bytes emitted inside its first expansion (replay semantics)
    pub expansion_cost: u64,

    /// Number of `#include` occurrences of this header
    pub include_count: u32,

    /// Aggregate size as a percentage of the total
    pub percentage: f64,
}

/// A directory of the path rollup tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorySize {
    pub path: String,
    pub size: u64,
    pub file_count: usize,
    pub percentage: f64,
}
