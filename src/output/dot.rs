//! Graphviz writer for include graphs.
//!
//! Vertices are numbered by their arena index and labeled with their
//! normalized path; the root has an empty label.
//!
//! ```text
//! digraph G {
//! 0[label=""];
//! 1[label="/usr/include/stdio.h"];
//! 0->1 ;
//! }
//! ```

use super::text::write_text;
use crate::graph::DependencyGraph;
use crate::utils::config::DOT_GRAPH_NAME;
use crate::utils::error::OutputError;
use std::io::{self, Write};
use std::path::Path;

/// Write `graph` in DOT syntax to `out`
pub fn write_graphviz<W: Write>(out: &mut W, graph: &DependencyGraph) -> io::Result<()> {
    writeln!(out, "digraph {} {{", DOT_GRAPH_NAME)?;
    for (id, vertex) in graph.vertices() {
        writeln!(out, "{}[label=\"{}\"];", id, escape_label(&vertex.name))?;
    }
    for (from, to) in graph.edges() {
        writeln!(out, "{}->{} ;", from, to)?;
    }
    writeln!(out, "}}")
}

/// Render `graph` as a DOT string
pub fn graph_to_dot(graph: &DependencyGraph) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_graphviz(&mut buffer, graph);
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Write `graph` as a DOT file
pub fn write_dot(
    graph: &DependencyGraph,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    write_text(&graph_to_dot(graph), output_path)
}

fn escape_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
