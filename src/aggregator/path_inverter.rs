//! Directory rollup of an include graph.
//!
//! Inverts a file graph into a tree keyed by path prefix, e.g.
//! `/`, `/usr`, `/usr/include`, `/usr/include/stdio.h`, where every prefix
//! carries the summed own size of the distinct files below it.

use crate::graph::{DependencyGraph, FileVertex, VertexId};
use log::debug;
use std::collections::HashMap;

/// Build the path-prefix rollup tree of `graph`
///
/// **Public** - main entry point for directory rollups
///
/// # Arguments
/// * `graph` - Include graph from the trace parser
///
/// # Returns
/// A new graph rooted at a fresh root. Prefix vertices hold the rollup in
/// both `size` and `aggregate_size`; the root's `aggregate_size` is the
/// grand total. The input graph is not modified.
///
/// # Algorithm
/// 1. Visit each file vertex once (shared headers count once)
/// 2. Split its normalized path into cumulative prefixes
/// 3. Create unseen prefixes with an edge from the previous prefix
/// 4. Add the file's own size to every prefix along the way
pub fn invert_to_paths(graph: &DependencyGraph) -> DependencyGraph {
    let mut result = DependencyGraph::new();
    let root = result.root();
    let mut prefix_vertices: HashMap<String, VertexId> = HashMap::new();
    let mut total = 0u64;

    for (_, file) in graph.files() {
        let mut previous = root;

        for prefix in path_prefixes(&file.name) {
            let vertex = match prefix_vertices.get(&prefix) {
                Some(&vertex) => vertex,
                None => {
                    let vertex = result.add_vertex(FileVertex::new(prefix.clone(), 0));
                    result.add_edge(previous, vertex);
                    prefix_vertices.insert(prefix, vertex);
                    vertex
                }
            };

            let rollup = result.vertex_mut(vertex);
            rollup.size += file.size;
            rollup.aggregate_size = rollup.size;
            previous = vertex;
        }

        total += file.size;
    }

    result.vertex_mut(root).aggregate_size = total;

    debug!(
        "Inverted {} files into {} path prefixes",
        graph.vertex_count().saturating_sub(1),
        prefix_vertices.len()
    );

    result
}

/// Cumulative prefixes of a normalized path
///
/// `/a/b/x.h` gives `/`, `/a`, `/a/b`, `/a/b/x.h`; `c:/x.h` gives `c:`,
/// `c:/x.h`; relative paths start at their first component.
pub fn path_prefixes(path: &str) -> Vec<String> {
    let mut prefixes = Vec::new();
    let mut current = String::with_capacity(path.len());

    if path.starts_with('/') {
        current.push('/');
        prefixes.push(current.clone());
    }

    for component in path.split('/').filter(|c| !c.is_empty()) {
        if !current.is_empty() && !current.ends_with('/') {
            current.push('/');
        }
        current.push_str(component);
        prefixes.push(current.clone());
    }

    prefixes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_prefixes_absolute() {
        assert_eq!(
            path_prefixes("/a/b/x.h"),
            vec!["/", "/a", "/a/b", "/a/b/x.h"]
        );
    }

    #[test]
    fn test_path_prefixes_drive_and_relative() {
        assert_eq!(path_prefixes("c:/sdk/w.h"), vec!["c:", "c:/sdk", "c:/sdk/w.h"]);
        assert_eq!(path_prefixes("src//x.h"), vec!["src", "src/x.h"]);
        assert!(path_prefixes("").is_empty());
    }

    #[test]
    fn test_invert_rolls_up_sizes() {
        let mut graph = DependencyGraph::new();
        let root = graph.root();
        let x = graph.add_vertex(FileVertex::new("/a/b/x.h", 10));
        let y = graph.add_vertex(FileVertex::new("/a/c/y.h", 20));
        graph.add_edge(root, x);
        graph.add_edge(root, y);
        graph.add_edge(x, y);

        let inverted = invert_to_paths(&graph);
        let size_of = |name: &str| inverted.vertex(inverted.find(name).unwrap()).size;

        assert_eq!(size_of("/"), 30);
        assert_eq!(size_of("/a"), 30);
        assert_eq!(size_of("/a/b"), 10);
        assert_eq!(size_of("/a/c"), 20);
        assert_eq!(size_of("/a/c/y.h"), 20);
        assert_eq!(inverted.vertex(inverted.root()).aggregate_size, 30);
        // the second include of y.h does not count twice
        assert_eq!(inverted.edge_count(), inverted.vertex_count() - 1);
    }
}
