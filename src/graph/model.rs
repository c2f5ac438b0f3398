//! Arena-backed include graph.
//!
//! Vertices live in a `Vec` and are addressed by [`VertexId`]. Outgoing edges
//! are kept per vertex in insertion order; traversal order depends on it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Stable handle of a vertex inside one [`DependencyGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Position of the vertex in the arena
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A file (or, after path inversion, a path prefix)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileVertex {
    /// Normalized path; empty for the root
    pub name: String,

    /// Own size in bytes
    pub size: u64,

    /// Own size plus the size of every distinct file pulled in below it
    pub aggregate_size: u64,

    /// Number of edges targeting this vertex
    pub include_count: u32,
}

impl FileVertex {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            aggregate_size: size,
            include_count: 0,
        }
    }
}

/// Directed include graph with a synthetic root at [`DependencyGraph::root`]
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    vertices: Vec<FileVertex>,
    edges: Vec<Vec<VertexId>>,
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyGraph {
    /// Create a graph holding only the root vertex
    pub fn new() -> Self {
        Self {
            vertices: vec![FileVertex::default()],
            edges: vec![Vec::new()],
        }
    }

    pub fn root(&self) -> VertexId {
        VertexId(0)
    }

    pub fn is_root(&self, id: VertexId) -> bool {
        id.0 == 0
    }

    pub(crate) fn add_vertex(&mut self, vertex: FileVertex) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(vertex);
        self.edges.push(Vec::new());
        id
    }

    /// Add an include edge; parallel edges are kept
    pub(crate) fn add_edge(&mut self, from: VertexId, to: VertexId) {
        self.edges[from.0].push(to);
        self.vertices[to.0].include_count += 1;
    }

    pub(crate) fn vertex_mut(&mut self, id: VertexId) -> &mut FileVertex {
        &mut self.vertices[id.0]
    }

    /// Panics if `id` belongs to another graph and is out of range.
    pub fn vertex(&self, id: VertexId) -> &FileVertex {
        &self.vertices[id.0]
    }

    pub fn get(&self, id: VertexId) -> Option<&FileVertex> {
        self.vertices.get(id.0)
    }

    /// Included files of `id`, in trace order
    pub fn children(&self, id: VertexId) -> &[VertexId] {
        &self.edges[id.0]
    }

    /// All vertices, root first
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &FileVertex)> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(index, vertex)| (VertexId(index), vertex))
    }

    /// All non-root vertices
    pub fn files(&self) -> impl Iterator<Item = (VertexId, &FileVertex)> {
        self.vertices().skip(1)
    }

    /// All edges as (includer, included) pairs, grouped by includer
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .flat_map(|(from, targets)| targets.iter().map(move |to| (VertexId(from), *to)))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    /// Linear lookup by normalized name
    pub fn find(&self, name: &str) -> Option<VertexId> {
        self.vertices()
            .find(|(_, vertex)| vertex.name == name)
            .map(|(id, _)| id)
    }

    /// Vertices reachable from `start`, excluding `start` itself unless a
    /// path leads back to it
    pub fn reachable_from(&self, start: VertexId) -> HashSet<VertexId> {
        let mut seen = HashSet::new();
        let mut pending: Vec<VertexId> = self.children(start).to_vec();
        while let Some(id) = pending.pop() {
            if seen.insert(id) {
                pending.extend_from_slice(self.children(id));
            }
        }
        seen
    }

    /// Sum of own sizes over the distinct vertices reachable from the root
    pub fn reachable_size(&self) -> u64 {
        self.reachable_from(self.root())
            .into_iter()
            .map(|id| self.vertex(id).size)
            .sum()
    }
}
