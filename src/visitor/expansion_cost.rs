//! Bytes emitted per expansion.
//!
//! The parser's aggregate size counts distinct descendants of a vertex.
//! This observer instead counts what the replay emits while a header's
//! first expansion is open: its own bytes plus every header expanded inside
//! it. Guarded occurrences emit nothing.

use super::traversal::{visit_includes, IncludeObserver, VisitContext};
use crate::graph::{DependencyGraph, VertexId};
use crate::utils::error::TraversalError;

/// Observer accumulating expansion cost per vertex
#[derive(Debug, Default)]
pub struct ExpansionCostCounter {
    open: Vec<(VertexId, u64)>,
    costs: Vec<u64>,
}

impl ExpansionCostCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cost per vertex, indexed by [`VertexId::index`]
    pub fn costs(&self) -> &[u64] {
        &self.costs
    }

    pub fn cost_of(&self, vertex: VertexId) -> u64 {
        self.costs.get(vertex.index()).copied().unwrap_or(0)
    }

    pub fn into_costs(self) -> Vec<u64> {
        self.costs
    }
}

impl IncludeObserver for ExpansionCostCounter {
    fn root_file(&mut self, cx: &VisitContext<'_>, root: VertexId) {
        self.costs = vec![0; cx.graph().vertex_count()];
        self.open.clear();
        self.open.push((root, cx.graph().vertex(root).size));
    }

    fn include_file(&mut self, cx: &VisitContext<'_>, vertex: VertexId) {
        if cx.occurrence_count(vertex) == 1 {
            self.open.push((vertex, cx.graph().vertex(vertex).size));
        }
    }

    fn finish_file(&mut self, _cx: &VisitContext<'_>, vertex: VertexId) {
        let Some((open_vertex, bytes)) = self.open.pop() else {
            return;
        };
        debug_assert_eq!(open_vertex, vertex);
        self.costs[vertex.index()] = bytes;
        if let Some((_, parent_bytes)) = self.open.last_mut() {
            *parent_bytes += bytes;
        }
    }
}

/// Expansion cost of every vertex of `graph`, indexed by [`VertexId::index`]
///
/// Vertices never reached from the root cost 0.
pub fn calculate_expansion_costs(graph: &DependencyGraph) -> Result<Vec<u64>, TraversalError> {
    let mut counter = ExpansionCostCounter::new();
    visit_includes(graph, &mut counter)?;
    Ok(counter.into_costs())
}
