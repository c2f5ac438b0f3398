//! Include-order replay over a deduplicated include graph.
//!
//! The graph keeps one vertex per header, but a preprocessor sees a header
//! once per `#include`. Only the first of those, anywhere in the
//! translation unit, expands the header body; every later one is stopped by
//! the include guard. [`visit_includes`] replays that sequence and reports
//! it to an [`IncludeObserver`].

use crate::graph::{DependencyGraph, VertexId};
use crate::utils::error::TraversalError;
use log::debug;

/// Receives the replayed include sequence
///
/// All hooks default to doing nothing.
pub trait IncludeObserver {
    /// Called once, before anything else, for the translation unit root
    fn root_file(&mut self, cx: &VisitContext<'_>, root: VertexId) {
        let _ = (cx, root);
    }

    /// Called for every occurrence of `vertex`, expanding or not
    fn include_file(&mut self, cx: &VisitContext<'_>, vertex: VertexId) {
        let _ = (cx, vertex);
    }

    /// Called when the expansion of `vertex` completes; never for guarded
    /// occurrences. The root is finished last.
    fn finish_file(&mut self, cx: &VisitContext<'_>, vertex: VertexId) {
        let _ = (cx, vertex);
    }
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    vertex: VertexId,
    next_edge: usize,
}

/// Outcome of advancing the walk by one edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Next edge of the innermost open expansion targets this vertex
    Occur(VertexId),
    /// Innermost open expansion has no edges left
    Finish(VertexId),
    /// Root expansion closed; nothing else is walked
    Done,
}

/// Per-traversal state, visible to observers
///
/// Lives for one [`visit_includes`] call.
#[derive(Debug)]
pub struct VisitContext<'g> {
    graph: &'g DependencyGraph,
    occurrences: Vec<u32>,
    frames: Vec<Frame>,
    index_stack: Vec<usize>,
    next_index: usize,
    depth: usize,
}

impl<'g> VisitContext<'g> {
    fn new(graph: &'g DependencyGraph) -> Self {
        Self {
            graph,
            occurrences: vec![0; graph.vertex_count()],
            frames: Vec::new(),
            index_stack: Vec::new(),
            next_index: 0,
            depth: 0,
        }
    }

    pub fn graph(&self) -> &'g DependencyGraph {
        self.graph
    }

    /// Occurrences of `vertex` reported so far, including the current one
    pub fn occurrence_count(&self, vertex: VertexId) -> u32 {
        self.occurrences.get(vertex.index()).copied().unwrap_or(0)
    }

    /// Whether `vertex` has been reported at least once
    ///
    /// Already true inside `include_file` for the expanding occurrence;
    /// `occurrence_count(vertex) > 1` there marks a guarded one.
    pub fn is_expanded(&self, vertex: VertexId) -> bool {
        self.occurrence_count(vertex) > 0
    }

    /// Nesting depth of the reported file; the root is at 0
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Sequence number of the reported occurrence; the root is 0
    pub fn include_index(&self) -> usize {
        self.index_stack.last().copied().unwrap_or(0)
    }

    fn next_step(&mut self) -> Step {
        let Some(frame) = self.frames.last_mut() else {
            return Step::Done;
        };

        match self.graph.children(frame.vertex).get(frame.next_edge) {
            Some(&target) => {
                frame.next_edge += 1;
                Step::Occur(target)
            }
            None => Step::Finish(frame.vertex),
        }
    }

    fn push_index(&mut self) {
        self.index_stack.push(self.next_index);
        self.next_index += 1;
    }

    fn open(&mut self, vertex: VertexId) {
        self.frames.push(Frame {
            vertex,
            next_edge: 0,
        });
    }
}

/// Replay the include sequence of `graph` into `observer`
///
/// **Public** - main entry point for include-order traversal
///
/// Edges are followed in stored order. The first occurrence of a vertex
/// anywhere in the walk expands it: `include_file`, then its own edges,
/// then `finish_file`. Later occurrences only get `include_file`.
///
/// # Errors
/// * `TraversalError::GraphInvariantViolation` - an edge leads back to the
///   root, so the graph is not the DAG the parser promises
pub fn visit_includes<O>(graph: &DependencyGraph, observer: &mut O) -> Result<(), TraversalError>
where
    O: IncludeObserver + ?Sized,
{
    let root = graph.root();
    let mut cx = VisitContext::new(graph);

    cx.push_index();
    observer.root_file(&cx, root);
    cx.open(root);

    loop {
        match cx.next_step() {
            Step::Occur(target) if graph.is_root(target) => {
                let includer = cx.frames.last().map(|f| f.vertex).unwrap_or(root);
                return Err(TraversalError::GraphInvariantViolation(format!(
                    "'{}' includes the translation unit root",
                    graph.vertex(includer).name
                )));
            }

            Step::Occur(target) => {
                let first = cx.occurrences[target.index()] == 0;
                cx.occurrences[target.index()] += 1;
                cx.depth = cx.frames.len();
                cx.push_index();
                observer.include_file(&cx, target);

                if first {
                    cx.open(target);
                } else {
                    cx.index_stack.pop();
                }
            }

            Step::Finish(vertex) => {
                cx.depth = cx.frames.len() - 1;
                observer.finish_file(&cx, vertex);
                cx.frames.pop();
                cx.index_stack.pop();
            }

            Step::Done => break,
        }
    }

    debug!("Replayed {} include occurrences", cx.next_index.saturating_sub(1));
    Ok(())
}
