//! Full include tree listing.
//!
//! Records every include occurrence in replay order and renders it in the
//! same dotted layout gcc `-H` uses, with guarded occurrences marked.

use super::traversal::{visit_includes, IncludeObserver, VisitContext};
use crate::graph::{DependencyGraph, VertexId};
use crate::utils::error::TraversalError;
use serde::{Deserialize, Serialize};

/// One occurrence of a header in the replayed include sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncludeOccurrence {
    pub vertex: VertexId,
    pub name: String,
    /// Nesting depth, 1 for files included by the translation unit
    pub depth: usize,
    /// 1 for the first occurrence of this header, 2 for the second, ...
    pub occurrence: u32,
    /// Position in the whole sequence, starting at 1
    pub index: usize,
    /// Whether this occurrence expanded the header body
    pub expanded: bool,
}

/// Observer collecting [`IncludeOccurrence`]s
#[derive(Debug, Default)]
pub struct IncludeOrderRecorder {
    occurrences: Vec<IncludeOccurrence>,
}

impl IncludeOrderRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn occurrences(&self) -> &[IncludeOccurrence] {
        &self.occurrences
    }

    pub fn into_occurrences(self) -> Vec<IncludeOccurrence> {
        self.occurrences
    }
}

impl IncludeObserver for IncludeOrderRecorder {
    fn include_file(&mut self, cx: &VisitContext<'_>, vertex: VertexId) {
        let occurrence = cx.occurrence_count(vertex);
        self.occurrences.push(IncludeOccurrence {
            vertex,
            name: cx.graph().vertex(vertex).name.clone(),
            depth: cx.depth(),
            occurrence,
            index: cx.include_index(),
            expanded: occurrence == 1,
        });
    }
}

/// Replay `graph` and return every include occurrence in order
pub fn replay_include_order(
    graph: &DependencyGraph,
) -> Result<Vec<IncludeOccurrence>, TraversalError> {
    let mut recorder = IncludeOrderRecorder::new();
    visit_includes(graph, &mut recorder)?;
    Ok(recorder.into_occurrences())
}

/// Render occurrences one per line: `". a.h"`, `".. b.h"`, and
/// `".. a.h (guarded, #2)"` for occurrences that did not expand
pub fn render_include_order(occurrences: &[IncludeOccurrence]) -> String {
    let mut out = String::new();
    for entry in occurrences {
        out.push_str(&".".repeat(entry.depth));
        out.push(' ');
        out.push_str(&entry.name);
        if !entry.expanded {
            out.push_str(&format!(" (guarded, #{})", entry.occurrence));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_trace, Dialect, TraceGrammar};
    use pretty_assertions::assert_eq;
    use std::io;

    fn parse(trace: &str) -> DependencyGraph {
        let sizer = |_: &str| -> io::Result<u64> { Ok(1) };
        parse_trace(trace, &TraceGrammar::for_dialect(Dialect::Gcc), &sizer).unwrap()
    }

    #[test]
    fn test_render_marks_guarded_occurrences() {
        // msvc-style trace where the guarded re-include is still listed
        let graph = parse(". a.h\n.. common.h\n. b.h\n.. common.h\n");
        let order = replay_include_order(&graph).unwrap();

        assert_eq!(
            render_include_order(&order),
            ". a.h\n.. common.h\n. b.h\n.. common.h (guarded, #2)\n"
        );
        assert_eq!(order.iter().filter(|o| o.expanded).count(), 3);
    }

    #[test]
    fn test_guarded_header_children_are_not_repeated() {
        let graph = parse(". a.h\n.. common.h\n... detail.h\n. b.h\n.. common.h\n");
        let names: Vec<_> = replay_include_order(&graph)
            .unwrap()
            .into_iter()
            .map(|o| (o.name, o.depth))
            .collect();

        assert_eq!(
            names,
            vec![
                ("a.h".to_string(), 1),
                ("common.h".to_string(), 2),
                ("detail.h".to_string(), 3),
                ("b.h".to_string(), 1),
                ("common.h".to_string(), 2),
            ]
        );
    }
}
