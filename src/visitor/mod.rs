//! Include-order replay.
//!
//! The traversal engine reconstructs the sequence of `#include`
//! occurrences from the deduplicated graph; observers turn it into reports.

pub mod expansion_cost;
pub mod include_order;
pub mod traversal;

pub use expansion_cost::{calculate_expansion_costs, ExpansionCostCounter};
pub use include_order::{
    render_include_order, replay_include_order, IncludeOccurrence, IncludeOrderRecorder,
};
pub use traversal::{visit_includes, IncludeObserver, VisitContext};
