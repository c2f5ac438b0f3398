//! Include dependency graph.
//!
//! One synthetic root stands for the translation unit; every other vertex is
//! a header discovered in the trace. Edges point from includer to included.

pub mod model;

pub use model::{DependencyGraph, FileVertex, VertexId};
