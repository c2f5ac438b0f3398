//! include-trace
//!
//! Include dependency analysis from compiler show-includes traces
//! (`g++ -H` or `cl.exe /showIncludes`).
//!
//! The library turns a trace into a deduplicated include graph with
//! per-file and aggregate sizes, rolls that graph up by directory, and
//! replays the include order a preprocessor would have followed,
//! telling expanding includes apart from guarded ones.
//!
//! ## Getting Started
//!
//! ```bash
//! g++ -H -E -o /dev/null source.cpp 2> includes.txt
//! include-trace analyze includes.txt --dot includes.dot --summary
//! ```

pub mod aggregator;
pub mod commands;
pub mod graph;
pub mod output;
pub mod parser;
pub mod utils;
pub mod visitor;
