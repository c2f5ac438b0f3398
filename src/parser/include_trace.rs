//! Recursive trace parser building the include graph.
//!
//! Each nesting depth gets its own frame. A frame attaches lines one level
//! deeper than itself to its vertex, descends into the last attached child
//! for deeper lines, and hands shallower lines back to its caller untouched.

use super::dialect::{detect_dialect, Dialect, TraceGrammar, TraceLine};
use super::size::FileSizer;
use crate::graph::{DependencyGraph, FileVertex, VertexId};
use crate::utils::error::TraceError;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Graph built from one trace file
#[derive(Debug, Clone)]
pub struct ParsedTrace {
    pub source: PathBuf,
    pub dialect: Dialect,
    pub graph: DependencyGraph,
}

/// Normalize a trace path into a vertex identity
///
/// Separators become `/` and ASCII letters are lowercased so the same
/// header spelled differently maps to one vertex.
pub fn normalize_path(path: &str) -> String {
    path.chars()
        .map(|c| match c {
            '\\' => '/',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Parse trace text with the given grammar
///
/// # Arguments
/// * `trace` - Complete trace text
/// * `grammar` - Line grammar of the trace's dialect
/// * `sizer` - Size lookup, called once per distinct file
///
/// # Errors
/// * `TraceError::FilesystemError` - Size lookup failed for a new file
/// * `TraceError::MalformedTrace` - Depth sequence cannot be followed
pub fn parse_trace<S>(
    trace: &str,
    grammar: &TraceGrammar,
    sizer: &S,
) -> Result<DependencyGraph, TraceError>
where
    S: FileSizer + ?Sized,
{
    debug!("Parsing {} trace ({} bytes)", grammar.dialect(), trace.len());

    let mut reader = TraceReader {
        lines: trace.lines().collect(),
        cursor: 0,
        grammar,
        sizer,
        graph: DependencyGraph::new(),
        known_files: HashMap::new(),
    };

    let root = reader.graph.root();
    let total = reader.read_frame(root, 0)?;

    debug!(
        "Parsed {} files, {} includes, {} bytes of distinct headers",
        reader.known_files.len(),
        reader.graph.edge_count(),
        total
    );

    Ok(reader.graph)
}

/// Read a trace file and parse it
///
/// When `dialect` is `None` it is sniffed from the first character.
/// `note_prefix` replaces the msvc note and is ignored for gcc traces.
///
/// # Errors
/// * `TraceError::IoError` - Trace file cannot be read
/// * everything [`parse_trace`] returns
pub fn parse_trace_file<S>(
    path: impl AsRef<Path>,
    dialect: Option<Dialect>,
    note_prefix: Option<&str>,
    sizer: &S,
) -> Result<ParsedTrace, TraceError>
where
    S: FileSizer + ?Sized,
{
    let path = path.as_ref();
    info!("Reading trace: {}", path.display());

    let bytes = std::fs::read(path).map_err(|source| TraceError::IoError {
        path: path.to_path_buf(),
        source,
    })?;

    // cl.exe writes in the console code page; keep going on stray bytes
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("Trace is not valid UTF-8, replacing invalid bytes");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };

    let dialect = dialect.unwrap_or_else(|| {
        let dialect = detect_dialect(&text);
        debug!("Detected {} trace dialect", dialect);
        dialect
    });

    let grammar = match (dialect, note_prefix) {
        (Dialect::Msvc, Some(prefix)) => TraceGrammar::msvc_with_prefix(prefix),
        (dialect, prefix) => {
            if prefix.is_some() {
                debug!("Ignoring note prefix for {} trace", dialect);
            }
            TraceGrammar::for_dialect(dialect)
        }
    };

    let graph = parse_trace(&text, &grammar, sizer)?;

    Ok(ParsedTrace {
        source: path.to_path_buf(),
        dialect: grammar.dialect(),
        graph,
    })
}

struct TraceReader<'a, S: ?Sized> {
    lines: Vec<&'a str>,
    cursor: usize,
    grammar: &'a TraceGrammar,
    sizer: &'a S,
    graph: DependencyGraph,
    known_files: HashMap<String, VertexId>,
}

impl<'a, S> TraceReader<'a, S>
where
    S: FileSizer + ?Sized,
{
    /// Consume every line nested below `parent` and return the bytes of
    /// files first discovered in this frame.
    fn read_frame(&mut self, parent: VertexId, depth: usize) -> Result<u64, TraceError> {
        let mut last_child: Option<VertexId> = None;
        let mut subtree_size = 0u64;

        while let Some(&line) = self.lines.get(self.cursor) {
            let line_number = self.cursor + 1;

            match self.grammar.classify(line, line_number)? {
                TraceLine::Noise => self.cursor += 1,

                // Closes every open frame on the way out.
                TraceLine::Trailer => {
                    self.cursor = self.lines.len();
                    break;
                }

                // Belongs to an enclosing frame; leave it for the caller.
                TraceLine::Entry { depth: line_depth, .. } if line_depth <= depth => break,

                TraceLine::Entry { depth: line_depth, path } if line_depth == depth + 1 => {
                    self.cursor += 1;
                    let (child, new_size) = self.attach(parent, path)?;
                    subtree_size += new_size;
                    last_child = Some(child);
                }

                TraceLine::Entry { depth: line_depth, .. } => {
                    let child = last_child.ok_or_else(|| {
                        TraceError::malformed(
                            line_number,
                            format!("include depth jumps from {} to {}", depth, line_depth),
                        )
                    })?;
                    subtree_size += self.read_frame(child, depth + 1)?;
                }
            }
        }

        self.graph.vertex_mut(parent).aggregate_size += subtree_size;
        Ok(subtree_size)
    }

    /// Add an edge from `parent` to the file at `path`, creating its vertex
    /// on first sight. Returns the vertex and the bytes it newly adds.
    fn attach(&mut self, parent: VertexId, path: &str) -> Result<(VertexId, u64), TraceError> {
        let name = normalize_path(path);

        if let Some(&known) = self.known_files.get(&name) {
            self.graph.add_edge(parent, known);
            return Ok((known, 0));
        }

        let size = self
            .sizer
            .file_size(path)
            .map_err(|source| TraceError::FilesystemError {
                path: path.to_string(),
                source,
            })?;

        let vertex = self.graph.add_vertex(FileVertex::new(name.clone(), size));
        self.known_files.insert(name, vertex);
        self.graph.add_edge(parent, vertex);
        Ok((vertex, size))
    }
}
