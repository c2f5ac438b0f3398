//! Show-includes dialects and their line grammar.
//!
//! Two compilers are understood:
//! - gcc/clang `-H`: `". path"`, `".. path"`, one dot per level
//! - msvc `/showIncludes`: `"Note: including file: path"`, one space per level
//!
//! Anything else in the trace (diagnostics, the source file name, guard
//! hints) is noise and does not affect depth tracking.

use crate::utils::config::{
    GCC_DEPTH_MARKER, GCC_GUARD_HINTS_HEADER, MSVC_DEPTH_MARKER, MSVC_NOTE_PREFIX,
};
use crate::utils::error::TraceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trace dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Depth encoded as a run of dots, no prefix
    Gcc,
    /// Depth encoded as spaces after a fixed note prefix
    Msvc,
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Gcc => write!(f, "gcc"),
            Dialect::Msvc => write!(f, "msvc"),
        }
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gcc" | "clang" | "dots" => Ok(Dialect::Gcc),
            "msvc" | "cl" | "showincludes" => Ok(Dialect::Msvc),
            other => Err(format!("unknown trace dialect '{}' (expected gcc or msvc)", other)),
        }
    }
}

/// Guess the dialect from the first character of the trace
///
/// gcc traces open with a depth dot; everything else is treated as msvc,
/// whose first line is usually the name of the compiled source.
pub fn detect_dialect(trace: &str) -> Dialect {
    if trace.trim_start().starts_with(GCC_DEPTH_MARKER) {
        Dialect::Gcc
    } else {
        Dialect::Msvc
    }
}

/// One classified trace line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceLine<'a> {
    Noise,
    Entry { depth: usize, path: &'a str },
    /// Start of the trailing guard hints; the rest of the trace is noise
    Trailer,
}

/// Line grammar of one dialect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceGrammar {
    dialect: Dialect,
    prefix: String,
    marker: char,
}

impl TraceGrammar {
    pub fn for_dialect(dialect: Dialect) -> Self {
        match dialect {
            Dialect::Gcc => Self {
                dialect,
                prefix: String::new(),
                marker: GCC_DEPTH_MARKER,
            },
            Dialect::Msvc => Self::msvc_with_prefix(MSVC_NOTE_PREFIX),
        }
    }

    /// msvc grammar for toolchains that print a translated note
    pub fn msvc_with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            dialect: Dialect::Msvc,
            prefix: prefix.into(),
            marker: MSVC_DEPTH_MARKER,
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Classify one line of the trace
    ///
    /// # Errors
    /// * `TraceError::MalformedTrace` - marker without path, ambiguous depth,
    ///   or a line belonging to the other dialect
    pub fn classify<'l>(
        &self,
        line: &'l str,
        line_number: usize,
    ) -> Result<TraceLine<'l>, TraceError> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        match self.dialect {
            Dialect::Gcc => self.classify_gcc(line, line_number),
            Dialect::Msvc => self.classify_msvc(line, line_number),
        }
    }

    fn classify_gcc<'l>(
        &self,
        line: &'l str,
        line_number: usize,
    ) -> Result<TraceLine<'l>, TraceError> {
        if line.trim_end() == GCC_GUARD_HINTS_HEADER {
            return Ok(TraceLine::Trailer);
        }

        if line.starts_with(MSVC_NOTE_PREFIX) {
            return Err(TraceError::malformed(
                line_number,
                "msvc include note inside a gcc trace",
            ));
        }

        let depth = count_markers(line, self.marker);
        if depth == 0 {
            return Ok(TraceLine::Noise);
        }

        let rest = &line[depth * self.marker.len_utf8()..];
        if rest.trim().is_empty() {
            return Err(TraceError::malformed(line_number, "depth marker without a path"));
        }

        // "..foo.h" could be depth 2 or a relative path at depth 0
        let path = rest.strip_prefix(' ').ok_or_else(|| {
            TraceError::malformed(
                line_number,
                format!("ambiguous depth marker in '{}'", line),
            )
        })?;

        Ok(TraceLine::Entry {
            depth,
            path: path.trim_end(),
        })
    }

    fn classify_msvc<'l>(
        &self,
        line: &'l str,
        line_number: usize,
    ) -> Result<TraceLine<'l>, TraceError> {
        let Some(rest) = line.strip_prefix(self.prefix.as_str()) else {
            if looks_like_gcc_entry(line) {
                return Err(TraceError::malformed(
                    line_number,
                    "gcc depth marker inside an msvc trace",
                ));
            }
            return Ok(TraceLine::Noise);
        };

        let depth = count_markers(rest, self.marker);
        if depth == 0 {
            return Err(TraceError::malformed(
                line_number,
                format!("include note without depth in '{}'", line),
            ));
        }

        let path = rest[depth * self.marker.len_utf8()..].trim_end();
        if path.is_empty() {
            return Err(TraceError::malformed(line_number, "depth marker without a path"));
        }

        Ok(TraceLine::Entry { depth, path })
    }
}

fn count_markers(text: &str, marker: char) -> usize {
    text.chars().take_while(|c| *c == marker).count()
}

fn looks_like_gcc_entry(line: &str) -> bool {
    let depth = count_markers(line, GCC_DEPTH_MARKER);
    depth > 0
        && line[depth..]
            .strip_prefix(' ')
            .is_some_and(|path| !path.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_dialect() {
        assert_eq!(detect_dialect(". /usr/include/stdio.h\n"), Dialect::Gcc);
        assert_eq!(detect_dialect("\n. a.h\n"), Dialect::Gcc);
        assert_eq!(
            detect_dialect("main.cpp\nNote: including file: a.h\n"),
            Dialect::Msvc
        );
        assert_eq!(detect_dialect(""), Dialect::Msvc);
    }

    #[test]
    fn test_dialect_from_str() {
        assert_eq!("GCC".parse::<Dialect>().unwrap(), Dialect::Gcc);
        assert_eq!("cl".parse::<Dialect>().unwrap(), Dialect::Msvc);
        assert!("borland".parse::<Dialect>().is_err());
    }

    #[test]
    fn test_gcc_classify() {
        let grammar = TraceGrammar::for_dialect(Dialect::Gcc);
        assert_eq!(
            grammar.classify("... /usr/include/bits/types.h\r", 1).unwrap(),
            TraceLine::Entry {
                depth: 3,
                path: "/usr/include/bits/types.h"
            }
        );
        assert_eq!(
            grammar.classify(". ./local.h", 1).unwrap(),
            TraceLine::Entry {
                depth: 1,
                path: "./local.h"
            }
        );
        assert_eq!(
            grammar
                .classify("Multiple include guards may be useful for:\r", 1)
                .unwrap(),
            TraceLine::Trailer
        );
    }

    #[test]
    fn test_gcc_rejects_ambiguous_and_empty_markers() {
        let grammar = TraceGrammar::for_dialect(Dialect::Gcc);
        assert!(grammar.classify("../foo.h", 4).is_err());
        assert!(grammar.classify("..", 4).is_err());
        assert!(grammar.classify(".   ", 4).is_err());
        assert!(grammar.classify("Note: including file: a.h", 4).is_err());
    }

    #[test]
    fn test_msvc_classify() {
        let grammar = TraceGrammar::for_dialect(Dialect::Msvc);
        assert_eq!(
            grammar
                .classify("Note: including file:   C:\\sdk\\windows.h", 1)
                .unwrap(),
            TraceLine::Entry {
                depth: 3,
                path: "C:\\sdk\\windows.h"
            }
        );
        assert_eq!(grammar.classify("main.cpp", 1).unwrap(), TraceLine::Noise);
        assert!(grammar.classify("Note: including file:a.h", 1).is_err());
        assert!(grammar.classify(". a.h", 1).is_err());
    }

    #[test]
    fn test_msvc_custom_prefix() {
        let grammar = TraceGrammar::msvc_with_prefix("Hinweis: Einlesen der Datei:");
        assert_eq!(
            grammar
                .classify("Hinweis: Einlesen der Datei:  b.h", 1)
                .unwrap(),
            TraceLine::Entry {
                depth: 2,
                path: "b.h"
            }
        );
        assert_eq!(
            grammar.classify("Note: including file: a.h", 1).unwrap(),
            TraceLine::Noise
        );
    }
}
