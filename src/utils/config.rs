//! Configuration and constants for the CLI.

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// gcc -H prints one '.' per nesting level, then a space and the path:
//   ". /usr/include/stdio.h"
pub const GCC_DEPTH_MARKER: char = '.';

// gcc -H ends with a list of headers lacking include guards; nothing after
// this line is part of the include tree
pub const GCC_GUARD_HINTS_HEADER: &str = "Multiple include guards may be useful for:";

// cl.exe /showIncludes prints a fixed note followed by one space per level:
//   "Note: including file:  C:\sdk\include\windows.h"
pub const MSVC_NOTE_PREFIX: &str = "Note: including file:";
pub const MSVC_DEPTH_MARKER: char = ' ';

/// Default number of heaviest headers kept in the JSON report
pub const DEFAULT_TOP_HEADERS: usize = 20;
pub const MAX_TOP_HEADERS: usize = 1000;

/// Graph name used by the graphviz writer
pub const DOT_GRAPH_NAME: &str = "G";

/// Environment variable overriding the msvc note prefix (localized toolchains)
pub const NOTE_PREFIX_ENV: &str = "INCLUDE_TRACE_NOTE_PREFIX";
