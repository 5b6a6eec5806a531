//! # SCOPEGRAPH
//!
//! Static call graph extraction for indentation-delimited source files.
//!
//! scopegraph scans a file line by line, approximating lexical scope
//! (module, class, function) with an indentation stack instead of a
//! grammar, and records every call-like expression against its
//! fully-qualified scope path. The result is a mapping from dot-joined
//! scope path to the calls made inside that scope, with argument lists
//! collapsed to an empty parenthesis pair.
//!
//! This is deliberately not a parser: no AST, no type resolution, no
//! multi-line statements, and fixed-width indentation is assumed. The
//! heuristics degrade rather than fail; unreadable input or malformed
//! captures produce a warning and a best-effort graph.

pub mod core;
pub mod formatters;
