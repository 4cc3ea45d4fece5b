//! adjdot: adjacency list to digraph converter
//!
//! Reads a plain-text adjacency list, one `SOURCE TARGET...` record per
//! line, and writes a Graphviz `digraph` with one edge statement per
//! (source, target) pair, in input order.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//!
//! let mut out = Vec::new();
//! adjdot::write_digraph(Cursor::new("A B C\nB C\n"), &mut out).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "digraph G {\n    A -> B;\n    A -> C;\n    B -> C;\n}\n"
//! );
//! ```

pub mod convert;

pub use convert::{
    convert, parse_line, write_digraph, ConversionStats, ConvertError, ConvertResult,
    DigraphWriter, Edge, Line, StreamError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
