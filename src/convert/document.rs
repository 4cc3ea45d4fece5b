//! Digraph document writer
//!
//! ```text
//! digraph G {
//!     A -> B;
//! }
//! ```

use super::parse::Edge;
use std::io::{self, Write};

/// Opening line of every document
pub const HEADER: &str = "digraph G {\n";

/// Closing line of every document
pub const FOOTER: &str = "}\n";

/// Indentation before each edge statement
pub const INDENT: &str = "    ";

/// Writes a digraph document to an underlying writer.
///
/// Created by [`DigraphWriter::begin`], which emits the header. Edges are
/// written immediately. [`DigraphWriter::finish`] writes the footer and
/// flushes.
#[derive(Debug)]
pub struct DigraphWriter<W: Write> {
    inner: W,
    edges_written: usize,
}

impl<W: Write> DigraphWriter<W> {
    /// Write the header and start a document
    pub fn begin(mut inner: W) -> io::Result<Self> {
        inner.write_all(HEADER.as_bytes())?;
        Ok(Self {
            inner,
            edges_written: 0,
        })
    }

    /// Append one edge statement
    pub fn edge(&mut self, edge: &Edge<'_>) -> io::Result<()> {
        writeln!(self.inner, "{INDENT}{};", edge)?;
        self.edges_written += 1;
        Ok(())
    }

    pub fn edges_written(&self) -> usize {
        self.edges_written
    }

    /// Write the footer, flush, and return the underlying writer
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.write_all(FOOTER.as_bytes())?;
        self.inner.flush()?;
        Ok(self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(edges: &[Edge<'_>]) -> String {
        let mut doc = DigraphWriter::begin(Vec::new()).unwrap();
        for edge in edges {
            doc.edge(edge).unwrap();
        }
        String::from_utf8(doc.finish().unwrap()).unwrap()
    }

    #[test]
    fn empty_document() {
        assert_eq!(render(&[]), "digraph G {\n}\n");
    }

    #[test]
    fn edge_statement_format() {
        let out = render(&[Edge::new("A", "B"), Edge::new("A", "C")]);
        assert_eq!(out, "digraph G {\n    A -> B;\n    A -> C;\n}\n");
    }

    #[test]
    fn counts_edges() {
        let mut doc = DigraphWriter::begin(Vec::new()).unwrap();
        doc.edge(&Edge::new("a", "b")).unwrap();
        doc.edge(&Edge::new("a", "b")).unwrap();
        assert_eq!(doc.edges_written(), 2);
    }
}
