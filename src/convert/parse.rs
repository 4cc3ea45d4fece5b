//! Adjacency-list line parsing
//!
//! A line is a run of whitespace-separated tokens. The first token is the
//! source node; every following token is a target. Tokens are kept verbatim.

use std::fmt;

/// A directed edge between two node identifiers, borrowed from its line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<'a> {
    pub source: &'a str,
    pub target: &'a str,
}

impl<'a> Edge<'a> {
    pub fn new(source: &'a str, target: &'a str) -> Self {
        Self { source, target }
    }
}

impl fmt::Display for Edge<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

/// One non-empty input line: a source and its targets in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    source: &'a str,
    targets: Vec<&'a str>,
}

impl<'a> Line<'a> {
    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn targets(&self) -> &[&'a str] {
        &self.targets
    }

    /// Number of edges this line produces (token count minus one)
    pub fn edge_count(&self) -> usize {
        self.targets.len()
    }

    /// Edges in left-to-right target order
    pub fn edges(&self) -> impl Iterator<Item = Edge<'a>> + '_ {
        let source = self.source;
        self.targets.iter().map(move |&target| Edge::new(source, target))
    }
}

/// Unicode whitespace plus the ASCII information separators `\x1c`..`\x1f`
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Parse a single line.
///
/// Returns `None` when the line has no tokens after trimming.
pub fn parse_line(line: &str) -> Option<Line<'_>> {
    let mut tokens = line.split(is_separator).filter(|t| !t.is_empty());
    let source = tokens.next()?;
    Some(Line {
        source,
        targets: tokens.collect(),
    })
}
