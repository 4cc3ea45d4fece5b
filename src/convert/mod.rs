//! Adjacency list to digraph conversion
//!
//! Each input line `S T1 T2 ...` becomes the edge statements `S -> T1;`,
//! `S -> T2;`, ... inside a single `digraph G { ... }` block. Lines are read
//! lazily and edges are written as they are parsed, in input order.

mod document;
mod error;
mod parse;
mod records;


pub use document::{DigraphWriter, FOOTER, HEADER, INDENT};
pub use error::{ConvertError, ConvertResult, StreamError};
pub use parse::{parse_line, Edge, Line};
pub use records::{records, Records};

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, trace};

/// Counters collected during a conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Lines read from the input, including blank ones
    pub lines_read: usize,
    /// Lines with no tokens
    pub lines_skipped: usize,
    /// Edge statements written
    pub edges_written: usize,
}

/// Convert the adjacency list at `input` into a digraph document at `output`.
///
/// The input is opened first, so a missing input never creates or truncates
/// the output. Once the output exists it is overwritten from the start; a
/// failure after that point leaves a partial document behind.
pub fn convert(input: impl AsRef<Path>, output: impl AsRef<Path>) -> ConvertResult<()> {
    let input = input.as_ref();
    let output = output.as_ref();

    debug!(path = %input.display(), "opening input");
    let reader = File::open(input)
        .map(BufReader::new)
        .map_err(|e| ConvertError::not_found(input, e))?;

    debug!(path = %output.display(), "creating output");
    let writer = File::create(output)
        .map(BufWriter::new)
        .map_err(|e| ConvertError::write_error(output, e))?;

    let stats = write_digraph(reader, writer).map_err(|e| e.at(input, output))?;
    info!(
        lines = stats.lines_read,
        skipped = stats.lines_skipped,
        edges = stats.edges_written,
        "wrote {}",
        output.display()
    );
    Ok(())
}

/// Stream a digraph document from `reader` to `writer`.
///
/// Input records end at `\n`, `\r\n` or a lone `\r`.
/// The writer is flushed before returning.
pub fn write_digraph<R: BufRead, W: Write>(
    reader: R,
    writer: W,
) -> Result<ConversionStats, StreamError> {
    let mut stats = ConversionStats::default();
    let mut doc = DigraphWriter::begin(writer).map_err(StreamError::Write)?;

    for line in records(reader) {
        let line = line.map_err(StreamError::Read)?;
        stats.lines_read += 1;

        let Some(parsed) = parse_line(&line) else {
            trace!(line = stats.lines_read, "skipping blank line");
            stats.lines_skipped += 1;
            continue;
        };
        for edge in parsed.edges() {
            doc.edge(&edge).map_err(StreamError::Write)?;
        }
    }

    stats.edges_written = doc.edges_written();
    doc.finish().map_err(StreamError::Write)?;
    Ok(stats)
}
