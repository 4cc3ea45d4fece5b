//! Shared helpers for file-backed conversion tests

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A temp directory holding one input file and a path for the output
pub struct Workspace {
    pub dir: TempDir,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Workspace {
    pub fn with_input(content: impl AsRef<[u8]>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("graph.txt");
        let output = dir.path().join("graph.dot");
        fs::write(&input, content).unwrap();
        Self { dir, input, output }
    }

    pub fn output_text(&self) -> String {
        fs::read_to_string(&self.output).unwrap()
    }
}

/// Edge statement lines of a document, without header and footer
#[allow(dead_code)]
pub fn edge_lines(doc: &str) -> Vec<&str> {
    let lines: Vec<&str> = doc.lines().collect();
    assert!(lines.len() >= 2, "document too short: {doc:?}");
    lines[1..lines.len() - 1].to_vec()
}
