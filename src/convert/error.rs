//! Conversion error types

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while converting an adjacency list
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input could not be opened, or a read failed partway through
    #[error("Input not readable: {}: {source}", path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output could not be created, or a write or flush failed
    #[error("Output not writable: {}: {source}", path.display())]
    ResourceWriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    pub(crate) fn not_found(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ResourceNotFound {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ResourceWriteError {
            path: path.into(),
            source,
        }
    }

    /// Path of the resource that failed
    pub fn path(&self) -> &Path {
        match self {
            Self::ResourceNotFound { path, .. } | Self::ResourceWriteError { path, .. } => path,
        }
    }

    /// Kind of the underlying I/O failure
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            Self::ResourceNotFound { source, .. } | Self::ResourceWriteError { source, .. } => {
                source.kind()
            }
        }
    }
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Failure of a stream-level conversion, before paths are attached
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("read failed: {0}")]
    Read(#[source] io::Error),

    #[error("write failed: {0}")]
    Write(#[source] io::Error),
}

impl StreamError {
    /// Attach the input or output path, depending on which side failed
    pub fn at(self, input: &Path, output: &Path) -> ConvertError {
        match self {
            Self::Read(e) => ConvertError::not_found(input, e),
            Self::Write(e) => ConvertError::write_error(output, e),
        }
    }
}
