use std::path::PathBuf;

use thiserror::Error;

/// Errors from descriptor discovery and parsing.
#[derive(Debug, Error)]
pub enum IngestError {
    /// No input path yielded a descriptor with at least one key:value pair.
    #[error("no metadata descriptors found in: {}", searched.join(", "))]
    NoMetadataFound { searched: Vec<String> },
    #[error("invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("failed to read directory {}: {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to resolve working directory: {0}")]
    WorkingDir(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;

/// Errors from the fixed-offset clinical attribute definition reader.
#[derive(Debug, Error)]
pub enum AttributeError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is missing part of its five-line preamble.
    #[error("{} does not contain the five required leading lines", path.display())]
    TooShort { path: PathBuf },
    /// A metadata row does not align with the attribute header row.
    #[error(
        "column count mismatch in {}: header has {expected} columns, {row} row has {actual}",
        path.display()
    )]
    ColumnMismatch {
        path: PathBuf,
        row: &'static str,
        expected: usize,
        actual: usize,
    },
}
