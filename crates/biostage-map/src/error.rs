use thiserror::Error;

use biostage_model::ClassificationKey;

/// Errors from routing a record stream.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("input is empty")]
    EmptyInput,
    /// The header lacks one or more required columns; nothing was processed.
    #[error("input missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    /// A row's classification key has no routing table entry. Fail-fast:
    /// rows after the offending one are never read.
    #[error("unsupported combination at line {line}: {key}")]
    UnsupportedCombination { line: u64, key: ClassificationKey },
    #[error("malformed input: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RouteError>;
