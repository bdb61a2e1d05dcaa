//! Clinical attribute definition extraction.
//!
//! Clinical attribute staging files open with a fixed five-line preamble:
//! four `#`-prefixed metadata rows (display names, descriptions, datatypes,
//! priorities) positionally aligned with a fifth literal header row of
//! attribute column names. This is a positional micro-format, not a general
//! table; the reader is a fixed-offset parser that fails on short files or
//! column-count mismatches rather than attempting tolerant parsing.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::AttributeError;

/// Column names denoting patient/sample identifiers; never emitted as
/// attribute definitions.
pub const RESERVED_IDENTIFIER_COLUMNS: [&str; 2] = ["PATIENT_ID", "SAMPLE_ID"];

/// One attribute column described by the five-line preamble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDefinition {
    pub attribute: String,
    pub name: String,
    pub description: String,
    pub data_type: String,
    pub priority: String,
}

/// Read the attribute definitions declared by a clinical staging file.
///
/// Returns one definition per non-reserved header column, in header order.
pub fn read_attribute_definitions(path: &Path) -> Result<Vec<AttributeDefinition>, AttributeError> {
    let file = File::open(path).map_err(|source| AttributeError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines = BufReader::new(file).lines();
    let mut head = Vec::with_capacity(5);
    for _ in 0..5 {
        match lines.next() {
            Some(Ok(line)) if !line.is_empty() => head.push(line),
            Some(Err(source)) => {
                return Err(AttributeError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
            _ => {
                return Err(AttributeError::TooShort {
                    path: path.to_path_buf(),
                });
            }
        }
    }

    let names = split_metadata_row(&head[0]);
    let descriptions = split_metadata_row(&head[1]);
    let types = split_metadata_row(&head[2]);
    let priorities = split_metadata_row(&head[3]);
    let headers: Vec<&str> = head[4].trim().split('\t').collect();

    let expected = headers.len();
    let metadata_rows = [
        ("display names", &names),
        ("descriptions", &descriptions),
        ("datatypes", &types),
        ("priorities", &priorities),
    ];
    for (row, values) in metadata_rows {
        if values.len() != expected {
            return Err(AttributeError::ColumnMismatch {
                path: path.to_path_buf(),
                row,
                expected,
                actual: values.len(),
            });
        }
    }

    let mut definitions = Vec::new();
    for (idx, header) in headers.iter().enumerate() {
        if RESERVED_IDENTIFIER_COLUMNS.contains(header) {
            continue;
        }
        definitions.push(AttributeDefinition {
            attribute: (*header).to_string(),
            name: names[idx].to_string(),
            description: descriptions[idx].to_string(),
            data_type: types[idx].to_string(),
            priority: priorities[idx].to_string(),
        });
    }
    Ok(definitions)
}

/// Strip the comment prefix and surrounding whitespace, then split on tabs.
fn split_metadata_row(line: &str) -> Vec<&str> {
    line.trim_start_matches('#').trim().split('\t').collect()
}
