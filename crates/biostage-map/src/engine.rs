//! Streaming validate/classify/fan-out engine.
//!
//! Stateless across rows: each input row is independently skipped, routed,
//! or rejected. The only global gate is header validation, which runs
//! before any row is read.

use std::io::{Read, Write};

use tracing::debug;

use biostage_model::ClassificationKey;

use crate::error::{Result, RouteError};
use crate::table;

/// Columns the input header must contain (matched case-insensitively);
/// extra columns are tolerated and ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "id",
    "genetic_alteration_type",
    "datatype",
    "data_filepath",
];

struct ColumnIndexes {
    id: usize,
    alteration_type: usize,
    datatype: usize,
    data_filepath: usize,
}

/// Route a header-led tab-separated record stream into routing entries.
///
/// Writes four tab-separated columns per entry, no header:
/// `id, preprocessing_script, data_filepath, db_table`. Returns the number
/// of entries emitted. On [`RouteError::UnsupportedCombination`] processing
/// stops immediately; entries already flushed stay flushed.
pub fn route_stream<R: Read, W: Write>(input: R, output: W) -> Result<u64> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    if headers.is_empty() || (headers.len() == 1 && headers[0].trim().is_empty()) {
        return Err(RouteError::EmptyInput);
    }
    let columns = validate_header(&headers)?;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(output);

    let mut emitted = 0u64;
    for (index, row) in reader.records().enumerate() {
        // the header occupies line 1
        let line = index as u64 + 2;
        let record = row?;

        // short rows read as empty fields (right-padding)
        let field = |idx: usize| record.get(idx).unwrap_or("").trim();
        let id = field(columns.id);
        let data_filepath = field(columns.data_filepath);
        let alteration_type = field(columns.alteration_type);
        let datatype = field(columns.datatype);

        if data_filepath.is_empty() || alteration_type.is_empty() {
            debug!(line, "row not yet actionable, skipping");
            continue;
        }

        let key = ClassificationKey::new(alteration_type, datatype);
        let Some(mappings) = table::lookup(&key) else {
            return Err(RouteError::UnsupportedCombination { line, key });
        };

        for mapping in mappings {
            writer.write_record([
                id,
                mapping.preprocessing_script,
                data_filepath,
                mapping.db_table,
            ])?;
            emitted += 1;
        }
    }

    writer.flush()?;
    Ok(emitted)
}

fn validate_header(headers: &csv::StringRecord) -> Result<ColumnIndexes> {
    let names: Vec<String> = headers
        .iter()
        .map(|header| header.trim().to_lowercase())
        .collect();
    let find = |name: &str| names.iter().position(|header| header == name);

    let [id, alteration_type, datatype, data_filepath] = REQUIRED_COLUMNS.map(find);
    if let (Some(id), Some(alteration_type), Some(datatype), Some(data_filepath)) =
        (id, alteration_type, datatype, data_filepath)
    {
        return Ok(ColumnIndexes {
            id,
            alteration_type,
            datatype,
            data_filepath,
        });
    }

    let mut missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .zip([id, alteration_type, datatype, data_filepath])
        .filter(|(_, index)| index.is_none())
        .map(|(&name, _)| name.to_string())
        .collect();
    missing.sort();
    Err(RouteError::MissingColumns(missing))
}
