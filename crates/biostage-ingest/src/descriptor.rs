//! Descriptor parsing and record construction.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use biostage_model::{MetaRecord, StageMetaId, sanitize_value};

use crate::error::{IngestError, Result};
use crate::paths::relative_from;

/// Descriptor key naming the associated data file, relative to the
/// descriptor's own directory. Consumed during record construction and never
/// forwarded into `other`.
pub const DATA_FILENAME_KEY: &str = "data_filename";

/// Classification fields promoted to their own output columns.
const FIXED_KEYS: [&str; 4] = [
    "cancer_study_identifier",
    "genetic_alteration_type",
    "datatype",
    "stable_id",
];

/// Parse a candidate descriptor into its key:value pairs.
///
/// Each line containing a colon splits on the first colon; key and value are
/// trimmed and the value is tab/newline-escaped. Blank and colon-less lines
/// are ignored. Duplicate keys keep the last value. An empty result means
/// the candidate is not a real descriptor; the caller drops it.
pub fn parse_descriptor(path: &Path) -> Result<BTreeMap<String, String>> {
    let contents = fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let mut fields = BTreeMap::new();
    for line in contents.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        fields.insert(key.trim().to_string(), sanitize_value(value.trim()));
    }
    Ok(fields)
}

/// Build the canonical record for a parsed descriptor.
///
/// `base` is the invocation's working directory; both emitted paths are
/// expressed relative to it. The data file, when declared, resolves against
/// the descriptor's own directory first.
pub fn build_record(path: &Path, mut fields: BTreeMap<String, String>, base: &Path) -> MetaRecord {
    let meta_filepath = relative_from(path, base).display().to_string();

    let data_filepath = match fields.remove(DATA_FILENAME_KEY) {
        Some(name) if !name.is_empty() => {
            let dir = path.parent().unwrap_or_else(|| Path::new(""));
            relative_from(&dir.join(&name), base).display().to_string()
        }
        _ => String::new(),
    };

    let [cancer_study_identifier, genetic_alteration_type, datatype, stable_id] =
        FIXED_KEYS.map(|key| fields.remove(key).unwrap_or_default());

    MetaRecord {
        id: StageMetaId::generate(),
        meta_filepath,
        data_filepath,
        cancer_study_identifier,
        genetic_alteration_type,
        datatype,
        stable_id,
        other: fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parses_key_value_lines_and_ignores_noise() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("meta_test.txt");
        fs::write(
            &path,
            "cancer_study_identifier: acc_tcga\n\nnot a descriptor line\nprofile_name: CNA: discrete\n",
        )
        .unwrap();

        let fields = parse_descriptor(&path).unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["cancer_study_identifier"], "acc_tcga");
        // split happens on the first colon only
        assert_eq!(fields["profile_name"], "CNA: discrete");
    }

    #[test]
    fn values_are_sanitized_on_ingestion() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("meta_test.txt");
        fs::write(&path, "description: has\ta tab\n").unwrap();

        let fields = parse_descriptor(&path).unwrap();
        assert_eq!(fields["description"], "has\\ta tab");
    }

    #[test]
    fn record_resolves_data_file_against_descriptor_dir() {
        let dir = TempDir::new().unwrap();
        let study = dir.path().join("study");
        fs::create_dir(&study).unwrap();
        let meta = study.join("meta_cna.txt");

        let mut fields = BTreeMap::new();
        fields.insert(DATA_FILENAME_KEY.to_string(), "data_cna.txt".to_string());
        fields.insert(
            "genetic_alteration_type".to_string(),
            "COPY_NUMBER_ALTERATION".to_string(),
        );
        fields.insert("show_profile".to_string(), "true".to_string());

        let record = build_record(&meta, fields, dir.path());
        assert_eq!(record.meta_filepath, "study/meta_cna.txt");
        assert_eq!(record.data_filepath, "study/data_cna.txt");
        assert_eq!(record.genetic_alteration_type, "COPY_NUMBER_ALTERATION");
        assert_eq!(record.cancer_study_identifier, "");
        // data_filename never reaches the passthrough mapping
        assert_eq!(record.other.len(), 1);
        assert_eq!(record.other["show_profile"], "true");
    }

    #[test]
    fn missing_data_filename_leaves_data_filepath_empty() {
        let dir = TempDir::new().unwrap();
        let meta = dir.path().join("meta_study.txt");
        let mut fields = BTreeMap::new();
        fields.insert("type_of_cancer".to_string(), "acc".to_string());

        let record = build_record(&meta, fields, dir.path());
        assert!(record.data_filepath.is_empty());
    }
}
