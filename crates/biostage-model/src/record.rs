//! Canonical records exchanged between the scanner and the router.

use std::collections::BTreeMap;

use crate::ids::StageMetaId;

/// Column order of the scanner's tabular output.
pub const META_COLUMNS: [&str; 8] = [
    "id",
    "meta_filepath",
    "data_filepath",
    "cancer_study_identifier",
    "genetic_alteration_type",
    "datatype",
    "stable_id",
    "other",
];

/// Escape literal tabs and newlines so a value cannot corrupt the
/// tab-separated stream.
#[must_use]
pub fn sanitize_value(value: &str) -> String {
    value.replace('\t', "\\t").replace('\n', "\\n")
}

/// One discovered dataset descriptor, normalized.
///
/// `meta_filepath` and `data_filepath` are relative to the invocation's
/// working directory; `data_filepath` is empty when the descriptor declares
/// no data file. The four fixed classification fields are verbatim from the
/// descriptor (empty string when absent); everything else the descriptor
/// declared, except the data-file-name field, lands in `other`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MetaRecord {
    pub id: StageMetaId,
    pub meta_filepath: String,
    pub data_filepath: String,
    pub cancer_study_identifier: String,
    pub genetic_alteration_type: String,
    pub datatype: String,
    pub stable_id: String,
    pub other: BTreeMap<String, String>,
}

impl MetaRecord {
    /// Render the record as one tab-separated line in [`META_COLUMNS`] order.
    #[must_use]
    pub fn to_tsv_row(&self) -> String {
        [
            self.id.to_string(),
            self.meta_filepath.clone(),
            self.data_filepath.clone(),
            self.cancer_study_identifier.clone(),
            self.genetic_alteration_type.clone(),
            self.datatype.clone(),
            self.stable_id.clone(),
            render_other(&self.other),
        ]
        .join("\t")
    }
}

/// Render the passthrough mapping as a brace-delimited single-quoted
/// listing, `{}` when empty. Stable (sorted key) order; meant for human
/// inspection and opaque passthrough, not for machine parsing.
fn render_other(other: &BTreeMap<String, String>) -> String {
    if other.is_empty() {
        return "{}".to_string();
    }
    let entries: Vec<String> = other
        .iter()
        .map(|(key, value)| format!("'{key}':'{value}'"))
        .collect();
    format!("{{{}}}", entries.join(","))
}

/// One (record x mapping) pairing emitted by the router.
///
/// `id` and `data_filepath` are carried through from the source row
/// unchanged; `preprocessing_script` and `db_table` come from the matched
/// routing table mapping.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoutingEntry {
    pub id: String,
    pub preprocessing_script: String,
    pub data_filepath: String,
    pub db_table: String,
}

impl RoutingEntry {
    /// The four output fields in emission order.
    #[must_use]
    pub fn fields(&self) -> [&str; 4] {
        [
            &self.id,
            &self.preprocessing_script,
            &self.data_filepath,
            &self.db_table,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> MetaRecord {
        let mut other = BTreeMap::new();
        other.insert("profile_name".to_string(), "Putative CNA".to_string());
        other.insert("show_profile".to_string(), "true".to_string());
        MetaRecord {
            id: StageMetaId::generate(),
            meta_filepath: "study/meta_cna.txt".to_string(),
            data_filepath: "study/data_cna.txt".to_string(),
            cancer_study_identifier: "acc_tcga".to_string(),
            genetic_alteration_type: "COPY_NUMBER_ALTERATION".to_string(),
            datatype: "DISCRETE".to_string(),
            stable_id: "gistic".to_string(),
            other,
        }
    }

    #[test]
    fn sanitize_escapes_tabs_and_newlines() {
        assert_eq!(sanitize_value("a\tb\nc"), "a\\tb\\nc");
        assert_eq!(sanitize_value("plain"), "plain");
    }

    #[test]
    fn tsv_row_has_eight_columns_in_order() {
        let record = sample_record();
        let row = record.to_tsv_row();
        let fields: Vec<&str> = row.split('\t').collect();
        assert_eq!(fields.len(), META_COLUMNS.len());
        assert_eq!(fields[0], record.id.to_string());
        assert_eq!(fields[1], "study/meta_cna.txt");
        assert_eq!(fields[4], "COPY_NUMBER_ALTERATION");
        assert_eq!(
            fields[7],
            "{'profile_name':'Putative CNA','show_profile':'true'}"
        );
    }

    #[test]
    fn empty_other_renders_as_empty_braces() {
        let mut record = sample_record();
        record.other.clear();
        assert!(record.to_tsv_row().ends_with("\t{}"));
    }

    #[test]
    fn record_serializes() {
        let record = sample_record();
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: MetaRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
    }
}
