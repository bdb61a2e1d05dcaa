//! Tests for the fixed-offset clinical attribute definition reader.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use biostage_ingest::{AttributeError, read_attribute_definitions};

fn write_file(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("data_clinical_patient.txt");
    fs::write(&path, contents).unwrap();
    path
}

const WELL_FORMED: &str = "\
#Patient Identifier\tAge\tSex\n\
#Identifier of the patient\tAge at diagnosis\tSex at birth\n\
#STRING\tNUMBER\tSTRING\n\
#1\t1\t1\n\
PATIENT_ID\tAGE\tSEX\n\
P-0001\t61\tFemale\n";

#[test]
fn extracts_definitions_and_skips_reserved_identifiers() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, WELL_FORMED);

    let definitions = read_attribute_definitions(&path).unwrap();
    assert_eq!(definitions.len(), 2);

    assert_eq!(definitions[0].attribute, "AGE");
    assert_eq!(definitions[0].name, "Age");
    assert_eq!(definitions[0].description, "Age at diagnosis");
    assert_eq!(definitions[0].data_type, "NUMBER");
    assert_eq!(definitions[0].priority, "1");

    assert_eq!(definitions[1].attribute, "SEX");
}

#[test]
fn sample_identifier_column_is_also_reserved() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "#Sample\tMutation Count\n#Sample id\tCount\n#STRING\tNUMBER\n#1\t1\nSAMPLE_ID\tMUT_COUNT\n",
    );

    let definitions = read_attribute_definitions(&path).unwrap();
    assert_eq!(definitions.len(), 1);
    assert_eq!(definitions[0].attribute, "MUT_COUNT");
}

#[test]
fn short_file_fails_loudly() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "#Names\n#Descriptions\n#Types\n");

    match read_attribute_definitions(&path) {
        Err(AttributeError::TooShort { .. }) => {}
        other => panic!("expected TooShort, got {other:?}"),
    }
}

#[test]
fn blank_line_within_preamble_counts_as_short() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "#Names\n#Descriptions\n\n#Priorities\nPATIENT_ID\n");

    assert!(matches!(
        read_attribute_definitions(&path),
        Err(AttributeError::TooShort { .. })
    ));
}

#[test]
fn column_count_mismatch_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "#Patient Identifier\tAge\n#Identifier\tAge at diagnosis\n#STRING\n#1\t1\nPATIENT_ID\tAGE\n",
    );

    match read_attribute_definitions(&path) {
        Err(AttributeError::ColumnMismatch {
            row,
            expected,
            actual,
            ..
        }) => {
            assert_eq!(row, "datatypes");
            assert_eq!(expected, 2);
            assert_eq!(actual, 1);
        }
        other => panic!("expected ColumnMismatch, got {other:?}"),
    }
}

#[test]
fn missing_file_reports_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.txt");

    assert!(matches!(
        read_attribute_definitions(&path),
        Err(AttributeError::Read { .. })
    ));
}
