//! Descriptor candidate discovery and scan orchestration.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use biostage_model::MetaRecord;

use crate::descriptor::{build_record, parse_descriptor};
use crate::error::{IngestError, Result};

/// File-name prefix that marks a dataset descriptor.
pub const META_PREFIX: &str = "meta_";

/// Reserved subdirectory whose regular files are always collected as
/// candidates; case list declarations carry no descriptor prefix.
pub const CASE_LIST_DIR: &str = "case_lists";

/// Scan the given inputs relative to the current working directory.
///
/// Inputs default handling (empty slice means `.`) is the caller's concern;
/// see the `scan_meta` binary.
pub fn scan_paths(paths: &[String]) -> Result<Vec<MetaRecord>> {
    let base = std::env::current_dir().map_err(IngestError::WorkingDir)?;
    scan_paths_from(paths, &base)
}

/// Scan with an explicit base directory for path relativization.
///
/// Emits one record per candidate that yields at least one key:value pair,
/// in discovery order. Candidates yielding none are dropped silently; zero
/// records across all inputs is an error.
pub fn scan_paths_from(paths: &[String], base: &Path) -> Result<Vec<MetaRecord>> {
    let mut records = Vec::new();
    for path in collect_candidates(paths)? {
        let fields = parse_descriptor(&path)?;
        if fields.is_empty() {
            debug!(path = %path.display(), "candidate has no key:value pairs, dropping");
            continue;
        }
        records.push(build_record(&path, fields, base));
    }
    if records.is_empty() {
        return Err(IngestError::NoMetadataFound {
            searched: paths.to_vec(),
        });
    }
    debug!(count = records.len(), "descriptors discovered");
    Ok(records)
}

/// Collect candidate descriptor files for each input.
///
/// A directory contributes its `meta_`-prefixed entries plus every regular
/// file under its `case_lists` subdirectory; anything else is expanded as a
/// glob pattern whose matches are kept when they are regular `meta_` files.
/// Order is the concatenation of each input's own (name-sorted) order.
pub fn collect_candidates(paths: &[String]) -> Result<Vec<PathBuf>> {
    let mut candidates = Vec::new();
    for input in paths {
        let path = Path::new(input);
        if path.is_dir() {
            candidates.extend(descriptor_entries(path)?);
            let case_lists = path.join(CASE_LIST_DIR);
            if case_lists.is_dir() {
                candidates.extend(regular_files(&case_lists)?);
            }
        } else {
            candidates.extend(glob_candidates(input)?);
        }
    }
    Ok(candidates)
}

/// `meta_*` regular files directly inside `dir`, name-sorted.
fn descriptor_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = list_dir(dir)?;
    files.retain(|path| has_meta_prefix(path));
    Ok(files)
}

/// All regular files directly inside `dir`, name-sorted.
fn regular_files(dir: &Path) -> Result<Vec<PathBuf>> {
    list_dir(dir)
}

fn list_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|source| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn glob_candidates(pattern: &str) -> Result<Vec<PathBuf>> {
    let matches = glob::glob(pattern).map_err(|source| IngestError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut files = Vec::new();
    for path in matches.flatten() {
        if path.is_file() && has_meta_prefix(&path) {
            files.push(path);
        }
    }
    Ok(files)
}

fn has_meta_prefix(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(META_PREFIX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_study_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in &["meta_study.txt", "meta_cna.txt", "data_cna.txt", "README"] {
            fs::write(dir.path().join(name), "stub: value\n").unwrap();
        }
        dir
    }

    #[test]
    fn directory_input_keeps_only_meta_prefixed_files() {
        let dir = create_study_dir();
        let input = vec![dir.path().to_string_lossy().into_owned()];

        let candidates = collect_candidates(&input).unwrap();
        assert_eq!(candidates.len(), 2);
        assert!(candidates.iter().all(|path| has_meta_prefix(path)));
        // name-sorted within the directory
        assert!(candidates[0].ends_with("meta_cna.txt"));
        assert!(candidates[1].ends_with("meta_study.txt"));
    }

    #[test]
    fn case_lists_files_are_included_without_prefix_filter() {
        let dir = create_study_dir();
        let case_lists = dir.path().join(CASE_LIST_DIR);
        fs::create_dir(&case_lists).unwrap();
        fs::write(case_lists.join("cases_all.txt"), "stable_id: all\n").unwrap();
        let input = vec![dir.path().to_string_lossy().into_owned()];

        let candidates = collect_candidates(&input).unwrap();
        assert_eq!(candidates.len(), 3);
        assert!(candidates[2].ends_with("cases_all.txt"));
    }

    #[test]
    fn glob_input_filters_to_meta_regular_files() {
        let dir = create_study_dir();
        let pattern = format!("{}/*.txt", dir.path().display());

        let candidates = collect_candidates(&[pattern]).unwrap();
        assert_eq!(candidates.len(), 2);
        assert!(candidates.iter().all(|path| has_meta_prefix(path)));
    }

    #[test]
    fn missing_directory_in_glob_position_yields_no_candidates() {
        let dir = TempDir::new().unwrap();
        let pattern = format!("{}/nope/meta_*", dir.path().display());
        let candidates = collect_candidates(&[pattern]).unwrap();
        assert!(candidates.is_empty());
    }
}
