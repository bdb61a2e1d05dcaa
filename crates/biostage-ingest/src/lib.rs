//! Metadata discovery and normalization for genomic study deposits.
//!
//! The scanner walks a set of input paths (directories, glob patterns,
//! literal files), parses the `meta_`-prefixed descriptors it finds, and
//! produces one canonical [`biostage_model::MetaRecord`] per descriptor.
//! The [`attributes`] module additionally hosts the fixed-offset reader for
//! clinical attribute staging files.

pub mod attributes;
pub mod descriptor;
pub mod discovery;
pub mod error;
pub mod paths;

pub use attributes::{
    AttributeDefinition, RESERVED_IDENTIFIER_COLUMNS, read_attribute_definitions,
};
pub use descriptor::{DATA_FILENAME_KEY, build_record, parse_descriptor};
pub use discovery::{CASE_LIST_DIR, META_PREFIX, collect_candidates, scan_paths, scan_paths_from};
pub use error::{AttributeError, IngestError, Result};
