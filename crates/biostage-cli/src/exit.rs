//! Process exit codes, distinguishable by failure class so downstream
//! orchestration can react per class.

/// Scanner: no input path yielded a descriptor with key:value pairs.
pub const NO_METADATA: i32 = 1;

/// Input-shape failures: empty input, missing required columns, unreadable
/// files or directories.
pub const INPUT_SHAPE: i32 = 2;

/// Router: a row's classification key is absent from the routing table.
pub const UNSUPPORTED_KEY: i32 = 3;

/// Attribute extractor: the file is missing its five-line preamble.
pub const ATTRIBUTES_TOO_SHORT: i32 = 3;

/// Attribute extractor: metadata rows misaligned with the header row.
pub const ATTRIBUTES_COLUMN_MISMATCH: i32 = 4;
