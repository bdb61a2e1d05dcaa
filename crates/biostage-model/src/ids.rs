#![deny(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

/// Process-unique identifier for a discovered metadata record.
///
/// Generated once at discovery time and carried through the pipeline
/// unchanged; downstream routing output uses it as the join key back to the
/// originating record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct StageMetaId(Uuid);

impl StageMetaId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for StageMetaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for StageMetaId {
    type Err = uuid::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(value)?))
    }
}

/// The (genetic_alteration_type, datatype) pair that selects processing.
///
/// Keys are compared exactly as trimmed from the input stream; no case
/// folding or normalization beyond trimming.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassificationKey {
    pub alteration_type: String,
    pub datatype: String,
}

impl ClassificationKey {
    pub fn new(alteration_type: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            alteration_type: alteration_type.into(),
            datatype: datatype.into(),
        }
    }
}

impl fmt::Display for ClassificationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.alteration_type, self.datatype)
    }
}
