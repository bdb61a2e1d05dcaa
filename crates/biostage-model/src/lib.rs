pub mod ids;
pub mod record;

pub use ids::{ClassificationKey, StageMetaId};
pub use record::{META_COLUMNS, MetaRecord, RoutingEntry, sanitize_value};
