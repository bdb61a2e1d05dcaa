//! Stage routing: classify canonical metadata records and fan them out to
//! their preprocessing scripts and staging-table destinations.

pub mod engine;
pub mod error;
pub mod table;

pub use engine::{REQUIRED_COLUMNS, route_stream};
pub use error::{Result, RouteError};
pub use table::{DEFAULT_PREPROCESSOR_SCRIPT, StageMapping, lookup, supported_keys};
