//! Configuration model for OBody preset distribution
//!
//! The contract has three pieces:
//! 1. A fixed descriptor table declaring every recognized key and its shape
//! 2. An exhaustive validator from raw JSON data to the typed record
//! 3. A schema exporter describing the same contract to external tools

mod fields;
mod model;
mod schema;
mod validate;

pub use fields::{field, FieldSpec, Pattern, Shape, FIELDS};
pub use model::{PluginFormIdMap, PresetDistributionConfig};
pub use schema::{export_schema, to_legacy_dialect};
pub use validate::validate;
