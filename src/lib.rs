//! obody-config - Preset distribution configuration for OBody
//!
//! This crate owns the configuration contract of the OBody preset
//! distribution tool: the closed set of recognized keys, the string shapes
//! their values must satisfy, the defaults taken when a key is absent, and
//! a JSON Schema export of the same contract for external editors.
//!
//! Validation is exhaustive: a rejected document reports every violation
//! with its field path in one batch, never just the first one found.

pub mod config;
pub mod patterns;
pub mod types;

pub use config::{export_schema, to_legacy_dialect, validate, PresetDistributionConfig};
pub use types::{ConfigError, ValidationFailure, Violation};
