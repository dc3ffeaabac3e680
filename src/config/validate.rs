//! Exhaustive validation of raw configuration data
//!
//! Validation is a single transition from an untyped `serde_json::Value` to
//! a [`PresetDistributionConfig`]. It never stops at the first problem:
//! every unknown key, shape mismatch and pattern violation in the document
//! is collected into one [`ValidationFailure`] so the user can fix the whole
//! file in one pass. The only substitution ever performed is the declared
//! default for an absent key.

use crate::config::fields::{field, Pattern, Shape, FIELDS};
use crate::config::model::PresetDistributionConfig;
use crate::types::{ConfigError, ValidationFailure, Violation};
use serde_json::Value;
use tracing::{debug, warn};

/// Validate an untyped document against the declared key set.
///
/// Returns [`ConfigError::Structural`] when the root is not an object, and
/// [`ConfigError::Invalid`] with the full violation batch when any value is
/// rejected. On success every declared key is populated, defaulted where the
/// input omitted it.
pub fn validate(raw: &Value) -> Result<PresetDistributionConfig, ConfigError> {
    let root = match raw.as_object() {
        Some(map) => map,
        None => return Err(ConfigError::Structural(kind_name(raw))),
    };

    let mut violations = Vec::new();

    // Closed schema: reject anything outside the declared set first, so a
    // typo'd key never silently disables its distribution rule.
    for key in root.keys() {
        if field(key).is_none() {
            violations.push(Violation::UnknownKey { path: key.clone() });
        }
    }

    for spec in FIELDS {
        if let Some(value) = root.get(spec.name) {
            check_shape(spec.name, &spec.shape, value, &mut violations);
        }
    }

    if !violations.is_empty() {
        warn!(
            "rejected configuration with {} violation(s)",
            violations.len()
        );
        return Err(ValidationFailure::new(violations).into());
    }

    // Every present key has the right shape, so the typed conversion is a
    // formality; absent keys take their declared defaults through serde.
    let config: PresetDistributionConfig = serde_json::from_value(raw.clone())?;
    debug!("configuration validated");
    Ok(config)
}

fn check_shape(path: &str, shape: &Shape, value: &Value, violations: &mut Vec<Violation>) {
    match shape {
        Shape::Bool => {
            if !value.is_boolean() {
                violations.push(Violation::ShapeMismatch {
                    path: path.to_string(),
                    expected: "a boolean",
                    found: kind_name(value),
                });
            }
        }
        Shape::List(pattern) => check_string_list(path, *pattern, value, violations),
        Shape::Map {
            key: key_pattern,
            value: value_pattern,
        } => match value.as_object() {
            None => violations.push(Violation::ShapeMismatch {
                path: path.to_string(),
                expected: "a map",
                found: kind_name(value),
            }),
            Some(map) => {
                for (key, entry) in map {
                    let entry_path = format!("{}.{}", path, key);
                    if !key_pattern.matches(key) {
                        violations.push(Violation::PatternViolation {
                            path: entry_path.clone(),
                            expected: key_pattern.intent(),
                            value: key.clone(),
                        });
                    }
                    check_string_list(&entry_path, *value_pattern, entry, violations);
                }
            }
        },
        Shape::NestedMap {
            outer,
            inner,
            value: value_pattern,
        } => match value.as_object() {
            None => violations.push(Violation::ShapeMismatch {
                path: path.to_string(),
                expected: "a map",
                found: kind_name(value),
            }),
            Some(map) => {
                for (outer_key, inner_value) in map {
                    let outer_path = format!("{}.{}", path, outer_key);
                    if !outer.matches(outer_key) {
                        violations.push(Violation::PatternViolation {
                            path: outer_path.clone(),
                            expected: outer.intent(),
                            value: outer_key.clone(),
                        });
                    }
                    match inner_value.as_object() {
                        None => violations.push(Violation::ShapeMismatch {
                            path: outer_path.clone(),
                            expected: "a map",
                            found: kind_name(inner_value),
                        }),
                        Some(inner_map) => {
                            for (inner_key, entry) in inner_map {
                                let inner_path = format!("{}.{}", outer_path, inner_key);
                                if !inner.matches(inner_key) {
                                    violations.push(Violation::PatternViolation {
                                        path: inner_path.clone(),
                                        expected: inner.intent(),
                                        value: inner_key.clone(),
                                    });
                                }
                                check_string_list(&inner_path, *value_pattern, entry, violations);
                            }
                        }
                    }
                }
            }
        },
    }
}

fn check_string_list(path: &str, pattern: Pattern, value: &Value, violations: &mut Vec<Violation>) {
    match value.as_array() {
        None => violations.push(Violation::ShapeMismatch {
            path: path.to_string(),
            expected: "a list of strings",
            found: kind_name(value),
        }),
        Some(items) => {
            for (index, item) in items.iter().enumerate() {
                let item_path = format!("{}[{}]", path, index);
                match item.as_str() {
                    None => violations.push(Violation::ShapeMismatch {
                        path: item_path,
                        expected: "a string",
                        found: kind_name(item),
                    }),
                    Some(text) if !pattern.matches(text) => {
                        violations.push(Violation::PatternViolation {
                            path: item_path,
                            expected: pattern.intent(),
                            value: text.to_string(),
                        });
                    }
                    Some(_) => {}
                }
            }
        }
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a map",
    }
}
