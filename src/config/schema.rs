//! Machine-readable schema export
//!
//! Builds a JSON Schema document from the same descriptor table the
//! validator runs on, so external editors can validate and autocomplete
//! config files without linking against this crate. Generation targets
//! draft 2020-12; [`to_legacy_dialect`] rewrites the document for draft-4
//! consumers (rapidjson and friends) that only understand `definitions`
//! referencing.

use crate::config::fields::{Pattern, Shape, FieldSpec, FIELDS};
use crate::config::model::PresetDistributionConfig;
use crate::types::Result;
use serde_json::{json, Map, Value};
use tracing::debug;

const SHARED_SHAPES: &[Pattern] = &[
    Pattern::PluginFile,
    Pattern::FormId,
    Pattern::EditorId,
    Pattern::NonEmpty,
];

/// Export the full configuration contract as a draft 2020-12 JSON Schema.
///
/// Defaults are taken from the serialized default instance, so they satisfy
/// the exported shapes by construction.
pub fn export_schema() -> Result<Value> {
    let defaults = serde_json::to_value(PresetDistributionConfig::default())?;

    let mut properties = Map::new();
    for spec in FIELDS {
        properties.insert(
            spec.name.to_string(),
            field_schema(spec, defaults.get(spec.name)),
        );
    }

    let mut defs = Map::new();
    for pattern in SHARED_SHAPES {
        defs.insert(
            pattern.def_name().to_string(),
            json!({"type": "string", "pattern": pattern.text()}),
        );
    }

    debug!("exported schema with {} properties", properties.len());
    Ok(json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "OBody preset distribution configuration",
        "type": "object",
        "additionalProperties": false,
        "properties": properties,
        "$defs": defs,
    }))
}

fn field_schema(spec: &FieldSpec, default: Option<&Value>) -> Value {
    let mut schema = match spec.shape {
        Shape::Bool => json!({"type": "boolean"}),
        Shape::List(pattern) => json!({
            "type": "array",
            "items": {"$ref": def_ref(pattern)},
        }),
        Shape::Map { key, value } => json!({
            "type": "object",
            "patternProperties": {
                (key.text()): {"type": "array", "items": {"$ref": def_ref(value)}},
            },
            "additionalProperties": false,
        }),
        Shape::NestedMap {
            outer,
            inner,
            value,
        } => json!({
            "type": "object",
            "patternProperties": {
                (outer.text()): {
                    "type": "object",
                    "patternProperties": {
                        (inner.text()): {"type": "array", "items": {"$ref": def_ref(value)}},
                    },
                    "additionalProperties": false,
                },
            },
            "additionalProperties": false,
        }),
    };

    // json!({...}) above always produces an object
    if let Some(object) = schema.as_object_mut() {
        object.insert("description".to_string(), json!(spec.description));
        if let Some(default) = default {
            object.insert("default".to_string(), default.clone());
        }
    }
    schema
}

fn def_ref(pattern: Pattern) -> String {
    format!("#/$defs/{}", pattern.def_name())
}

/// Rewrite a draft 2020-12 schema for validators that only support draft-4
/// style referencing: shared shapes move from `$defs` to a `definitions`
/// container, and every `$ref` pointer follows. Shape equivalence is
/// preserved; nothing else in the document is touched.
pub fn to_legacy_dialect(mut schema: Value) -> Value {
    if let Some(root) = schema.as_object_mut() {
        if let Some(defs) = root.remove("$defs") {
            root.insert("definitions".to_string(), defs);
        }
        root.insert(
            "$schema".to_string(),
            json!("http://json-schema.org/draft-04/schema#"),
        );
    }
    rewrite_refs(&mut schema);
    schema
}

fn rewrite_refs(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, entry) in map.iter_mut() {
                if key == "$ref" {
                    if let Some(pointer) = entry.as_str() {
                        if let Some(rest) = pointer.strip_prefix("#/$defs/") {
                            *entry = json!(format!("#/definitions/{}", rest));
                            continue;
                        }
                    }
                }
                rewrite_refs(entry);
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                rewrite_refs(item);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validate;

    #[test]
    fn test_schema_declares_every_field() {
        let schema = export_schema().unwrap();
        let properties = schema["properties"].as_object().unwrap();
        assert_eq!(properties.len(), FIELDS.len());
        for spec in FIELDS {
            let field = &properties[spec.name];
            assert!(field["type"].is_string(), "{} has no type", spec.name);
            assert!(
                field["description"].is_string(),
                "{} has no description",
                spec.name
            );
            assert!(
                field.get("default").is_some(),
                "{} has no default",
                spec.name
            );
        }
    }

    #[test]
    fn test_schema_is_closed() {
        let schema = export_schema().unwrap();
        assert_eq!(schema["additionalProperties"], serde_json::json!(false));
    }

    #[test]
    fn test_shared_shapes_carry_pattern_text() {
        let schema = export_schema().unwrap();
        let defs = schema["$defs"].as_object().unwrap();
        assert_eq!(
            defs["BSTFile"]["pattern"],
            serde_json::json!(crate::patterns::PLUGIN_FILE_PATTERN)
        );
        assert_eq!(
            defs["FormID"]["pattern"],
            serde_json::json!(crate::patterns::FORM_ID_PATTERN)
        );
        assert_eq!(
            defs["EditorID"]["pattern"],
            serde_json::json!(crate::patterns::EDITOR_ID_PATTERN)
        );
        assert_eq!(
            defs["NonEmptyString"]["pattern"],
            serde_json::json!(crate::patterns::NON_EMPTY_PATTERN)
        );
    }

    #[test]
    fn test_schema_defaults_match_default_instance() {
        let schema = export_schema().unwrap();
        let properties = schema["properties"].as_object().unwrap();
        let defaults = serde_json::to_value(PresetDistributionConfig::default()).unwrap();

        for spec in FIELDS {
            assert_eq!(
                properties[spec.name]["default"], defaults[spec.name],
                "schema default for {} drifted from the model",
                spec.name
            );
        }

        // And the default instance round-trips through its own contract.
        assert!(validate(&defaults).is_ok());
    }

    #[test]
    fn test_legacy_dialect_rewrite() {
        let legacy = to_legacy_dialect(export_schema().unwrap());

        assert_eq!(
            legacy["$schema"],
            serde_json::json!("http://json-schema.org/draft-04/schema#")
        );
        assert!(legacy.get("$defs").is_none());
        assert!(legacy["definitions"]["BSTFile"].is_object());

        // No reference may still point at $defs.
        let rendered = serde_json::to_string(&legacy).unwrap();
        assert!(!rendered.contains("#/$defs/"));
        assert!(rendered.contains("#/definitions/BSTFile"));
    }

    #[test]
    fn test_nested_map_field_schema_shape() {
        let schema = export_schema().unwrap();
        let npc_form_id = &schema["properties"]["npcFormID"];
        let outer = npc_form_id["patternProperties"][crate::patterns::PLUGIN_FILE_PATTERN].clone();
        let inner = &outer["patternProperties"][crate::patterns::FORM_ID_PATTERN];
        assert_eq!(
            inner["items"]["$ref"],
            serde_json::json!("#/$defs/NonEmptyString")
        );
    }
}
