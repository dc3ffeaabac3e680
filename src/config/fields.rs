//! The declared key set of the preset distribution config
//!
//! One fixed table describes every recognized key: its name, its value
//! shape, and its user-facing description. The validator and the schema
//! exporter both iterate this table, so a key declared here is automatically
//! checked and exported without further wiring. Any key not in this table is
//! rejected.

use crate::patterns;

/// One of the four string shapes from the pattern library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    PluginFile,
    FormId,
    EditorId,
    NonEmpty,
}

impl Pattern {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Pattern::PluginFile => patterns::is_plugin_file(value),
            Pattern::FormId => patterns::is_form_id(value),
            Pattern::EditorId => patterns::is_editor_id(value),
            Pattern::NonEmpty => patterns::is_non_empty(value),
        }
    }

    /// The anchored regex text, for schema export.
    pub fn text(&self) -> &'static str {
        match self {
            Pattern::PluginFile => patterns::PLUGIN_FILE_PATTERN,
            Pattern::FormId => patterns::FORM_ID_PATTERN,
            Pattern::EditorId => patterns::EDITOR_ID_PATTERN,
            Pattern::NonEmpty => patterns::NON_EMPTY_PATTERN,
        }
    }

    /// What the pattern means, for violation messages.
    pub fn intent(&self) -> &'static str {
        match self {
            Pattern::PluginFile => "a plugin filename ending in .esp, .esm or .esl",
            Pattern::FormId => "a form identifier (8 uppercase hex digits, or FE + 6)",
            Pattern::EditorId => "an editor identifier (no spaces or dots)",
            Pattern::NonEmpty => "a non-empty string",
        }
    }

    /// Name of the shared definition in the exported schema.
    pub fn def_name(&self) -> &'static str {
        match self {
            Pattern::PluginFile => "BSTFile",
            Pattern::FormId => "FormID",
            Pattern::EditorId => "EditorID",
            Pattern::NonEmpty => "NonEmptyString",
        }
    }
}

/// Structural shape of a configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A plain boolean.
    Bool,
    /// A list of strings, each matching the pattern.
    List(Pattern),
    /// A map from pattern-checked keys to lists of pattern-checked strings.
    Map { key: Pattern, value: Pattern },
    /// A two-level map, e.g. plugin file -> form id -> preset names.
    NestedMap {
        outer: Pattern,
        inner: Pattern,
        value: Pattern,
    },
}

pub struct FieldSpec {
    pub name: &'static str,
    pub shape: Shape,
    pub description: &'static str,
}

/// Every key the configuration recognizes, in emission order.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "npcFormID",
        shape: Shape::NestedMap {
            outer: Pattern::PluginFile,
            inner: Pattern::FormId,
            value: Pattern::NonEmpty,
        },
        description: "Presets for specific NPCs identified by their FormID within a plugin. Works with modded NPCs.",
    },
    FieldSpec {
        name: "npc",
        shape: Shape::Map {
            key: Pattern::NonEmpty,
            value: Pattern::NonEmpty,
        },
        description: "Same as npcFormID, but keyed by NPC display name instead of FormID.",
    },
    FieldSpec {
        name: "factionFemale",
        shape: Shape::Map {
            key: Pattern::EditorId,
            value: Pattern::NonEmpty,
        },
        description: "Presets distributed to female NPCs by faction.",
    },
    FieldSpec {
        name: "factionMale",
        shape: Shape::Map {
            key: Pattern::EditorId,
            value: Pattern::NonEmpty,
        },
        description: "Same as factionFemale, but for male NPCs.",
    },
    FieldSpec {
        name: "npcPluginFemale",
        shape: Shape::Map {
            key: Pattern::PluginFile,
            value: Pattern::NonEmpty,
        },
        description: "Presets applied to all female NPCs from a specific plugin.",
    },
    FieldSpec {
        name: "npcPluginMale",
        shape: Shape::Map {
            key: Pattern::PluginFile,
            value: Pattern::NonEmpty,
        },
        description: "Same as npcPluginFemale, but for male NPCs.",
    },
    FieldSpec {
        name: "raceFemale",
        shape: Shape::Map {
            key: Pattern::EditorId,
            value: Pattern::NonEmpty,
        },
        description: "Presets applied to females of a race. Works with custom races. Only female body presets belong here.",
    },
    FieldSpec {
        name: "raceMale",
        shape: Shape::Map {
            key: Pattern::EditorId,
            value: Pattern::NonEmpty,
        },
        description: "Same as raceFemale, but for males. Only male body presets belong here.",
    },
    FieldSpec {
        name: "blacklistedNpcs",
        shape: Shape::List(Pattern::NonEmpty),
        description: "NPCs excluded from distribution, by display name.",
    },
    FieldSpec {
        name: "blacklistedNpcsFormID",
        shape: Shape::Map {
            key: Pattern::PluginFile,
            value: Pattern::FormId,
        },
        description: "NPCs excluded from distribution, by FormID within a plugin. Useful for NPCs whose bodies are handled separately.",
    },
    FieldSpec {
        name: "blacklistedNpcsPluginFemale",
        shape: Shape::List(Pattern::PluginFile),
        description: "Exclude every female NPC from the listed plugins.",
    },
    FieldSpec {
        name: "blacklistedNpcsPluginMale",
        shape: Shape::List(Pattern::PluginFile),
        description: "Same as blacklistedNpcsPluginFemale, but for males.",
    },
    FieldSpec {
        name: "blacklistedRacesFemale",
        shape: Shape::List(Pattern::EditorId),
        description: "Exclude females of entire races instead of individual NPCs.",
    },
    FieldSpec {
        name: "blacklistedRacesMale",
        shape: Shape::List(Pattern::EditorId),
        description: "Same as blacklistedRacesFemale, but for male NPCs.",
    },
    FieldSpec {
        name: "blacklistedOutfitsFromORefitFormID",
        shape: Shape::Map {
            key: Pattern::PluginFile,
            value: Pattern::FormId,
        },
        description: "Outfits that ORefit must never touch, by FormID within a plugin.",
    },
    FieldSpec {
        name: "blacklistedOutfitsFromORefit",
        shape: Shape::List(Pattern::NonEmpty),
        description: "Same as blacklistedOutfitsFromORefitFormID, but by outfit name.",
    },
    FieldSpec {
        name: "blacklistedOutfitsFromORefitPlugin",
        shape: Shape::List(Pattern::PluginFile),
        description: "Exclude every outfit from the listed plugins from ORefit.",
    },
    FieldSpec {
        name: "outfitsForceRefitFormID",
        shape: Shape::Map {
            key: Pattern::PluginFile,
            value: Pattern::FormId,
        },
        description: "Outfits to force ORefit onto when auto-detection misses them, by FormID. Rarely needed.",
    },
    FieldSpec {
        name: "outfitsForceRefit",
        shape: Shape::List(Pattern::NonEmpty),
        description: "Same as outfitsForceRefitFormID, but by outfit name.",
    },
    FieldSpec {
        name: "blacklistedPresetsFromRandomDistribution",
        shape: Shape::List(Pattern::NonEmpty),
        description: "Presets that random distribution must never pick.",
    },
    FieldSpec {
        name: "blacklistedPresetsShowInOBodyMenu",
        shape: Shape::Bool,
        description: "Whether blacklisted presets still show up in the O menu.",
    },
];

/// Look up a declared key, `None` for unknown keys.
pub fn field(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|spec| spec.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_declared_key_set_is_closed_and_unique() {
        let names: HashSet<_> = FIELDS.iter().map(|spec| spec.name).collect();
        assert_eq!(names.len(), FIELDS.len(), "duplicate field declaration");
        assert_eq!(FIELDS.len(), 21);
    }

    #[test]
    fn test_field_lookup() {
        assert!(field("npcFormID").is_some());
        assert!(field("blacklistedPresetsShowInOBodyMenu").is_some());
        assert!(field("totallyUnknownKey").is_none());
        // Lookup is case-sensitive
        assert!(field("npcformid").is_none());
    }

    #[test]
    fn test_every_field_has_a_description() {
        for spec in FIELDS {
            assert!(
                !spec.description.is_empty(),
                "{} is missing a description",
                spec.name
            );
        }
    }
}
