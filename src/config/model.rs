//! The validated configuration record

use crate::types::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Form-id lists keyed by plugin filename.
pub type PluginFormIdMap = HashMap<String, Vec<String>>;

/// A fully validated preset distribution configuration.
///
/// Instances only exist in validated form: either default-constructed (every
/// key at its declared default, used to emit the starter template) or
/// produced by [`validate`](crate::config::validate). They are never mutated
/// afterwards; a reload constructs a new instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresetDistributionConfig {
    #[serde(rename = "npcFormID", default)]
    pub npc_form_id: HashMap<String, HashMap<String, Vec<String>>>,

    #[serde(default)]
    pub npc: HashMap<String, Vec<String>>,

    #[serde(rename = "factionFemale", default)]
    pub faction_female: HashMap<String, Vec<String>>,

    #[serde(rename = "factionMale", default)]
    pub faction_male: HashMap<String, Vec<String>>,

    #[serde(rename = "npcPluginFemale", default)]
    pub npc_plugin_female: HashMap<String, Vec<String>>,

    #[serde(rename = "npcPluginMale", default)]
    pub npc_plugin_male: HashMap<String, Vec<String>>,

    #[serde(rename = "raceFemale", default)]
    pub race_female: HashMap<String, Vec<String>>,

    #[serde(rename = "raceMale", default)]
    pub race_male: HashMap<String, Vec<String>>,

    #[serde(rename = "blacklistedNpcs", default)]
    pub blacklisted_npcs: Vec<String>,

    #[serde(rename = "blacklistedNpcsFormID", default)]
    pub blacklisted_npcs_form_id: PluginFormIdMap,

    #[serde(rename = "blacklistedNpcsPluginFemale", default)]
    pub blacklisted_npcs_plugin_female: Vec<String>,

    #[serde(rename = "blacklistedNpcsPluginMale", default)]
    pub blacklisted_npcs_plugin_male: Vec<String>,

    #[serde(
        rename = "blacklistedRacesFemale",
        default = "default_blacklisted_races"
    )]
    pub blacklisted_races_female: Vec<String>,

    #[serde(rename = "blacklistedRacesMale", default = "default_blacklisted_races")]
    pub blacklisted_races_male: Vec<String>,

    #[serde(rename = "blacklistedOutfitsFromORefitFormID", default)]
    pub blacklisted_outfits_from_orefit_form_id: PluginFormIdMap,

    #[serde(
        rename = "blacklistedOutfitsFromORefit",
        default = "default_blacklisted_outfits"
    )]
    pub blacklisted_outfits_from_orefit: Vec<String>,

    #[serde(rename = "blacklistedOutfitsFromORefitPlugin", default)]
    pub blacklisted_outfits_from_orefit_plugin: Vec<String>,

    #[serde(rename = "outfitsForceRefitFormID", default)]
    pub outfits_force_refit_form_id: PluginFormIdMap,

    #[serde(rename = "outfitsForceRefit", default)]
    pub outfits_force_refit: Vec<String>,

    #[serde(
        rename = "blacklistedPresetsFromRandomDistribution",
        default = "default_blacklisted_presets"
    )]
    pub blacklisted_presets_from_random_distribution: Vec<String>,

    #[serde(
        rename = "blacklistedPresetsShowInOBodyMenu",
        default = "default_show_in_menu"
    )]
    pub blacklisted_presets_show_in_obody_menu: bool,
}

// Starter blacklists shipped with the template. Nothing in the validator
// depends on their membership; editing them only changes emitted defaults.
fn default_blacklisted_races() -> Vec<String> {
    vec!["ElderRace".to_string()]
}

fn default_blacklisted_presets() -> Vec<String> {
    vec![
        "- Zeroed Sliders -".to_string(),
        "-Zeroed Sliders-".to_string(),
        "Zeroed Sliders".to_string(),
        "HIMBO Zero for OBody".to_string(),
    ]
}

fn default_blacklisted_outfits() -> Vec<String> {
    vec!["LS Force Naked".to_string(), "OBody Nude 32".to_string()]
}

fn default_show_in_menu() -> bool {
    true
}

impl Default for PresetDistributionConfig {
    fn default() -> Self {
        Self {
            npc_form_id: HashMap::new(),
            npc: HashMap::new(),
            faction_female: HashMap::new(),
            faction_male: HashMap::new(),
            npc_plugin_female: HashMap::new(),
            npc_plugin_male: HashMap::new(),
            race_female: HashMap::new(),
            race_male: HashMap::new(),
            blacklisted_npcs: Vec::new(),
            blacklisted_npcs_form_id: HashMap::new(),
            blacklisted_npcs_plugin_female: Vec::new(),
            blacklisted_npcs_plugin_male: Vec::new(),
            blacklisted_races_female: default_blacklisted_races(),
            blacklisted_races_male: default_blacklisted_races(),
            blacklisted_outfits_from_orefit_form_id: HashMap::new(),
            blacklisted_outfits_from_orefit: default_blacklisted_outfits(),
            blacklisted_outfits_from_orefit_plugin: Vec::new(),
            outfits_force_refit_form_id: HashMap::new(),
            outfits_force_refit: Vec::new(),
            blacklisted_presets_from_random_distribution: default_blacklisted_presets(),
            blacklisted_presets_show_in_obody_menu: default_show_in_menu(),
        }
    }
}

impl PresetDistributionConfig {
    /// Parse and validate a configuration document from JSON text.
    pub fn from_str(content: &str) -> Result<Self> {
        let raw: serde_json::Value = serde_json::from_str(content)?;
        super::validate(&raw)
    }

    /// Read, parse and validate a configuration file.
    pub fn from_path(path: &Path) -> Result<Self> {
        debug!("loading configuration from: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_str(&content)?;
        info!("loaded valid configuration from: {}", path.display());
        Ok(config)
    }
}
