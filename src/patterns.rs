//! Reusable string-shape matchers for configuration values
//!
//! Every identifier shape used by the configuration model lives here so the
//! validator and the schema exporter never duplicate pattern text. Matching
//! is exact and case-sensitive: no trimming, no normalization, no extra
//! delimiters.

use lazy_static::lazy_static;
use regex::Regex;

/// Plugin filename: anything without `.`, tab, newline or carriage return
/// before a lowercase `.esp`/`.esm`/`.esl` extension. Spaces are legal,
/// plugin names like "Immersive Wenches.esp" are common.
pub const PLUGIN_FILE_PATTERN: &str = r"^[^.\n\r\t]+\.es[plm]$";

/// Form identifier: 8 uppercase hex digits, or `FE` plus 6 hex digits for
/// light plugins.
pub const FORM_ID_PATTERN: &str = r"^(FE[0-9A-F]{6}|[0-9A-F]{8})$";

/// Editor identifier (factions, races): no whitespace, no `.`.
pub const EDITOR_ID_PATTERN: &str = r"^[^.\n\r\t ]+$";

/// Free-form name (NPCs, presets, outfits): any non-empty string.
pub const NON_EMPTY_PATTERN: &str = r"^.+$";

lazy_static! {
    static ref PLUGIN_FILE: Regex = Regex::new(PLUGIN_FILE_PATTERN).unwrap();
    static ref FORM_ID: Regex = Regex::new(FORM_ID_PATTERN).unwrap();
    static ref EDITOR_ID: Regex = Regex::new(EDITOR_ID_PATTERN).unwrap();
    static ref NON_EMPTY: Regex = Regex::new(NON_EMPTY_PATTERN).unwrap();
}

pub fn is_plugin_file(value: &str) -> bool {
    PLUGIN_FILE.is_match(value)
}

pub fn is_form_id(value: &str) -> bool {
    FORM_ID.is_match(value)
}

pub fn is_editor_id(value: &str) -> bool {
    EDITOR_ID.is_match(value)
}

pub fn is_non_empty(value: &str) -> bool {
    NON_EMPTY.is_match(value)
}
