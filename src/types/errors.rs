use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration root must be a JSON object, found {0}")]
    Structural(&'static str),

    #[error(transparent)]
    Invalid(#[from] ValidationFailure),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// A single rejected spot in the input document.
///
/// `path` is the dotted location of the offending value, with map keys
/// appended as path segments and list elements as `[index]`, e.g.
/// `npcFormID.Skyrim.esm.BADID` or `blacklistedNpcs[2]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    UnknownKey {
        path: String,
    },
    ShapeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
    PatternViolation {
        path: String,
        expected: &'static str,
        value: String,
    },
}

impl Violation {
    pub fn path(&self) -> &str {
        match self {
            Violation::UnknownKey { path } => path,
            Violation::ShapeMismatch { path, .. } => path,
            Violation::PatternViolation { path, .. } => path,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::UnknownKey { path } => {
                write!(f, "{}: unknown configuration key", path)
            }
            Violation::ShapeMismatch {
                path,
                expected,
                found,
            } => {
                write!(f, "{}: expected {} but found {}", path, expected, found)
            }
            Violation::PatternViolation {
                path,
                expected,
                value,
            } => {
                write!(f, "{}: expected {}, got {:?}", path, expected, value)
            }
        }
    }
}

/// The batch report for a rejected document.
///
/// Validation never stops at the first problem; every violation found in a
/// single pass over the document is collected here so users can fix their
/// config in one edit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub violations: Vec<Violation>,
}

impl ValidationFailure {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "configuration invalid ({} violations):", self.len())?;
        for violation in &self.violations {
            writeln!(f, "  - {}", violation)?;
        }
        Ok(())
    }
}
