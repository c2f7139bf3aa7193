// src/core/types.rs
use crate::core::catalog::Form;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One conjugation entry as read from a verb CSV file.
///
/// `(tense, person)` identifies the row within one verb's dataset. The ids are
/// kept as the raw strings from the file; a short line leaves them empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbRow {
    pub tense: String,
    pub person: String,
    /// Singular.
    pub ferd: String,
    /// Dual.
    pub tesniye: String,
    /// Plural.
    pub cem: String,
}

impl VerbRow {
    pub fn form(&self, form: Form) -> &str {
        match form {
            Form::Ferd => &self.ferd,
            Form::Tesniye => &self.tesniye,
            Form::Cem => &self.cem,
        }
    }

    /// A row with no forms at all does not apply to its person and is skipped.
    pub fn is_blank(&self) -> bool {
        self.ferd.is_empty() && self.tesniye.is_empty() && self.cem.is_empty()
    }
}

/// Maps `"{person}-{form}"` to a `"prefixLen-suffixLen"` string for one tense.
pub type AffixPatterns = HashMap<String, String>;

pub fn pattern_key(person: &str, form: Form) -> String {
    format!("{}-{}", person, form.as_str())
}

/// Positional role of a letter cluster inside a conjugated word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Prefix,
    Stem,
    Suffix,
}

impl Role {
    pub fn is_affix(self) -> bool {
        self != Role::Stem
    }
}

/// A single letter cluster (base letter plus its combining marks) and its role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub role: Role,
}
