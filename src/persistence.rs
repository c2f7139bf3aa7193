// File: src/persistence.rs
use crate::core::catalog::{Kind, Tense};
use crate::error::PersistenceError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Name of the stored selections, kept from the browser's storage key.
pub const STORAGE_KEY: &str = "selections";

/// The user's last choices, as written to the selections file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selections {
    pub verb_kind: String,
    pub verb_index: usize,
    pub tense: String,
    pub show_pronouns: bool,
}

impl Default for Selections {
    fn default() -> Self {
        let kind = Kind::available().next().unwrap_or(Kind::Salim);
        Self {
            verb_kind: kind.as_str().to_string(),
            verb_index: 0,
            tense: Tense::ALL[0].as_str().to_string(),
            show_pronouns: false,
        }
    }
}

impl Selections {
    /// Typed view of the kind; falls back to the default kind.
    pub fn kind(&self) -> Kind {
        self.verb_kind
            .parse()
            .unwrap_or_else(|_| Kind::available().next().unwrap_or(Kind::Salim))
    }

    pub fn tense(&self) -> Tense {
        self.tense.parse().unwrap_or(Tense::ALL[0])
    }

    pub fn set_kind(&mut self, kind: Kind) {
        if self.kind() != kind {
            self.verb_index = 0;
        }
        self.verb_kind = kind.as_str().to_string();
    }

    /// Applies each field of a stored JSON object that has the right type and
    /// a known value, leaving the others at their current values.
    pub fn merge_json(&mut self, value: &Value) {
        if let Some(kind) = value
            .get("verbKind")
            .and_then(Value::as_str)
            .and_then(|s| s.parse::<Kind>().ok())
            .filter(|k| !k.verbs().is_empty())
        {
            self.verb_kind = kind.as_str().to_string();
        }
        if let Some(index) = value.get("verbIndex").and_then(Value::as_u64) {
            self.verb_index = index as usize;
        }
        if let Some(tense) = value
            .get("tense")
            .and_then(Value::as_str)
            .filter(|s| s.parse::<Tense>().is_ok())
        {
            self.tense = tense.to_string();
        }
        if let Some(show) = value.get("showPronouns").and_then(Value::as_bool) {
            self.show_pronouns = show;
        }
        if self.verb_index >= self.kind().verbs().len() {
            self.verb_index = 0;
        }
    }
}

/// JSON file holding [`Selections`] between runs.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/arabic-verbs/selections.json`, or the working directory
    /// when the platform has no config directory.
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("arabic-verbs");
        path.push(format!("{}.json", STORAGE_KEY));
        path
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Restores the saved selections. Never fails: a missing or malformed
    /// file gives the defaults.
    pub fn load(&self) -> Selections {
        let mut selections = Selections::default();
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return selections,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "could not read selections: {e}");
                return selections;
            }
        };
        match serde_json::from_str::<Value>(&text) {
            Ok(value) if value.is_object() => selections.merge_json(&value),
            Ok(_) => tracing::warn!(path = %self.path.display(), "selections file is not an object"),
            Err(e) => tracing::warn!(path = %self.path.display(), "discarding malformed selections: {e}"),
        }
        selections
    }

    /// Writes the selections through a temp file in the same directory so a
    /// crash never leaves a half-written file.
    pub fn save(&self, selections: &Selections) -> Result<(), PersistenceError> {
        let parent_dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent_dir)?;

        let temp_file = NamedTempFile::new_in(parent_dir)?;
        {
            let mut writer = BufWriter::new(&temp_file);
            serde_json::to_writer(&mut writer, selections)?;
            writer.flush()?;
        }
        temp_file
            .persist(&self.path)
            .map_err(|e| PersistenceError::Io(e.error))?;
        tracing::debug!(path = %self.path.display(), "selections saved");
        Ok(())
    }
}
