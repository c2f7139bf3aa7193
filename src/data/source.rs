// File: src/data/source.rs
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// A failed retrieval, with the status reason the caller reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub reason: String,
}

impl FetchFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::new("Not Found")
    }
}

/// Where the static CSV resources come from. Paths are relative, e.g.
/// `verbs/salim-0.csv`.
pub trait ResourceSource {
    fn fetch(&self, path: &str) -> Result<String, FetchFailure>;
}

/// Reads resources from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    base: PathBuf,
}

impl DirectorySource {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl ResourceSource for DirectorySource {
    fn fetch(&self, path: &str) -> Result<String, FetchFailure> {
        let full = self.base.join(path);
        fs::read_to_string(&full).map_err(|e| match e.kind() {
            ErrorKind::NotFound => FetchFailure::not_found(),
            _ => FetchFailure::new(e.to_string()),
        })
    }
}

/// In-memory resources, for tests and embedded data sets.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, contents: &str) -> Self {
        self.files.insert(path.to_string(), contents.to_string());
        self
    }
}

impl ResourceSource for MemorySource {
    fn fetch(&self, path: &str) -> Result<String, FetchFailure> {
        self.files.get(path).cloned().ok_or_else(FetchFailure::not_found)
    }
}

impl<S: ResourceSource + ?Sized> ResourceSource for &S {
    fn fetch(&self, path: &str) -> Result<String, FetchFailure> {
        (**self).fetch(path)
    }
}
