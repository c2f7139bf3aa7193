// File: src/error.rs
use std::io;

/// An id that is not part of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown {what} '{id}'")]
    Unknown { what: &'static str, id: String },
}

/// Shape errors reported by the strict row parser.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CsvError {
    #[error("line {line}: expected {expected} columns, found {found}")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Failure to obtain a verb's conjugation rows.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to fetch verb data from '{path}': {reason}")]
    Retrieval { path: String, reason: String },
    #[error(transparent)]
    Parse(#[from] CsvError),
}

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("selections file i/o: {0}")]
    Io(#[from] io::Error),
    #[error("selections file encoding: {0}")]
    Json(#[from] serde_json::Error),
}
