// File: src/data/loader.rs
use crate::core::catalog::{Form, Kind, Tense};
use crate::core::types::{pattern_key, AffixPatterns, VerbRow};
use crate::data::cache::QueryCache;
use crate::data::csv::{parse_rows, parse_trimmed, ParseMode};
use crate::data::source::ResourceSource;
use crate::error::LoadError;
use std::sync::Arc;

/// Directory, relative to the source base, holding the CSV resources.
pub const VERBS_DIR: &str = "verbs";

pub type RowCache = QueryCache<(Kind, usize), Arc<[VerbRow]>>;
pub type AffixCache = QueryCache<(Kind, Tense), Arc<AffixPatterns>>;

pub fn verb_path(kind: Kind, verb_index: usize) -> String {
    format!("{}/{}-{}.csv", VERBS_DIR, kind, verb_index)
}

pub fn affixes_path(kind: Kind) -> String {
    format!("{}/{}-affixes.csv", VERBS_DIR, kind)
}

/// Fetches verb rows and affix patterns once per key and keeps them for the
/// rest of the session.
pub struct VerbLoader<S> {
    source: S,
    rows: RowCache,
    affixes: AffixCache,
}

impl<S: ResourceSource> VerbLoader<S> {
    pub fn new(source: S) -> Self {
        Self::with_caches(source, RowCache::new(), AffixCache::new())
    }

    pub fn with_caches(source: S, rows: RowCache, affixes: AffixCache) -> Self {
        Self {
            source,
            rows,
            affixes,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn row_cache(&self) -> &RowCache {
        &self.rows
    }

    pub fn affix_cache(&self) -> &AffixCache {
        &self.affixes
    }

    /// Conjugation rows of verb `verb_index` of `kind`.
    ///
    /// A failed fetch is returned as [`LoadError::Retrieval`] and is not
    /// cached, so a later call retries it.
    pub fn load(&mut self, kind: Kind, verb_index: usize) -> Result<Arc<[VerbRow]>, LoadError> {
        let key = (kind, verb_index);
        if let Some(rows) = self.rows.get(&key) {
            tracing::debug!(%kind, verb_index, "verb rows served from cache");
            return Ok(Arc::clone(rows));
        }

        let path = verb_path(kind, verb_index);
        let text = self
            .source
            .fetch(&path)
            .map_err(|failure| LoadError::Retrieval {
                path: path.clone(),
                reason: failure.reason,
            })?;

        let rows: Arc<[VerbRow]> = parse_rows(&text, ParseMode::Lenient)?.into();
        tracing::debug!(%path, rows = rows.len(), "verb rows fetched");
        self.rows.set(key, Arc::clone(&rows));
        Ok(rows)
    }

    /// Affix patterns of `kind` for one tense, keyed `"{person}-{form}"`.
    ///
    /// Never fails: an unavailable file degrades to an empty map, which is
    /// cached like any other result.
    pub fn load_affixes(&mut self, kind: Kind, tense: Tense) -> Arc<AffixPatterns> {
        let key = (kind, tense);
        if let Some(patterns) = self.affixes.get(&key) {
            tracing::debug!(%kind, %tense, "affix patterns served from cache");
            return Arc::clone(patterns);
        }

        let path = affixes_path(kind);
        let patterns = match self.source.fetch(&path) {
            Ok(text) => affix_patterns(&text, tense),
            Err(failure) => {
                tracing::warn!(%path, reason = %failure.reason, "affix patterns unavailable");
                AffixPatterns::new()
            }
        };

        let patterns = Arc::new(patterns);
        self.affixes.set(key, Arc::clone(&patterns));
        patterns
    }

    /// Re-reads a verb file with the strict parser, bypassing the cache.
    pub fn check(&self, kind: Kind, verb_index: usize) -> Result<Vec<VerbRow>, LoadError> {
        let path = verb_path(kind, verb_index);
        let text = self
            .source
            .fetch(&path)
            .map_err(|failure| LoadError::Retrieval {
                path,
                reason: failure.reason,
            })?;
        Ok(parse_rows(&text, ParseMode::Strict)?)
    }
}

/// Builds the pattern map for `tense` from an affix file. Later rows for the
/// same person overwrite earlier ones.
pub fn affix_patterns(text: &str, tense: Tense) -> AffixPatterns {
    let mut patterns = AffixPatterns::new();
    for row in parse_trimmed(text) {
        if row.tense != tense.as_str() {
            continue;
        }
        for form in Form::ALL.iter().copied() {
            patterns.insert(pattern_key(&row.person, form), row.form(form).to_string());
        }
    }
    patterns
}
