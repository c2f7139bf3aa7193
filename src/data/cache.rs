// File: src/data/cache.rs
use std::collections::HashMap;
use std::hash::Hash;

/// Session cache for fetched resources, keyed by the lookup parameters.
///
/// Entries are never evicted or refreshed; they live as long as the cache.
#[derive(Debug, Clone)]
pub struct QueryCache<K, V> {
    entries: HashMap<K, V>,
}

impl<K: Eq + Hash, V> QueryCache<K, V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Stores `value` under `key`, replacing any earlier value.
    pub fn set(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    pub fn has(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash, V> Default for QueryCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get() {
        let mut cache: QueryCache<(&str, usize), u32> = QueryCache::new();
        assert!(!cache.has(&("salim", 0)));
        cache.set(("salim", 0), 7);
        assert!(cache.has(&("salim", 0)));
        assert_eq!(cache.get(&("salim", 0)), Some(&7));
        assert_eq!(cache.get(&("salim", 1)), None);
    }

    #[test]
    fn last_write_per_key_wins() {
        let mut cache = QueryCache::new();
        cache.set("k", 1);
        cache.set("k", 2);
        assert_eq!(cache.get(&"k"), Some(&2));
        assert_eq!(cache.len(), 1);
    }
}
