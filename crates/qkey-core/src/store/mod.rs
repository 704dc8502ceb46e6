//! Ordered snapshot of a cache store's keys.
//!
//! The cache service owns the live store; matching only needs an immutable,
//! insertion-ordered view of it. `KeySnapshot` is that view: an association
//! list, so fuzzy matches come back in the order entries were written.

mod error;
mod load;

pub use error::StoreError;

/// Snapshot parsed from a JSON store dump.
pub type StoreDump = KeySnapshot<serde_json::Value>;

/// Insertion-ordered key → value list.
#[derive(Debug, Clone, PartialEq)]
pub struct KeySnapshot<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for KeySnapshot<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> KeySnapshot<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for KeySnapshot<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut snapshot = KeySnapshot::new();
        for (key, value) in iter {
            snapshot.insert(key, value);
        }
        snapshot
    }
}
