//! A single parameter source.

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

use super::ParamValue;

/// Parameter source: name → optional scalar.
///
/// `None` is the absent value: a raw-query key written without `=`, or an
/// explicit `null` in a JSON/TOML source. Absent entries still take part in
/// merging (they can shadow a lower-precedence value) and are dropped by the
/// filter afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, Option<ParamValue>>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(name.into(), Some(value.into()));
    }

    /// Set `name` to the absent value.
    pub fn insert_absent(&mut self, name: impl Into<String>) {
        self.0.insert(name.into(), None);
    }

    /// Set `name` to an optional value.
    pub fn set(&mut self, name: impl Into<String>, value: Option<ParamValue>) {
        self.0.insert(name.into(), value);
    }

    /// Builder form of [`Params::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Option<ParamValue>> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in ascending (ordinal) name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Option<ParamValue>> {
        self.0.iter()
    }

    /// Copy every entry of `other` over `self` (entries from `other` win).
    pub fn overlay(&mut self, other: &Params) {
        for (name, value) in other.iter() {
            self.0.insert(name.clone(), value.clone());
        }
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a Option<ParamValue>);
    type IntoIter = btree_map::Iter<'a, String, Option<ParamValue>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Params {
    type Item = (String, Option<ParamValue>);
    type IntoIter = btree_map::IntoIter<String, Option<ParamValue>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}
