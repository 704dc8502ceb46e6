//! Exact mode: full string equality with the lookup key.

pub(super) fn matches<'s>(keys: impl Iterator<Item = &'s str>, lookup_key: &str) -> Vec<&'s str> {
    keys.filter(|key| *key == lookup_key).collect()
}
