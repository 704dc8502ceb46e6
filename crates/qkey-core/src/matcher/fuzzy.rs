//! Fuzzy mode: substring containment.
//!
//! Stage one ignores query parameters and keeps keys containing both the
//! identifier and the lookup address, so keys with extra segments around
//! either still match (`feed__companies/7/posts` matches identifier `feed`
//! and address `posts`). Stage two requires every `name=value` pair of the
//! canonical lookup query; candidates may carry additional pairs.
//!
//! Unrelated keys that happen to contain the same substrings also match.

pub(super) fn matches<'s>(
    keys: impl Iterator<Item = &'s str>,
    identifier: &str,
    address: &str,
    canonical_query: &str,
) -> Vec<&'s str> {
    let pairs: Vec<&str> = if canonical_query.is_empty() {
        Vec::new()
    } else {
        canonical_query.split('&').collect()
    };

    keys.filter(|key| key.contains(identifier) && key.contains(address))
        .filter(|key| pairs.iter().all(|pair| key.contains(pair)))
        .collect()
}
