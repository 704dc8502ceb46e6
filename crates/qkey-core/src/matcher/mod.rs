//! Cache-entry key matching.
//!
//! Given the keys of an existing store (in store order) and a lookup request,
//! finds the keys compatible with the request. The lookup URL is
//! canonicalised with the same rules used when keys are written, then matched
//! either exactly or fuzzily (substring containment of the identifier, the
//! address and every query pair).

mod exact;
mod fuzzy;

use crate::key::{compose_key, LookupOptions};
use crate::rearrange::{rearrange_url, split_url, MergeStrategy};

/// Returns the store keys matching the lookup, in store order.
///
/// `store` is any ordered sequence of keys, e.g. `snapshot.keys()` or
/// `entries.iter().map(|(k, _)| k)`. The store is only read.
pub fn matched_keys<'s, I, K>(
    store: I,
    url: &str,
    identifier: Option<&str>,
    options: &LookupOptions,
    strategy: MergeStrategy,
) -> Vec<&'s str>
where
    I: IntoIterator<Item = &'s K>,
    K: AsRef<str> + ?Sized + 's,
{
    let canonical = rearrange_url(url, None, options.query_params.as_ref(), strategy);
    let lookup_key = compose_key(identifier, &canonical);
    let keys = store.into_iter().map(<K as AsRef<str>>::as_ref);

    let matches = if options.exact {
        exact::matches(keys, &lookup_key)
    } else {
        let (address, _) = split_url(url);
        let (_, query) = split_url(&canonical);
        fuzzy::matches(keys, identifier.unwrap_or(""), address, query)
    };

    tracing::debug!(
        lookup_key = %lookup_key,
        exact = options.exact,
        matched = matches.len(),
        "matched cache keys"
    );
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Params;

    const STORE: [&str; 5] = [
        "/posts?c=T&g=T&z=T",
        "feed__/posts?a=1&b=2",
        "feed__/posts",
        "other__/users?a=1",
        "feed__/companies/42/posts?a=1",
    ];

    fn fuzzy(url: &str, id: Option<&str>) -> Vec<&'static str> {
        matched_keys(STORE, url, id, &LookupOptions::default(), MergeStrategy::UrlWins)
    }

    fn exact(url: &str, id: Option<&str>) -> Vec<&'static str> {
        matched_keys(STORE, url, id, &LookupOptions::exact(), MergeStrategy::UrlWins)
    }

    #[test]
    fn exact_requires_identical_key() {
        assert_eq!(exact("/posts?b=2&a=1", Some("feed")), vec!["feed__/posts?a=1&b=2"]);
        assert_eq!(exact("/posts?a=1", Some("feed")), Vec::<&str>::new());
        assert_eq!(exact("/posts", Some("feed")), vec!["feed__/posts"]);
    }

    #[test]
    fn exact_without_identifier() {
        assert_eq!(exact("/posts?z=T&g=T&c=T", None), vec!["/posts?c=T&g=T&z=T"]);
    }

    #[test]
    fn fuzzy_matches_address_and_identifier() {
        assert_eq!(
            fuzzy("/posts", Some("feed")),
            vec![
                "feed__/posts?a=1&b=2",
                "feed__/posts",
                "feed__/companies/42/posts?a=1",
            ]
        );
    }

    #[test]
    fn fuzzy_without_identifier_matches_everything_with_address() {
        assert_eq!(
            fuzzy("/posts", None),
            vec![
                "/posts?c=T&g=T&z=T",
                "feed__/posts?a=1&b=2",
                "feed__/posts",
                "feed__/companies/42/posts?a=1",
            ]
        );
    }

    #[test]
    fn fuzzy_requires_every_query_pair() {
        assert_eq!(
            fuzzy("/posts?a=1", Some("feed")),
            vec!["feed__/posts?a=1&b=2", "feed__/companies/42/posts?a=1"]
        );
        assert_eq!(fuzzy("/posts?a=1&b=2", Some("feed")), vec!["feed__/posts?a=1&b=2"]);
        assert_eq!(fuzzy("/posts?a=3", Some("feed")), Vec::<&str>::new());
    }

    #[test]
    fn fuzzy_ignores_filtered_lookup_pairs() {
        // `m=null` and `k=` vanish during canonicalisation
        assert_eq!(fuzzy("/posts?m=null&k=&z=T", None), vec!["/posts?c=T&g=T&z=T"]);
    }

    #[test]
    fn fuzzy_folds_query_params_into_lookup() {
        let options = LookupOptions::default().with_query_params(Params::from([("b", "2")]));
        let found = matched_keys(STORE, "/posts", Some("feed"), &options, MergeStrategy::UrlWins);
        assert_eq!(found, vec!["feed__/posts?a=1&b=2"]);
    }

    #[test]
    fn lookup_query_params_respect_strategy() {
        let store = ["/posts?page-size=10", "/posts?page-size=20"];
        let options =
            LookupOptions::exact().with_query_params(Params::from([("page-size", "20")]));
        let url_wins = matched_keys(store, "/posts?page-size=10", None, &options, MergeStrategy::UrlWins);
        let params_win =
            matched_keys(store, "/posts?page-size=10", None, &options, MergeStrategy::ParamsWin);
        assert_eq!(url_wins, vec!["/posts?page-size=10"]);
        assert_eq!(params_win, vec!["/posts?page-size=20"]);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(fuzzy("/nothing", None).is_empty());
        let empty: [&str; 0] = [];
        assert!(
            matched_keys(empty, "/posts", None, &LookupOptions::default(), MergeStrategy::UrlWins)
                .is_empty()
        );
    }

    #[test]
    fn works_over_owned_keys() {
        let store: Vec<String> = STORE.iter().map(|s| s.to_string()).collect();
        let found = matched_keys(&store, "/users", Some("other"), &LookupOptions::default(), MergeStrategy::UrlWins);
        assert_eq!(found, vec!["other__/users?a=1"]);
    }
}
