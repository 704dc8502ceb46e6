//! Canonical URL rearrangement.
//!
//! Folds the URL's own query string, per-request defaults and an explicit
//! params object into one deterministic URL: sources merged by
//! [`MergeStrategy`], "no value" entries filtered out, names sorted
//! ordinally. The result is the URL part of every cache key, so the same
//! request always lands on the same key however its parameters were spelled.

mod merge;
mod query;

pub use merge::MergeStrategy;
pub use query::{parse_query, split_url};

use crate::params::{is_retained, Params};

/// Builds the canonical form of `url`.
///
/// - When the URL has no query string and `params` is absent or empty, the
///   bare address is returned (defaults alone do not add a query).
/// - Otherwise the result is `address?` followed by the retained pairs, even
///   when nothing is retained: `/posts?x` and `/posts` with `params = {a: "null"}`
///   both give `"/posts?"`. Callers rely on this exact form for existing keys.
pub fn rearrange_url(
    url: &str,
    default_params: Option<&Params>,
    params: Option<&Params>,
    strategy: MergeStrategy,
) -> String {
    let (address, raw_query) = split_url(url);

    if raw_query.is_empty() && params.map_or(true, Params::is_empty) {
        tracing::trace!(url, "no query and no params; keeping bare address");
        return address.to_string();
    }

    let url_params = parse_query(raw_query);
    let merged = strategy.merge(default_params, &url_params, params);

    let query = merged
        .iter()
        .filter_map(|(name, value)| match value {
            Some(v) if is_retained(Some(v)) => Some(format!("{name}={}", v.render())),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("&");

    tracing::trace!(
        url,
        ?strategy,
        merged = merged.len(),
        query = %query,
        "rearranged url"
    );

    format!("{address}?{query}")
}
