//! Raw URL splitting and query-string parsing.

use crate::params::{ParamValue, Params};

/// Splits `url` on the first `?` into `(address, raw_query)`.
///
/// A URL without `?` has an empty raw query.
pub fn split_url(url: &str) -> (&str, &str) {
    url.split_once('?').unwrap_or((url, ""))
}

/// Parses a raw query string into a parameter source.
///
/// Pairs are separated by `&` and split on their first `=`. A pair without
/// `=` maps to the absent value; so does the empty pair produced by a
/// trailing `&`. Repeated names keep the last occurrence.
pub fn parse_query(raw_query: &str) -> Params {
    let mut params = Params::new();
    for item in raw_query.split('&') {
        match item.split_once('=') {
            Some((name, value)) => params.set(name, Some(ParamValue::from(value))),
            None => params.set(item, None),
        }
    }
    params
}
