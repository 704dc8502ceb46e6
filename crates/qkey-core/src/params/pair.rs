//! `name=value` pairs from the command line.

use super::{ParamError, ParamValue};

/// Parses one `name=value` pair into a name and an optional text value.
///
/// The pair is split on the first `=`, so `a=b=c` yields `("a", "b=c")`.
/// A pair without `=` yields the absent value, mirroring how raw query
/// strings are read.
pub fn parse_pair(raw: &str) -> Result<(String, Option<ParamValue>), ParamError> {
    let (name, value) = match raw.split_once('=') {
        Some((name, value)) => (name, Some(ParamValue::from(value))),
        None => (raw, None),
    };
    if name.is_empty() {
        return Err(ParamError::EmptyName(raw.to_string()));
    }
    Ok((name.to_string(), value))
}
