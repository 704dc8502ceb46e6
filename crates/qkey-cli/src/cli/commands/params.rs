//! Conversion of repeated `NAME=VALUE` flags into parameter sources.

use anyhow::{Context, Result};
use qkey_core::params::{parse_pair, Params};

/// Builds a source from pairs; `None` when no pair was given, so that an
/// omitted flag behaves like an omitted source.
pub fn params_from_pairs(pairs: &[String]) -> Result<Option<Params>> {
    if pairs.is_empty() {
        return Ok(None);
    }
    let mut params = Params::new();
    for raw in pairs {
        let (name, value) = parse_pair(raw).with_context(|| format!("invalid parameter {raw:?}"))?;
        params.set(name, value);
    }
    Ok(Some(params))
}
