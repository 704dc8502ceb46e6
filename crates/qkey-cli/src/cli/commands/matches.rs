//! `qkey match` – list store keys compatible with a lookup.

use anyhow::{Context, Result};
use qkey_core::store::StoreDump;
use qkey_core::{matched_keys, LookupOptions, MergeStrategy};
use std::path::Path;

use super::params::params_from_pairs;

pub fn run_match(
    store: &Path,
    url: &str,
    unique_identifier: Option<&str>,
    exact: bool,
    query: &[String],
    strategy: MergeStrategy,
) -> Result<()> {
    let snapshot = StoreDump::load(store)
        .with_context(|| format!("load store dump: {}", store.display()))?;
    let options = LookupOptions {
        exact,
        query_params: params_from_pairs(query)?,
    };

    let found = matched_keys(snapshot.keys(), url, unique_identifier, &options, strategy);
    if found.is_empty() {
        tracing::info!("no keys matched {url}");
    }
    for key in found {
        println!("{key}");
    }
    Ok(())
}
