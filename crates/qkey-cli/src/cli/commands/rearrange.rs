//! `qkey rearrange` – print the canonical URL.

use anyhow::Result;
use qkey_core::{rearrange_url, MergeStrategy};

use super::params::params_from_pairs;
use crate::cli::RequestArgs;

pub fn run_rearrange(url: &str, request: &RequestArgs, strategy: MergeStrategy) -> Result<()> {
    let defaults = params_from_pairs(&request.defaults)?;
    let params = params_from_pairs(&request.params)?;
    println!(
        "{}",
        rearrange_url(url, defaults.as_ref(), params.as_ref(), strategy)
    );
    Ok(())
}
