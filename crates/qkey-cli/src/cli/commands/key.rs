//! `qkey key` – print the storage key of a request.

use anyhow::Result;
use qkey_core::{storage_key, MergeStrategy, RequestDescriptor};

use super::params::params_from_pairs;
use crate::cli::RequestArgs;

pub fn build_request(
    url: &str,
    unique_identifier: Option<String>,
    request: &RequestArgs,
) -> Result<RequestDescriptor> {
    Ok(RequestDescriptor {
        url: url.to_string(),
        default_params: params_from_pairs(&request.defaults)?,
        params: params_from_pairs(&request.params)?,
        unique_identifier,
    })
}

pub fn run_key(
    url: &str,
    unique_identifier: Option<String>,
    request: &RequestArgs,
    strategy: MergeStrategy,
) -> Result<()> {
    let descriptor = build_request(url, unique_identifier, request)?;
    println!("{}", storage_key(&descriptor, strategy));
    Ok(())
}
