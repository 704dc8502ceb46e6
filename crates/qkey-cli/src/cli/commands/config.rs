//! `qkey config` – show where settings come from and what they are.

use anyhow::Result;
use qkey_core::config::{self, QkeyConfig};
use std::path::Path;

pub fn run_config(explicit: Option<&Path>, cfg: &QkeyConfig) -> Result<()> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => config::config_path()?,
    };
    println!("config: {}", path.display());
    println!("params_object_overwrites = {}", cfg.params_object_overwrites);
    println!("merge strategy: {:?}", cfg.merge_strategy());
    Ok(())
}
