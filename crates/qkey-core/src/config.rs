use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::rearrange::MergeStrategy;

/// Global configuration loaded from `~/.config/qkey/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QkeyConfig {
    /// When true, an explicit params object overrides same-named URL query
    /// parameters; when false (default), the URL query wins.
    #[serde(default)]
    pub params_object_overwrites: bool,
}

impl QkeyConfig {
    pub fn merge_strategy(&self) -> MergeStrategy {
        MergeStrategy::from_overwrite_flag(self.params_object_overwrites)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("qkey")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<QkeyConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = QkeyConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<QkeyConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config file: {}", path.display()))?;
    let cfg: QkeyConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
