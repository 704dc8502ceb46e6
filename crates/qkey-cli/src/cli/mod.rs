//! CLI for qkey.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use qkey_core::config;
use qkey_core::MergeStrategy;
use std::path::PathBuf;

use commands::{run_config, run_key, run_match, run_rearrange};

/// Top-level CLI for qkey.
#[derive(Debug, Parser)]
#[command(name = "qkey")]
#[command(about = "qkey: canonical cache keys and key matching for HTTP response caches", long_about = None)]
pub struct Cli {
    /// Read settings from this file instead of ~/.config/qkey/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Parameter sources of a request, as `name=value` pairs.
#[derive(Debug, Clone, Default, Args)]
pub struct RequestArgs {
    /// Default parameter (lowest precedence). Repeatable.
    #[arg(short = 'd', long = "default", value_name = "NAME=VALUE")]
    pub defaults: Vec<String>,

    /// Explicit parameter. Repeatable.
    #[arg(short = 'p', long = "param", value_name = "NAME=VALUE")]
    pub params: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the canonical form of a URL.
    Rearrange {
        /// Request URL, optionally with a query string.
        url: String,

        #[command(flatten)]
        request: RequestArgs,

        /// Let explicit params override same-named URL query parameters.
        #[arg(long)]
        params_overwrite: bool,
    },

    /// Print the storage key of a request.
    Key {
        /// Request URL, optionally with a query string.
        url: String,

        /// Namespace identifier prefixed to the key.
        #[arg(short = 'u', long = "uid")]
        unique_identifier: Option<String>,

        #[command(flatten)]
        request: RequestArgs,

        /// Let explicit params override same-named URL query parameters.
        #[arg(long)]
        params_overwrite: bool,
    },

    /// List the keys of a store dump that match a lookup.
    Match {
        /// JSON store dump: an array of keys or an object keyed by cache key.
        store: PathBuf,

        /// Lookup URL.
        url: String,

        /// Namespace identifier to match.
        #[arg(short = 'u', long = "uid")]
        unique_identifier: Option<String>,

        /// Require the key to be identical instead of matching fuzzily.
        #[arg(long)]
        exact: bool,

        /// Extra lookup parameter. Repeatable.
        #[arg(short = 'q', long = "query", value_name = "NAME=VALUE")]
        query: Vec<String>,

        /// Let lookup params override same-named URL query parameters.
        #[arg(long)]
        params_overwrite: bool,
    },

    /// Show the config path and effective settings.
    Config,
}

/// `--params-overwrite` forces `ParamsWin`; otherwise the config decides.
fn strategy_for(cfg: &config::QkeyConfig, params_overwrite: bool) -> MergeStrategy {
    if params_overwrite {
        MergeStrategy::ParamsWin
    } else {
        cfg.merge_strategy()
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Rearrange {
                url,
                request,
                params_overwrite,
            } => run_rearrange(&url, &request, strategy_for(&cfg, params_overwrite))?,
            CliCommand::Key {
                url,
                unique_identifier,
                request,
                params_overwrite,
            } => run_key(
                &url,
                unique_identifier,
                &request,
                strategy_for(&cfg, params_overwrite),
            )?,
            CliCommand::Match {
                store,
                url,
                unique_identifier,
                exact,
                query,
                params_overwrite,
            } => run_match(
                &store,
                &url,
                unique_identifier.as_deref(),
                exact,
                &query,
                strategy_for(&cfg, params_overwrite),
            )?,
            CliCommand::Config => run_config(cli.config.as_deref(), &cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
