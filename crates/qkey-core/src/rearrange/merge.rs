//! Precedence between the three parameter sources.

use serde::{Deserialize, Serialize};

use crate::params::Params;

/// Which source wins when the same name appears in the URL query and in the
/// explicit params object. Defaults always have the lowest precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergeStrategy {
    /// defaults → params → URL query (URL query wins).
    #[default]
    UrlWins,
    /// defaults → URL query → params (params object wins).
    ParamsWin,
}

impl MergeStrategy {
    /// Maps the boolean "params object overwrites URL queries" setting.
    pub fn from_overwrite_flag(params_object_overwrites: bool) -> Self {
        if params_object_overwrites {
            MergeStrategy::ParamsWin
        } else {
            MergeStrategy::UrlWins
        }
    }

    /// Merges the sources; later layers overwrite earlier ones entry by entry,
    /// absent values included.
    pub fn merge(
        self,
        default_params: Option<&Params>,
        url_params: &Params,
        params: Option<&Params>,
    ) -> Params {
        let mut merged = default_params.cloned().unwrap_or_default();
        match self {
            MergeStrategy::UrlWins => {
                if let Some(p) = params {
                    merged.overlay(p);
                }
                merged.overlay(url_params);
            }
            MergeStrategy::ParamsWin => {
                merged.overlay(url_params);
                if let Some(p) = params {
                    merged.overlay(p);
                }
            }
        }
        merged
    }
}
