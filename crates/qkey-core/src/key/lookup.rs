use serde::{Deserialize, Serialize};

use crate::params::Params;

/// Options for reading or invalidating cached entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LookupOptions {
    /// Require the store key to equal the lookup key exactly.
    pub exact: bool,
    /// Extra parameters folded into the lookup URL before matching.
    pub query_params: Option<Params>,
}

impl LookupOptions {
    pub fn exact() -> Self {
        Self {
            exact: true,
            query_params: None,
        }
    }

    pub fn with_query_params(mut self, params: Params) -> Self {
        self.query_params = Some(params);
        self
    }
}
