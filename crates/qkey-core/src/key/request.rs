//! Request descriptors as handed over by the cache service.

use serde::{Deserialize, Serialize};

use super::compose_key;
use crate::params::Params;
use crate::rearrange::{rearrange_url, MergeStrategy};

/// The parts of an outgoing request that determine its cache key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDescriptor {
    pub url: String,
    #[serde(default)]
    pub default_params: Option<Params>,
    #[serde(default)]
    pub params: Option<Params>,
    #[serde(default)]
    pub unique_identifier: Option<String>,
}

impl RequestDescriptor {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn default_params(mut self, params: Params) -> Self {
        self.default_params = Some(params);
        self
    }

    pub fn params(mut self, params: Params) -> Self {
        self.params = Some(params);
        self
    }

    pub fn unique_identifier(mut self, id: impl Into<String>) -> Self {
        self.unique_identifier = Some(id.into());
        self
    }

    /// Canonical URL of this request (the URL actually sent).
    pub fn canonical_url(&self, strategy: MergeStrategy) -> String {
        rearrange_url(
            &self.url,
            self.default_params.as_ref(),
            self.params.as_ref(),
            strategy,
        )
    }
}

/// Key under which the response to `request` is stored.
pub fn storage_key(request: &RequestDescriptor, strategy: MergeStrategy) -> String {
    let canonical = request.canonical_url(strategy);
    compose_key(request.unique_identifier.as_deref(), &canonical)
}
