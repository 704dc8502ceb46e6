use std::path::PathBuf;
use thiserror::Error;

/// Failure to read a store dump.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("read store file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse store JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Top-level JSON that is neither an array of keys nor an object.
    #[error("store JSON must be an array of keys or an object, found {0}")]
    UnsupportedShape(&'static str),
    #[error("store array entry {index} is not a string")]
    NonStringKey { index: usize },
}
