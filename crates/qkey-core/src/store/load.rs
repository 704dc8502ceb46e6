//! Loading a snapshot from a JSON store dump.

use serde_json::Value;
use std::path::Path;

use super::{StoreDump, StoreError};

impl StoreDump {
    /// Parses a dump: either `["key", ...]` (values become `null`) or
    /// `{"key": value, ...}` with document order kept.
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        match serde_json::from_str::<Value>(json)? {
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| match item {
                    Value::String(key) => Ok((key, Value::Null)),
                    _ => Err(StoreError::NonStringKey { index }),
                })
                .collect(),
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(StoreError::UnsupportedShape(shape_name(&other))),
        }
    }

    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let data = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot = Self::from_json_str(&data)?;
        tracing::debug!("loaded {} store keys from {}", snapshot.len(), path.display());
        Ok(snapshot)
    }
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
