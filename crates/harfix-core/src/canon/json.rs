//! Deterministic JSON serialization for request bodies.

use serde_json::Value;

use crate::error::{HarfixError, Result};

/// Parses `text` as JSON and re-serializes it with object keys sorted at every
/// nesting level. Array element order is kept.
pub fn canonical_json(text: &str) -> Result<String> {
    let value: Value = serde_json::from_str(text).map_err(HarfixError::InvalidBody)?;
    serde_json::to_string(&sort_keys(value)).map_err(HarfixError::Serialize)
}

/// Recursively rebuilds objects in key order.
///
/// Inserting in sorted order keeps the result stable even when serde_json's
/// `preserve_order` feature is enabled somewhere in the dependency graph.
pub fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, sort_keys(v)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}
