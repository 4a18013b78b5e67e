use crate::utils::error::{OpsError, Result};
use serde_json::{Map, Value};

/// Object stored under `key`, or an error naming the missing field.
pub fn object_field<'a>(data: &'a Map<String, Value>, key: &str) -> Result<&'a Map<String, Value>> {
    data.get(key)
        .and_then(Value::as_object)
        .ok_or_else(|| OpsError::unexpected(format!("missing '{}' in response", key)))
}

pub fn string_field(data: &Map<String, Value>, key: &str) -> Result<String> {
    data.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| OpsError::unexpected(format!("missing '{}' in response", key)))
}

/// Nodes of a Relay-style `{ edges: [{ node }] }` connection.
pub fn connection_nodes<'a>(connection: &'a Map<String, Value>) -> Result<Vec<&'a Map<String, Value>>> {
    let edges = connection
        .get("edges")
        .and_then(Value::as_array)
        .ok_or_else(|| OpsError::unexpected("missing 'edges' in response"))?;

    edges
        .iter()
        .map(|edge| {
            edge.get("node")
                .and_then(Value::as_object)
                .ok_or_else(|| OpsError::unexpected("edge without 'node' in response"))
        })
        .collect()
}
