//! Response-shape sniffing for collection endpoints
//!
//! The collaborators return either a bare array or an object that wraps the
//! array under one of a few keys. Records that fail to deserialize are
//! dropped one by one; an unrecognised document yields an empty collection.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use super::errors::ApiError;

pub(crate) const OFFICER_KEYS: &[&str] = &["officers", "data", "items"];
pub(crate) const TAPPAL_KEYS: &[&str] = &["tappals", "data", "items"];

/// A 2xx body that is not JSON (a proxy's HTML page, say) reads as an empty
/// collection. Every other failure is passed through.
pub(crate) fn tolerate_undecodable(fetched: Result<Value, ApiError>, kind: &str) -> Result<Value, ApiError> {
    match fetched {
        Err(ApiError::Decode(detail)) => {
            warn!(kind, error = %detail, "collection body is not JSON; treating as empty");
            Ok(Value::Null)
        }
        other => other,
    }
}

/// Pull the record array out of `document`, checking wrapper keys in order.
pub(crate) fn extract_records(document: Value, keys: &[&str], kind: &str) -> Vec<Value> {
    match document {
        Value::Array(records) => records,
        Value::Object(mut map) => {
            for key in keys {
                if let Some(Value::Array(records)) = map.remove(*key) {
                    return records;
                }
            }
            let present: Vec<&String> = map.keys().collect();
            warn!(kind, keys = ?present, "unrecognised collection envelope; treating as empty");
            Vec::new()
        }
        Value::Null => Vec::new(),
        other => {
            warn!(kind, value_type = json_type(&other), "unexpected collection document; treating as empty");
            Vec::new()
        }
    }
}

/// Deserialize every record, skipping the malformed ones.
pub(crate) fn parse_records<T: DeserializeOwned>(document: Value, keys: &[&str], kind: &str) -> Vec<T> {
    extract_records(document, keys, kind)
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                warn!(kind, index, error = %err, "dropping malformed record");
                None
            }
        })
        .collect()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
