//! Helpers for reading response envelopes
//!
//! Responses are JSON objects. Lists are nested one level below a wrapper
//! (`{"Items": {"DBInstance": [...]}}`), so lookups take a dotted path.

use crate::action::Action;
use crate::error::{RdsError, Result};
use serde_json::Value;

/// Walk a dotted path (`"Items.DBInstance"`) through nested objects
#[must_use]
pub fn lookup<'a>(response: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(response, |node, segment| node.get(segment))
}

/// Render an identifier value as a string
///
/// Identifiers arrive as strings for most resources, but some (task ids,
/// `InsId`) are numbers.
#[must_use]
pub fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Extract the identifier a create call returned
pub fn extract_id(action: Action, response: &Value, key: &str) -> Result<String> {
    lookup(response, key)
        .and_then(id_string)
        .ok_or_else(|| RdsError::MissingKey {
            action,
            key: key.to_string(),
        })
}

/// The items array at `path`, empty when the path is absent or not an array
#[must_use]
pub fn items<'a>(response: &'a Value, path: &str) -> &'a [Value] {
    lookup(response, path)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Total record count reported by a paged listing, if any
#[must_use]
pub fn total_record_count(response: &Value) -> Option<u64> {
    match response.get("TotalRecordCount")? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Find the item whose `id_key` matches `id` in the array at `path`
pub fn find_item<'a>(
    response: &'a Value,
    path: &str,
    id_key: &str,
    id: &str,
) -> Option<&'a Value> {
    items(response, path)
        .iter()
        .find(|item| item.get(id_key).and_then(id_string).as_deref() == Some(id))
}
