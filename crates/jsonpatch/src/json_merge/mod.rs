//! Recursive document merge.
//!
//! Merges a `changes` document into a `base` document: objects merge member
//! by member, a `null` member in `changes` deletes that member, and every
//! other value (arrays included) replaces what was there.

use serde_json::{Map, Value};
use tracing::trace;

use crate::json_patch::types::PatchError;

/// Merge `changes` into a copy of `base`.
///
/// When `base` and `changes` are not both objects, `changes` wins outright.
/// A member present only in `changes` is taken as is, including any `null`
/// members nested inside it.
///
/// # Example
///
/// ```
/// use jsonpatch::json_merge::merge;
/// use serde_json::json;
///
/// let base = json!({"a": 1, "b": {"c": 2, "d": 3}, "e": [1, 2]});
/// let changes = json!({"a": null, "b": {"d": 4}, "e": [3]});
/// assert_eq!(merge(&base, &changes), json!({"b": {"c": 2, "d": 4}, "e": [3]}));
/// ```
pub fn merge(base: &Value, changes: &Value) -> Value {
    match (base, changes) {
        (Value::Object(b), Value::Object(c)) => Value::Object(merge_obj(b, c)),
        _ => changes.clone(),
    }
}

/// Same as [`merge`], with both documents given as raw JSON.
///
/// # Errors
///
/// [`PatchError::Parse`] if either input is not valid JSON, or
/// [`PatchError::Serialize`] if the result cannot be encoded.
pub fn merge_json(base: &[u8], changes: &[u8]) -> Result<Vec<u8>, PatchError> {
    let base: Value =
        serde_json::from_slice(base).map_err(|e| PatchError::Parse(e.to_string()))?;
    let changes: Value =
        serde_json::from_slice(changes).map_err(|e| PatchError::Parse(e.to_string()))?;
    serde_json::to_vec(&merge(&base, &changes)).map_err(|e| PatchError::Serialize(e.to_string()))
}

fn merge_obj(base: &Map<String, Value>, changes: &Map<String, Value>) -> Map<String, Value> {
    let mut out = base.clone();
    for (key, change) in changes {
        if change.is_null() {
            trace!(key = %key, "merge deletes member");
            out.shift_remove(key);
            continue;
        }
        let merged = match out.get(key) {
            Some(current) => merge(current, change),
            None => change.clone(),
        };
        out.insert(key.clone(), merged);
    }
    out
}
