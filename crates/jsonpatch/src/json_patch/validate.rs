//! JSON Patch operation validator.
//!
//! Validates raw JSON Patch operations (as `serde_json::Value` maps) before
//! decoding, so a malformed patch is rejected as a whole before any
//! operation touches a document.

use jsonpatch_pointer::validate_json_pointer;
use serde_json::{Map, Value};

use super::types::PatchError;

fn err(msg: impl Into<String>) -> PatchError {
    PatchError::Validation(msg.into())
}

// ── Public API ─────────────────────────────────────────────────────────────

/// Validate a list of operations.
///
/// An empty list is a valid patch. Errors include the index of the failing
/// operation: `"Error in operation [index = N] (reason)."`.
///
/// # Errors
///
/// [`PatchError::Parse`] if `ops` is not an array, otherwise
/// [`PatchError::Validation`].
pub fn validate_operations(ops: &Value) -> Result<(), PatchError> {
    let arr = ops
        .as_array()
        .ok_or_else(|| PatchError::Parse("patch must be an array".into()))?;
    for (i, op) in arr.iter().enumerate() {
        validate_operation(op).map_err(|e| match e {
            PatchError::Validation(reason) => {
                err(format!("Error in operation [index = {i}] ({reason})."))
            }
            other => other,
        })?;
    }
    Ok(())
}

/// Validate a single operation object.
///
/// # Errors
///
/// [`PatchError::Validation`] naming the first problem found.
pub fn validate_operation(op: &Value) -> Result<(), PatchError> {
    let map = op.as_object().ok_or_else(|| err("OP_INVALID"))?;

    let path = map.get("path").ok_or_else(|| err("OP_PATH_MISSING"))?;
    let path_str = path.as_str().ok_or_else(|| err("OP_PATH_INVALID"))?;
    validate_pointer(path_str)?;

    let op_name = map
        .get("op")
        .ok_or_else(|| err("OP_MISSING"))?
        .as_str()
        .ok_or_else(|| err("OP_INVALID"))?;
    match op_name {
        "add" | "replace" | "test" => validate_has_value(map, op_name),
        "copy" | "move" => validate_from(map, op_name),
        "remove" => Ok(()),
        other => Err(err(format!("OP_UNKNOWN: `{other}`"))),
    }
}

// ── Field validators ───────────────────────────────────────────────────────

/// A present `"value": null` counts as a value.
fn validate_has_value(map: &Map<String, Value>, op_name: &str) -> Result<(), PatchError> {
    if !map.contains_key("value") {
        return Err(err(format!("OP_VALUE_MISSING: `{op_name}` must have a value")));
    }
    Ok(())
}

fn validate_from(map: &Map<String, Value>, op_name: &str) -> Result<(), PatchError> {
    let from = map
        .get("from")
        .ok_or_else(|| err(format!("OP_FROM_MISSING: `{op_name}` must have a from")))?;
    let from_str = from.as_str().ok_or_else(|| err("OP_FROM_INVALID"))?;
    validate_pointer(from_str)
}

fn validate_pointer(pointer: &str) -> Result<(), PatchError> {
    validate_json_pointer(pointer).map_err(|e| err(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_well_formed_operations() {
        let ops = json!([
            {"op": "add", "path": "/a", "value": 1},
            {"op": "add", "path": "/b", "value": null},
            {"op": "remove", "path": "/a"},
            {"op": "replace", "path": "", "value": {}},
            {"op": "copy", "path": "/c", "from": "/b"},
            {"op": "move", "path": "/d", "from": "/c"},
            {"op": "test", "path": "/d", "value": null}
        ]);
        assert!(validate_operations(&ops).is_ok());
    }

    #[test]
    fn accepts_empty_patch() {
        assert!(validate_operations(&json!([])).is_ok());
    }

    #[test]
    fn rejects_non_array() {
        assert!(matches!(
            validate_operations(&json!({"op": "add"})),
            Err(PatchError::Parse(_))
        ));
    }

    #[test]
    fn rejects_missing_members() {
        assert!(validate_operation(&json!({"op": "add", "path": "/a"})).is_err());
        assert!(validate_operation(&json!({"op": "test", "path": "/a"})).is_err());
        assert!(validate_operation(&json!({"op": "replace", "path": "/a"})).is_err());
        assert!(validate_operation(&json!({"op": "move", "path": "/a"})).is_err());
        assert!(validate_operation(&json!({"op": "copy", "path": "/a"})).is_err());
        assert!(validate_operation(&json!({"op": "remove"})).is_err());
        assert!(validate_operation(&json!({"path": "/a"})).is_err());
    }

    #[test]
    fn rejects_bad_members() {
        assert!(validate_operation(&json!({"op": "frobnicate", "path": "/a"})).is_err());
        assert!(validate_operation(&json!({"op": "remove", "path": "a"})).is_err());
        assert!(validate_operation(&json!({"op": "remove", "path": 5})).is_err());
        assert!(validate_operation(&json!({"op": "copy", "path": "/a", "from": "/~"})).is_err());
        assert!(validate_operation(&json!(["op"])).is_err());
    }

    #[test]
    fn reports_index_of_bad_operation() {
        let ops = json!([
            {"op": "remove", "path": "/a"},
            {"op": "add", "path": "/a"}
        ]);
        let e = validate_operations(&ops).unwrap_err();
        assert!(e.to_string().contains("[index = 1]"), "{e}");
    }
}
