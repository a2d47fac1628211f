//! JSON codec for JSON Patch operations.
//!
//! Converts operations to/from `serde_json::Value` in RFC 6902 format, using
//! exactly the `op`, `path`, `from` and `value` members.

use jsonpatch_pointer::{format_json_pointer, parse_json_pointer};
use serde_json::{Map, Value};

use crate::json_patch::types::{Op, PatchError};
use crate::json_patch::validate::validate_operations;

// ── Path helpers ──────────────────────────────────────────────────────────

fn encode_path(path: &[String]) -> Value {
    Value::String(format_json_pointer(path))
}

fn decode_path(map: &Map<String, Value>, member: &str) -> Result<Vec<String>, PatchError> {
    let s = map
        .get(member)
        .and_then(Value::as_str)
        .ok_or_else(|| PatchError::Validation(format!("{member} must be a string")))?;
    parse_json_pointer(s).map_err(|e| PatchError::Validation(e.to_string()))
}

fn decode_value(map: &Map<String, Value>) -> Result<Value, PatchError> {
    map.get("value")
        .cloned()
        .ok_or_else(|| PatchError::Validation("value is required".into()))
}

fn op_map(name: &str, path: &[String]) -> Map<String, Value> {
    let mut m = Map::new();
    m.insert("op".into(), Value::String(name.to_string()));
    m.insert("path".into(), encode_path(path));
    m
}

// ── Serialization ─────────────────────────────────────────────────────────

/// Serialize an `Op` to a `serde_json::Value` in the JSON Patch format.
///
/// # Example
///
/// ```
/// use jsonpatch::json_patch::{to_json, Op};
/// use serde_json::json;
///
/// let op = Op::Add { path: vec!["a/b".to_string()], value: json!(5) };
/// assert_eq!(to_json(&op), json!({"op": "add", "path": "/a~1b", "value": 5}));
/// ```
pub fn to_json(op: &Op) -> Value {
    let mut m = op_map(op.op_name(), op.path());
    if let Some(from) = op.from() {
        m.insert("from".into(), encode_path(from));
    }
    if let Some(value) = op.value() {
        m.insert("value".into(), value.clone());
    }
    Value::Object(m)
}

/// Serialize a list of operations to a JSON array.
pub fn to_json_patch(ops: &[Op]) -> Value {
    Value::Array(ops.iter().map(to_json).collect())
}

// ── Deserialization ───────────────────────────────────────────────────────

/// Deserialize a single operation.
///
/// # Errors
///
/// [`PatchError::Validation`] if a member is missing, mistyped, or the op
/// name is unknown.
pub fn from_json(v: &Value) -> Result<Op, PatchError> {
    let map = v
        .as_object()
        .ok_or_else(|| PatchError::Validation("operation must be an object".into()))?;
    let op_name = map
        .get("op")
        .and_then(Value::as_str)
        .ok_or_else(|| PatchError::Validation("op must be a string".into()))?;
    let path = decode_path(map, "path")?;
    match op_name {
        "add" => Ok(Op::Add {
            path,
            value: decode_value(map)?,
        }),
        "remove" => Ok(Op::Remove { path }),
        "replace" => Ok(Op::Replace {
            path,
            value: decode_value(map)?,
        }),
        "copy" => Ok(Op::Copy {
            path,
            from: decode_path(map, "from")?,
        }),
        "move" => Ok(Op::Move {
            path,
            from: decode_path(map, "from")?,
        }),
        "test" => Ok(Op::Test {
            path,
            value: decode_value(map)?,
        }),
        other => Err(PatchError::Validation(format!("unknown op: {other}"))),
    }
}

/// Validate and deserialize a whole patch. Either every operation decodes or
/// none does.
///
/// # Errors
///
/// See [`validate_operations`].
pub fn from_json_patch(v: &Value) -> Result<Vec<Op>, PatchError> {
    validate_operations(v)?;
    let arr = v
        .as_array()
        .ok_or_else(|| PatchError::Parse("patch must be an array".into()))?;
    arr.iter().map(from_json).collect()
}

/// Decode raw patch bytes.
///
/// # Errors
///
/// [`PatchError::Parse`] for malformed JSON, otherwise as [`from_json_patch`].
///
/// # Example
///
/// ```
/// use jsonpatch::json_patch::{decode_patch, Op};
/// use serde_json::json;
///
/// let ops = decode_patch(br#"[{"op":"remove","path":"/a~0b"}]"#).unwrap();
/// assert_eq!(ops, vec![Op::Remove { path: vec!["a~b".to_string()] }]);
/// assert!(decode_patch(b"[{").is_err());
/// ```
pub fn decode_patch(raw: &[u8]) -> Result<Vec<Op>, PatchError> {
    let v: Value = serde_json::from_slice(raw).map_err(|e| PatchError::Parse(e.to_string()))?;
    from_json_patch(&v)
}

/// Encode operations as JSON patch bytes.
///
/// # Errors
///
/// [`PatchError::Serialize`] if serialization fails.
pub fn encode_patch(ops: &[Op]) -> Result<Vec<u8>, PatchError> {
    serde_json::to_vec(&to_json_patch(ops)).map_err(|e| PatchError::Serialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn encodes_only_relevant_members() {
        let ops = vec![
            Op::Test {
                path: vec!["foo".into()],
                value: json!(5),
            },
            Op::Remove {
                path: vec!["foo".into()],
            },
            Op::Copy {
                path: vec!["b".into()],
                from: vec!["a".into()],
            },
            Op::Replace {
                path: vec![],
                value: json!(null),
            },
        ];
        assert_eq!(
            to_json_patch(&ops),
            json!([
                {"op": "test", "path": "/foo", "value": 5},
                {"op": "remove", "path": "/foo"},
                {"op": "copy", "path": "/b", "from": "/a"},
                {"op": "replace", "path": "", "value": null}
            ])
        );
    }

    #[test]
    fn decodes_every_op_kind() {
        let raw = json!([
            {"op": "add", "path": "/a", "value": [1]},
            {"op": "remove", "path": "/a/0"},
            {"op": "replace", "path": "/a", "value": 2},
            {"op": "copy", "path": "/b", "from": "/a"},
            {"op": "move", "path": "/c", "from": "/b"},
            {"op": "test", "path": "/c", "value": 2}
        ]);
        let ops = from_json_patch(&raw).unwrap();
        let names: Vec<&str> = ops.iter().map(Op::op_name).collect();
        assert_eq!(names, vec!["add", "remove", "replace", "copy", "move", "test"]);
        assert_eq!(to_json_patch(&ops), raw);
    }

    #[test]
    fn one_bad_operation_rejects_the_patch() {
        let raw = json!([
            {"op": "add", "path": "/a", "value": 1},
            {"op": "move", "path": "/b"}
        ]);
        assert!(matches!(
            from_json_patch(&raw),
            Err(PatchError::Validation(_))
        ));
    }

    #[test]
    fn encode_patch_emits_json_bytes() {
        let bytes = encode_patch(&[Op::Add {
            path: vec!["bar".into()],
            value: json!(5),
        }])
        .unwrap();
        let v: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(v, json!([{"op": "add", "path": "/bar", "value": 5}]));
    }
}
