//! JSON Patch diff: generate a JSON Patch from two document values.
//!
//! Objects are compared member by member. Arrays and scalars are compared
//! as opaque values and replaced wholesale when they differ, so the
//! generator only ever emits `test`, `remove`, `replace` and `add`.

use std::mem::discriminant;

use jsonpatch_pointer::deep_equal;
use serde_json::{Map, Value};
use tracing::debug;

use crate::json_patch::types::{GenerateOptions, Op, PatchError};
use crate::json_patch::encode_patch;

// ── Public API ────────────────────────────────────────────────────────────

/// Generate a list of operations that transforms `base` into `target`.
///
/// Object members are visited in `base` order, then members new in
/// `target` in `target` order.
///
/// # Example
///
/// ```
/// use jsonpatch::json_patch::{GenerateOptions, Op};
/// use jsonpatch::json_patch_diff::diff;
/// use serde_json::json;
///
/// let base = json!({"foo": ["bar", 5]});
/// let target = json!({"foo": ["bar", 5], "bar": 5});
/// let ops = diff(&base, &target, &GenerateOptions::default());
/// assert_eq!(ops, vec![Op::Add { path: vec!["bar".to_string()], value: json!(5) }]);
/// ```
pub fn diff(base: &Value, target: &Value, options: &GenerateOptions) -> Vec<Op> {
    let mut ops = Vec::new();
    diff_at_path(&mut ops, &[], base, target, options.paranoid);
    debug!(ops = ops.len(), paranoid = options.paranoid, "generated patch");
    ops
}

/// Generate a serialized JSON Patch that transforms `base` into `target`.
///
/// # Errors
///
/// [`PatchError::Serialize`] if the patch cannot be encoded.
pub fn generate(base: &Value, target: &Value, paranoid: bool) -> Result<Vec<u8>, PatchError> {
    encode_patch(&diff(base, target, &GenerateOptions { paranoid }))
}

/// Same as [`generate`], with `base` and `target` given as raw JSON.
///
/// # Errors
///
/// [`PatchError::Parse`] if either input is not valid JSON.
pub fn generate_json(base: &[u8], target: &[u8], paranoid: bool) -> Result<Vec<u8>, PatchError> {
    let base: Value =
        serde_json::from_slice(base).map_err(|e| PatchError::Parse(e.to_string()))?;
    let target: Value =
        serde_json::from_slice(target).map_err(|e| PatchError::Parse(e.to_string()))?;
    generate(&base, &target, paranoid)
}

// ── Core recursive differ ─────────────────────────────────────────────────

fn diff_at_path(ops: &mut Vec<Op>, path: &[String], base: &Value, target: &Value, paranoid: bool) {
    match (base, target) {
        (Value::Object(b), Value::Object(t)) => diff_obj(ops, path, b, t, paranoid),
        _ if discriminant(base) != discriminant(target) => {
            diff_val(ops, path, base, target, paranoid)
        }
        _ => {
            if !deep_equal(base, target) {
                diff_val(ops, path, base, target, paranoid);
            }
        }
    }
}

fn diff_val(ops: &mut Vec<Op>, path: &[String], base: &Value, target: &Value, paranoid: bool) {
    if paranoid {
        ops.push(Op::Test {
            path: path.to_vec(),
            value: base.clone(),
        });
    }
    ops.push(Op::Replace {
        path: path.to_vec(),
        value: target.clone(),
    });
}

fn diff_obj(
    ops: &mut Vec<Op>,
    path: &[String],
    base: &Map<String, Value>,
    target: &Map<String, Value>,
    paranoid: bool,
) {
    // Removed and changed members first
    for (key, old_val) in base {
        let mut p = path.to_vec();
        p.push(key.clone());
        match target.get(key) {
            None => {
                if paranoid {
                    ops.push(Op::Test {
                        path: p.clone(),
                        value: old_val.clone(),
                    });
                }
                ops.push(Op::Remove { path: p });
            }
            Some(new_val) => diff_at_path(ops, &p, old_val, new_val, paranoid),
        }
    }
    // Then additions
    for (key, new_val) in target {
        if base.contains_key(key) {
            continue;
        }
        let mut p = path.to_vec();
        p.push(key.clone());
        ops.push(Op::Add {
            path: p,
            value: new_val.clone(),
        });
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
