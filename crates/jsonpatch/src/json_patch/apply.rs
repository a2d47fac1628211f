//! JSON Patch apply logic.
//!
//! Each operation is dispatched to the matching pointer-engine primitive.
//! Operations run strictly in order and the first failure stops the patch.

use jsonpatch_pointer::{
    copy_into, format_json_pointer, move_into, put, remove, replace, test_equals,
};
use serde_json::Value;
use tracing::{debug, trace};

use super::codec::json::decode_patch;
use super::types::{ApplyError, Op, PatchError};

/// Apply a single operation to the document (in-place mutation).
///
/// On error the document is left as the pointer engine left it, which is
/// unchanged for every op kind except a `move` whose removal step failed.
///
/// # Errors
///
/// [`PatchError::Pointer`] with the pointer engine's reason.
pub fn apply_op(doc: &mut Value, op: &Op) -> Result<(), PatchError> {
    match op {
        Op::Add { path, value } => put(doc, path, value.clone())?,
        Op::Remove { path } => {
            remove(doc, path)?;
        }
        Op::Replace { path, value } => {
            replace(doc, path, value.clone())?;
        }
        Op::Copy { path, from } => copy_into(doc, from, path)?,
        Op::Move { path, from } => move_into(doc, from, path)?,
        Op::Test { path, value } => test_equals(doc, path, value)?,
    }
    Ok(())
}

/// Apply a sequence of operations to an owned document.
///
/// # Errors
///
/// [`ApplyError`] carrying the index of the first failing operation and the
/// partially patched document.
pub fn apply_ops(mut doc: Value, ops: &[Op]) -> Result<Value, ApplyError> {
    for (index, op) in ops.iter().enumerate() {
        trace!(
            index,
            op = op.op_name(),
            path = %format_json_pointer(op.path()),
            "applying operation"
        );
        if let Err(error) = apply_op(&mut doc, op) {
            debug!(index, op = op.op_name(), %error, "patch operation failed");
            return Err(ApplyError { index, error, doc });
        }
    }
    Ok(doc)
}

/// Apply operations to a clone of `base`. `base` itself is never modified.
///
/// # Errors
///
/// See [`apply_ops`].
pub fn apply_patch(base: &Value, ops: &[Op]) -> Result<Value, ApplyError> {
    apply_ops(base.clone(), ops)
}

/// Decode, validate and apply a serialized patch to a clone of `base`.
///
/// Parse and validation failures are reported at index `0` with an
/// unmodified copy of `base`.
///
/// # Errors
///
/// See [`apply_ops`].
///
/// # Example
///
/// ```
/// use jsonpatch::json_patch::apply;
/// use serde_json::json;
///
/// let base = json!({"foo": ["bar", 5]});
/// let doc = apply(&base, br#"[{"op":"add","path":"/foo/-","value":6}]"#).unwrap();
/// assert_eq!(doc, json!({"foo": ["bar", 5, 6]}));
///
/// let err = apply(&base, br#"[{"op":"test","path":"/foo/0","value":"baz"}]"#).unwrap_err();
/// assert_eq!(err.index, 0);
/// ```
pub fn apply(base: &Value, raw_patch: &[u8]) -> Result<Value, ApplyError> {
    let ops = decode_patch(raw_patch).map_err(|error| {
        debug!(%error, "rejected patch");
        ApplyError {
            index: 0,
            error,
            doc: base.clone(),
        }
    })?;
    apply_patch(base, &ops)
}

// ── Tests ─────────────────────────────────────────────────────────────────
