use serde_json::Value;

use crate::util::{format_json_pointer, normalize_index};
use crate::JsonPointerError;

/// Take one step from `current` into its child named by `step`.
///
/// `walked` is the part of the path consumed so far (including `step`),
/// used only for error messages.
fn step_into<'a>(
    current: &'a Value,
    step: &str,
    walked: &[String],
) -> Result<&'a Value, JsonPointerError> {
    match current {
        Value::Object(map) => map
            .get(step)
            .ok_or_else(|| JsonPointerError::NotFound(format_json_pointer(walked))),
        Value::Array(arr) => Ok(&arr[normalize_index(step, arr.len())?]),
        _ => Err(JsonPointerError::NotAContainer(format_json_pointer(walked))),
    }
}

/// Resolve a path against a JSON document.
///
/// Object steps are exact key lookups; array steps are index selectors,
/// where negative values count from the end.
///
/// # Errors
///
/// - [`JsonPointerError::NotFound`] if an object key is missing
/// - [`JsonPointerError::InvalidIndex`] if an array selector is malformed or
///   out of bounds
/// - [`JsonPointerError::NotAContainer`] if a scalar is indexed
///
/// # Example
///
/// ```
/// use jsonpatch_pointer::{get, parse_json_pointer};
/// use serde_json::json;
///
/// let doc = json!({"foo": ["a", "b", "c"]});
/// let val = get(&doc, &parse_json_pointer("/foo/-1").unwrap()).unwrap();
/// assert_eq!(val, &json!("c"));
/// ```
pub fn get<'a>(val: &'a Value, path: &[String]) -> Result<&'a Value, JsonPointerError> {
    let mut current = val;
    for (i, step) in path.iter().enumerate() {
        current = step_into(current, step, &path[..=i])?;
    }
    Ok(current)
}

/// Get a mutable reference to the value at `path`.
///
/// # Errors
///
/// Same as [`get`].
pub fn get_mut<'a>(val: &'a mut Value, path: &[String]) -> Result<&'a mut Value, JsonPointerError> {
    let mut current = val;
    for (i, step) in path.iter().enumerate() {
        current = match current {
            Value::Object(map) => map
                .get_mut(step)
                .ok_or_else(|| JsonPointerError::NotFound(format_json_pointer(&path[..=i])))?,
            Value::Array(arr) => {
                let idx = normalize_index(step, arr.len())?;
                &mut arr[idx]
            }
            _ => {
                return Err(JsonPointerError::NotAContainer(format_json_pointer(
                    &path[..=i],
                )))
            }
        };
    }
    Ok(current)
}
