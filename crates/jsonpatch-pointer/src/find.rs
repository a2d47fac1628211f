use serde_json::Value;

use crate::get::get;
use crate::types::{Reference, ReferenceKey};
use crate::util::{format_json_pointer, normalize_index, split_last};
use crate::JsonPointerError;

/// Find a value in a JSON document by path.
///
/// Returns a [`Reference`] containing the value, its container and the
/// normalized key (end-relative array selectors are resolved to their
/// absolute position).
///
/// # Errors
///
/// Same as [`get`](crate::get).
///
/// # Example
///
/// ```
/// use jsonpatch_pointer::{find, ReferenceKey};
/// use serde_json::json;
///
/// let doc = json!({"a": [1, 2, 3]});
/// let r = find(&doc, &["a".to_string(), "-1".to_string()]).unwrap();
/// assert_eq!(r.val, &json!(3));
/// assert_eq!(r.key, Some(ReferenceKey::Index(2)));
/// ```
pub fn find<'a>(val: &'a Value, path: &[String]) -> Result<Reference<'a>, JsonPointerError> {
    let Some((last, parent_path)) = split_last(path) else {
        return Ok(Reference {
            val,
            obj: None,
            key: None,
        });
    };
    let obj = get(val, parent_path)?;
    let (val, key) = match obj {
        Value::Object(map) => {
            let found = map
                .get(last)
                .ok_or_else(|| JsonPointerError::NotFound(format_json_pointer(path)))?;
            (found, ReferenceKey::String(last.to_string()))
        }
        Value::Array(arr) => {
            let idx = normalize_index(last, arr.len())?;
            (&arr[idx], ReferenceKey::Index(idx))
        }
        _ => return Err(JsonPointerError::NotAContainer(format_json_pointer(path))),
    };
    Ok(Reference {
        val,
        obj: Some(obj),
        key: Some(key),
    })
}
