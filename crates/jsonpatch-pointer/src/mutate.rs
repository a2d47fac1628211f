//! Mutation primitives.
//!
//! Every function validates the target location before touching the
//! document, so a returned error means the document was left unchanged.
//! The one exception is [`move_into`], which inserts before it removes; see
//! its docs.

use serde_json::Value;

use crate::deep_equal::deep_equal;
use crate::get::{get, get_mut};
use crate::types::Path;
use crate::util::{format_json_pointer, is_child, is_path_equal, normalize_index, split_last};
use crate::JsonPointerError;

/// Overwrite the value at `path`, which must already exist.
///
/// Returns the previous value. The empty path replaces the whole document.
///
/// # Errors
///
/// Fails if the parent container or the location itself does not exist.
///
/// # Example
///
/// ```
/// use jsonpatch_pointer::{replace, parse_json_pointer};
/// use serde_json::json;
///
/// let mut doc = json!({"foo": [1, 2]});
/// let old = replace(&mut doc, &parse_json_pointer("/foo/-1").unwrap(), json!(3)).unwrap();
/// assert_eq!(old, json!(2));
/// assert_eq!(doc, json!({"foo": [1, 3]}));
/// ```
pub fn replace(doc: &mut Value, path: &[String], value: Value) -> Result<Value, JsonPointerError> {
    let Some((key, parent_path)) = split_last(path) else {
        return Ok(std::mem::replace(doc, value));
    };
    match get_mut(doc, parent_path)? {
        Value::Object(map) => match map.get_mut(key) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => Err(JsonPointerError::NotFound(format_json_pointer(path))),
        },
        Value::Array(arr) => {
            let idx = normalize_index(key, arr.len())?;
            Ok(std::mem::replace(&mut arr[idx], value))
        }
        _ => Err(JsonPointerError::NotAContainer(format_json_pointer(path))),
    }
}

/// Insert `value` at `path`.
///
/// - Object parent: the member is inserted or overwritten.
/// - Array parent: `-` appends; an index selector (negative counts from the
///   end) inserts before that element, shifting later elements up.
/// - Empty path: the whole document is replaced.
///
/// # Errors
///
/// Fails if the parent does not exist or is a scalar, or if the index is
/// outside `[0, len)`.
///
/// # Example
///
/// ```
/// use jsonpatch_pointer::{put, parse_json_pointer};
/// use serde_json::json;
///
/// let mut doc = json!(["a", "b"]);
/// put(&mut doc, &parse_json_pointer("/-").unwrap(), json!("x")).unwrap();
/// assert_eq!(doc, json!(["a", "b", "x"]));
/// put(&mut doc, &parse_json_pointer("/0").unwrap(), json!("y")).unwrap();
/// assert_eq!(doc, json!(["y", "a", "b", "x"]));
/// ```
pub fn put(doc: &mut Value, path: &[String], value: Value) -> Result<(), JsonPointerError> {
    let Some((key, parent_path)) = split_last(path) else {
        *doc = value;
        return Ok(());
    };
    match get_mut(doc, parent_path)? {
        Value::Object(map) => {
            map.insert(key.to_string(), value);
        }
        Value::Array(arr) => {
            if key == "-" {
                arr.push(value);
            } else {
                let idx = normalize_index(key, arr.len())?;
                arr.insert(idx, value);
            }
        }
        _ => return Err(JsonPointerError::NotAContainer(format_json_pointer(path))),
    }
    Ok(())
}

/// Remove the value at `path` and return it.
///
/// Array elements after the removed one shift down.
///
/// # Errors
///
/// Fails if the location does not exist, the parent is a scalar, or `path`
/// is the root.
///
/// # Example
///
/// ```
/// use jsonpatch_pointer::{remove, parse_json_pointer};
/// use serde_json::json;
///
/// let mut doc = json!({"foo": ["bar", 5, 6]});
/// let removed = remove(&mut doc, &parse_json_pointer("/foo/-1").unwrap()).unwrap();
/// assert_eq!(removed, json!(6));
/// assert_eq!(doc, json!({"foo": ["bar", 5]}));
/// ```
pub fn remove(doc: &mut Value, path: &[String]) -> Result<Value, JsonPointerError> {
    let (key, parent_path) = split_last(path).ok_or(JsonPointerError::NoParent)?;
    match get_mut(doc, parent_path)? {
        Value::Object(map) => map
            .shift_remove(key)
            .ok_or_else(|| JsonPointerError::NotFound(format_json_pointer(path))),
        Value::Array(arr) => {
            let idx = normalize_index(key, arr.len())?;
            Ok(arr.remove(idx))
        }
        _ => Err(JsonPointerError::NotAContainer(format_json_pointer(path))),
    }
}

/// Check that the value at `path` is structurally equal to `sample`.
///
/// # Errors
///
/// Returns [`JsonPointerError::Test`] both when the value differs and when
/// `path` cannot be resolved; only the message tells them apart.
///
/// # Example
///
/// ```
/// use jsonpatch_pointer::{test_equals, parse_json_pointer};
/// use serde_json::json;
///
/// let doc = json!({"foo": ["bar", 5]});
/// assert!(test_equals(&doc, &parse_json_pointer("/foo/1").unwrap(), &json!(5)).is_ok());
/// assert!(test_equals(&doc, &parse_json_pointer("/foo/1").unwrap(), &json!(6)).is_err());
/// assert!(test_equals(&doc, &parse_json_pointer("/bar").unwrap(), &json!(6)).is_err());
/// ```
pub fn test_equals(doc: &Value, path: &[String], sample: &Value) -> Result<(), JsonPointerError> {
    let actual = get(doc, path).map_err(|e| {
        JsonPointerError::Test(format!(
            "cannot resolve `{}`: {e}",
            format_json_pointer(path)
        ))
    })?;
    if !deep_equal(actual, sample) {
        return Err(JsonPointerError::Test(format!(
            "value at `{}` does not match",
            format_json_pointer(path)
        )));
    }
    Ok(())
}

/// Deep-copy the value at `from` and [`put`] the copy at `to`.
///
/// # Errors
///
/// Fails if `from` cannot be resolved or the [`put`] fails.
///
/// # Example
///
/// ```
/// use jsonpatch_pointer::{copy_into, parse_json_pointer};
/// use serde_json::json;
///
/// let mut doc = json!({"foo": {"baz": 5}});
/// let from = parse_json_pointer("/foo").unwrap();
/// let to = parse_json_pointer("/bar").unwrap();
/// copy_into(&mut doc, &from, &to).unwrap();
/// assert_eq!(doc, json!({"foo": {"baz": 5}, "bar": {"baz": 5}}));
/// ```
pub fn copy_into(doc: &mut Value, from: &[String], to: &[String]) -> Result<(), JsonPointerError> {
    let value = get(doc, from)?.clone();
    put(doc, to, value)
}

/// Move the value at `from` to `to`.
///
/// The value is first [`put`] at `to`, then `from` is removed from the
/// resulting document. When the insertion shifts the source element within
/// a shared array, the source index is adjusted so the element originally
/// addressed by `from` is the one removed. Moving a location onto itself is
/// a no-op.
///
/// # Errors
///
/// - [`JsonPointerError::MoveIntoChild`] if `to` lies under `from`
/// - any resolution error for `from`, or error from [`put`] at `to`
///
/// # Example
///
/// ```
/// use jsonpatch_pointer::{move_into, parse_json_pointer};
/// use serde_json::json;
///
/// let mut doc = json!({"list": ["a", "b", "c"]});
/// let from = parse_json_pointer("/list/2").unwrap();
/// let to = parse_json_pointer("/list/0").unwrap();
/// move_into(&mut doc, &from, &to).unwrap();
/// assert_eq!(doc, json!({"list": ["c", "a", "b"]}));
/// ```
pub fn move_into(doc: &mut Value, from: &[String], to: &[String]) -> Result<(), JsonPointerError> {
    if is_child(from, to) {
        return Err(JsonPointerError::MoveIntoChild {
            from: format_json_pointer(from),
            path: format_json_pointer(to),
        });
    }
    let value = get(doc, from)?.clone();
    if is_path_equal(from, to) {
        return Ok(());
    }
    let source = rebase_source(doc, from, to);
    put(doc, to, value)?;
    remove(doc, &source)?;
    Ok(())
}

/// Rewrite `from` so it still addresses the same element after a [`put`]
/// at `to` has inserted into an array that is an ancestor of `from`.
///
/// Array steps of both paths are compared by absolute index, so `to` may
/// reach the shared array through an end-relative selector.
fn rebase_source(doc: &Value, from: &[String], to: &[String]) -> Path {
    let Some((key, parent_path)) = split_last(to) else {
        return from.to_vec();
    };
    let (Some(mut source), Some(target_parent)) =
        (absolute_path(doc, from), absolute_path(doc, parent_path))
    else {
        return from.to_vec();
    };
    if !is_child(&target_parent, &source) {
        return source;
    }
    let Ok(Value::Array(arr)) = get(doc, &target_parent) else {
        return source;
    };
    let insert_at = if key == "-" {
        arr.len()
    } else {
        match normalize_index(key, arr.len()) {
            Ok(idx) => idx,
            Err(_) => return source,
        }
    };
    let depth = target_parent.len();
    if let Ok(idx) = normalize_index(&source[depth], arr.len()) {
        let shifted = if idx >= insert_at { idx + 1 } else { idx };
        source[depth] = shifted.to_string();
    }
    source
}

/// Resolve `path` against `doc`, rewriting every array step as its absolute
/// index. `None` if the path does not resolve.
fn absolute_path(doc: &Value, path: &[String]) -> Option<Path> {
    let mut node = doc;
    let mut out = Vec::with_capacity(path.len());
    for step in path {
        node = match node {
            Value::Object(map) => {
                out.push(step.clone());
                map.get(step)?
            }
            Value::Array(arr) => {
                let idx = normalize_index(step, arr.len()).ok()?;
                out.push(idx.to_string());
                &arr[idx]
            }
            _ => return None,
        };
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::parse_json_pointer;
    use serde_json::json;

    fn p(s: &str) -> Vec<String> {
        parse_json_pointer(s).unwrap()
    }

    #[test]
    fn replace_requires_existing_member() {
        let mut doc = json!({"foo": 5});
        assert_eq!(
            replace(&mut doc, &p("/bar"), json!(6)),
            Err(JsonPointerError::NotFound("/bar".to_string()))
        );
        assert!(matches!(
            replace(&mut doc, &p("/foo/5"), json!(6)),
            Err(JsonPointerError::NotAContainer(_))
        ));
        assert_eq!(doc, json!({"foo": 5}));
    }

    #[test]
    fn replace_root() {
        let mut doc = json!({"foo": 5});
        let old = replace(&mut doc, &[], json!({"bar": 5})).unwrap();
        assert_eq!(old, json!({"foo": 5}));
        assert_eq!(doc, json!({"bar": 5}));
    }

    #[test]
    fn put_into_object() {
        let mut doc = json!({"foo": {"bar": 5}});
        put(&mut doc, &p("/foo/baz"), json!(6)).unwrap();
        put(&mut doc, &p("/foo/bar"), json!(7)).unwrap();
        assert_eq!(doc, json!({"foo": {"bar": 7, "baz": 6}}));
    }

    #[test]
    fn put_into_array_positions() {
        let mut doc = json!({"foo": ["bar", 5]});
        put(&mut doc, &p("/foo/1"), json!(6)).unwrap();
        assert_eq!(doc, json!({"foo": ["bar", 6, 5]}));
        put(&mut doc, &p("/foo/-1"), json!(7)).unwrap();
        assert_eq!(doc, json!({"foo": ["bar", 6, 7, 5]}));
    }

    #[test]
    fn put_rejects_out_of_range_and_scalars() {
        let mut doc = json!({"foo": ["bar", 5], "bar": 5});
        assert!(matches!(
            put(&mut doc, &p("/foo/2"), json!(1)),
            Err(JsonPointerError::InvalidIndex(_))
        ));
        assert!(matches!(
            put(&mut doc, &p("/foo/x"), json!(1)),
            Err(JsonPointerError::InvalidIndex(_))
        ));
        assert!(matches!(
            put(&mut doc, &p("/bar/baz"), json!(1)),
            Err(JsonPointerError::NotAContainer(_))
        ));
        assert!(matches!(
            put(&mut doc, &p("/missing/baz"), json!(1)),
            Err(JsonPointerError::NotFound(_))
        ));
        assert_eq!(doc, json!({"foo": ["bar", 5], "bar": 5}));
    }

    #[test]
    fn remove_shifts_and_reports() {
        let mut doc = json!(["bar", 5, 6]);
        assert_eq!(remove(&mut doc, &p("/0")), Ok(json!("bar")));
        assert_eq!(doc, json!([5, 6]));
        assert!(remove(&mut doc, &p("/2")).is_err());
        assert_eq!(remove(&mut doc, &[]), Err(JsonPointerError::NoParent));
    }

    #[test]
    fn remove_keeps_member_order() {
        let mut doc = json!({"a": 1, "b": 2, "c": 3});
        remove(&mut doc, &p("/a")).unwrap();
        let keys: Vec<&String> = doc.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["b", "c"]);
    }

    #[test]
    fn test_equals_distinguishes_by_message_only() {
        let doc = json!({"foo": 5});
        let mismatch = test_equals(&doc, &p("/foo"), &json!(6)).unwrap_err();
        let missing = test_equals(&doc, &p("/bar"), &json!(6)).unwrap_err();
        assert!(matches!(mismatch, JsonPointerError::Test(_)));
        assert!(matches!(missing, JsonPointerError::Test(_)));
        assert_ne!(mismatch.to_string(), missing.to_string());
    }

    #[test]
    fn copy_does_not_alias() {
        let mut doc = json!({"foo": [5]});
        copy_into(&mut doc, &p("/foo"), &p("/bar")).unwrap();
        replace(&mut doc, &p("/bar/0"), json!(6)).unwrap();
        assert_eq!(doc, json!({"foo": [5], "bar": [6]}));
    }

    #[test]
    fn move_between_members() {
        let mut doc = json!({"foo": 5});
        move_into(&mut doc, &p("/foo"), &p("/bar")).unwrap();
        assert_eq!(doc, json!({"bar": 5}));
    }

    #[test]
    fn move_into_own_child_is_rejected() {
        let mut doc = json!({"foo": {"a": 1}});
        assert_eq!(
            move_into(&mut doc, &p("/foo"), &p("/foo/bar")),
            Err(JsonPointerError::MoveIntoChild {
                from: "/foo".to_string(),
                path: "/foo/bar".to_string(),
            })
        );
        assert_eq!(doc, json!({"foo": {"a": 1}}));
    }

    #[test]
    fn move_onto_itself_is_noop() {
        let mut doc = json!({"foo": 5});
        move_into(&mut doc, &p("/foo"), &p("/foo")).unwrap();
        assert_eq!(doc, json!({"foo": 5}));
        assert!(move_into(&mut doc, &p("/bar"), &p("/bar")).is_err());
    }

    #[test]
    fn move_within_array_tracks_shifted_source() {
        let mut doc = json!(["a", "b", "c", "d"]);
        move_into(&mut doc, &p("/1"), &p("/3")).unwrap();
        assert_eq!(doc, json!(["a", "c", "b", "d"]));

        let mut doc = json!(["a", "b", "c", "d"]);
        move_into(&mut doc, &p("/3"), &p("/1")).unwrap();
        assert_eq!(doc, json!(["a", "d", "b", "c"]));

        let mut doc = json!(["a", "b", "c"]);
        move_into(&mut doc, &p("/-3"), &p("/-")).unwrap();
        assert_eq!(doc, json!(["b", "c", "a"]));

        let mut doc = json!(["a", "b", "c"]);
        move_into(&mut doc, &p("/-1"), &p("/-")).unwrap();
        assert_eq!(doc, json!(["a", "b", "c"]));
    }

    #[test]
    fn move_tracks_source_through_end_relative_destination() {
        let mut doc = json!({"a": [[1, 2, 3]]});
        move_into(&mut doc, &p("/a/0/1"), &p("/a/-1/0")).unwrap();
        assert_eq!(doc, json!({"a": [[2, 1, 3]]}));

        let mut doc = json!(["a", "b", "c", "d"]);
        move_into(&mut doc, &p("/-1"), &p("/-3")).unwrap();
        assert_eq!(doc, json!(["a", "d", "b", "c"]));

        let mut doc = json!([["x", "y"], ["z"]]);
        move_into(&mut doc, &p("/-2/1"), &p("/0/-2")).unwrap();
        assert_eq!(doc, json!([["y", "x"], ["z"]]));
    }

    #[test]
    fn absolute_path_resolves_end_relative_steps() {
        let doc = json!({"a": [[1, 2, 3]], "b": 5});
        assert_eq!(absolute_path(&doc, &p("/a/-1/-1")), Some(p("/a/0/2")));
        assert_eq!(absolute_path(&doc, &p("")), Some(vec![]));
        assert_eq!(absolute_path(&doc, &p("/a/1")), None);
        assert_eq!(absolute_path(&doc, &p("/b/0")), None);
    }

    #[test]
    fn move_nested_source_under_shifted_element() {
        let mut doc = json!([{"x": 1}, {"x": 2}]);
        move_into(&mut doc, &p("/1/x"), &p("/0")).unwrap();
        assert_eq!(doc, json!([2, {"x": 1}, {}]));
    }

    #[test]
    fn move_missing_source_fails_cleanly() {
        let mut doc = json!({"foo": 5});
        assert!(move_into(&mut doc, &p("/foo/5"), &p("/bar")).is_err());
        assert_eq!(doc, json!({"foo": 5}));
    }
}
