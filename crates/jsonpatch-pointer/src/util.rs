//! Pointer syntax helpers: escaping, parsing, formatting and path relations.

use std::borrow::Cow;

use crate::types::Path;
use crate::validate::validate_json_pointer;
use crate::JsonPointerError;

/// Unescapes a JSON Pointer path component.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
///
/// # Example
///
/// ```
/// use jsonpatch_pointer::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// assert_eq!(unescape_component("no-escapes"), "no-escapes");
/// ```
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // Order matters: ~1 must be replaced before ~0
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a JSON Pointer path component.
///
/// Per RFC 6901, `/` is replaced with `~1` and `~` is replaced with `~0`.
///
/// # Example
///
/// ```
/// use jsonpatch_pointer::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// ```
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    // Order matters: ~ must be escaped before /
    component.replace('~', "~0").replace('/', "~1")
}

/// Parse a JSON Pointer string into unescaped path components.
///
/// - Empty string returns the root path (no components)
/// - Non-empty pointers must start with `/`
/// - A `~` must be followed by `0` or `1`
///
/// # Errors
///
/// Returns [`JsonPointerError::PointerInvalid`] for malformed pointers.
///
/// # Example
///
/// ```
/// use jsonpatch_pointer::parse_json_pointer;
///
/// assert_eq!(parse_json_pointer("").unwrap(), Vec::<String>::new());
/// assert_eq!(parse_json_pointer("/").unwrap(), vec![""]);
/// assert_eq!(parse_json_pointer("/a~1b/c~0d").unwrap(), vec!["a/b", "c~d"]);
/// assert!(parse_json_pointer("foo").is_err());
/// assert!(parse_json_pointer("/~2").is_err());
/// ```
pub fn parse_json_pointer(pointer: &str) -> Result<Path, JsonPointerError> {
    validate_json_pointer(pointer)?;
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    Ok(pointer[1..].split('/').map(unescape_component).collect())
}

/// Parse a JSON Pointer string that may not have a leading `/`.
///
/// # Errors
///
/// Returns [`JsonPointerError::PointerInvalid`] for malformed escapes.
pub fn parse_json_pointer_relaxed(pointer: &str) -> Result<Path, JsonPointerError> {
    if pointer.starts_with('/') || pointer.is_empty() {
        return parse_json_pointer(pointer);
    }
    let mut absolute = String::with_capacity(pointer.len() + 1);
    absolute.push('/');
    absolute.push_str(pointer);
    parse_json_pointer(&absolute)
}

/// Format path components into a JSON Pointer string.
///
/// Returns an empty string for the root path.
///
/// # Example
///
/// ```
/// use jsonpatch_pointer::format_json_pointer;
///
/// assert_eq!(format_json_pointer(&[]), "");
/// assert_eq!(format_json_pointer(&["a/b".to_string(), "c~d".to_string()]), "/a~1b/c~0d");
/// ```
pub fn format_json_pointer(path: &[String]) -> String {
    if path.is_empty() {
        return String::new();
    }
    let mut out = String::with_capacity(path.len() * 8);
    for component in path {
        out.push('/');
        out.push_str(&escape_component(component));
    }
    out
}

/// Convert a pointer string to a path.
///
/// # Errors
///
/// Same as [`parse_json_pointer`].
pub fn to_path<'a>(pointer: impl Into<Cow<'a, str>>) -> Result<Path, JsonPointerError> {
    parse_json_pointer(&pointer.into())
}

/// Check if a path points to the root value.
pub fn is_root(path: &[String]) -> bool {
    path.is_empty()
}

/// Check if `parent` is a strict prefix of `child`.
///
/// # Example
///
/// ```
/// use jsonpatch_pointer::is_child;
///
/// let parent = vec!["foo".to_string()];
/// let child = vec!["foo".to_string(), "bar".to_string()];
/// assert!(is_child(&parent, &child));
/// assert!(!is_child(&child, &parent));
/// assert!(!is_child(&parent, &parent));
/// ```
pub fn is_child(parent: &[String], child: &[String]) -> bool {
    parent.len() < child.len() && child[..parent.len()] == *parent
}

/// Check if two paths are equal.
pub fn is_path_equal(p1: &[String], p2: &[String]) -> bool {
    p1 == p2
}

/// Get the parent path of a given path.
///
/// # Errors
///
/// Returns [`JsonPointerError::NoParent`] for the root path.
pub fn parent(path: &[String]) -> Result<Path, JsonPointerError> {
    split_last(path)
        .map(|(_, rest)| rest.to_vec())
        .ok_or(JsonPointerError::NoParent)
}

/// Split a path into its last component and the parent path.
pub fn split_last(path: &[String]) -> Option<(&str, &[String])> {
    path.split_last().map(|(last, rest)| (last.as_str(), rest))
}

/// Check if a string is an index selector: an optional `-` followed by
/// ASCII digits.
///
/// # Example
///
/// ```
/// use jsonpatch_pointer::is_index_selector;
///
/// assert!(is_index_selector("0"));
/// assert!(is_index_selector("-1"));
/// assert!(!is_index_selector("-"));
/// assert!(!is_index_selector("+1"));
/// assert!(!is_index_selector("1.5"));
/// ```
pub fn is_index_selector(selector: &str) -> bool {
    let digits = selector.strip_prefix('-').unwrap_or(selector);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Normalize an array index selector against an array of length `len`.
///
/// Negative selectors count from the end (`-1` is the last element). The
/// result is always within `[0, len)`.
///
/// # Errors
///
/// Returns [`JsonPointerError::InvalidIndex`] if the selector is not an
/// integer or lands outside the array.
///
/// # Example
///
/// ```
/// use jsonpatch_pointer::normalize_index;
///
/// assert_eq!(normalize_index("0", 3).unwrap(), 0);
/// assert_eq!(normalize_index("-1", 3).unwrap(), 2);
/// assert_eq!(normalize_index("-3", 3).unwrap(), 0);
/// assert!(normalize_index("-4", 3).is_err());
/// assert!(normalize_index("3", 3).is_err());
/// ```
pub fn normalize_index(selector: &str, len: usize) -> Result<usize, JsonPointerError> {
    let invalid = || JsonPointerError::InvalidIndex(selector.to_string());
    if !is_index_selector(selector) {
        return Err(invalid());
    }
    let idx = match selector.strip_prefix('-') {
        Some(back) => {
            let back: usize = back.parse().map_err(|_| invalid())?;
            len.checked_sub(back).ok_or_else(invalid)?
        }
        None => selector.parse().map_err(|_| invalid())?,
    };
    if idx >= len {
        return Err(invalid());
    }
    Ok(idx)
}
