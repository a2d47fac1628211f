//! JSON Pointer (RFC 6901) engine.
//!
//! This crate parses and formats [JSON Pointers](https://tools.ietf.org/html/rfc6901)
//! and uses them to resolve and edit `serde_json::Value` documents in place.
//!
//! Array steps accept end-relative selectors as an extension: `-1` is the
//! last element, `-2` the one before it, and so on. The bare `-` step means
//! "one past the end" and is only accepted as the last step of [`put`].
//!
//! # Example
//!
//! ```
//! use jsonpatch_pointer::{format_json_pointer, get, parse_json_pointer, put};
//! use serde_json::json;
//!
//! // Parse a JSON pointer string into path components
//! let path = parse_json_pointer("/foo/bar").unwrap();
//! assert_eq!(path, vec!["foo".to_string(), "bar".to_string()]);
//!
//! // Format path components back to a JSON pointer string
//! assert_eq!(format_json_pointer(&path), "/foo/bar");
//!
//! // Read and edit a document
//! let mut doc = json!({"foo": {"bar": [1, 2]}});
//! put(&mut doc, &parse_json_pointer("/foo/bar/-").unwrap(), json!(3)).unwrap();
//! assert_eq!(get(&doc, &parse_json_pointer("/foo/bar/-1").unwrap()).unwrap(), &json!(3));
//! ```

use thiserror::Error;

pub mod deep_equal;
pub mod find;
pub mod get;
pub mod mutate;
pub mod types;
pub mod util;
pub mod validate;

pub use deep_equal::deep_equal;
pub use find::find;
pub use get::{get, get_mut};
pub use mutate::{copy_into, move_into, put, remove, replace, test_equals};
pub use types::{Path, PathStep, Reference, ReferenceKey};
pub use util::{
    escape_component, format_json_pointer, is_child, is_index_selector, is_path_equal, is_root,
    normalize_index, parent, parse_json_pointer, parse_json_pointer_relaxed, split_last, to_path,
    unescape_component,
};
pub use validate::validate_json_pointer;

/// Errors raised while parsing pointers or resolving them against a document.
///
/// Pointer-valued payloads are formatted RFC 6901 strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonPointerError {
    /// Malformed pointer syntax.
    #[error("POINTER_INVALID: {0}")]
    PointerInvalid(String),
    /// An object member on the path does not exist.
    #[error("NOT_FOUND: {0}")]
    NotFound(String),
    /// An array selector is not an integer or is out of bounds.
    #[error("INVALID_INDEX: {0}")]
    InvalidIndex(String),
    /// A scalar value was indexed.
    #[error("NOT_A_CONTAINER: {0}")]
    NotAContainer(String),
    #[error("NO_PARENT")]
    NoParent,
    /// A `test` assertion failed.
    #[error("TEST: {0}")]
    Test(String),
    #[error("MOVE_INTO_CHILD: cannot move `{from}` into `{path}`")]
    MoveIntoChild { from: String, path: String },
}
