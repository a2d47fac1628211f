//! JSON Patch (RFC 6902) for `serde_json` documents.
//!
//! - [`json_patch`]: operation types, validation, the JSON codec and the
//!   apply engine.
//! - [`json_patch_diff`]: structural patch generation.
//! - [`json_merge`]: recursive merge of one document into another.
//!
//! Pointer resolution and mutation live in the `jsonpatch_pointer` crate.
//!
//! # Example
//!
//! ```
//! use jsonpatch::{apply, generate};
//! use serde_json::json;
//!
//! let base = json!({"foo": ["bar", 5]});
//! let target = json!({"foo": ["bar", 5], "bar": 5});
//!
//! let patch = generate(&base, &target, false).unwrap();
//! assert_eq!(apply(&base, &patch).unwrap(), target);
//! ```

pub mod json_merge;
pub mod json_patch;
pub mod json_patch_diff;

pub use json_merge::{merge, merge_json};
pub use json_patch::{
    apply, apply_op, apply_ops, apply_patch, decode_patch, encode_patch, ApplyError,
    GenerateOptions, Op, Patch, PatchError,
};
pub use json_patch_diff::{diff, generate, generate_json};
pub use jsonpatch_pointer::JsonPointerError;
