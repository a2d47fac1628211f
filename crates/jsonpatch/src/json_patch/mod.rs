//! JSON Patch implementation (RFC 6902).
//!
//! # Operations
//!
//! All standard RFC 6902 operations are supported:
//! `add`, `remove`, `replace`, `copy`, `move`, `test`.
//!
//! Array steps accept end-relative indices (`/list/-1` is the last element)
//! in addition to the RFC's `-` append marker.
//!
//! A serialized patch is validated as a whole before anything is applied;
//! a malformed operation anywhere rejects the patch and is reported at
//! index `0`.

pub mod apply;
pub mod codec;
pub mod types;
pub mod validate;

pub use apply::{apply, apply_op, apply_ops, apply_patch};
pub use codec::json::{decode_patch, encode_patch, from_json, from_json_patch, to_json, to_json_patch};
pub use types::{ApplyError, GenerateOptions, Op, Patch, PatchError};
pub use validate::{validate_operation, validate_operations};
