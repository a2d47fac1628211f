//! Core types for the JSON Patch module.

use serde_json::Value;
use thiserror::Error;

pub use jsonpatch_pointer::{JsonPointerError, Path};

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PatchError {
    /// The patch bytes are not JSON, or not a JSON array.
    #[error("PARSE: {0}")]
    Parse(String),
    /// An operation is missing a required member or names an unknown op.
    #[error("INVALID_OP: {0}")]
    Validation(String),
    /// The pointer engine rejected an operation.
    #[error(transparent)]
    Pointer(#[from] JsonPointerError),
    #[error("SERIALIZE: {0}")]
    Serialize(String),
}

/// A failed patch application.
///
/// `index` is the zero-based position of the failing operation, or `0` when
/// the patch was rejected before any operation ran. `doc` holds the document
/// as it stood when the failure happened.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("operation {index} failed: {error}")]
pub struct ApplyError {
    pub index: usize,
    #[source]
    pub error: PatchError,
    pub doc: Value,
}

// ── Op enum ───────────────────────────────────────────────────────────────

/// A JSON Patch operation (RFC 6902).
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Add { path: Path, value: Value },
    Remove { path: Path },
    Replace { path: Path, value: Value },
    Copy { path: Path, from: Path },
    Move { path: Path, from: Path },
    Test { path: Path, value: Value },
}

impl Op {
    /// Returns the operation name as it appears in the `op` member.
    pub fn op_name(&self) -> &'static str {
        match self {
            Op::Add { .. } => "add",
            Op::Remove { .. } => "remove",
            Op::Replace { .. } => "replace",
            Op::Copy { .. } => "copy",
            Op::Move { .. } => "move",
            Op::Test { .. } => "test",
        }
    }

    /// Returns the destination path of the operation.
    pub fn path(&self) -> &Path {
        match self {
            Op::Add { path, .. }
            | Op::Remove { path }
            | Op::Replace { path, .. }
            | Op::Copy { path, .. }
            | Op::Move { path, .. }
            | Op::Test { path, .. } => path,
        }
    }

    /// Returns the source path of `copy` and `move` operations.
    pub fn from(&self) -> Option<&Path> {
        match self {
            Op::Copy { from, .. } | Op::Move { from, .. } => Some(from),
            _ => None,
        }
    }

    /// Returns the operation value for `add`, `replace` and `test`.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Op::Add { value, .. } | Op::Replace { value, .. } | Op::Test { value, .. } => {
                Some(value)
            }
            _ => None,
        }
    }

    /// Returns true if this is a predicate (`test`) operation.
    pub fn is_predicate(&self) -> bool {
        matches!(self, Op::Test { .. })
    }
}

/// An ordered list of operations, applied left to right.
pub type Patch = Vec<Op>;

// ── Options ───────────────────────────────────────────────────────────────

/// Options for patch generation.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Prefix every `remove` and `replace` with a `test` of the old value.
    pub paranoid: bool,
}
