//! Type definitions for JSON Pointer.

use serde_json::Value;

/// A step in a JSON Pointer path, stored unescaped.
///
/// Object keys are matched exactly; array steps are index selectors.
pub type PathStep = String;

/// A JSON Pointer path. The empty path addresses the whole document.
pub type Path = Vec<PathStep>;

/// The normalized key under which a referenced value lives in its container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceKey {
    /// Array position, already normalized to `[0, len)`.
    Index(usize),
    /// Object member name.
    String(String),
}

/// A resolved location in a JSON document.
#[derive(Debug, Clone, PartialEq)]
pub struct Reference<'a> {
    /// The addressed value.
    pub val: &'a Value,
    /// The object or array containing the value. `None` for the root.
    pub obj: Option<&'a Value>,
    /// The key used to access the value. `None` for the root.
    pub key: Option<ReferenceKey>,
}

impl<'a> Reference<'a> {
    /// Check if this reference points to an array element.
    pub fn is_array_reference(&self) -> bool {
        matches!(self.obj, Some(Value::Array(_)))
    }

    /// Check if this reference points to an object property.
    pub fn is_object_reference(&self) -> bool {
        matches!(self.obj, Some(Value::Object(_)))
    }

    /// Get the numeric index if this is an array reference.
    pub fn index(&self) -> Option<usize> {
        match self.key {
            Some(ReferenceKey::Index(idx)) => Some(idx),
            _ => None,
        }
    }
}
