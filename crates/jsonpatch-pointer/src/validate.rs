//! Validation functions for JSON Pointer.

use crate::JsonPointerError;

/// Validate a JSON Pointer string.
///
/// # Errors
///
/// Returns [`JsonPointerError::PointerInvalid`] if:
/// - The pointer is non-empty but doesn't start with `/`
/// - A `~` is not followed by `0` or `1`
///
/// # Example
///
/// ```
/// use jsonpatch_pointer::validate_json_pointer;
///
/// validate_json_pointer("").unwrap();  // Root is valid
/// validate_json_pointer("/foo/a~1b").unwrap();
/// validate_json_pointer("foo").unwrap_err();  // Missing leading /
/// validate_json_pointer("/foo~").unwrap_err();  // Dangling escape
/// ```
pub fn validate_json_pointer(pointer: &str) -> Result<(), JsonPointerError> {
    if pointer.is_empty() {
        return Ok(());
    }
    if !pointer.starts_with('/') {
        return Err(JsonPointerError::PointerInvalid(format!(
            "`{pointer}` must start with `/`"
        )));
    }
    let mut bytes = pointer.bytes();
    while let Some(b) = bytes.next() {
        if b == b'~' && !matches!(bytes.next(), Some(b'0' | b'1')) {
            return Err(JsonPointerError::PointerInvalid(format!(
                "`{pointer}` has an illegal unescaped ~"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_empty_pointer() {
        assert!(validate_json_pointer("").is_ok());
    }

    #[test]
    fn test_validate_absolute_pointer() {
        assert!(validate_json_pointer("/").is_ok());
        assert!(validate_json_pointer("/foo").is_ok());
        assert!(validate_json_pointer("/~0~1/~01").is_ok());
    }

    #[test]
    fn test_validate_relative_pointer() {
        assert!(validate_json_pointer("foo").is_err());
        assert!(validate_json_pointer("foo/bar").is_err());
    }

    #[test]
    fn test_validate_escapes() {
        assert!(validate_json_pointer("/~").is_err());
        assert!(validate_json_pointer("/a~2").is_err());
        assert!(validate_json_pointer("/a~/b").is_err());
        assert!(matches!(
            validate_json_pointer("/~x"),
            Err(JsonPointerError::PointerInvalid(_))
        ));
    }
}
