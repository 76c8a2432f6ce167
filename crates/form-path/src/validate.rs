//! Limits on form paths.

use crate::PathError;

/// Maximum allowed path string length, in bytes.
pub const MAX_PATH_LENGTH: usize = 4096;

/// Maximum allowed number of steps in a path.
pub const MAX_PATH_DEPTH: usize = 256;

/// Largest index a sequence may be grown to by a set.
///
/// Reading and removing past it are unaffected; only growth is bounded.
pub const MAX_INDEX: usize = 1_000_000;

/// Validate the raw length of a path string.
///
/// # Example
///
/// ```
/// use nordstern_form_path::validate_path_length;
///
/// validate_path_length("a.b[0]").unwrap();
/// validate_path_length(&"a".repeat(5000)).unwrap_err();
/// ```
pub fn validate_path_length(path: &str) -> Result<(), PathError> {
    if path.len() > MAX_PATH_LENGTH {
        return Err(PathError::PathTooLong {
            len: path.len(),
            max: MAX_PATH_LENGTH,
        });
    }
    Ok(())
}

/// Validate the number of steps a path tokenized into.
pub fn validate_path_depth(depth: usize) -> Result<(), PathError> {
    if depth > MAX_PATH_DEPTH {
        return Err(PathError::PathTooLong {
            len: depth,
            max: MAX_PATH_DEPTH,
        });
    }
    Ok(())
}

/// Validate an index a sequence is about to be grown to.
pub fn validate_index(index: usize) -> Result<(), PathError> {
    if index > MAX_INDEX {
        return Err(PathError::IndexTooLarge { index, max: MAX_INDEX });
    }
    Ok(())
}
