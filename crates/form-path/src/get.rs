use nordstern_form_value::FormValue;

use crate::{format_path, parse_path, PathError, PathStep};

/// Get a value by path. `Ok(None)` if the value is missing.
///
/// Traversal stops quietly at `undefined` (a missing key, a hole, or an
/// index past the end). Stepping into `null` is an error, mirroring a
/// property read on `null`.
///
/// # Errors
///
/// - `PathError::InvalidPath` / `PathError::PathTooLong` from tokenizing
/// - `PathError::NullTraversal` if `null` is met before the last step
///
/// # Example
///
/// ```
/// use nordstern_form_path::get_path;
/// use nordstern_form_value::FormValue;
/// use serde_json::json;
///
/// let doc = FormValue::from(json!({"a": {"b": {"c": ["hey", "Hi!"]}}}));
/// assert_eq!(get_path(&doc, "a.b.c[1]").unwrap(), Some(&FormValue::from("Hi!")));
/// assert_eq!(get_path(&doc, "a.x.y").unwrap(), None);
/// ```
pub fn get_path<'a>(root: &'a FormValue, path: &str) -> Result<Option<&'a FormValue>, PathError> {
    let steps = parse_path(path)?;
    get_in(root, &steps)
}

/// Get a value by pre-tokenized path.
///
/// An empty path returns the root itself.
pub fn get_in<'a>(root: &'a FormValue, steps: &[PathStep]) -> Result<Option<&'a FormValue>, PathError> {
    let mut current = root;
    for (depth, step) in steps.iter().enumerate() {
        let next = match (current, step) {
            (FormValue::Undefined, _) => return Ok(None),
            (FormValue::Null, _) => {
                return Err(PathError::NullTraversal {
                    path: format_path(&steps[..depth]),
                })
            }
            (FormValue::Map(map), PathStep::Key(key)) => map.get(key.as_str()),
            (FormValue::List(items), PathStep::Index(index)) => items.get(*index),
            // Mismatched container kinds and scalars read as missing.
            _ => None,
        };
        current = match next {
            Some(value) => value,
            None => return Ok(None),
        };
    }
    if current.is_undefined() {
        return Ok(None);
    }
    Ok(Some(current))
}
