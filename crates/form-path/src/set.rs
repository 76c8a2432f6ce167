use std::sync::Arc;

use nordstern_form_value::FormValue;
use tracing::trace;

use crate::{format_path, parse_path, validate_index, PathError, PathStep};

/// Set a deep value by path.
///
/// Copies are made at each level of `path` so that no part of the original
/// tree is mutated. It is not a full deep copy: every subtree the path does
/// not go through is shared between the old root and the new one. Missing
/// containers are created on the way down, a sequence when the next step is
/// an index and a mapping otherwise. Sequences become sparse when an index
/// past their end is set.
///
/// Setting `null` or `undefined` removes the entry instead: the key is
/// deleted from a mapping, or exactly one element is spliced out of a
/// sequence (later elements shift down).
///
/// A `null` or `undefined` root is treated as an empty mapping.
///
/// # Errors
///
/// - `PathError::InvalidPath` / `PathError::PathTooLong` from tokenizing
/// - `PathError::TypeTraversal` if a step addresses a value of the wrong
///   kind (a key into a sequence, an index into a mapping, anything into a
///   scalar)
/// - `PathError::IndexTooLarge` if a sequence would have to grow past
///   [`MAX_INDEX`](crate::MAX_INDEX)
///
/// # Example
///
/// ```
/// use nordstern_form_path::set_path;
/// use nordstern_form_value::FormValue;
/// use serde_json::json;
///
/// let root = FormValue::from(json!({"a": {"b": {"c": []}}}));
/// let next = set_path(&root, "a.b.c[1]", FormValue::from("hey")).unwrap();
/// assert_eq!(serde_json::Value::from(&next), json!({"a": {"b": {"c": [null, "hey"]}}}));
/// ```
pub fn set_path(root: &FormValue, path: &str, value: FormValue) -> Result<FormValue, PathError> {
    let steps = parse_path(path)?;
    set_in(root, &steps, value)
}

/// Set a deep value by pre-tokenized path.
///
/// An empty path replaces the root with `value`.
pub fn set_in(root: &FormValue, steps: &[PathStep], value: FormValue) -> Result<FormValue, PathError> {
    let mut next = root.clone();
    set_in_place(&mut next, steps, value)?;
    Ok(next)
}

/// Set a deep value by pre-tokenized path, updating `root` itself.
///
/// Containers owned by `root` alone are updated without copying; any
/// container still shared with another tree is copied before it is touched,
/// so other holders never see the change. This is what [`set_in`] does on a
/// fresh handle to its input. On error `root` may be partially updated.
pub fn set_in_place(root: &mut FormValue, steps: &[PathStep], value: FormValue) -> Result<(), PathError> {
    if steps.is_empty() {
        *root = value;
        return Ok(());
    }
    if root.is_nullish() {
        *root = FormValue::empty_map();
    }
    set_at(root, steps, 0, value)
}

fn set_at(
    node: &mut FormValue,
    steps: &[PathStep],
    depth: usize,
    value: FormValue,
) -> Result<(), PathError> {
    let last = depth + 1 == steps.len();

    match (node, &steps[depth]) {
        (FormValue::Map(map), PathStep::Key(key)) => {
            let map = Arc::make_mut(map);
            if last {
                if value.is_nullish() {
                    map.shift_remove(key.as_str());
                } else {
                    map.insert(key.clone(), value);
                }
                return Ok(());
            }
            let child = map.entry(key.clone()).or_insert(FormValue::Undefined);
            vivify(child, steps, depth);
            set_at(child, steps, depth + 1, value)
        }
        (FormValue::List(items), PathStep::Index(index)) => {
            let index = *index;
            if last && value.is_nullish() {
                if index < items.len() {
                    Arc::make_mut(items).remove(index);
                }
                return Ok(());
            }
            let items = Arc::make_mut(items);
            if index >= items.len() {
                validate_index(index)?;
                items.resize(index + 1, FormValue::Undefined);
            }
            let child = &mut items[index];
            if last {
                *child = value;
                return Ok(());
            }
            vivify(child, steps, depth);
            set_at(child, steps, depth + 1, value)
        }
        (other, step) => Err(PathError::TypeTraversal {
            path: format_path(&steps[..depth]),
            expected: match step {
                PathStep::Key(_) => "mapping",
                PathStep::Index(_) => "sequence",
            },
            found: other.kind(),
        }),
    }
}

/// Replaces a missing child below `steps[depth]` with an empty container
/// of the kind the next step needs.
fn vivify(child: &mut FormValue, steps: &[PathStep], depth: usize) {
    if !child.is_nullish() {
        return;
    }
    *child = match steps[depth + 1] {
        PathStep::Index(_) => FormValue::List(Arc::new(Vec::new())),
        PathStep::Key(_) => FormValue::empty_map(),
    };
    trace!(
        path = %format_path(&steps[..=depth]),
        kind = child.kind(),
        "created missing container"
    );
}
