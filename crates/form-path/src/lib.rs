//! Form path utilities.
//!
//! Form control names address a place in a structured value with a small
//! path language: `.` separates object keys and `[n]` selects an array index,
//! as in `tasks[0].content` or `matrix[1][0].g`.
//!
//! This crate tokenizes such paths and implements lookup and copy-on-write
//! update over [`FormValue`] trees.
//!
//! # Example
//!
//! ```
//! use nordstern_form_path::{get_path, parse_path, set_path, PathStep};
//! use nordstern_form_value::FormValue;
//!
//! let path = parse_path("a.b[1]").unwrap();
//! assert_eq!(path, vec![PathStep::from("a"), PathStep::from("b"), PathStep::from(1)]);
//!
//! let root = set_path(&FormValue::empty_map(), "a.b[1]", FormValue::from("hey")).unwrap();
//! assert_eq!(get_path(&root, "a.b[1]").unwrap(), Some(&FormValue::from("hey")));
//! assert_eq!(get_path(&root, "a.b[0]").unwrap(), None);
//! ```

use thiserror::Error;

pub mod types;
pub use types::{Path, PathStep};

pub mod validate;
pub use validate::{
    validate_index, validate_path_depth, validate_path_length, MAX_INDEX, MAX_PATH_DEPTH,
    MAX_PATH_LENGTH,
};

mod get;
pub use get::{get_in, get_path};

mod set;
pub use set::{set_in, set_in_place, set_path};

mod paths;
pub use paths::collect_paths;

#[cfg(doc)]
use nordstern_form_value::FormValue;

/// Tokenize a path string.
///
/// Grammar: `segment ("." segment)*` where `segment = key ("[" digits "]")*`
/// and `key` is one or more characters other than `.`, `[` and `]`. There is
/// no escaping.
///
/// # Errors
///
/// - `PathError::InvalidPath` for an empty path, an empty segment, a segment
///   that does not start with a key, unbalanced brackets or a non-decimal
///   index
/// - `PathError::PathTooLong` if the path exceeds the length or depth limits
///
/// # Example
///
/// ```
/// use nordstern_form_path::parse_path;
///
/// let steps: Vec<String> = parse_path("a.b[0][1].c")
///     .unwrap()
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// assert_eq!(steps, vec!["a", "b", "0", "1", "c"]);
///
/// assert!(parse_path("").is_err());
/// assert!(parse_path("a[0").is_err());
/// ```
pub fn parse_path(path: &str) -> Result<Path, PathError> {
    if path.is_empty() {
        return Err(invalid(path, "empty path"));
    }
    validate_path_length(path)?;

    let mut steps = Vec::new();
    for segment in path.split('.') {
        parse_segment(path, segment, &mut steps)?;
    }
    validate_path_depth(steps.len())?;
    Ok(steps)
}

fn parse_segment(path: &str, segment: &str, steps: &mut Path) -> Result<(), PathError> {
    let (key, mut rest) = match segment.find(|c| c == '[' || c == ']') {
        Some(pos) => segment.split_at(pos),
        None => (segment, ""),
    };
    if key.is_empty() {
        return Err(invalid(
            path,
            if segment.is_empty() {
                "empty segment"
            } else {
                "segment must start with a key"
            },
        ));
    }
    steps.push(PathStep::Key(key.to_string()));

    while !rest.is_empty() {
        let inner = match rest.strip_prefix('[') {
            Some(inner) => inner,
            None if rest.starts_with(']') => return Err(invalid(path, "unbalanced ']'")),
            None => return Err(invalid(path, "unexpected text after ']'")),
        };
        let close = inner
            .find(']')
            .ok_or_else(|| invalid(path, "unclosed '['"))?;
        let digits = &inner[..close];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(path, "array index must be decimal digits"));
        }
        let index = digits
            .parse::<usize>()
            .map_err(|_| invalid(path, "array index out of range"))?;
        steps.push(PathStep::Index(index));
        rest = &inner[close + 1..];
    }
    Ok(())
}

fn invalid(path: &str, reason: &'static str) -> PathError {
    PathError::InvalidPath {
        path: path.to_string(),
        reason,
    }
}

/// Format path steps back into a path string.
///
/// Returns an empty string for the root path.
///
/// # Example
///
/// ```
/// use nordstern_form_path::{format_path, PathStep};
///
/// assert_eq!(format_path(&[]), "");
/// assert_eq!(
///     format_path(&[PathStep::from("tasks"), PathStep::from(0), PathStep::from("content")]),
///     "tasks[0].content"
/// );
/// ```
pub fn format_path(path: &[PathStep]) -> String {
    let mut out = String::new();
    for step in path {
        match step {
            PathStep::Key(key) => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(key);
            }
            PathStep::Index(index) => {
                out.push('[');
                out.push_str(&index.to_string());
                out.push(']');
            }
        }
    }
    out
}

/// Check if `parent` path strictly contains the `child` path.
///
/// # Example
///
/// ```
/// use nordstern_form_path::{is_child, parse_path};
///
/// let parent = parse_path("tasks[0]").unwrap();
/// let child = parse_path("tasks[0].content").unwrap();
/// assert!(is_child(&parent, &child));
/// assert!(!is_child(&child, &parent));
/// ```
pub fn is_child(parent: &[PathStep], child: &[PathStep]) -> bool {
    parent.len() < child.len() && child.starts_with(parent)
}

/// Get the parent path of a given path.
///
/// # Errors
///
/// Returns an error if the path is the root.
pub fn parent(path: &[PathStep]) -> Result<Path, PathError> {
    match path.split_last() {
        Some((_, init)) => Ok(init.to_vec()),
        None => Err(PathError::NoParent),
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("invalid path {path:?}: {reason}")]
    InvalidPath { path: String, reason: &'static str },
    #[error("path too long: {len} exceeds limit of {max}")]
    PathTooLong { len: usize, max: usize },
    #[error("index {index} exceeds limit of {max}")]
    IndexTooLarge { index: usize, max: usize },
    #[error("cannot read properties of null at {path:?}")]
    NullTraversal { path: String },
    #[error("cannot address {path:?}: expected {expected}, found {found}")]
    TypeTraversal {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("root path has no parent")]
    NoParent,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(path: &str) -> Vec<String> {
        parse_path(path)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_parse_plain_keys() {
        assert_eq!(keys("a"), vec!["a"]);
        assert_eq!(keys("a.b.c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_indices_in_reading_order() {
        assert_eq!(keys("a.b[0][1].c"), vec!["a", "b", "0", "1", "c"]);
        assert_eq!(
            parse_path("f[1][0].g").unwrap(),
            vec![
                PathStep::from("f"),
                PathStep::from(1),
                PathStep::from(0),
                PathStep::from("g")
            ]
        );
    }

    #[test]
    fn test_numeric_keys_are_literal() {
        assert_eq!(parse_path("123key").unwrap(), vec![PathStep::from("123key")]);
        assert_eq!(parse_path("key123").unwrap(), vec![PathStep::from("key123")]);
        assert_eq!(
            parse_path("a.0").unwrap(),
            vec![PathStep::from("a"), PathStep::from("0")]
        );
    }

    #[test]
    fn test_leading_zeros_in_index() {
        assert_eq!(
            parse_path("a[007]").unwrap(),
            vec![PathStep::from("a"), PathStep::from(7)]
        );
    }

    #[test]
    fn test_reserved_keys_are_plain_tokens() {
        assert_eq!(
            parse_path("__proto__.polluted").unwrap(),
            vec![PathStep::from("__proto__"), PathStep::from("polluted")]
        );
    }

    #[test]
    fn test_parse_errors() {
        for bad in [
            "", ".", "a.", ".a", "a..b", "[0]", "a.[0]", "a[", "a[0", "a]", "a[0]]", "a[]",
            "a[x]", "a[-1]", "a[0]b", "a[1.5]",
        ] {
            assert!(
                matches!(parse_path(bad), Err(PathError::InvalidPath { .. })),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_parse_index_overflow() {
        let path = format!("a[{}0]", usize::MAX);
        assert!(matches!(
            parse_path(&path),
            Err(PathError::InvalidPath { reason: "array index out of range", .. })
        ));
    }

    #[test]
    fn test_parse_too_deep() {
        let path = vec!["a"; MAX_PATH_DEPTH + 1].join(".");
        assert!(matches!(
            parse_path(&path),
            Err(PathError::PathTooLong { .. })
        ));
    }

    #[test]
    fn test_format_roundtrip() {
        for path in ["a", "a.b", "a[0]", "a.b[0][1].c", "tasks[10].details.priority"] {
            assert_eq!(format_path(&parse_path(path).unwrap()), path);
        }
    }

    #[test]
    fn test_format_leading_index() {
        assert_eq!(format_path(&[PathStep::from(0), PathStep::from("a")]), "[0].a");
    }

    #[test]
    fn test_relationships() {
        let p = parse_path("a.b").unwrap();
        let c = parse_path("a.b[0]").unwrap();
        let s = parse_path("a.c").unwrap();
        assert!(is_child(&p, &c));
        assert!(!is_child(&p, &p));
        assert!(!is_child(&p, &s));
        assert_eq!(parent(&c).unwrap(), p);
        assert_eq!(parent(&[]), Err(PathError::NoParent));
    }
}
