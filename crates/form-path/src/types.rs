//! Type definitions for form paths.

use std::borrow::Cow;
use std::fmt;

use nordstern_util::is_reserved_key;

/// A step in a form path.
///
/// `.name` produces a key step, `[n]` an index step. Only bracket syntax ever
/// produces an index: `a.0` addresses the key `"0"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    Key(String),
    Index(usize),
}

/// A tokenized form path.
pub type Path = Vec<PathStep>;

impl PathStep {
    pub fn as_key(&self) -> Option<&str> {
        match self {
            PathStep::Key(k) => Some(k),
            PathStep::Index(_) => None,
        }
    }

    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathStep::Key(_) => None,
            PathStep::Index(i) => Some(*i),
        }
    }

    /// The step as a mapping key; indices are rendered in decimal.
    pub fn to_key(&self) -> Cow<'_, str> {
        match self {
            PathStep::Key(k) => Cow::Borrowed(k),
            PathStep::Index(i) => Cow::Owned(i.to_string()),
        }
    }

    /// Whether this is a key step naming a prototype-related property.
    pub fn is_reserved(&self) -> bool {
        self.as_key().is_some_and(is_reserved_key)
    }
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::Key(k) => f.write_str(k),
            PathStep::Index(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for PathStep {
    fn from(key: &str) -> Self {
        PathStep::Key(key.to_string())
    }
}

impl From<String> for PathStep {
    fn from(key: String) -> Self {
        PathStep::Key(key)
    }
}

impl From<usize> for PathStep {
    fn from(index: usize) -> Self {
        PathStep::Index(index)
    }
}
