//! [`FormValue`], the structured value tree.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use regex::Regex;

use crate::blob::{Blob, Opaque};

/// Mapping node of the tree. Iteration follows insertion order.
pub type FormMap = IndexMap<String, FormValue>;

/// A node of a structured form value.
///
/// Covers everything a form can be populated from or structured into:
/// - Scalars (strings, numbers, booleans, dates)
/// - Binary blobs and file lists
/// - Opaque values that are carried but never inspected
/// - Sequences (possibly sparse, holes are [`FormValue::Undefined`])
/// - Mappings
///
/// Containers are reference counted. Cloning a container is cheap and shares
/// the underlying storage, which is what makes copy-on-write updates keep the
/// identity of untouched subtrees (see [`FormValue::ptr_eq`]).
#[derive(Debug, Clone, Default)]
pub enum FormValue {
    /// Absent value, or a hole in a sparse sequence.
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    BigInt(i128),
    Str(String),
    /// Point in time, always UTC.
    Date(DateTime<Utc>),
    Blob(Blob),
    FileList(Arc<[Blob]>),
    /// Regular expression; rendered by its source text when needed.
    Pattern(Regex),
    Opaque(Opaque),
    List(Arc<Vec<FormValue>>),
    Map(Arc<FormMap>),
}

impl FormValue {
    /// An empty mapping.
    pub fn empty_map() -> Self {
        FormValue::Map(Arc::new(FormMap::new()))
    }

    /// Build a mapping from key/value pairs.
    ///
    /// # Example
    ///
    /// ```
    /// use nordstern_form_value::FormValue;
    ///
    /// let v = FormValue::map([("a", FormValue::from(1)), ("b", FormValue::from("x"))]);
    /// assert_eq!(v.as_map().map(|m| m.len()), Some(2));
    /// ```
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, FormValue)>,
    {
        FormValue::Map(Arc::new(
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    /// Build a sequence.
    pub fn list<I: IntoIterator<Item = FormValue>>(items: I) -> Self {
        FormValue::List(Arc::new(items.into_iter().collect()))
    }

    /// Short name of the variant, used in error messages and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FormValue::Undefined => "undefined",
            FormValue::Null => "null",
            FormValue::Bool(_) => "boolean",
            FormValue::Integer(_) | FormValue::Float(_) => "number",
            FormValue::BigInt(_) => "bigint",
            FormValue::Str(_) => "string",
            FormValue::Date(_) => "date",
            FormValue::Blob(_) => "blob",
            FormValue::FileList(_) => "file list",
            FormValue::Pattern(_) => "pattern",
            FormValue::Opaque(_) => "opaque",
            FormValue::List(_) => "sequence",
            FormValue::Map(_) => "mapping",
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, FormValue::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FormValue::Null)
    }

    /// `null` or `undefined`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, FormValue::Null | FormValue::Undefined)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FormValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FormValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_blob(&self) -> Option<&Blob> {
        match self {
            FormValue::Blob(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[FormValue]> {
        match self {
            FormValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&FormMap> {
        match self {
            FormValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Identity comparison.
    ///
    /// Containers, blobs, file lists and opaque values compare by pointer.
    /// `undefined` and `null` are singletons. Every other scalar is a
    /// value type and never identical to anything, not even itself, so that
    /// a successful `ptr_eq` always means shared storage.
    pub fn ptr_eq(&self, other: &FormValue) -> bool {
        match (self, other) {
            (FormValue::Undefined, FormValue::Undefined) => true,
            (FormValue::Null, FormValue::Null) => true,
            (FormValue::List(a), FormValue::List(b)) => Arc::ptr_eq(a, b),
            (FormValue::Map(a), FormValue::Map(b)) => Arc::ptr_eq(a, b),
            (FormValue::Blob(a), FormValue::Blob(b)) => a.ptr_eq(b),
            (FormValue::FileList(a), FormValue::FileList(b)) => Arc::ptr_eq(a, b),
            (FormValue::Opaque(a), FormValue::Opaque(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl PartialEq for FormValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FormValue::Undefined, FormValue::Undefined) => true,
            (FormValue::Null, FormValue::Null) => true,
            (FormValue::Bool(a), FormValue::Bool(b)) => a == b,
            (FormValue::Integer(a), FormValue::Integer(b)) => a == b,
            (FormValue::Float(a), FormValue::Float(b)) => a == b,
            (FormValue::Integer(a), FormValue::Float(b))
            | (FormValue::Float(b), FormValue::Integer(a)) => *a as f64 == *b,
            (FormValue::BigInt(a), FormValue::BigInt(b)) => a == b,
            (FormValue::Str(a), FormValue::Str(b)) => a == b,
            (FormValue::Date(a), FormValue::Date(b)) => a == b,
            (FormValue::Blob(a), FormValue::Blob(b)) => a == b,
            (FormValue::FileList(a), FormValue::FileList(b)) => a == b,
            (FormValue::Pattern(a), FormValue::Pattern(b)) => a.as_str() == b.as_str(),
            (FormValue::Opaque(a), FormValue::Opaque(b)) => a == b,
            (FormValue::List(a), FormValue::List(b)) => Arc::ptr_eq(a, b) || a == b,
            (FormValue::Map(a), FormValue::Map(b)) => Arc::ptr_eq(a, b) || a == b,
            _ => false,
        }
    }
}

impl From<&str> for FormValue {
    fn from(s: &str) -> Self {
        FormValue::Str(s.to_string())
    }
}

impl From<String> for FormValue {
    fn from(s: String) -> Self {
        FormValue::Str(s)
    }
}

impl From<bool> for FormValue {
    fn from(b: bool) -> Self {
        FormValue::Bool(b)
    }
}

impl From<i32> for FormValue {
    fn from(i: i32) -> Self {
        FormValue::Integer(i64::from(i))
    }
}

impl From<i64> for FormValue {
    fn from(i: i64) -> Self {
        FormValue::Integer(i)
    }
}

impl From<i128> for FormValue {
    fn from(i: i128) -> Self {
        FormValue::BigInt(i)
    }
}

impl From<f64> for FormValue {
    fn from(f: f64) -> Self {
        FormValue::Float(f)
    }
}

impl From<DateTime<Utc>> for FormValue {
    fn from(d: DateTime<Utc>) -> Self {
        FormValue::Date(d)
    }
}

impl From<Blob> for FormValue {
    fn from(b: Blob) -> Self {
        FormValue::Blob(b)
    }
}

impl From<Regex> for FormValue {
    fn from(r: Regex) -> Self {
        FormValue::Pattern(r)
    }
}

impl From<Opaque> for FormValue {
    fn from(o: Opaque) -> Self {
        FormValue::Opaque(o)
    }
}

impl From<Vec<FormValue>> for FormValue {
    fn from(items: Vec<FormValue>) -> Self {
        FormValue::List(Arc::new(items))
    }
}

impl From<FormMap> for FormValue {
    fn from(map: FormMap) -> Self {
        FormValue::Map(Arc::new(map))
    }
}

impl<T: Into<FormValue>> From<Option<T>> for FormValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(FormValue::Undefined, Into::into)
    }
}
