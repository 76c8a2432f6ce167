//! Value serializer.
//!
//! Turns a typed value tree into one that can be written straight into DOM
//! default-value attributes: numbers, big integers and dates become strings,
//! `null` becomes absent, and every other leaf is passed through untouched.
//!
//! Subtrees that need no conversion are returned by identity, so serializing
//! an already serialized tree hands back the very same containers.

use std::sync::Arc;

use chrono::SecondsFormat;
use nordstern_util::{format_bigint, format_float, format_integer};

use crate::value::{FormMap, FormValue};

/// Serialize `value` for use as form default values.
///
/// Case order, first match wins:
/// 1. `null` → `undefined`
/// 2. sequence → element-wise, holes stay holes
/// 3. mapping → key-wise, same key set
/// 4. integer, float, big integer → base-10 string
/// 5. date → ISO-8601, UTC, millisecond precision
/// 6. anything else → unchanged
///
/// Blobs, file lists, patterns and opaque values are leaves and are never
/// recursed into.
///
/// # Example
///
/// ```
/// use nordstern_form_value::{serialize, FormValue};
///
/// assert_eq!(serialize(&FormValue::from(123)), FormValue::from("123"));
/// assert_eq!(serialize(&FormValue::from(true)), FormValue::from(true));
/// assert!(serialize(&FormValue::Null).is_undefined());
/// ```
pub fn serialize(value: &FormValue) -> FormValue {
    serialize_changed(value).unwrap_or_else(|| value.clone())
}

/// Check whether `value` only holds DOM-ready leaves already.
pub fn is_serialized(value: &FormValue) -> bool {
    serialize_changed(value).is_none()
}

/// Returns the serialized form of `value`, or `None` when it would be
/// unchanged.
fn serialize_changed(value: &FormValue) -> Option<FormValue> {
    match value {
        FormValue::Null => Some(FormValue::Undefined),
        FormValue::List(items) => {
            let changed: Vec<Option<FormValue>> = items.iter().map(serialize_changed).collect();
            if changed.iter().all(Option::is_none) {
                return None;
            }
            let out: Vec<FormValue> = items
                .iter()
                .zip(changed)
                .map(|(item, c)| c.unwrap_or_else(|| item.clone()))
                .collect();
            Some(FormValue::List(Arc::new(out)))
        }
        FormValue::Map(map) => {
            let changed: Vec<Option<FormValue>> = map.values().map(serialize_changed).collect();
            if changed.iter().all(Option::is_none) {
                return None;
            }
            let out: FormMap = map
                .iter()
                .zip(changed)
                .map(|((k, v), c)| (k.clone(), c.unwrap_or_else(|| v.clone())))
                .collect();
            Some(FormValue::Map(Arc::new(out)))
        }
        FormValue::Integer(i) => Some(FormValue::Str(format_integer(*i))),
        FormValue::Float(f) => Some(FormValue::Str(format_float(*f))),
        FormValue::BigInt(i) => Some(FormValue::Str(format_bigint(*i))),
        FormValue::Date(d) => Some(FormValue::Str(
            d.to_rfc3339_opts(SecondsFormat::Millis, true),
        )),
        FormValue::Undefined
        | FormValue::Bool(_)
        | FormValue::Str(_)
        | FormValue::Blob(_)
        | FormValue::FileList(_)
        | FormValue::Pattern(_)
        | FormValue::Opaque(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob::{Blob, Opaque};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_null_becomes_undefined() {
        assert!(serialize(&FormValue::Null).is_undefined());
        assert!(serialize(&FormValue::Undefined).is_undefined());
    }

    #[test]
    fn test_numbers_become_strings() {
        assert_eq!(serialize(&FormValue::from(0)), FormValue::from("0"));
        assert_eq!(serialize(&FormValue::from(-42)), FormValue::from("-42"));
        assert_eq!(serialize(&FormValue::from(2.5)), FormValue::from("2.5"));
    }

    #[test]
    fn test_dates_keep_milliseconds() {
        let d = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(
            serialize(&FormValue::from(d)),
            FormValue::from("2024-01-01T12:00:00.000Z")
        );
    }

    #[test]
    fn test_unchanged_subtrees_keep_identity() {
        let untouched = FormValue::map([("s", FormValue::from("x"))]);
        let root = FormValue::map([
            ("keep", untouched.clone()),
            ("n", FormValue::from(1)),
        ]);
        let out = serialize(&root);
        assert!(!out.ptr_eq(&root));
        assert!(out.as_map().unwrap()["keep"].ptr_eq(&untouched));
    }

    #[test]
    fn test_opaque_leaves_pass_through() {
        let blob = FormValue::from(Blob::file("a.txt", "a", "text/plain"));
        let opaque = FormValue::from(Opaque::new(vec![1u8, 2, 3]));
        assert!(serialize(&blob).ptr_eq(&blob));
        assert!(serialize(&opaque).ptr_eq(&opaque));
    }

    #[test]
    fn test_is_serialized() {
        assert!(is_serialized(&FormValue::map([("a", FormValue::from("1"))])));
        assert!(!is_serialized(&FormValue::map([("a", FormValue::from(1))])));
        assert!(!is_serialized(&FormValue::list([FormValue::Null])));
    }

    #[test]
    fn test_deep_nesting_serializes() {
        let mut list = FormValue::from(1);
        let mut map = FormValue::from(1);
        for _ in 0..64 {
            list = FormValue::list([list, FormValue::from("x")]);
            map = FormValue::map([("a", map), ("b", FormValue::from("x"))]);
        }
        for root in [list, map] {
            let out = serialize(&root);
            assert!(is_serialized(&out));
            let mut leaf = &out;
            while let Some(first) = leaf
                .as_list()
                .and_then(|items| items.first())
                .or_else(|| leaf.as_map().and_then(|m| m.get("a")))
            {
                leaf = first;
            }
            assert_eq!(leaf, &FormValue::from("1"));
        }
    }
}
