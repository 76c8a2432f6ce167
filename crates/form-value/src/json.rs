//! Conversions between [`FormValue`] and `serde_json::Value`.
//!
//! JSON has no `undefined`, no dates and no binary data, so the trip out is
//! lossy:
//! - `undefined` becomes `null` inside arrays and is dropped from objects
//! - dates become ISO-8601 strings, patterns become their source text
//! - blobs become `{"name", "type", "size"}` descriptors
//! - big integers outside the 64-bit range become decimal strings
//! - opaque values become `null`

use std::sync::Arc;

use chrono::SecondsFormat;
use serde_json::{Map, Number, Value};

use crate::blob::Blob;
use crate::value::{FormMap, FormValue};

impl From<Value> for FormValue {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => FormValue::Null,
            Value::Bool(b) => FormValue::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FormValue::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    FormValue::BigInt(i128::from(u))
                } else {
                    FormValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => FormValue::Str(s),
            Value::Array(arr) => {
                FormValue::List(Arc::new(arr.into_iter().map(FormValue::from).collect()))
            }
            Value::Object(obj) => FormValue::Map(Arc::new(
                obj.into_iter()
                    .map(|(k, v)| (k, FormValue::from(v)))
                    .collect::<FormMap>(),
            )),
        }
    }
}

impl From<&FormValue> for Value {
    fn from(v: &FormValue) -> Self {
        match v {
            FormValue::Undefined | FormValue::Null | FormValue::Opaque(_) => Value::Null,
            FormValue::Bool(b) => Value::Bool(*b),
            FormValue::Integer(i) => Value::Number(Number::from(*i)),
            FormValue::Float(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
            FormValue::BigInt(i) => {
                if let Ok(small) = i64::try_from(*i) {
                    Value::Number(Number::from(small))
                } else if let Ok(unsigned) = u64::try_from(*i) {
                    Value::Number(Number::from(unsigned))
                } else {
                    Value::String(i.to_string())
                }
            }
            FormValue::Str(s) => Value::String(s.clone()),
            FormValue::Date(d) => Value::String(d.to_rfc3339_opts(SecondsFormat::Millis, true)),
            FormValue::Blob(b) => blob_descriptor(b),
            FormValue::FileList(files) => Value::Array(files.iter().map(blob_descriptor).collect()),
            FormValue::Pattern(r) => Value::String(r.as_str().to_string()),
            FormValue::List(items) => Value::Array(items.iter().map(Value::from).collect()),
            FormValue::Map(map) => Value::Object(
                map.iter()
                    .filter(|(_, v)| !v.is_undefined())
                    .map(|(k, v)| (k.clone(), Value::from(v)))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}

impl From<FormValue> for Value {
    fn from(v: FormValue) -> Self {
        Value::from(&v)
    }
}

fn blob_descriptor(blob: &Blob) -> Value {
    let mut obj = Map::new();
    obj.insert(
        "name".to_string(),
        blob.name().map_or(Value::Null, |n| Value::String(n.to_string())),
    );
    obj.insert(
        "type".to_string(),
        Value::String(blob.content_type().to_string()),
    );
    obj.insert("size".to_string(), Value::Number(Number::from(blob.size())));
    Value::Object(obj)
}
