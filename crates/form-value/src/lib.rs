//! Structured form values.
//!
//! This crate holds the value tree that form submissions are structured into
//! and that default values are read from, together with the serializer that
//! turns typed values into the strings, booleans and blobs a DOM form control
//! accepts.
//!
//! # Example
//!
//! ```
//! use nordstern_form_value::{serialize, FormValue};
//! use serde_json::json;
//!
//! let value = FormValue::from(json!({"age": 30, "name": "Ada"}));
//! let out = serialize(&value);
//! assert_eq!(serde_json::Value::from(&out), json!({"age": "30", "name": "Ada"}));
//! ```

pub mod blob;
pub mod json;
pub mod serialize;
pub mod value;

pub use blob::{Blob, Opaque};
pub use serialize::{is_serialized, serialize};
pub use value::{FormMap, FormValue};
