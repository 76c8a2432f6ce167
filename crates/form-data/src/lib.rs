//! Form submission structuring.
//!
//! A browser submits a form as a flat list of `(name, value)` pairs, with
//! repeated names for multi-valued controls. When the control names are form
//! paths (`address.city`, `tasks[0].content`) this crate rebuilds the nested
//! value they describe.
//!
//! # Example
//!
//! ```
//! use nordstern_form_data::{parse, FormData};
//! use serde_json::json;
//!
//! let mut form = FormData::new();
//! form.append("name", "John Doe");
//! form.append("hobbies", "Music");
//! form.append("hobbies", "Coding");
//! form.append("address.city", "Anytown");
//!
//! let value = parse(&form).unwrap();
//! assert_eq!(
//!     serde_json::Value::from(&value),
//!     json!({"name": "John Doe", "hobbies": ["Music", "Coding"], "address": {"city": "Anytown"}})
//! );
//! ```

mod form_data;
pub use form_data::{FormData, FormDataValue};

pub mod options;
pub use options::{DuplicateKeys, ParseOptions, ReservedKeys};

mod parse;
pub use parse::{parse, parse_with, ParseError};
