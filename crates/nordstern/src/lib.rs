//! Form values for server-driven HTML forms.
//!
//! The pieces, each in its own crate and re-exported here:
//! - [`path`]: the `a.b[0].c` path language, lookup and copy-on-write update
//! - [`value`]: the structured value tree and the default-value serializer
//! - [`form_data`]: structuring submitted entries into a value tree
//! - [`constraints`]: constraint attributes and custom validity messages
//!
//! A typical round trip renders a form from [`DefaultValues`], structures
//! the submission with [`parse`], and on failure renders again from
//! [`FormState::from_submission`] so the user's input is kept.
//!
//! # Example
//!
//! ```
//! use nordstern::{parse, FormData, FormState};
//!
//! let submitted: FormData = [("email", "ada@example.com"), ("tags", "a"), ("tags", "b")]
//!     .into_iter()
//!     .collect();
//!
//! let values = parse(&submitted).unwrap();
//! assert_eq!(values.as_map().unwrap().len(), 2);
//!
//! let state = FormState::from_submission(&submitted, "Email already registered").unwrap();
//! assert_eq!(state.default_values.text("email").unwrap(), Some("ada@example.com"));
//! assert_eq!(state.default_values.text("tags[1]").unwrap(), Some("b"));
//! ```

pub use nordstern_form_constraints as constraints;
pub use nordstern_form_data as form_data;
pub use nordstern_form_path as path;
pub use nordstern_form_value as value;

pub use nordstern_form_constraints::{
    register_field, Bound, ConstraintAttributes, Constraints, FieldOptions, FieldRegistration,
    FieldState, Rule, ValidityState, ValidityTarget,
};
pub use nordstern_form_data::{parse, parse_with, FormData, FormDataValue, ParseError, ParseOptions};
pub use nordstern_form_path::{get_path, parse_path, set_path, PathError, PathStep};
pub use nordstern_form_value::{serialize, Blob, FormValue};

pub mod cli;

mod default_values;
pub use default_values::{DefaultValues, FormState};
