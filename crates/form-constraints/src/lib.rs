//! Native constraint validation for form fields.
//!
//! A field declares rules (`required`, `min`, `max`, `step`, `minLength`,
//! `maxLength`, `pattern`), each either a bare value or a value with a custom
//! message. [`register_field`] resolves the declaration into the HTML
//! attributes to render plus two handlers: [`FieldRegistration::attach`],
//! run when the control becomes available, and
//! [`FieldRegistration::handle_change`], run on every value change. Both
//! translate the control's native validity flags into the declared messages
//! through the [`ValidityTarget`] seam.
//!
//! # Example
//!
//! ```
//! use nordstern_form_constraints::{
//!     register_field, Constraints, FieldOptions, Rule, ValidityState, ValidityTarget,
//! };
//!
//! struct Input {
//!     validity: ValidityState,
//!     message: String,
//! }
//!
//! impl ValidityTarget for Input {
//!     fn validity(&self) -> ValidityState {
//!         self.validity
//!     }
//!     fn set_custom_validity(&mut self, message: &str) {
//!         self.message = message.to_string();
//!     }
//! }
//!
//! let field = register_field(
//!     FieldOptions::new("email")
//!         .constraints(Constraints::new().required(Rule::with_message(true, "We need your email"))),
//! )
//! .unwrap();
//!
//! let mut input = Input {
//!     validity: ValidityState { value_missing: true, ..Default::default() },
//!     message: String::new(),
//! };
//! field.attach(&mut input);
//! assert_eq!(input.message, "We need your email");
//!
//! input.validity.value_missing = false;
//! field.handle_change(&mut input);
//! assert_eq!(input.message, "");
//! ```

mod constraints;
pub use constraints::{ConstraintAttributes, ConstraintKind, Constraints};

mod field;
pub use field::{
    register_field, AttachCallback, ChangeCallback, FieldOptions, FieldRegistration, FieldState,
};

mod rule;
pub use rule::{Bound, Rule};

mod validity;
pub use validity::{ValidityState, ValidityTarget};
