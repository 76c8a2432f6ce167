use std::fmt;
use std::sync::Arc;

use nordstern_form_path::{parse_path, Path, PathError, PathStep};
use tracing::trace;

use crate::constraints::{ConstraintAttributes, Constraints};
use crate::validity::ValidityTarget;

/// Caller hook run after the change handler has updated custom validity.
pub type ChangeCallback = Arc<dyn Fn(&dyn ValidityTarget) + Send + Sync>;

/// Caller hook handed the control once [`FieldRegistration::attach`] has
/// seeded it.
pub type AttachCallback = Arc<dyn Fn(&dyn ValidityTarget) + Send + Sync>;

/// Declaration of one form field.
#[derive(Clone, Default)]
pub struct FieldOptions {
    pub name: String,
    pub constraints: Constraints,
    pub on_change: Option<ChangeCallback>,
    pub on_attach: Option<AttachCallback>,
}

impl FieldOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn on_change(mut self, callback: impl Fn(&dyn ValidityTarget) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(callback));
        self
    }

    pub fn on_attach(mut self, callback: impl Fn(&dyn ValidityTarget) + Send + Sync + 'static) -> Self {
        self.on_attach = Some(Arc::new(callback));
        self
    }
}

impl fmt::Debug for FieldOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldOptions")
            .field("name", &self.name)
            .field("constraints", &self.constraints)
            .field("on_change", &self.on_change.is_some())
            .field("on_attach", &self.on_attach.is_some())
            .finish()
    }
}

/// Where a field stands with respect to its constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldState {
    Valid,
    /// Invalid, reported with the platform's own message.
    Invalid,
    /// Invalid, reported with a declared message.
    CustomInvalid(String),
}

/// A field resolved from its [`FieldOptions`]: the attributes to render and
/// the handlers that keep its custom validity in step with its value.
#[derive(Clone)]
pub struct FieldRegistration {
    name: String,
    path: Path,
    constraints: Constraints,
    attributes: ConstraintAttributes,
    on_change: Option<ChangeCallback>,
    on_attach: Option<AttachCallback>,
}

/// Resolve a field declaration.
///
/// # Errors
///
/// Returns the tokenizer's `PathError` if `name` is not a valid form path.
///
/// # Example
///
/// ```
/// use nordstern_form_constraints::{register_field, Constraints, FieldOptions, Rule};
///
/// let field = register_field(
///     FieldOptions::new("tasks[0].content")
///         .constraints(Constraints::new().required(Rule::with_message(true, "Describe the task"))),
/// )
/// .unwrap();
///
/// assert_eq!(field.name(), "tasks[0].content");
/// assert_eq!(field.attributes().required, Some(true));
/// ```
pub fn register_field(options: FieldOptions) -> Result<FieldRegistration, PathError> {
    let path = parse_path(&options.name)?;
    let attributes = options.constraints.attributes();
    Ok(FieldRegistration {
        name: options.name,
        path,
        constraints: options.constraints,
        attributes,
        on_change: options.on_change,
        on_attach: options.on_attach,
    })
}

impl FieldRegistration {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tokenized name.
    pub fn path(&self) -> &[PathStep] {
        &self.path
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn attributes(&self) -> &ConstraintAttributes {
        &self.attributes
    }

    /// Seed custom validity when the control becomes available.
    ///
    /// Only a `required` rule with a message is consulted, so an empty
    /// required field reports the declared message before any input. The
    /// caller's attach hook runs afterwards, whether or not a message was
    /// seeded.
    pub fn attach(&self, target: &mut dyn ValidityTarget) {
        if let Some(message) = self.constraints.required.as_ref().and_then(|r| r.message()) {
            if target.validity().value_missing {
                trace!(field = %self.name, "seeding required message");
                target.set_custom_validity(message);
            } else {
                target.set_custom_validity("");
            }
        }
        if let Some(callback) = &self.on_attach {
            callback(&*target);
        }
    }

    /// Update custom validity after the control's value changed, then run
    /// the caller's callback.
    ///
    /// Rules are checked in declaration order and the first one with a
    /// message whose flag is raised wins; with no such rule the custom
    /// message is cleared. Fields without any message leave the control
    /// alone.
    pub fn handle_change(&self, target: &mut dyn ValidityTarget) {
        if self.constraints.messages().next().is_some() {
            let validity = target.validity();
            match self.constraints.violated_message(&validity) {
                Some((kind, message)) => {
                    trace!(field = %self.name, rule = kind.attribute(), "custom validity set");
                    target.set_custom_validity(message);
                }
                None => target.set_custom_validity(""),
            }
        }
        if let Some(callback) = &self.on_change {
            callback(&*target);
        }
    }

    pub fn state(&self, target: &dyn ValidityTarget) -> FieldState {
        let validity = target.validity();
        if let Some((_, message)) = self.constraints.violated_message(&validity) {
            FieldState::CustomInvalid(message.to_string())
        } else if validity.natively_valid() {
            FieldState::Valid
        } else {
            FieldState::Invalid
        }
    }
}

impl fmt::Debug for FieldRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRegistration")
            .field("name", &self.name)
            .field("attributes", &self.attributes)
            .field("on_change", &self.on_change.is_some())
            .field("on_attach", &self.on_attach.is_some())
            .finish()
    }
}
