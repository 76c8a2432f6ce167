use nordstern_form_data::{parse, FormData, ParseError};
use nordstern_form_path::{get_path, PathError};
use nordstern_form_value::{serialize, FormValue};
use tracing::debug;

/// Default values of a form, serialized once for rendering.
///
/// Lookups go by field name, so a control named `tasks[0].content` reads its
/// `defaultValue` with `text("tasks[0].content")`.
///
/// # Example
///
/// ```
/// use nordstern::{DefaultValues, FormValue};
/// use serde_json::json;
///
/// let defaults = DefaultValues::new(&FormValue::from(json!({
///     "age": 30,
///     "newsletter": true,
///     "tasks": [{"content": "Write code"}]
/// })));
///
/// assert_eq!(defaults.text("age").unwrap(), Some("30"));
/// assert_eq!(defaults.text("tasks[0].content").unwrap(), Some("Write code"));
/// assert!(defaults.checked("newsletter").unwrap());
/// assert!(!defaults.checked("missing").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultValues {
    tree: FormValue,
}

impl Default for DefaultValues {
    fn default() -> Self {
        Self {
            tree: FormValue::empty_map(),
        }
    }
}

impl DefaultValues {
    pub fn new(values: &FormValue) -> Self {
        Self {
            tree: serialize(values),
        }
    }

    /// The serialized tree.
    pub fn tree(&self) -> &FormValue {
        &self.tree
    }

    pub fn get(&self, path: &str) -> Result<Option<&FormValue>, PathError> {
        get_path(&self.tree, path)
    }

    /// Text default of a field. `None` for missing values and non-text
    /// leaves.
    pub fn text(&self, path: &str) -> Result<Option<&str>, PathError> {
        Ok(self.get(path)?.and_then(FormValue::as_str))
    }

    /// Checked default of a checkbox or radio field.
    pub fn checked(&self, path: &str) -> Result<bool, PathError> {
        Ok(self.get(path)?.and_then(FormValue::as_bool).unwrap_or(false))
    }
}

impl From<FormValue> for DefaultValues {
    fn from(values: FormValue) -> Self {
        Self::new(&values)
    }
}

/// What a form is rendered from: its defaults and the error of the last
/// submission, if it failed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub default_values: DefaultValues,
    pub submit_error: Option<FormValue>,
}

impl FormState {
    pub fn new(default_values: impl Into<DefaultValues>) -> Self {
        Self {
            default_values: default_values.into(),
            submit_error: None,
        }
    }

    /// State for re-rendering after a failed submission: the submitted
    /// entries become the new defaults so nothing the user typed is lost.
    ///
    /// # Errors
    ///
    /// Returns the structuring engine's error if `form_data` cannot be
    /// parsed.
    pub fn from_submission(form_data: &FormData, submit_error: impl Into<FormValue>) -> Result<Self, ParseError> {
        let values = parse(form_data)?;
        debug!(entries = form_data.len(), "keeping submitted values as defaults");
        Ok(Self {
            default_values: DefaultValues::new(&values),
            submit_error: Some(submit_error.into()),
        })
    }

    pub fn with_submit_error(mut self, submit_error: impl Into<FormValue>) -> Self {
        self.submit_error = Some(submit_error.into());
        self
    }

    /// Look up part of a structured submit error, e.g. a per-field message.
    pub fn submit_error_at(&self, path: &str) -> Result<Option<&FormValue>, PathError> {
        match &self.submit_error {
            Some(error) => get_path(error, path),
            None => Ok(None),
        }
    }
}
