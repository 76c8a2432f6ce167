use regex::Regex;

use crate::rule::{Bound, Rule};
use crate::validity::ValidityState;

/// A native constraint and the validity flag that reports its violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    Required,
    Min,
    Max,
    Step,
    MinLength,
    MaxLength,
    Pattern,
}

impl ConstraintKind {
    /// HTML attribute name.
    pub fn attribute(self) -> &'static str {
        match self {
            ConstraintKind::Required => "required",
            ConstraintKind::Min => "min",
            ConstraintKind::Max => "max",
            ConstraintKind::Step => "step",
            ConstraintKind::MinLength => "minlength",
            ConstraintKind::MaxLength => "maxlength",
            ConstraintKind::Pattern => "pattern",
        }
    }

    pub fn is_violated(self, validity: &ValidityState) -> bool {
        match self {
            ConstraintKind::Required => validity.value_missing,
            ConstraintKind::Min => validity.range_underflow,
            ConstraintKind::Max => validity.range_overflow,
            ConstraintKind::Step => validity.step_mismatch,
            ConstraintKind::MinLength => validity.too_short,
            ConstraintKind::MaxLength => validity.too_long,
            ConstraintKind::Pattern => validity.pattern_mismatch,
        }
    }
}

/// Declared constraints of one field. Unset rules are not rendered.
///
/// # Example
///
/// ```
/// use nordstern_form_constraints::{Bound, Constraints, Rule};
///
/// let constraints = Constraints::new()
///     .required(Rule::with_message(true, "Please enter your age"))
///     .min(18)
///     .max(Rule::with_message(Bound::from(130), "Really?"));
///
/// let attributes = constraints.attributes();
/// assert_eq!(attributes.min.as_deref(), Some("18"));
/// assert_eq!(attributes.max.as_deref(), Some("130"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    pub required: Option<Rule<bool>>,
    pub min: Option<Rule<Bound>>,
    pub max: Option<Rule<Bound>>,
    pub step: Option<Rule<Bound>>,
    pub min_length: Option<Rule<u32>>,
    pub max_length: Option<Rule<u32>>,
    pub pattern: Option<Rule<Regex>>,
}

impl Constraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self, rule: impl Into<Rule<bool>>) -> Self {
        self.required = Some(rule.into());
        self
    }

    pub fn min(mut self, rule: impl Into<Rule<Bound>>) -> Self {
        self.min = Some(rule.into());
        self
    }

    pub fn max(mut self, rule: impl Into<Rule<Bound>>) -> Self {
        self.max = Some(rule.into());
        self
    }

    pub fn step(mut self, rule: impl Into<Rule<Bound>>) -> Self {
        self.step = Some(rule.into());
        self
    }

    pub fn min_length(mut self, rule: impl Into<Rule<u32>>) -> Self {
        self.min_length = Some(rule.into());
        self
    }

    pub fn max_length(mut self, rule: impl Into<Rule<u32>>) -> Self {
        self.max_length = Some(rule.into());
        self
    }

    pub fn pattern(mut self, rule: impl Into<Rule<Regex>>) -> Self {
        self.pattern = Some(rule.into());
        self
    }

    /// Attribute values with messages stripped.
    pub fn attributes(&self) -> ConstraintAttributes {
        ConstraintAttributes {
            required: self.required.as_ref().map(|r| *r.value()),
            min: self.min.as_ref().map(|r| r.value().to_string()),
            max: self.max.as_ref().map(|r| r.value().to_string()),
            step: self.step.as_ref().map(|r| r.value().to_string()),
            min_length: self.min_length.as_ref().map(|r| *r.value()),
            max_length: self.max_length.as_ref().map(|r| *r.value()),
            pattern: self.pattern.as_ref().map(|r| r.value().as_str().to_string()),
        }
    }

    /// Custom messages, in declaration order.
    pub fn messages(&self) -> impl Iterator<Item = (ConstraintKind, &str)> + '_ {
        [
            (ConstraintKind::Required, self.required.as_ref().and_then(Rule::message)),
            (ConstraintKind::Min, self.min.as_ref().and_then(Rule::message)),
            (ConstraintKind::Max, self.max.as_ref().and_then(Rule::message)),
            (ConstraintKind::Step, self.step.as_ref().and_then(Rule::message)),
            (ConstraintKind::MinLength, self.min_length.as_ref().and_then(Rule::message)),
            (ConstraintKind::MaxLength, self.max_length.as_ref().and_then(Rule::message)),
            (ConstraintKind::Pattern, self.pattern.as_ref().and_then(Rule::message)),
        ]
        .into_iter()
        .filter_map(|(kind, message)| message.map(|m| (kind, m)))
    }

    /// Message of the first declared rule whose flag is raised.
    pub fn violated_message(&self, validity: &ValidityState) -> Option<(ConstraintKind, &str)> {
        self.messages().find(|(kind, _)| kind.is_violated(validity))
    }
}

/// Bare constraint values, ready to render as HTML attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintAttributes {
    pub required: Option<bool>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub step: Option<String>,
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
    /// Source text of the pattern.
    pub pattern: Option<String>,
}

impl ConstraintAttributes {
    /// `(attribute, value)` pairs of the set attributes.
    ///
    /// `required` is a boolean attribute: it appears with an empty value
    /// when true and not at all when false.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, String)> + '_ {
        let required = match self.required {
            Some(true) => Some(String::new()),
            _ => None,
        };
        [
            ("required", required),
            ("min", self.min.clone()),
            ("max", self.max.clone()),
            ("step", self.step.clone()),
            ("minlength", self.min_length.map(|n| n.to_string())),
            ("maxlength", self.max_length.map(|n| n.to_string())),
            ("pattern", self.pattern.clone()),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_strip_messages() {
        let constraints = Constraints::new()
            .required(Rule::with_message(true, "Required"))
            .min_length(Rule::with_message(2u32, "Too short"))
            .max_length(10u32)
            .pattern(Rule::with_message(
                Regex::new("^[a-z]+$").unwrap(),
                "Lowercase only",
            ));
        assert_eq!(
            constraints.attributes(),
            ConstraintAttributes {
                required: Some(true),
                min_length: Some(2),
                max_length: Some(10),
                pattern: Some("^[a-z]+$".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_unset_rules_are_omitted() {
        let attributes = Constraints::new().step("any").attributes();
        let pairs: Vec<_> = attributes.iter().collect();
        assert_eq!(pairs, vec![("step", "any".to_string())]);
        assert!(Constraints::new().attributes().is_empty());
    }

    #[test]
    fn test_required_false_is_not_rendered() {
        let attributes = Constraints::new().required(false).min(0.5).attributes();
        assert_eq!(attributes.required, Some(false));
        let pairs: Vec<_> = attributes.iter().collect();
        assert_eq!(pairs, vec![("min", "0.5".to_string())]);
    }

    #[test]
    fn test_iter_uses_html_attribute_names() {
        let attributes = Constraints::new()
            .required(true)
            .min_length(1u32)
            .max_length(3u32)
            .attributes();
        let names: Vec<_> = attributes.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["required", "minlength", "maxlength"]);
    }

    #[test]
    fn test_messages_in_declaration_order() {
        let constraints = Constraints::new()
            .pattern(Rule::with_message(Regex::new("x").unwrap(), "pattern"))
            .min(Rule::with_message(Bound::from(1), "min"))
            .required(true);
        let kinds: Vec<_> = constraints.messages().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, vec![ConstraintKind::Min, ConstraintKind::Pattern]);
    }

    #[test]
    fn test_violated_message_first_raised_wins() {
        let constraints = Constraints::new()
            .min_length(Rule::with_message(3u32, "Too short"))
            .pattern(Rule::with_message(Regex::new("^[0-9]+$").unwrap(), "Digits only"));
        let both = ValidityState {
            too_short: true,
            pattern_mismatch: true,
            ..Default::default()
        };
        assert_eq!(
            constraints.violated_message(&both),
            Some((ConstraintKind::MinLength, "Too short"))
        );
        let pattern_only = ValidityState {
            pattern_mismatch: true,
            ..Default::default()
        };
        assert_eq!(
            constraints.violated_message(&pattern_only),
            Some((ConstraintKind::Pattern, "Digits only"))
        );
        assert_eq!(constraints.violated_message(&ValidityState::default()), None);
    }

    #[test]
    fn test_flag_mapping() {
        let validity = ValidityState {
            range_overflow: true,
            ..Default::default()
        };
        assert!(ConstraintKind::Max.is_violated(&validity));
        assert!(!ConstraintKind::Min.is_violated(&validity));
        assert!(!ConstraintKind::Required.is_violated(&validity));
    }
}
