//! Change-driven validity messages against a simulated control that derives
//! its flags from the rendered constraint attributes.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use nordstern_form_constraints::{
    register_field, Bound, ConstraintAttributes, Constraints, FieldOptions, FieldRegistration,
    FieldState, Rule, ValidityState, ValidityTarget,
};
use regex::Regex;

#[derive(Clone, Copy, PartialEq)]
enum InputType {
    Text,
    Number,
}

/// Rough model of an `<input>`: native flags follow from the attributes and
/// the current value, the custom message is whatever was last set.
struct Input {
    input_type: InputType,
    attributes: ConstraintAttributes,
    value: String,
    custom: String,
}

impl Input {
    fn new(input_type: InputType, field: &FieldRegistration) -> Self {
        Self {
            input_type,
            attributes: field.attributes().clone(),
            value: String::new(),
            custom: String::new(),
        }
    }

    fn fill(&mut self, field: &FieldRegistration, value: &str) {
        self.value = value.to_string();
        field.handle_change(self);
    }

    fn validation_message(&self) -> String {
        if !self.custom.is_empty() {
            self.custom.clone()
        } else if self.validity().valid() {
            String::new()
        } else {
            "Please match the requested format.".to_string()
        }
    }
}

impl ValidityTarget for Input {
    fn validity(&self) -> ValidityState {
        let a = &self.attributes;
        let mut state = ValidityState {
            custom_error: !self.custom.is_empty(),
            ..Default::default()
        };
        if self.value.is_empty() {
            state.value_missing = a.required == Some(true);
            return state;
        }
        let len = self.value.chars().count() as u32;
        state.too_short = a.min_length.is_some_and(|n| len < n);
        state.too_long = a.max_length.is_some_and(|n| len > n);
        if let Some(pattern) = &a.pattern {
            let anchored = Regex::new(&format!("^(?:{pattern})$")).unwrap();
            state.pattern_mismatch = !anchored.is_match(&self.value);
        }
        if self.input_type == InputType::Number {
            let Ok(n) = self.value.parse::<f64>() else {
                state.bad_input = true;
                return state;
            };
            let min = a.min.as_deref().and_then(|s| s.parse::<f64>().ok());
            let max = a.max.as_deref().and_then(|s| s.parse::<f64>().ok());
            state.range_underflow = min.is_some_and(|m| n < m);
            state.range_overflow = max.is_some_and(|m| n > m);
            let step = a.step.as_deref().map_or(Some(1.0), |s| s.parse::<f64>().ok());
            if let Some(step) = step {
                let base = min.unwrap_or(0.0);
                state.step_mismatch = ((n - base) / step).fract() != 0.0;
            }
        }
        state
    }

    fn set_custom_validity(&mut self, message: &str) {
        self.custom = message.to_string();
    }
}

fn custom_message_fields() -> (FieldRegistration, FieldRegistration, FieldRegistration, FieldRegistration) {
    let username = register_field(FieldOptions::new("username").constraints(
        Constraints::new().pattern(Rule::with_message(Regex::new("[a-z]{4,8}").unwrap(), "pattern error")),
    ))
    .unwrap();
    let password = register_field(
        FieldOptions::new("password").constraints(
            Constraints::new()
                .min_length(Rule::with_message(6u32, "minLength error"))
                .max_length(Rule::with_message(9u32, "maxLength error")),
        ),
    )
    .unwrap();
    let age = register_field(
        FieldOptions::new("age").constraints(
            Constraints::new()
                .min(Rule::with_message(Bound::from(0), "min error"))
                .max(Rule::with_message(Bound::from(120), "max error"))
                .step(Rule::with_message(Bound::from(1), "step error")),
        ),
    )
    .unwrap();
    let color = register_field(
        FieldOptions::new("color")
            .constraints(Constraints::new().required(Rule::with_message(true, "required error"))),
    )
    .unwrap();
    (username, password, age, color)
}

#[test]
fn renders_constraint_attributes() {
    let (username, password, age, color) = custom_message_fields();
    let names = |field: &FieldRegistration| field.attributes().iter().map(|(n, _)| n).collect::<Vec<_>>();
    assert_eq!(names(&username), vec!["pattern"]);
    assert_eq!(names(&password), vec!["minlength", "maxlength"]);
    assert_eq!(names(&age), vec!["min", "max", "step"]);
    assert_eq!(names(&color), vec!["required"]);
    assert_eq!(username.attributes().pattern.as_deref(), Some("[a-z]{4,8}"));
}

#[test]
fn pattern_message_follows_the_value() {
    let (username, ..) = custom_message_fields();
    let mut input = Input::new(InputType::Text, &username);

    input.fill(&username, "aa");
    assert!(input.validity().pattern_mismatch);
    assert_eq!(input.validation_message(), "pattern error");

    input.fill(&username, "valid");
    assert!(input.validity().valid());
    assert_eq!(input.validation_message(), "");
}

#[test]
fn length_messages() {
    let (_, password, ..) = custom_message_fields();
    let mut input = Input::new(InputType::Text, &password);

    input.fill(&password, "short");
    assert!(input.validity().too_short);
    assert_eq!(input.validation_message(), "minLength error");

    input.fill(&password, "much too long");
    assert!(input.validity().too_long);
    assert_eq!(input.validation_message(), "maxLength error");

    input.fill(&password, "validpass");
    assert!(input.validity().valid());
    assert_eq!(input.validation_message(), "");
}

#[test]
fn range_and_step_messages() {
    let (_, _, age, _) = custom_message_fields();
    let mut input = Input::new(InputType::Number, &age);

    input.fill(&age, "-1");
    assert!(input.validity().range_underflow);
    assert_eq!(input.validation_message(), "min error");

    input.fill(&age, "121");
    assert!(input.validity().range_overflow);
    assert_eq!(input.validation_message(), "max error");

    input.fill(&age, "2.5");
    assert!(input.validity().step_mismatch);
    assert_eq!(input.validation_message(), "step error");

    input.fill(&age, "50");
    assert!(input.validity().valid());
    assert_eq!(input.validation_message(), "");
}

#[test]
fn required_message_is_seeded_on_attach() {
    let (_, _, _, color) = custom_message_fields();
    let mut input = Input::new(InputType::Text, &color);

    color.attach(&mut input);
    assert!(input.validity().value_missing);
    assert_eq!(input.validation_message(), "required error");
    assert_eq!(color.state(&input), FieldState::CustomInvalid("required error".into()));

    input.fill(&color, "blue");
    assert!(input.validity().valid());
    assert_eq!(input.validation_message(), "");
    assert_eq!(color.state(&input), FieldState::Valid);
}

#[test]
fn attach_clears_a_stale_message_when_filled() {
    let (_, _, _, color) = custom_message_fields();
    let mut input = Input::new(InputType::Text, &color);
    input.value = "red".into();
    input.custom = "required error".into();

    color.attach(&mut input);
    assert_eq!(input.validation_message(), "");
}

#[test]
fn rules_without_messages_use_platform_messages() {
    let field = register_field(
        FieldOptions::new("username")
            .constraints(Constraints::new().pattern(Regex::new("[a-z]{4,8}").unwrap()).required(true)),
    )
    .unwrap();
    let mut input = Input::new(InputType::Text, &field);
    input.custom = "left alone".into();

    input.fill(&field, "aa");
    assert_eq!(input.custom, "left alone");
    assert_eq!(field.state(&input), FieldState::Invalid);
}

#[test]
fn a_passing_later_rule_does_not_clear_an_earlier_message() {
    let (_, password, ..) = custom_message_fields();
    let mut input = Input::new(InputType::Text, &password);

    // too short, but within max length
    input.fill(&password, "abc");
    assert_eq!(input.validation_message(), "minLength error");
    assert_eq!(password.state(&input), FieldState::CustomInvalid("minLength error".into()));
}

#[test]
fn native_only_failure_is_reported_as_invalid() {
    let field = register_field(
        FieldOptions::new("age").constraints(
            Constraints::new()
                .min(Rule::with_message(Bound::from(0), "min error"))
                .max(120),
        ),
    )
    .unwrap();
    let mut input = Input::new(InputType::Number, &field);

    input.fill(&field, "200");
    assert_eq!(input.custom, "");
    assert_eq!(field.state(&input), FieldState::Invalid);
}

#[test]
fn change_callback_runs_after_validity_update() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let field = register_field(
        FieldOptions::new("password")
            .constraints(Constraints::new().min_length(Rule::with_message(6u32, "minLength error")))
            .on_change(move |target| {
                assert!(target.validity().custom_error);
                seen.fetch_add(1, Ordering::SeqCst);
            }),
    )
    .unwrap();
    let mut input = Input::new(InputType::Text, &field);

    input.fill(&field, "short");
    input.fill(&field, "tiny");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn date_bounds_render_as_text() {
    let field = register_field(
        FieldOptions::new("when").constraints(Constraints::new().min("2024-01-01").max("2024-12-31").step("any")),
    )
    .unwrap();
    let pairs: Vec<_> = field.attributes().iter().collect();
    assert_eq!(
        pairs,
        vec![
            ("min", "2024-01-01".to_string()),
            ("max", "2024-12-31".to_string()),
            ("step", "any".to_string()),
        ]
    );
}
