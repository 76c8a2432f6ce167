use std::fmt;

use nordstern_util::format_float;

/// A constraint value, optionally paired with a message to show instead of
/// the platform's default one when the constraint is violated.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule<T> {
    Value(T),
    WithMessage { value: T, message: String },
}

impl<T> Rule<T> {
    pub fn with_message(value: T, message: impl Into<String>) -> Self {
        Rule::WithMessage {
            value,
            message: message.into(),
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Rule::Value(value) | Rule::WithMessage { value, .. } => value,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Rule::Value(_) => None,
            Rule::WithMessage { message, .. } => Some(message),
        }
    }
}

impl<T> From<T> for Rule<T> {
    fn from(value: T) -> Self {
        Rule::Value(value)
    }
}

/// Bound of a `min`, `max` or `step` constraint.
///
/// Numeric inputs take numbers; date and time inputs take their textual
/// form (`2024-01-01`, `12:30`), and `step` also accepts `any`.
#[derive(Debug, Clone, PartialEq)]
pub enum Bound {
    Number(f64),
    Text(String),
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Number(n) => f.write_str(&format_float(*n)),
            Bound::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Bound {
    fn from(n: f64) -> Self {
        Bound::Number(n)
    }
}

impl From<i32> for Bound {
    fn from(n: i32) -> Self {
        Bound::Number(f64::from(n))
    }
}

impl From<&str> for Bound {
    fn from(s: &str) -> Self {
        Bound::Text(s.to_string())
    }
}

impl From<String> for Bound {
    fn from(s: String) -> Self {
        Bound::Text(s)
    }
}

impl From<f64> for Rule<Bound> {
    fn from(n: f64) -> Self {
        Rule::Value(Bound::from(n))
    }
}

impl From<i32> for Rule<Bound> {
    fn from(n: i32) -> Self {
        Rule::Value(Bound::from(n))
    }
}

impl From<&str> for Rule<Bound> {
    fn from(s: &str) -> Self {
        Rule::Value(Bound::from(s))
    }
}
