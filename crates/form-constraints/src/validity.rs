//! The DOM seam: validity flags of a form control and the hook for custom
//! validity messages.

/// Snapshot of a control's native validity flags.
///
/// `custom_error` is raised whenever a non-empty custom validity message is
/// set, independently of the other flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidityState {
    pub value_missing: bool,
    pub type_mismatch: bool,
    pub pattern_mismatch: bool,
    pub too_long: bool,
    pub too_short: bool,
    pub range_underflow: bool,
    pub range_overflow: bool,
    pub step_mismatch: bool,
    pub bad_input: bool,
    pub custom_error: bool,
}

impl ValidityState {
    /// No flag raised, custom error included.
    pub fn valid(&self) -> bool {
        self.natively_valid() && !self.custom_error
    }

    /// No flag raised other than `custom_error`.
    pub fn natively_valid(&self) -> bool {
        !(self.value_missing
            || self.type_mismatch
            || self.pattern_mismatch
            || self.too_long
            || self.too_short
            || self.range_underflow
            || self.range_overflow
            || self.step_mismatch
            || self.bad_input)
    }
}

/// A form control that reports validity and accepts a custom message.
pub trait ValidityTarget {
    fn validity(&self) -> ValidityState;

    /// Set the custom validity message; an empty message clears it.
    fn set_custom_validity(&mut self, message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let state = ValidityState::default();
        assert!(state.valid());
        assert!(state.natively_valid());
    }

    #[test]
    fn test_custom_error_is_not_native() {
        let state = ValidityState {
            custom_error: true,
            ..Default::default()
        };
        assert!(!state.valid());
        assert!(state.natively_valid());
    }

    #[test]
    fn test_any_native_flag_invalidates() {
        let state = ValidityState {
            step_mismatch: true,
            ..Default::default()
        };
        assert!(!state.valid());
        assert!(!state.natively_valid());
    }
}
