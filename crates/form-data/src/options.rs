//! Options for structuring form data.

use serde::{Deserialize, Serialize};

/// Default for [`ParseOptions::max_index`].
pub const DEFAULT_MAX_INDEX: usize = 10_000;

/// What to do when the same name is submitted more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DuplicateKeys {
    /// Gather every value into a sequence, in submission order.
    #[default]
    Collect,
    /// Keep only the last submitted value.
    Last,
}

/// What to do with `__proto__`, `constructor` and `prototype` steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReservedKeys {
    /// Store them as ordinary keys.
    #[default]
    Keep,
    /// Drop the entry.
    Skip,
    /// Fail the whole parse.
    Reject,
}

/// Options for [`parse_with`](crate::parse_with).
///
/// # Example
///
/// ```
/// use nordstern_form_data::{DuplicateKeys, ParseOptions};
///
/// let options: ParseOptions = serde_json::from_str(r#"{"duplicateKeys": "last"}"#).unwrap();
/// assert_eq!(options.duplicate_keys, DuplicateKeys::Last);
/// assert_eq!(options.max_index, 10_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseOptions {
    pub duplicate_keys: DuplicateKeys,
    pub reserved_keys: ReservedKeys,
    /// Largest array index a submitted name may address. Values above
    /// [`MAX_INDEX`](nordstern_form_path::MAX_INDEX) still fail with a path
    /// error.
    pub max_index: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            duplicate_keys: DuplicateKeys::default(),
            reserved_keys: ReservedKeys::default(),
            max_index: DEFAULT_MAX_INDEX,
        }
    }
}

impl ParseOptions {
    pub fn duplicate_keys(mut self, policy: DuplicateKeys) -> Self {
        self.duplicate_keys = policy;
        self
    }

    pub fn reserved_keys(mut self, policy: ReservedKeys) -> Self {
        self.reserved_keys = policy;
        self
    }

    pub fn max_index(mut self, max: usize) -> Self {
        self.max_index = max;
        self
    }
}
