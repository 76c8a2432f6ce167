//! nordstern-util - Utility functions shared by the nordstern form crates.
//!
//! Small leaf helpers with no dependencies on the value model: the table of
//! object keys that must never gain special meaning, and number formatting
//! that matches what a browser writes into a form control.

pub mod number;
pub mod reserved;

// Re-exports for convenience
pub use number::{format_bigint, format_float, format_integer};
pub use reserved::{is_reserved_key, RESERVED_KEYS};
