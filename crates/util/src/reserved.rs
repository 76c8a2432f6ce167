/// Object keys that carry prototype semantics in a browser.
///
/// Submitted form keys are attacker controlled. The value model stores
/// mappings as plain ordered maps, so these keys are ordinary data here, but
/// callers that hand structured values back to a scripting runtime may want
/// to drop or reject them.
pub const RESERVED_KEYS: [&str; 3] = ["__proto__", "constructor", "prototype"];

/// Check whether `key` is one of [`RESERVED_KEYS`].
///
/// # Examples
///
/// ```
/// use nordstern_util::is_reserved_key;
///
/// assert!(is_reserved_key("__proto__"));
/// assert!(!is_reserved_key("proto"));
/// ```
pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}
