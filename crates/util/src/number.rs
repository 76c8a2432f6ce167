//! Number formatting compatible with JavaScript's `String(number)`.
//!
//! Form controls only ever hold text, so numeric defaults are rendered the
//! way a browser would render them.

/// Format an `f64` the way JavaScript's `Number.prototype.toString()` does.
///
/// # Examples
///
/// ```
/// use nordstern_util::format_float;
///
/// assert_eq!(format_float(1.0), "1");
/// assert_eq!(format_float(-0.0), "0");
/// assert_eq!(format_float(1.5), "1.5");
/// assert_eq!(format_float(f64::NAN), "NaN");
/// assert_eq!(format_float(1e21), "1e+21");
/// assert_eq!(format_float(1.5e-7), "1.5e-7");
/// ```
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let abs = value.abs();
    if (1e-6..1e21).contains(&abs) {
        // Rust prints the shortest round-trip digits, same as JS in this range.
        return format!("{value}");
    }
    let exp = format!("{value:e}");
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exp,
    }
}

/// Format a signed integer in base 10.
pub fn format_integer(value: i64) -> String {
    value.to_string()
}

/// Format a big integer in base 10, without the `n` suffix JS literals use.
pub fn format_bigint(value: i128) -> String {
    value.to_string()
}
