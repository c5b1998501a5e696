//! Value normalization and percent-encoding for query components.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;
use tracing::warn;

/// Bytes escaped in a query component.
///
/// Everything except ASCII alphanumerics and `-_.!~*'()` is escaped, the
/// same set browsers leave untouched in `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a key or value for use in a query string.
///
/// # Examples
///
/// ```
/// use strkit::encode_component;
///
/// assert_eq!(encode_component("a b&c"), "a%20b%26c");
/// assert_eq!(encode_component("1,2"), "1%2C2");
/// assert_eq!(encode_component("it's(ok)!"), "it's(ok)!");
/// ```
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Turn a JSON value into the plain text written into a query string.
///
/// - `null` becomes an empty string
/// - booleans become `true` / `false`
/// - numbers are written the way JavaScript prints them: shortest form,
///   integral floats without `.0`, exponent form at `1e21` and above or
///   below `1e-6` (`1e+21`, `1e-7`)
/// - strings are used as-is
/// - arrays and objects become compact JSON when `serialize_objects` is set,
///   otherwise an empty string
pub fn normalize_value(value: &Value, serialize_objects: bool) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                n.as_f64().map(format_float).unwrap_or_default()
            }
        }
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => {
            if !serialize_objects {
                return String::new();
            }
            serde_json::to_string(value).unwrap_or_else(|err| {
                warn!(error = %err, "object could not be serialized, writing empty value");
                String::new()
            })
        }
    }
}

fn format_float(f: f64) -> String {
    if f == 0.0 {
        // Covers -0.0 as well
        return "0".to_string();
    }
    let magnitude = f.abs();
    if !f.is_finite() {
        f.to_string()
    } else if magnitude >= 1e21 || magnitude < 1e-6 {
        // Exponent form with an explicit sign on positive exponents
        let formatted = format!("{f:e}");
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        }
    } else if f.fract() == 0.0 {
        format!("{f:.0}")
    } else {
        f.to_string()
    }
}
