//! Decoding query strings back into ordered pairs.

use url::form_urlencoded;

use crate::error::{Result, StrkitError};

/// Decode a query string into `(key, value)` pairs, keeping order and
/// repeated keys.
///
/// A leading `?` is ignored, empty segments are skipped and `+` decodes to a
/// space.
///
/// # Examples
///
/// ```
/// use strkit::parse_params;
///
/// let pairs = parse_params("?a=1&b=x%20y&b=2")?;
/// assert_eq!(pairs[1], ("b".to_string(), "x y".to_string()));
/// assert_eq!(pairs.len(), 3);
/// # Ok::<(), strkit::StrkitError>(())
/// ```
///
/// # Errors
///
/// Returns [`StrkitError::InvalidQuery`] when a segment has an empty key.
pub fn parse_params(query: &str) -> Result<Vec<(String, String)>> {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut pairs = Vec::new();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if key.is_empty() {
            return Err(StrkitError::InvalidQuery(format!("empty key before value {value:?}")));
        }
        pairs.push((key.into_owned(), value.into_owned()));
    }

    Ok(pairs)
}

/// First decoded value for `key`, if present.
///
/// # Examples
///
/// ```
/// use strkit::get_param;
///
/// assert_eq!(get_param("page=2&page=3", "page")?, Some("2".to_string()));
/// assert_eq!(get_param("page=2", "sort")?, None);
/// # Ok::<(), strkit::StrkitError>(())
/// ```
pub fn get_param(query: &str, key: &str) -> Result<Option<String>> {
    Ok(parse_params(query)?
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v))
}

/// Render already-encoded pairs as `key=value` joined by `separator`.
///
/// Used to turn pair-list output back into its string form.
pub fn pairs_to_string(pairs: &[(String, String)], separator: &str) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(separator)
}
