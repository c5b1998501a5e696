//! Generic masking: keep the edges of a string, hide the middle.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, StrkitError};

/// Mask character used when none is given.
pub const DEFAULT_MASK_CHAR: char = '*';

/// Visible characters kept at each edge when none are given.
pub const DEFAULT_VISIBLE: i64 = 2;

/// Replace the middle of `source` with `mask_char`, keeping `start`
/// characters at the front and `end` at the back.
///
/// Lengths are counted in `char`s. When `start + end` covers the whole
/// string nothing is hidden and `source` is returned unchanged.
///
/// # Examples
///
/// ```
/// use strkit::mask;
///
/// assert_eq!(mask("4111111111111111", 4, 4, '#')?, "4111########1111");
/// assert_eq!(mask("ab", 2, 2, '*')?, "ab");
/// # Ok::<(), strkit::StrkitError>(())
/// ```
///
/// # Errors
///
/// Returns [`StrkitError::InvalidRange`] if `start` or `end` is negative.
pub fn mask(source: &str, start: i64, end: i64, mask_char: char) -> Result<String> {
    if start < 0 || end < 0 {
        debug!(start, end, "negative visible range");
        return Err(StrkitError::InvalidRange { start, end });
    }

    let start = usize::try_from(start).unwrap_or(usize::MAX);
    let end = usize::try_from(end).unwrap_or(usize::MAX);
    Ok(mask_edges(source, start, end, mask_char))
}

/// Masking with already validated counts.
pub(crate) fn mask_edges(source: &str, start: usize, end: usize, mask_char: char) -> String {
    let chars: Vec<char> = source.chars().collect();
    let len = chars.len();
    let visible = start.saturating_add(end);
    if len <= visible {
        return source.to_string();
    }

    let mut out = String::with_capacity(source.len());
    out.extend(&chars[..start]);
    out.extend(std::iter::repeat(mask_char).take(len - visible));
    out.extend(&chars[len - end..]);
    out
}

/// Callable form of [`mask`] with optional overrides.
///
/// Missing counts default to [`DEFAULT_VISIBLE`] and a missing mask
/// character to [`DEFAULT_MASK_CHAR`].
///
/// # Examples
///
/// ```
/// use strkit::obscure;
///
/// assert_eq!(obscure("secret-token", None, None, None)?, "se********en");
/// assert_eq!(obscure("secret-token", Some(0), Some(5), Some('x'))?, "xxxxxxxtoken");
/// # Ok::<(), strkit::StrkitError>(())
/// ```
pub fn obscure(
    source: &str,
    start: Option<i64>,
    end: Option<i64>,
    mask_char: Option<char>,
) -> Result<String> {
    mask(
        source,
        start.unwrap_or(DEFAULT_VISIBLE),
        end.unwrap_or(DEFAULT_VISIBLE),
        mask_char.unwrap_or(DEFAULT_MASK_CHAR),
    )
}

/// Reusable masking settings.
///
/// Values are immutable: the `with_*` methods return a new policy, so
/// output already produced from an earlier policy never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MaskPolicy {
    /// Characters left visible at the start.
    pub visible_start: i64,
    /// Characters left visible at the end.
    pub visible_end: i64,
    /// Character written over hidden positions.
    pub mask_char: char,
}

impl MaskPolicy {
    /// Policy keeping `start` and `end` characters with the default mask.
    pub const fn edges(start: i64, end: i64) -> Self {
        Self {
            visible_start: start,
            visible_end: end,
            mask_char: DEFAULT_MASK_CHAR,
        }
    }

    /// Set the number of leading characters left visible.
    pub fn with_visible_start(self, visible_start: i64) -> Self {
        Self { visible_start, ..self }
    }

    /// Set the number of trailing characters left visible.
    pub fn with_visible_end(self, visible_end: i64) -> Self {
        Self { visible_end, ..self }
    }

    /// Set the mask character.
    pub fn with_mask_char(self, mask_char: char) -> Self {
        Self { mask_char, ..self }
    }

    /// Mask `source` with this policy.
    pub fn apply(&self, source: &str) -> Result<String> {
        mask(source, self.visible_start, self.visible_end, self.mask_char)
    }
}

impl Default for MaskPolicy {
    fn default() -> Self {
        Self::edges(DEFAULT_VISIBLE, DEFAULT_VISIBLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_middle() {
        assert_eq!(mask("abcdefgh", 2, 2, '*').unwrap(), "ab****gh");
        assert_eq!(mask("abcdefgh", 0, 3, '-').unwrap(), "-----fgh");
        assert_eq!(mask("abcdefgh", 3, 0, '-').unwrap(), "abc-----");
        assert_eq!(mask("abc", 0, 0, '*').unwrap(), "***");
    }

    #[test]
    fn test_mask_short_input_unchanged() {
        assert_eq!(mask("ab", 2, 2, '*').unwrap(), "ab");
        assert_eq!(mask("abcd", 2, 2, '*').unwrap(), "abcd");
        assert_eq!(mask("", 0, 0, '*').unwrap(), "");
        assert_eq!(mask("abc", i64::MAX, i64::MAX, '*').unwrap(), "abc");
    }

    #[test]
    fn test_mask_negative_range() {
        assert_eq!(
            mask("abcdef", -1, 2, '*'),
            Err(StrkitError::InvalidRange { start: -1, end: 2 })
        );
        assert!(mask("abcdef", 1, -2, '*').is_err());
    }

    #[test]
    fn test_mask_counts_chars() {
        assert_eq!(mask("ñandú-çà", 1, 1, '•').unwrap(), "ñ••••••à");
    }

    #[test]
    fn test_policy_is_immutable() {
        let base = MaskPolicy::default();
        let first = base.apply("password").unwrap();
        let wider = base.with_visible_start(4).with_mask_char('#');

        assert_eq!(first, "pa****rd");
        assert_eq!(wider.apply("password").unwrap(), "pass##rd");
        assert_eq!(base.apply("password").unwrap(), first);
    }

    #[test]
    fn test_policy_setters() {
        let policy = MaskPolicy::default()
            .with_visible_start(1)
            .with_visible_end(3)
            .with_mask_char('#');
        assert_eq!(policy.apply("password").unwrap(), "p####ord");
    }

    #[test]
    fn test_policy_from_json() {
        let policy: MaskPolicy = serde_json::from_str(r#"{"visibleEnd": 4}"#).unwrap();
        assert_eq!(policy, MaskPolicy::edges(2, 4));
    }
}
