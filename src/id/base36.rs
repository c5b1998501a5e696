//! Lowercase base-36 encoding for timestamps and random bytes.

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Encode an unsigned integer in base 36 using `0-9a-z`.
///
/// # Examples
///
/// ```
/// use strkit::to_base36;
///
/// assert_eq!(to_base36(0), "0");
/// assert_eq!(to_base36(35), "z");
/// assert_eq!(to_base36(36), "10");
/// ```
pub fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::with_capacity(13);
    while value > 0 {
        digits.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();

    // Only ASCII digits were pushed
    digits.into_iter().map(char::from).collect()
}

/// Encode a single byte as exactly two base-36 characters, zero-padded.
///
/// Byte values above `35` map to two significant digits and the largest,
/// `255`, encodes as `"73"`, so the output is not uniform over the alphabet.
pub fn byte_to_base36(byte: u8) -> String {
    let hi = DIGITS[(byte / 36) as usize] as char;
    let lo = DIGITS[(byte % 36) as usize] as char;
    let mut out = String::with_capacity(2);
    out.push(hi);
    out.push(lo);
    out
}
