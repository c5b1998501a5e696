//! Masking policies for email addresses and phone numbers.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::mask::policy::{mask_edges, DEFAULT_MASK_CHAR};

const VISIBLE: usize = 2;

/// Optional `+`, a non-zero leading digit, 2 to 15 digits in total.
static E164: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{1,14}$").expect("E.164 pattern is valid"));

/// Mask the local part of an email address, keeping the domain.
///
/// Input without `@` is masked as a plain string.
///
/// # Examples
///
/// ```
/// use strkit::mask_email;
///
/// assert_eq!(mask_email("example@gmail.com"), "ex***le@gmail.com");
/// assert_eq!(mask_email("not-an-email"), "no********il");
/// ```
pub fn mask_email(source: &str) -> String {
    let Some((local, domain)) = source.split_once('@') else {
        debug!("no '@' in email, masking as plain text");
        return mask_edges(source, VISIBLE, VISIBLE, DEFAULT_MASK_CHAR);
    };

    let local = mask_edges(local, VISIBLE, VISIBLE, DEFAULT_MASK_CHAR);
    format!("{local}@{domain}")
}

/// Mask the digits of a phone number, keeping its formatting.
///
/// Digits and `+` are extracted and checked against an E.164-style
/// pattern. A valid number has all but its first two and last two
/// significant characters masked, written back into the original positions
/// so spaces, dashes and parentheses stay in place. Anything else is masked
/// as a plain string.
///
/// # Examples
///
/// ```
/// use strkit::mask_phone;
///
/// assert_eq!(mask_phone("+1234567890"), "+1*******90");
/// assert_eq!(mask_phone("+1 (234) 567-890"), "+1 (***) ***-*90");
/// ```
pub fn mask_phone(source: &str) -> String {
    let normalized: String = source.chars().filter(|&c| is_significant(c)).collect();

    if !E164.is_match(&normalized) {
        debug!("phone number failed validation, masking as plain text");
        return mask_edges(source, VISIBLE, VISIBLE, DEFAULT_MASK_CHAR);
    }

    let masked = mask_edges(&normalized, VISIBLE, VISIBLE, DEFAULT_MASK_CHAR);
    let mut replacements = masked.chars();
    source
        .chars()
        .map(|c| {
            if is_significant(c) {
                replacements.next().unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

fn is_significant(c: char) -> bool {
    c.is_ascii_digit() || c == '+'
}
