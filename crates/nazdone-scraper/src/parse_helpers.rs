//! Small text and JSON coercion helpers shared by the resolver and ranker.
//!
//! Product pages mix Persian, Arabic-Indic and ASCII digits freely, and
//! embedded variant data is loosely typed (prices arrive as numbers or
//! strings, labels as strings or numbers). Everything here is total: bad
//! input yields `None`, never an error.

use serde_json::Value;

/// Replaces Persian (`۰`–`۹`) and Arabic-Indic (`٠`–`٩`) digits with their
/// ASCII equivalents. Other characters pass through unchanged.
pub(crate) fn fold_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{06F0}'..='\u{06F9}' => ascii_digit(c as u32 - 0x06F0),
            '\u{0660}'..='\u{0669}' => ascii_digit(c as u32 - 0x0660),
            other => other,
        })
        .collect()
}

fn ascii_digit(offset: u32) -> char {
    char::from_digit(offset, 10).unwrap_or('0')
}

/// Keeps only the digits of `text` and parses them as one integer.
///
/// `"۱۲۰,۰۰۰ تومان"` → `Some(120000)`. Returns `None` when no digits remain
/// or the number does not fit in `u64`.
pub(crate) fn digits_only_integer(text: &str) -> Option<u64> {
    let digits: String = fold_digits(text)
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<u64>().ok()
}

/// Parses the longest leading decimal number of `s`, which must consist of
/// ASCII digits and dots only.
///
/// Requires at least one digit: `"6.5"` → `6.5`, `"1.2.3"` → `1.2`,
/// `".5"` → `0.5`, `"."` → `None`, `""` → `None`.
pub(crate) fn parse_leading_decimal(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0usize;
    let mut seen_dot = false;
    let mut seen_digit = false;

    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }

    if !seen_digit {
        return None;
    }
    s[..end].trim_end_matches('.').parse::<f64>().ok()
}

/// Renders a JSON scalar as text when it carries a usable value.
///
/// Non-empty strings and numbers count; `null`, `""`, booleans, arrays and
/// objects do not.
pub(crate) fn json_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Returns the first key of `obj` whose value renders as text.
pub(crate) fn first_text(obj: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| obj.get(*key).and_then(json_text))
}

/// Returns the first key of `obj` holding a non-null value.
pub(crate) fn first_non_null<'a>(obj: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| obj.get(*key).filter(|v| !v.is_null()))
}

/// Coerces an embedded price value to a non-negative integer.
///
/// Numbers are truncated. Strings have digits folded and thousands
/// separators removed, then parse as a decimal (truncated) or, failing
/// that, as digits only. Negative or non-finite values yield `None`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn json_price(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.trunc() as u64)
        }),
        Value::String(s) => {
            let cleaned: String = fold_digits(s)
                .chars()
                .filter(|c| !matches!(c, ',' | '\u{066C}') && !c.is_whitespace())
                .collect();
            if cleaned.is_empty() {
                return None;
            }
            match cleaned.parse::<f64>() {
                Ok(f) if f.is_finite() && f >= 0.0 => Some(f.trunc() as u64),
                Ok(_) => None,
                Err(_) => digits_only_integer(&cleaned),
            }
        }
        _ => None,
    }
}

/// Strips a leading `background:` declaration prefix (case-insensitive)
/// and the whitespace after it.
pub(crate) fn strip_background_prefix(value: &str) -> &str {
    const PREFIX: &str = "background:";
    match value.get(..PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(PREFIX) => value[PREFIX.len()..].trim_start(),
        _ => value,
    }
}
