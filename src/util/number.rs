//! Numeric helpers for quantity editing
//!
//! These normalise whatever the shopper typed or picked into a quantity.
//! None of them fail: malformed input degrades to a fixed default.

/// Quantities at or above this value cannot be shown in the drop-down
pub const INPUT_MODE_THRESHOLD: i64 = 10;

/// Maximum number of characters the free-text quantity field accepts
pub const MAX_INPUT_LENGTH: usize = 5;

/// Parse the leading integer of `text`.
///
/// Leading whitespace is skipped, an optional `+`/`-` sign is honoured and
/// parsing stops at the first non-digit, so `"12abc"` is 12 and `"3.7"` is 3.
/// Returns `None` when no digit follows. Values too large for `i64`
/// saturate.
pub fn parse_int_prefix(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        let digit = i64::from(byte - b'0');
        value = value.saturating_mul(10).saturating_add(digit);
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Cap a value at `max_value`. There is no lower bound here.
pub fn clamp(value: i64, max_value: u32) -> i64 {
    value.min(i64::from(max_value))
}

/// Two-sided clamp applied to every quantity reported to the owner
pub fn clamp_to_range(value: i64, floor: i64, max_value: u32) -> u32 {
    let max = i64::from(max_value);
    let floor = floor.clamp(0, max);
    // Within [0, u32::MAX] after the clamp
    value.clamp(floor, max) as u32
}

/// Value committed from user text: unparsable text counts as a single unit
pub fn parse_committed(text: &str, max_value: u32) -> i64 {
    match parse_int_prefix(text) {
        Some(parsed) => clamp(parsed, max_value),
        None => 1,
    }
}

/// Text shown while the shopper types: blank for anything unparsable or negative
pub fn parse_display(text: &str, max_value: u32) -> String {
    match parse_int_prefix(text) {
        Some(parsed) if parsed >= 0 => clamp(parsed, max_value).to_string(),
        _ => String::new(),
    }
}

/// Keep at most [`MAX_INPUT_LENGTH`] characters of raw field input
pub fn truncate_input(text: &str) -> &str {
    match text.char_indices().nth(MAX_INPUT_LENGTH) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
