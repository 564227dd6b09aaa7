//! Lenient scalar parsing for user-authored metadata.
//!
//! Nothing here fails: malformed input degrades to `0` / `false`.

/// Parses a leading decimal integer the way the host's script `parseInt` does:
/// leading whitespace is skipped, an optional sign is honoured, digits are
/// read until the first non-digit, and trailing text is ignored. No digits
/// yields `0`; values beyond `i64` saturate.
pub fn parse_int_lenient(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(byte - b'0');
        value = value.saturating_mul(10).saturating_add(digit);
    }

    if negative { value.saturating_neg() } else { value }
}

/// Lenient integer clamped into `[min, max]`.
pub fn parse_int_clamped(text: &str, min: i64, max: i64) -> i64 {
    parse_int_lenient(text).clamp(min, max)
}

/// `ON` / `TRUE` (any case) are true; everything else is false.
pub fn parse_bool_token(text: &str) -> bool {
    text.eq_ignore_ascii_case("on") || text.eq_ignore_ascii_case("true")
}
