//! Permissive leading-prefix number parsing.
//!
//! Equipment files and money strings are scanned best-effort: the longest
//! valid numeric prefix wins and anything unparsable quietly becomes zero.
//! These helpers mirror the `atoi`/`atof` behavior existing item files were
//! written against, so they never return an error.

/// Parse a leading integer, skipping leading ASCII whitespace.
///
/// Accepts an optional sign. Returns 0 when no digits are present; values
/// past the `i64` range saturate instead of wrapping.
pub fn leading_i64(input: &str) -> i64 {
    let bytes = input.trim_start_matches(ascii_space).as_bytes();
    let mut i = 0;
    let mut negative = false;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        negative = bytes[0] == b'-';
        i = 1;
    }

    let mut value: i64 = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(bytes[i] - b'0'));
        i += 1;
    }

    if negative {
        -value
    } else {
        value
    }
}

/// Parse a leading real-number literal, skipping leading ASCII whitespace.
///
/// Accepts an optional sign, an integer part, a fractional part, and an
/// exponent. Returns 0.0 when no number is present.
pub fn leading_f64(input: &str) -> f64 {
    let text = input.trim_start_matches(ascii_space);
    let bytes = text.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i = 1;
    }

    let mut digits = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        digits += 1;
    }

    if i < bytes.len() && bytes[i] == b'.' {
        let mut j = i + 1;
        let mut fraction = 0;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
            fraction += 1;
        }
        // a bare dot with no digits on either side is not a number
        if fraction > 0 || digits > 0 {
            i = j;
            digits += fraction;
        }
    }

    if digits == 0 {
        return 0.0;
    }

    let mut end = i;
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exponent_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        // only take the exponent if it actually has digits
        if j > exponent_start {
            end = j;
        }
    }

    text[..end].parse().unwrap_or(0.0)
}

fn ascii_space(c: char) -> bool {
    c.is_ascii_whitespace()
}
