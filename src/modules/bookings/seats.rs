//! Seat-count conversion.
//!
//! Browsers hand the form a string; the seat count is that string converted
//! with the usual `Number()` rules and then floored. Anything that does not
//! convert is NaN, which never passes the positivity check.

/// ECMAScript WhiteSpace and LineTerminator code points, the only
/// characters skipped around a numeric string.
fn is_numeric_padding(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Convert text to a number the way a browser's `Number()` does.
///
/// Returns `f64::NAN` for anything that is not a numeric literal.
pub fn to_number(raw: &str) -> f64 {
    let text = raw.trim_matches(is_numeric_padding);

    if text.is_empty() {
        return 0.0;
    }

    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = radix_literal(text) {
        return value;
    }

    if is_decimal_literal(text) {
        return text.parse::<f64>().unwrap_or(f64::NAN);
    }

    f64::NAN
}

/// Floored seat count, or `None` when the text is not numeric or the floored
/// value is not a positive whole number that fits in a `u128`.
pub fn parse_seat_count(raw: &str) -> Option<u128> {
    let seats = to_number(raw).floor();

    if seats.is_nan() || seats <= 0.0 || !seats.is_finite() || seats >= u128::MAX as f64 {
        return None;
    }

    Some(seats as u128)
}

/// `0x..`, `0o..` and `0b..` literals. Signs are not allowed.
fn radix_literal(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return None;
    }

    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let mut value = 0.0_f64;
    for c in text[2..].chars() {
        let digit = c.to_digit(radix)?;
        value = value * f64::from(radix) + f64::from(digit);
    }

    Some(value)
}

/// Optional sign, digits with an optional fraction (or a bare fraction),
/// then an optional exponent.
fn is_decimal_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        frac_digits = i - frac_start;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_integers() {
        assert_eq!(parse_seat_count("3"), Some(3));
        assert_eq!(parse_seat_count("1000000"), Some(1_000_000));
    }

    #[test]
    fn counts_beyond_u64_are_kept_exact() {
        assert_eq!(
            parse_seat_count("10000000000000000000"),
            Some(10_000_000_000_000_000_000)
        );
        assert_eq!(
            parse_seat_count("1e20"),
            Some(100_000_000_000_000_000_000)
        );
    }

    #[test]
    fn fractions_floor_before_positivity_check() {
        assert_eq!(parse_seat_count("2.8"), Some(2));
        assert_eq!(parse_seat_count("0.9"), None);
        assert_eq!(parse_seat_count(".5"), None);
        assert_eq!(parse_seat_count("5."), Some(5));
    }

    #[test]
    fn zero_negative_and_garbage_are_rejected() {
        for raw in ["0", "-5", "-0.5", "abc", "3 seats", "1,000", "--1", "e5", "."] {
            assert_eq!(parse_seat_count(raw), None, "{raw:?}");
        }
    }

    #[test]
    fn empty_text_converts_to_zero() {
        assert_eq!(to_number(""), 0.0);
        assert_eq!(to_number("   "), 0.0);
        assert_eq!(parse_seat_count(""), None);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(parse_seat_count("  4\n"), Some(4));
        assert_eq!(parse_seat_count("\t+2\u{feff}"), Some(2));
        assert_eq!(parse_seat_count("\u{3000}7\u{2028}"), Some(7));
    }

    #[test]
    fn unicode_whitespace_outside_ecmascript_is_not_padding() {
        assert!(to_number("\u{85}3").is_nan());
        assert!(to_number("3\u{180E}").is_nan());
        assert_eq!(parse_seat_count("\u{85}3"), None);
    }

    #[test]
    fn exponent_and_radix_literals() {
        assert_eq!(parse_seat_count("1e3"), Some(1000));
        assert_eq!(parse_seat_count("2.5E1"), Some(25));
        assert_eq!(parse_seat_count("0x10"), Some(16));
        assert_eq!(parse_seat_count("0b101"), Some(5));
        assert_eq!(parse_seat_count("0o17"), Some(15));
        assert!(to_number("-0x10").is_nan());
        assert!(to_number("0x").is_nan());
        assert!(to_number("0xfg").is_nan());
    }

    #[test]
    fn rust_only_spellings_are_not_numbers() {
        assert!(to_number("inf").is_nan());
        assert!(to_number("NaN").is_nan());
        assert!(to_number("infinity").is_nan());
        assert_eq!(to_number("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn non_finite_counts_are_rejected() {
        assert_eq!(parse_seat_count("Infinity"), None);
        assert_eq!(parse_seat_count("1e400"), None);
    }
}
