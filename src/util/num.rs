use std::sync::LazyLock;

use regex::Regex;

/// Magnitude from which numbers are rendered in exponent notation.
pub const EXPONENT_UPPER_BOUND: f64 = 1e21;
/// Magnitude below which non-zero numbers are rendered in exponent notation.
pub const EXPONENT_LOWER_BOUND: f64 = 1e-6;

static DECIMAL_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$").expect("valid decimal pattern")
});

/// Renders a number as text.
///
/// Integral values are printed without a fractional part, non-finite values
/// as `NaN`, `Infinity` and `-Infinity`, and very large or very small
/// magnitudes in exponent notation with an explicit exponent sign.
///
/// ## Example
/// ```
/// use boolparser::util::num::format_number;
///
/// assert_eq!(format_number(5.0), "5");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (EXPONENT_LOWER_BOUND..EXPONENT_UPPER_BOUND).contains(&magnitude) {
        return format!("{value}");
    }

    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        },
        _ => formatted,
    }
}

/// Converts text into a number using permissive numeric-string rules.
///
/// Leading and trailing whitespace is ignored, empty text is `0`, the words
/// `Infinity`, `+Infinity` and `-Infinity` are recognised, as are the `0x`,
/// `0o` and `0b` radix prefixes. Anything else that is not a plain decimal
/// literal yields `NaN`.
///
/// ## Example
/// ```
/// use boolparser::util::num::text_to_number;
///
/// assert_eq!(text_to_number(" 42 "), 42.0);
/// assert_eq!(text_to_number(""), 0.0);
/// assert_eq!(text_to_number("0x1f"), 31.0);
/// assert!(text_to_number("12abc").is_nan());
/// ```
#[must_use]
pub fn text_to_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {},
    }

    if let Some(value) = radix_literal(trimmed) {
        return value;
    }

    if DECIMAL_LITERAL.is_match(trimmed) {
        return trimmed.parse().unwrap_or(f64::NAN);
    }

    f64::NAN
}

/// Parses `0x`, `0o` and `0b` prefixed integers. Returns `None` when the text
/// carries no radix prefix and `Some(NaN)` when the digits are invalid.
fn radix_literal(text: &str) -> Option<f64> {
    let prefix = text.get(..2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let mut value = 0.0_f64;
    for digit in digits.chars() {
        match digit.to_digit(radix) {
            Some(d) => value = value.mul_add(f64::from(radix), f64::from(d)),
            None => return Some(f64::NAN),
        }
    }
    Some(value)
}
