//! Lenient number parsing for raw form field text
//!
//! Form fields are plain text. Numbers are read from the longest numeric
//! prefix after leading whitespace, so `"4500 per month"` reads as `4500`.
//! Text with no numeric prefix yields NaN (floats) or `None` (integers),
//! both of which serialize to JSON `null`.

use std::sync::LazyLock;

use regex::Regex;

static FLOAT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)")
        .expect("Invalid float prefix regex")
});

static INT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+").expect("Invalid integer prefix regex"));

/// Parse the leading float of `raw`, or NaN when there is none.
pub fn parse_float(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let Some(m) = FLOAT_PREFIX.find(trimmed) else {
        return f64::NAN;
    };

    let text = m.as_str();
    match text.trim_start_matches(['+', '-']) {
        "Infinity" if text.starts_with('-') => f64::NEG_INFINITY,
        "Infinity" => f64::INFINITY,
        _ => text.parse().unwrap_or(f64::NAN),
    }
}

/// Parse the leading base-10 integer of `raw`.
///
/// Fractions truncate (`"2.9"` reads as `2`). Returns `None` when no digits
/// lead the text. Digit runs beyond the `i64` range saturate.
pub fn parse_int(raw: &str) -> Option<i64> {
    let text = INT_PREFIX.find(raw.trim_start())?.as_str();
    match text.parse() {
        Ok(value) => Some(value),
        Err(_) if text.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_float_plain_values() {
        assert_eq!(parse_float("4500"), 4500.0);
        assert_eq!(parse_float("12.5"), 12.5);
        assert_eq!(parse_float("  -3.25"), -3.25);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("1e3"), 1000.0);
    }

    #[test]
    fn test_parse_float_reads_leading_prefix() {
        assert_eq!(parse_float("4500 per month"), 4500.0);
        assert_eq!(parse_float("12.5.7"), 12.5);
        assert_eq!(parse_float("7e"), 7.0);
    }

    #[test]
    fn test_parse_float_without_number_is_nan() {
        assert!(parse_float("").is_nan());
        assert!(parse_float("   ").is_nan());
        assert!(parse_float("abc").is_nan());
        assert!(parse_float("$4500").is_nan());
    }

    #[test]
    fn test_parse_float_infinity() {
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_parse_int_values() {
        assert_eq!(parse_int("3"), Some(3));
        assert_eq!(parse_int(" 12 accounts"), Some(12));
        assert_eq!(parse_int("-1"), Some(-1));
        assert_eq!(parse_int("2.9"), Some(2));
    }

    #[test]
    fn test_parse_int_without_digits_is_none() {
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("none"), None);
        assert_eq!(parse_int(".5"), None);
    }

    #[test]
    fn test_parse_int_out_of_range_saturates() {
        assert_eq!(parse_int("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_int("+99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_int("-99999999999999999999999 missed"), Some(i64::MIN));
    }
}
