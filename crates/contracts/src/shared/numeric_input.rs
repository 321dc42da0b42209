//! Разбор и отображение чисел из полей ввода
//!
//! Numeric form fields never reject input: an unparseable value becomes `NaN`
//! and is carried as-is into the request.

/// Parses the longest decimal prefix of `raw`.
///
/// Leading whitespace is skipped, then an optional sign, digits, an optional
/// fraction and an optional exponent are consumed. `Infinity` is recognised
/// after the sign. Trailing garbage is ignored: `"12abc"` gives `12.0`.
/// Returns `NaN` when no digits are found.
pub fn parse_decimal_prefix(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;

    let negative = matches!(bytes.first(), Some(b'-'));
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    if s[i..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = &s[int_start..i];

    let mut frac_digits = "";
    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > frac_start {
            frac_digits = &s[frac_start..j];
            i = j;
        } else if !int_digits.is_empty() {
            // "5." is a complete number
            i = frac_start;
        }
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return f64::NAN;
    }

    let mut exponent = "";
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_digits_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_digits_start {
            exponent = &s[i..j];
        }
    }

    let mut normalized = String::with_capacity(i + 2);
    if negative {
        normalized.push('-');
    }
    normalized.push_str(if int_digits.is_empty() { "0" } else { int_digits });
    if !frac_digits.is_empty() {
        normalized.push('.');
        normalized.push_str(frac_digits);
    }
    normalized.push_str(exponent);

    normalized.parse::<f64>().unwrap_or(f64::NAN)
}

/// Parses the longest integer prefix of `raw`.
///
/// Leading whitespace and an optional sign are accepted; a `0x`/`0X` prefix
/// switches to base 16. Parsing stops at the first non-digit, so `"12.7"`
/// gives `12`. Returns `NaN` when no digits are found.
///
/// The result is an `f64`, so very long digit strings round to the nearest
/// representable value instead of overflowing.
pub fn parse_integer_prefix(raw: &str) -> f64 {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16u32, &rest[2..]),
        _ => (10u32, rest),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return f64::NAN;
    }

    let value = if radix == 10 {
        digits[..end].parse::<f64>().unwrap_or(f64::NAN)
    } else {
        digits[..end].chars().fold(0.0, |acc, c| {
            acc * f64::from(radix) + c.to_digit(radix).map_or(0.0, f64::from)
        })
    };

    if negative {
        -value
    } else {
        value
    }
}

/// Shortest display form of a number as it appears in URLs and labels.
///
/// Integers print without a fraction (`500`), non-finite values print as
/// `NaN`, `Infinity` and `-Infinity`, and magnitudes outside
/// `[1e-6, 1e21)` switch to exponent form (`1e+21`, `1e-7`).
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

    let abs = value.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        };
    }

    format!("{}", value)
}

/// Same-value equality: `NaN` equals `NaN`, `0.0` and `-0.0` differ.
pub fn same_value(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_prefix() {
        assert_eq!(parse_decimal_prefix("500"), 500.0);
        assert_eq!(parse_decimal_prefix("  12.5"), 12.5);
        assert_eq!(parse_decimal_prefix("-3"), -3.0);
        assert_eq!(parse_decimal_prefix("+.5"), 0.5);
        assert_eq!(parse_decimal_prefix("5."), 5.0);
        assert_eq!(parse_decimal_prefix("1e3"), 1000.0);
        assert_eq!(parse_decimal_prefix("2E-2x"), 0.02);
        assert_eq!(parse_decimal_prefix("7e"), 7.0);
        assert_eq!(parse_decimal_prefix("12abc"), 12.0);
        assert_eq!(parse_decimal_prefix("Infinity"), f64::INFINITY);
        assert_eq!(parse_decimal_prefix("-Infinityx"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_parse_decimal_prefix_fails_open() {
        assert!(parse_decimal_prefix("").is_nan());
        assert!(parse_decimal_prefix("abc").is_nan());
        assert!(parse_decimal_prefix("-").is_nan());
        assert!(parse_decimal_prefix(".").is_nan());
        assert!(parse_decimal_prefix("   ").is_nan());
    }

    #[test]
    fn test_parse_integer_prefix() {
        assert_eq!(parse_integer_prefix("10"), 10.0);
        assert_eq!(parse_integer_prefix(" 5"), 5.0);
        assert_eq!(parse_integer_prefix("12.7"), 12.0);
        assert_eq!(parse_integer_prefix("-3"), -3.0);
        assert_eq!(parse_integer_prefix("1e3"), 1.0);
        assert_eq!(parse_integer_prefix("0x1A"), 26.0);
        assert_eq!(parse_integer_prefix("007"), 7.0);
    }

    #[test]
    fn test_parse_integer_prefix_no_digits() {
        assert!(parse_integer_prefix("").is_nan());
        assert!(parse_integer_prefix("abc").is_nan());
        assert!(parse_integer_prefix("-").is_nan());
        assert!(parse_integer_prefix("0x").is_nan());
        assert!(parse_integer_prefix(".5").is_nan());
    }

    #[test]
    fn test_parse_integer_prefix_large_values_do_not_saturate() {
        let value = parse_integer_prefix("99999999999999999999");
        assert_eq!(value, 1e20);
        assert_eq!(format_number(value), "100000000000000000000");
        assert_eq!(format_number(parse_integer_prefix("1000000000000000000000")), "1e+21");
        assert_eq!(parse_integer_prefix("-99999999999999999999"), -1e20);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(500.0), "500");
        assert_eq!(format_number(2000.0), "2000");
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(4.7), "4.7");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_same_value() {
        assert!(same_value(f64::NAN, f64::NAN));
        assert!(same_value(1.5, 1.5));
        assert!(!same_value(0.0, -0.0));
        assert!(!same_value(1.0, 2.0));
    }
}
