// Decimal helpers shared by the parser side (hours in the CSV) and the
// rendering side (hours in the generated script).

use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Parses decimals written with either separator, e.g. "3,5" or "3.5".
/// Every comma is treated as a decimal point; there is no thousands grouping.
pub fn parse_decimal(s: &str) -> Result<f64> {
    let normalized = s.trim().replace(',', ".");

    f64::from_str(&normalized).map_err(|e| anyhow!("Failed to parse decimal '{}': {}", s, e))
}

/// Reads the longest leading decimal number of `s`, ignoring whatever follows
/// ("3h" is 3, "1,5,0" is 1.5). Commas count as decimal points. `None` when `s`
/// does not start with a number.
pub fn parse_decimal_prefix(s: &str) -> Option<f64> {
    let normalized = s.trim().replace(',', ".");
    let bytes = normalized.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if normalized[end..].starts_with("Infinity") {
        return Some(if bytes[0] == b'-' { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    f64::from_str(&normalized[..end]).ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Renders `value` the way a browser prints a number ("5", "5.5", "1e+21",
/// "NaN") with the decimal point replaced by `separator`.
pub fn format_decimal(value: f64, separator: char) -> String {
    let formatted = format_number(value);
    if separator == '.' {
        formatted
    } else {
        formatted.replace('.', &separator.to_string())
    }
}

/// Shortest round-trip digits, in fixed notation for magnitudes in
/// `[1e-7, 1e21)` and exponential notation outside of it.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() };
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip mantissa, e.g. "1.2345e2".
    let exp_form = format!("{:e}", value.abs());
    let (mantissa, exponent) = exp_form.split_once('e').unwrap_or((exp_form.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let k = digits.len() as i32;
    let n = exponent + 1;
    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        format!("{}.{}", &digits[..n as usize], &digits[n as usize..])
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let sign = if n - 1 >= 0 { '+' } else { '-' };
        let rest = if k > 1 { format!(".{}", &digits[1..]) } else { String::new() };
        format!("{}{}e{}{}", &digits[..1], rest, sign, (n - 1).abs())
    };

    if value < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_comma() {
        assert_eq!(parse_decimal("3,5").unwrap(), 3.5);
    }

    #[test]
    fn test_parse_decimal_dot() {
        assert_eq!(parse_decimal("1.5").unwrap(), 1.5);
        assert_eq!(parse_decimal(" 8 ").unwrap(), 8.0);
    }

    #[test]
    fn test_parse_decimal_invalid() {
        let err = parse_decimal("eight").unwrap_err();
        assert!(err.to_string().contains("Failed to parse decimal 'eight'"));
        assert!(parse_decimal("").is_err());
        assert!(parse_decimal("1,5,0").is_err());
    }

    #[test]
    fn test_parse_decimal_prefix_ignores_trailing_text() {
        assert_eq!(parse_decimal_prefix("3h"), Some(3.0));
        assert_eq!(parse_decimal_prefix("2 h"), Some(2.0));
        assert_eq!(parse_decimal_prefix("1,5,0"), Some(1.5));
        assert_eq!(parse_decimal_prefix("7,5 hours"), Some(7.5));
    }

    #[test]
    fn test_parse_decimal_prefix_forms() {
        assert_eq!(parse_decimal_prefix(" 8 "), Some(8.0));
        assert_eq!(parse_decimal_prefix(",5"), Some(0.5));
        assert_eq!(parse_decimal_prefix("4."), Some(4.0));
        assert_eq!(parse_decimal_prefix("-1.25"), Some(-1.25));
        assert_eq!(parse_decimal_prefix("1e2x"), Some(100.0));
        assert_eq!(parse_decimal_prefix("2e"), Some(2.0));
        assert_eq!(parse_decimal_prefix("Infinity"), Some(f64::INFINITY));
    }

    #[test]
    fn test_parse_decimal_prefix_rejects_non_numbers() {
        assert_eq!(parse_decimal_prefix("inf"), None);
        assert_eq!(parse_decimal_prefix("NaN"), None);
        assert_eq!(parse_decimal_prefix("h3"), None);
        assert_eq!(parse_decimal_prefix("."), None);
        assert_eq!(parse_decimal_prefix("-"), None);
        assert_eq!(parse_decimal_prefix(""), None);
    }

    #[test]
    fn test_format_number_matches_browser_output() {
        assert_eq!(format_number(123.45), "123.45");
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.5e-9), "1.5e-9");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.25e22), "1.25e+22");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(-2.5), "-2.5");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_decimal_whole_number_has_no_fraction() {
        assert_eq!(format_decimal(5.0, ','), "5");
        assert_eq!(format_decimal(5.0, '.'), "5");
    }

    #[test]
    fn test_format_decimal_separator() {
        assert_eq!(format_decimal(5.5, ','), "5,5");
        assert_eq!(format_decimal(5.5, '.'), "5.5");
        assert_eq!(format_decimal(0.25, ','), "0,25");
    }

    #[test]
    fn test_format_decimal_non_finite() {
        assert_eq!(format_decimal(f64::NAN, ','), "NaN");
        assert_eq!(format_decimal(f64::INFINITY, '.'), "Infinity");
    }
}
