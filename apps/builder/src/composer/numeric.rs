//! Lenient integer parsing for the experience field.
//!
//! The experience box accepts free text, so the composer must tolerate
//! anything: `"5"`, `" 7 "`, `"5 years"`, `"abc"`, `""`. The rule is
//! leading-integer coercion: consume an optional sign and then leading
//! ASCII digits, ignore whatever follows, and yield `None` when no digit
//! is found. This never fails; a `None` simply disables the rules that
//! key off a numeric experience value.

/// Parses the leading integer out of a free-text years-of-experience field.
pub fn parse_years(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    // Saturate rather than fail on absurdly long digit runs.
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_integers_parse() {
        assert_eq!(parse_years("0"), Some(0));
        assert_eq!(parse_years("2"), Some(2));
        assert_eq!(parse_years("3"), Some(3));
        assert_eq!(parse_years("15"), Some(15));
    }

    #[test]
    fn test_surrounding_whitespace_is_tolerated() {
        assert_eq!(parse_years(" 7 "), Some(7));
        assert_eq!(parse_years("\t4"), Some(4));
    }

    #[test]
    fn test_trailing_junk_is_ignored() {
        assert_eq!(parse_years("5 years"), Some(5));
        assert_eq!(parse_years("10+"), Some(10));
    }

    #[test]
    fn test_non_numeric_yields_none() {
        assert_eq!(parse_years("abc"), None);
        assert_eq!(parse_years(""), None);
        assert_eq!(parse_years("years 5"), None, "digits must be leading");
        assert_eq!(parse_years("-"), None);
    }

    #[test]
    fn test_signed_values() {
        assert_eq!(parse_years("-1"), Some(-1));
        assert_eq!(parse_years("+3"), Some(3));
    }

    #[test]
    fn test_huge_digit_runs_saturate() {
        assert_eq!(parse_years("99999999999999999999999"), Some(i64::MAX));
    }
}
