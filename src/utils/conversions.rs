//! Conversions of command-line tokens into integers.

use crate::error::ParseError;

/// Loosely coerces a token into an integer.
///
/// Leading whitespace and one sign are accepted, then as many decimal digits
/// as follow (single underscores between digits are skipped). Anything after
/// that is ignored, and a token without leading digits is `0`. Values beyond
/// the `i64` range saturate.
pub fn coerce_integer(token: &str) -> i64 {
    let token = token.trim_start();
    let (negative, digits) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    let mut value: i64 = 0;
    let mut previous_was_digit = false;
    for byte in digits.bytes() {
        match byte {
            b'0'..=b'9' => {
                let digit = i64::from(byte - b'0');
                value = if negative {
                    value.saturating_mul(10).saturating_sub(digit)
                } else {
                    value.saturating_mul(10).saturating_add(digit)
                };
                previous_was_digit = true;
            }
            b'_' if previous_was_digit => previous_was_digit = false,
            _ => break,
        }
    }
    value
}

/// Parses a token that must be a whole integer.
pub fn parse_integer(token: &str) -> Result<i64, ParseError> {
    token.trim().parse::<i64>().map_err(|err| ParseError {
        token: token.to_string(),
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerces_like_loose_numeric_conversion() {
        for (token, expected) in [
            ("20", 20),
            ("  15", 15),
            ("+7", 7),
            ("-3", -3),
            ("12abc", 12),
            ("1_000", 1000),
            ("1__0", 1),
            ("9.5", 9),
            ("abc", 0),
            ("", 0),
            ("-", 0),
            ("_5", 0),
        ] {
            assert_eq!(coerce_integer(token), expected, "token {:?}", token);
        }
    }

    #[test]
    fn coercion_saturates() {
        assert_eq!(coerce_integer("99999999999999999999999"), i64::MAX);
        assert_eq!(coerce_integer("-99999999999999999999999"), i64::MIN);
    }

    #[test]
    fn strict_parsing_rejects_garbage() {
        assert_eq!(parse_integer("42"), Ok(42));
        assert_eq!(parse_integer(" -1 "), Ok(-1));
        let err = parse_integer("12abc").unwrap_err();
        assert_eq!(err.token, "12abc");
        assert!(parse_integer("").is_err());
    }
}
