//! Text helpers for the numeric input fields.

use once_cell::sync::Lazy;
use regex::Regex;

// Anything that is not an ASCII digit
static NON_DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").unwrap());

/// Strip every non-digit character, leaving digits only.
///
/// An empty result is allowed: it is the transient state a field is in while
/// the user is mid-edit. No clamping or rounding happens here.
///
/// # Examples
/// ```
/// use recipe_calculator::utils::sanitize_digits;
/// assert_eq!(sanitize_digits("1a2 3"), "123");
/// assert_eq!(sanitize_digits("-4.5"), "45");
/// assert_eq!(sanitize_digits("abc"), "");
/// ```
pub fn sanitize_digits(input: &str) -> String {
    NON_DIGIT_REGEX.replace_all(input, "").into_owned()
}

/// Parse field text into a number.
///
/// Returns `None` for empty text or text containing anything but digits.
/// Digit strings too long for `u64` saturate instead of failing, so an
/// oversized value still compares as "above the maximum".
pub fn parse_field_value(text: &str) -> Option<u64> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(trimmed.bytes().fold(0u64, |acc, b| {
        acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
    }))
}

/// Parse and range-check a field's text.
pub fn validate_field_value(
    input: &str,
    min: u64,
    max: u64,
    field_name: &str,
) -> Result<u64, String> {
    if input.trim().is_empty() {
        return Err(format!("{} cannot be empty", field_name));
    }

    match parse_field_value(input) {
        Some(val) if val < min => Err(format!("{} must be at least {}", field_name, min)),
        Some(val) if val > max => Err(format!("{} cannot exceed {}", field_name, max)),
        Some(val) => Ok(val),
        None => Err(format!("{} must be a valid number", field_name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sanitize_keeps_only_ascii_digits() {
        assert_eq!(sanitize_digits("22"), "22");
        assert_eq!(sanitize_digits(" 1,000 "), "1000");
        assert_eq!(sanitize_digits("１２"), "");
        assert_eq!(sanitize_digits(""), "");
    }

    #[test]
    fn parse_rejects_empty_and_non_digits() {
        assert_eq!(parse_field_value(""), None);
        assert_eq!(parse_field_value("12a"), None);
        assert_eq!(parse_field_value("007"), Some(7));
        assert_eq!(parse_field_value("99999999999999999999999"), Some(u64::MAX));
    }

    #[test]
    fn validate_reports_range_errors() {
        assert_eq!(validate_field_value("5", 1, 10, "Roll"), Ok(5));
        assert_eq!(
            validate_field_value("0", 1, 10, "Roll"),
            Err("Roll must be at least 1".to_string())
        );
        assert_eq!(
            validate_field_value("11", 1, 10, "Roll"),
            Err("Roll cannot exceed 10".to_string())
        );
        assert_eq!(
            validate_field_value("", 1, 10, "Roll"),
            Err("Roll cannot be empty".to_string())
        );
    }

    proptest! {
        #[test]
        fn sanitize_is_idempotent(input in ".*") {
            let once = sanitize_digits(&input);
            prop_assert_eq!(sanitize_digits(&once), once.clone());
            prop_assert!(once.bytes().all(|b| b.is_ascii_digit()));
        }

        #[test]
        fn sanitize_is_noop_on_digit_strings(input in "[0-9]{0,12}") {
            prop_assert_eq!(sanitize_digits(&input), input);
        }
    }
}
