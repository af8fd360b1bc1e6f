//! Keystroke-level input sanitizing: phone character filtering and
//! numeric range clamping.

/// Highest accepted value for the service-hours field.
pub const MAX_SERVICE_HOURS: u32 = 24;
/// Highest accepted value for the package-count field.
pub const MAX_PACKAGE_COUNT: u32 = 999;

/// What: Filter a phone value down to its allowed characters.
///
/// Inputs:
/// - `raw`: Candidate value after an edit
///
/// Output:
/// - The value with everything but digits, spaces, dashes and dots removed
///
/// Details:
/// - Applied on every keystroke; separators are kept in the stored value
///   and only stripped for validation.
#[must_use]
pub fn sanitize_phone(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '.'))
        .collect()
}

/// Strip the separator characters (spaces, dashes, dots) from a phone value.
#[must_use]
pub fn strip_phone_separators(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.'))
        .collect()
}

/// What: Check a separator-stripped phone value against the accepted shape.
///
/// Inputs:
/// - `digits`: Value after [`strip_phone_separators`]
///
/// Output:
/// - `true` iff the value is a single leading zero followed by 8 to 10
///   more digits (9-11 digits total)
#[must_use]
pub fn is_valid_phone(digits: &str) -> bool {
    let mut chars = digits.chars();
    if chars.next() != Some('0') {
        return false;
    }
    let rest: Vec<char> = chars.collect();
    (8..=10).contains(&rest.len()) && rest.iter().all(char::is_ascii_digit)
}

/// What: Clamp a numeric field value into `[0, max]`.
///
/// Inputs:
/// - `raw`: Digit string after an edit (may be empty)
/// - `max`: Inclusive upper bound
///
/// Output:
/// - The clamped value as a string; empty input stays empty so the
///   required check can still fire
#[must_use]
pub fn clamp_number(raw: &str, max: u32) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }
    let value = raw.trim().parse::<u64>().map_or(u64::from(max), |n| n);
    value.min(u64::from(max)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Phone filter keeps digits and separators only
    ///
    /// - Input: Values with letters and symbols mixed in
    /// - Output: Only digits, spaces, dashes and dots survive
    fn sanitize_phone_drops_disallowed_characters() {
        assert_eq!(sanitize_phone("081-234 5678"), "081-234 5678");
        assert_eq!(sanitize_phone("081.abc!234#"), "081.234");
        assert_eq!(sanitize_phone("tel:0812345678"), "0812345678");
        assert_eq!(sanitize_phone(""), "");
    }

    #[test]
    fn sanitize_strip_separators() {
        assert_eq!(strip_phone_separators("012-345 6789"), "0123456789");
        assert_eq!(strip_phone_separators("0.1.2"), "012");
        assert_eq!(strip_phone_separators(" - . "), "");
    }

    #[test]
    /// What: Phone shape is leading zero plus 8-10 further digits
    ///
    /// - Input: Boundary lengths and malformed values
    /// - Output: Accepted iff 9-11 digits starting with zero
    fn sanitize_phone_shape_boundaries() {
        assert!(is_valid_phone("012345678")); // 9 digits
        assert!(is_valid_phone("0123456789")); // 10 digits
        assert!(is_valid_phone("01234567890")); // 11 digits
        assert!(!is_valid_phone("01234567")); // 8 digits, too short
        assert!(!is_valid_phone("012345678901")); // 12 digits, too long
        assert!(!is_valid_phone("912345678")); // missing leading zero
        assert!(!is_valid_phone(""));
    }

    #[test]
    /// What: Numeric clamp always lands inside the range
    ///
    /// - Input: In-range, oversized and overflowing values
    /// - Output: Value clamped into [0, max]; empty stays empty
    fn sanitize_clamp_number_range() {
        assert_eq!(clamp_number("8", MAX_SERVICE_HOURS), "8");
        assert_eq!(clamp_number("24", MAX_SERVICE_HOURS), "24");
        assert_eq!(clamp_number("25", MAX_SERVICE_HOURS), "24");
        assert_eq!(clamp_number("999999999999999999999", MAX_SERVICE_HOURS), "24");
        assert_eq!(clamp_number("", MAX_SERVICE_HOURS), "");
        assert_eq!(clamp_number("1000", MAX_PACKAGE_COUNT), "999");
    }
}
