// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::LazyLock;

use regex::Regex;

/// Deliberately loose e-mail pattern:
/// - exactly one `@`,
/// - at least one `.` after the `@`,
/// - no whitespace anywhere, and no empty segment around the `@` or the last `.`.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid e-mail regex")
});

/// ```
/// use r3bl_signup::is_valid_email;
///
/// assert!(is_valid_email("foo@bar.com"));
/// assert!(!is_valid_email("foo@bar"));
/// ```
#[must_use]
pub fn is_valid_email(email: &str) -> bool { EMAIL_REGEX.is_match(email) }

/// Tri-state validity, used for the inline hint under the field. `None` means "nothing
/// typed yet", so no hint is shown.
#[must_use]
pub fn email_validity(email: &str) -> Option<bool> {
    if email.is_empty() {
        None
    } else {
        Some(is_valid_email(email))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("foo@bar.com", true; "simple")]
    #[test_case("first.last@sub.example.com.br", true; "dotted")]
    #[test_case("a+tag@b.io", true; "plus tag")]
    #[test_case("foo", false; "no at")]
    #[test_case("foo@bar", false; "no dot after at")]
    #[test_case("@bar.com", false; "empty local part")]
    #[test_case("foo@.com", false; "empty domain label")]
    #[test_case("foo@bar.", false; "empty tld")]
    #[test_case("foo@@bar.com", false; "two ats")]
    #[test_case("foo bar@baz.com", false; "whitespace")]
    #[test_case("", false; "empty")]
    fn test_is_valid_email(email: &str, expected: bool) {
        assert_eq!(is_valid_email(email), expected);
    }

    #[test]
    fn test_email_validity_is_unset_when_empty() {
        assert_eq!(email_validity(""), None);
        assert_eq!(email_validity("foo"), Some(false));
        assert_eq!(email_validity("foo@bar.com"), Some(true));
    }
}
