// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Does the confirmation match the password?
///
/// - Both empty: `None` (nothing typed yet, so no hint is shown).
/// - Password non-empty and equal to the confirmation: `Some(true)`.
/// - Anything else: `Some(false)`. This includes an empty password with a non-empty
///   confirmation.
#[must_use]
pub fn password_match(password: &str, confirmation: &str) -> Option<bool> {
    match (password.is_empty(), confirmation.is_empty()) {
        (true, true) => None,
        (false, _) => Some(password == confirmation),
        (true, false) => Some(false),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("", "", None; "both empty")]
    #[test_case("secret", "secret", Some(true); "equal")]
    #[test_case("secret", "secreT", Some(false); "differ by case")]
    #[test_case("secret", "", Some(false); "confirmation missing")]
    #[test_case("", "secret", Some(false); "password missing")]
    #[test_case("secret", "secret ", Some(false); "trailing space")]
    fn test_password_match(password: &str, confirmation: &str, expected: Option<bool>) {
        assert_eq!(password_match(password, confirmation), expected);
    }
}
