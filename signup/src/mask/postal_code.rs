// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{digits_only, split_digits};

/// A CEP has 8 digits.
pub const POSTAL_CODE_DIGITS: usize = 8;

/// The hyphen goes after this many digits.
const POSTAL_CODE_PREFIX_LEN: usize = 5;

/// Mask a CEP (Brazilian postal code) as `NNNNN-NNN`. The hyphen shows up when the
/// sixth digit is typed.
#[must_use]
pub fn format_postal_code(raw: &str) -> String {
    let digits = digits_only(raw, POSTAL_CODE_DIGITS);
    let (prefix, suffix) = split_digits(&digits, POSTAL_CODE_PREFIX_LEN);

    if suffix.is_empty() {
        prefix.to_string()
    } else {
        format!("{prefix}-{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("", ""; "empty")]
    #[test_case("123", "123"; "partial prefix")]
    #[test_case("12345", "12345"; "prefix only")]
    #[test_case("123456", "12345-6"; "suffix starts")]
    #[test_case("12345678", "12345-678"; "complete")]
    #[test_case("12345-678", "12345-678"; "already masked")]
    #[test_case("1234567890", "12345-678"; "extra digits dropped")]
    #[test_case("cep: 01310 100", "01310-100"; "noise stripped")]
    fn test_format_postal_code(raw: &str, expected: &str) {
        assert_eq!(format_postal_code(raw), expected);
    }
}
