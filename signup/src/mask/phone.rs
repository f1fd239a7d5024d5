// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{digits_only, split_digits};

/// Area code (2) + mobile number (9).
pub const PHONE_DIGITS: usize = 11;

const AREA_CODE_LEN: usize = 2;
const LANDLINE_PREFIX_LEN: usize = 4;
const MOBILE_PREFIX_LEN: usize = 5;

/// Mask a Brazilian phone number.
///
/// - Up to 10 digits (landline): `(DD) DDDD-DDDD`.
/// - 11 digits (mobile): `(DD) DDDDD-DDDD`.
///
/// The mask is built as the digits arrive, so `"123"` becomes `"(12) 3"`. The prefix
/// only widens to 5 digits when the 11th digit is typed.
#[must_use]
pub fn format_phone(raw: &str) -> String {
    let digits = digits_only(raw, PHONE_DIGITS);
    if digits.is_empty() {
        return String::new();
    }

    let (area_code, number) = split_digits(&digits, AREA_CODE_LEN);
    let mut acc = format!("({area_code}");
    if number.is_empty() {
        return acc;
    }
    acc.push_str(") ");

    let prefix_len = if digits.len() == PHONE_DIGITS {
        MOBILE_PREFIX_LEN
    } else {
        LANDLINE_PREFIX_LEN
    };
    let (prefix, line) = split_digits(number, prefix_len);
    acc.push_str(prefix);
    if !line.is_empty() {
        acc.push('-');
        acc.push_str(line);
    }

    acc
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("", ""; "empty")]
    #[test_case("1", "(1"; "one digit")]
    #[test_case("12", "(12"; "area code")]
    #[test_case("123", "(12) 3"; "number starts")]
    #[test_case("123456", "(12) 3456"; "prefix full")]
    #[test_case("1234567", "(12) 3456-7"; "line starts")]
    #[test_case("1234567890", "(12) 3456-7890"; "landline")]
    #[test_case("12345678901", "(12) 34567-8901"; "mobile")]
    #[test_case("123456789012", "(12) 34567-8901"; "extra digits dropped")]
    #[test_case("(12) 3456-7890", "(12) 3456-7890"; "already masked landline")]
    #[test_case("(12) 34567-8901", "(12) 34567-8901"; "already masked mobile")]
    #[test_case("phone", ""; "no digits")]
    fn test_format_phone(raw: &str, expected: &str) {
        assert_eq!(format_phone(raw), expected);
    }

    #[test]
    fn test_format_phone_landline_reflows_into_mobile() {
        // Typing the 11th digit moves the hyphen one place to the right.
        let landline = format_phone("1234567890");
        let mobile = format_phone(&format!("{landline}1"));
        assert_eq!(landline, "(12) 3456-7890");
        assert_eq!(mobile, "(12) 34567-8901");
    }
}
