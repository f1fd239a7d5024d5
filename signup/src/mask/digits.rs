// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Keep only the ASCII digits in `raw`, and at most `max_len` of them.
///
/// Non-ASCII digits (eg: `'٣'`) are dropped as well, since none of the masks know how
/// to display them.
#[must_use]
pub fn digits_only(raw: &str, max_len: usize) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(max_len)
        .collect()
}

/// Split `digits` at `index`, clamped to its length. Only meant for strings that
/// [`digits_only`] produced (so every char is one byte).
#[must_use]
pub fn split_digits(digits: &str, index: usize) -> (&str, &str) {
    digits.split_at(index.min(digits.len()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("", 11, ""; "empty")]
    #[test_case("abc", 11, ""; "no digits")]
    #[test_case("123.456.789-01", 11, "12345678901"; "masked tax id")]
    #[test_case("(12) 3456-7890", 11, "1234567890"; "masked phone")]
    #[test_case("123456789012345", 8, "12345678"; "truncated")]
    #[test_case("1٣2", 11, "12"; "non ascii digit dropped")]
    fn test_digits_only(raw: &str, max_len: usize, expected: &str) {
        assert_eq!(digits_only(raw, max_len), expected);
    }

    #[test]
    fn test_split_digits_clamps() {
        assert_eq!(split_digits("123", 5), ("123", ""));
        assert_eq!(split_digits("12345", 2), ("12", "345"));
    }
}
