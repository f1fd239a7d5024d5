// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::digits_only;

/// A CPF has 11 digits.
pub const TAX_ID_DIGITS: usize = 11;

/// `NNN.NNN.NNN-NN`.
pub const TAX_ID_MASKED_LEN: usize = 14;

/// Mask a CPF (Brazilian tax id) as `NNN.NNN.NNN-NN`, progressively.
///
/// A separator is only emitted once a digit follows it, so partial input never ends in
/// a dangling `.` or `-`:
///
/// ```
/// use r3bl_signup::format_tax_id;
///
/// assert_eq!(format_tax_id("123"), "123");
/// assert_eq!(format_tax_id("1234"), "123.4");
/// assert_eq!(format_tax_id("12345678901"), "123.456.789-01");
/// assert_eq!(format_tax_id("123.456.789-0199"), "123.456.789-01");
/// ```
#[must_use]
pub fn format_tax_id(raw: &str) -> String {
    let digits = digits_only(raw, TAX_ID_DIGITS);
    let mut acc = String::with_capacity(TAX_ID_MASKED_LEN);

    for (index, digit) in digits.chars().enumerate() {
        match index {
            3 | 6 => acc.push('.'),
            9 => acc.push('-'),
            _ => {}
        }
        acc.push(digit);
    }

    acc
}
