// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! All the user facing strings in one place.

use crate::FieldId;

pub const PASSWORD_MASK_CHAR: char = '*';

pub const FORM_TITLE: &str = "📝 Sign up";
pub const MODAL_TITLE: &str = "✅ Please confirm your details";

pub const INVALID_EMAIL_MSG: &str = "Please enter a valid e-mail address.";
pub const PASSWORDS_DO_NOT_MATCH_MSG: &str =
    "The password and its confirmation must be filled in and match.";

pub const EMAIL_VALID_HINT: &str = "✔ looks good";
pub const EMAIL_INVALID_HINT: &str = "✘ invalid e-mail";
pub const PASSWORDS_MATCH_HINT: &str = "✔ passwords match";
pub const PASSWORDS_DIFFER_HINT: &str = "✘ passwords do not match";

pub const EDIT_KEYS_HELP: &str =
    "Tab/↓ next  Shift+Tab/↑ previous  Ctrl+U clear  Enter on last field or Ctrl+S submit  Esc quit";
pub const MODAL_KEYS_HELP: &str = "Enter/y confirm  Esc/n go back and edit";

pub const CANCELLED_MSG: &str = " You chose not to sign up. Nothing was saved.";
pub const COMPLETED_MSG: &str = " 🎉 Thanks for signing up! Here's what you sent:";

#[must_use]
pub fn field_label(field: FieldId) -> &'static str {
    match field {
        FieldId::Name => "Name",
        FieldId::TaxId => "CPF",
        FieldId::Phone => "Phone",
        FieldId::Street => "Street",
        FieldId::Number => "Number",
        FieldId::PostalCode => "CEP",
        FieldId::Email => "E-mail",
        FieldId::Password => "Password",
        FieldId::PasswordConfirmation => "Confirm password",
    }
}

#[must_use]
pub fn field_placeholder(field: FieldId) -> &'static str {
    match field {
        FieldId::Name => "Type your name",
        FieldId::TaxId => "000.000.000-00",
        FieldId::Phone => "(00) 00000-0000",
        FieldId::Street => "Type your street",
        FieldId::Number => "Type the number",
        FieldId::PostalCode => "00000-000",
        FieldId::Email => "Type your e-mail",
        FieldId::Password => "Type your password",
        FieldId::PasswordConfirmation => "Confirm your password",
    }
}
