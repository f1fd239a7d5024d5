// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Display, Formatter, Result};

use miette::IntoDiagnostic as _;
use serde::Serialize;
use strum::IntoEnumIterator as _;

use crate::{FieldId, InputKind};

/// In-memory, unsaved form data. Values are stored already masked (eg: the tax id is
/// `"123.456.789-01"`, not `"12345678901"`), since that is what the user sees.
///
/// Passwords are never serialized, and [`Debug`] redacts them. [`Display`] goes
/// further and only names the fields that have a value, so it's safe for log lines.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistrationDraft {
    pub name: String,
    pub tax_id: String,
    pub phone: String,
    pub street: String,
    pub number: String,
    pub postal_code: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub password_confirmation: String,
}

impl RegistrationDraft {
    #[must_use]
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::TaxId => &self.tax_id,
            FieldId::Phone => &self.phone,
            FieldId::Street => &self.street,
            FieldId::Number => &self.number,
            FieldId::PostalCode => &self.postal_code,
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
            FieldId::PasswordConfirmation => &self.password_confirmation,
        }
    }

    /// Run `raw` through the field's formatter and store the result.
    pub fn set(&mut self, field: FieldId, raw: &str) {
        let formatted = field.formatter().apply(raw);
        *self.get_mut(field) = formatted;
    }

    fn get_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::Name => &mut self.name,
            FieldId::TaxId => &mut self.tax_id,
            FieldId::Phone => &mut self.phone,
            FieldId::Street => &mut self.street,
            FieldId::Number => &mut self.number,
            FieldId::PostalCode => &mut self.postal_code,
            FieldId::Email => &mut self.email,
            FieldId::Password => &mut self.password,
            FieldId::PasswordConfirmation => &mut self.password_confirmation,
        }
    }

    /// The value as it should be shown on screen: passwords are replaced by one mask
    /// char per typed char.
    #[must_use]
    pub fn display_value(&self, field: FieldId) -> String {
        let value = self.get(field);
        match field.input_kind() {
            InputKind::Password => crate::ui_str::PASSWORD_MASK_CHAR
                .to_string()
                .repeat(value.chars().count()),
            InputKind::Text | InputKind::Email => value.to_string(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { FieldId::iter().all(|it| self.get(it).is_empty()) }

    /// JSON summary (no passwords).
    ///
    /// # Errors
    ///
    /// Only if `serde_json` fails to serialize plain strings, which it doesn't.
    pub fn to_json_pretty(&self) -> miette::Result<String> {
        serde_json::to_string_pretty(self).into_diagnostic()
    }
}

/// Compact, value free, for log lines. Only the names of the filled in fields show up.
impl Display for RegistrationDraft {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "RegistrationDraft[filled=")?;
        let filled = FieldId::iter().filter(|it| !self.get(*it).is_empty());
        for (index, field) in filled.enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{field}")?;
        }
        write!(f, "]")
    }
}

/// Same as a derived `Debug`, except the passwords are masked.
impl Debug for RegistrationDraft {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("RegistrationDraft")
            .field("name", &self.name)
            .field("tax_id", &self.tax_id)
            .field("phone", &self.phone)
            .field("street", &self.street)
            .field("number", &self.number)
            .field("postal_code", &self.postal_code)
            .field("email", &self.email)
            .field("password", &self.display_value(FieldId::Password))
            .field(
                "password_confirmation",
                &self.display_value(FieldId::PasswordConfirmation),
            )
            .finish()
    }
}
