// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum::{EnumCount as _, IntoEnumIterator as _};
use strum_macros::{Display, EnumCount, EnumIter};

use crate::{FieldFormatter, ui_str};

/// The fields of the form, in display (and focus) order. The [`Display`] impl gives the
/// `snake_case` name which is also the JSON key and the log field name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumCount, Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum FieldId {
    #[default]
    Name,
    TaxId,
    Phone,
    Street,
    Number,
    PostalCode,
    Email,
    Password,
    PasswordConfirmation,
}

/// How the field is echoed back to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    /// Never echoed, each char is rendered as [`ui_str::PASSWORD_MASK_CHAR`].
    Password,
}

impl FieldId {
    #[must_use]
    pub fn label(self) -> &'static str { ui_str::field_label(self) }

    #[must_use]
    pub fn placeholder(self) -> &'static str { ui_str::field_placeholder(self) }

    #[must_use]
    pub fn input_kind(self) -> InputKind {
        match self {
            FieldId::Email => InputKind::Email,
            FieldId::Password | FieldId::PasswordConfirmation => InputKind::Password,
            _ => InputKind::Text,
        }
    }

    #[must_use]
    pub fn formatter(self) -> FieldFormatter {
        match self {
            FieldId::TaxId => FieldFormatter::TaxId,
            FieldId::Phone => FieldFormatter::Phone,
            FieldId::PostalCode => FieldFormatter::PostalCode,
            _ => FieldFormatter::Identity,
        }
    }

    #[must_use]
    pub fn first() -> Self { FieldId::Name }

    #[must_use]
    pub fn last() -> Self { FieldId::PasswordConfirmation }

    #[must_use]
    pub fn is_last(self) -> bool { self == Self::last() }

    /// Wraps around from the last field to the first.
    #[must_use]
    pub fn next(self) -> Self {
        let index = self.index();
        Self::iter().nth((index + 1) % Self::COUNT).unwrap_or(self)
    }

    /// Wraps around from the first field to the last.
    #[must_use]
    pub fn previous(self) -> Self {
        let index = self.index();
        Self::iter()
            .nth((index + Self::COUNT - 1) % Self::COUNT)
            .unwrap_or(self)
    }

    #[must_use]
    pub fn index(self) -> usize { Self::iter().position(|it| it == self).unwrap_or(0) }
}
