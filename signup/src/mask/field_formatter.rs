// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{format_phone, format_postal_code, format_tax_id};

/// Which mask a field runs its value through on every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldFormatter {
    #[default]
    Identity,
    TaxId,
    PostalCode,
    Phone,
}

impl FieldFormatter {
    #[must_use]
    pub fn apply(self, raw: &str) -> String {
        match self {
            FieldFormatter::Identity => raw.to_string(),
            FieldFormatter::TaxId => format_tax_id(raw),
            FieldFormatter::PostalCode => format_postal_code(raw),
            FieldFormatter::Phone => format_phone(raw),
        }
    }
}
