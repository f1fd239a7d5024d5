// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum::IntoEnumIterator as _;

use crate::{FieldId, RegistrationDraft, ui_str};

/// Why a submit was blocked. The [`std::fmt::Display`] output is shown to the user as
/// is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum SubmitError {
    #[error("{}", ui_str::INVALID_EMAIL_MSG)]
    #[diagnostic(code(r3bl_signup::invalid_email))]
    InvalidEmail,

    #[error("{}", ui_str::PASSWORDS_DO_NOT_MATCH_MSG)]
    #[diagnostic(code(r3bl_signup::passwords_do_not_match))]
    PasswordsDoNotMatch,
}

/// Submit is only allowed when both derived flags are definitely `true`. An unset flag
/// (field left empty) blocks just like a `false` one. When both fail, the e-mail
/// problem is reported, since that field comes first on screen.
///
/// # Errors
///
/// The first [`SubmitError`] that applies.
pub fn check_submission(
    email_valid: Option<bool>,
    passwords_match: Option<bool>,
) -> Result<(), SubmitError> {
    if email_valid != Some(true) {
        return Err(SubmitError::InvalidEmail);
    }
    if passwords_match != Some(true) {
        return Err(SubmitError::PasswordsDoNotMatch);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRow {
    pub label: &'static str,
    pub value: String,
}

/// Read-only snapshot of the draft, shown in the modal. It is taken when the modal
/// opens, so nothing typed afterwards (there's no way to type while it's open anyway)
/// would show up in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationView {
    pub rows: Vec<ConfirmationRow>,
}

impl ConfirmationView {
    #[must_use]
    pub fn new(draft: &RegistrationDraft) -> Self {
        let rows = FieldId::iter()
            .map(|field| ConfirmationRow {
                label: field.label(),
                value: draft.display_value(field),
            })
            .collect();
        Self { rows }
    }
}
