// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use crate::{FieldId, RegistrationDraft};

/// Everything the user can do to the form. Editing actions apply to the focused field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    InsertChar(char),
    /// Also handles pasted text (eg: a tax id with its separators).
    InsertStr(String),
    DeleteBackward,
    ClearField,
    SetField(FieldId, String),
    FocusNext,
    FocusPrevious,
    /// Enter: move to the next field, or submit from the last one.
    Advance,
    Submit,
    ConfirmSubmission,
    DismissConfirmation,
    Cancel,
}

/// What the event loop should do after an action has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormSignal {
    Continue,
    Completed(RegistrationDraft),
    Cancelled,
}

/// Payloads are left out, since they might be a password.
impl Display for FormAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            FormAction::InsertChar(_) => write!(f, "InsertChar"),
            FormAction::InsertStr(_) => write!(f, "InsertStr"),
            FormAction::DeleteBackward => write!(f, "DeleteBackward"),
            FormAction::ClearField => write!(f, "ClearField"),
            FormAction::SetField(field, _) => write!(f, "SetField({field})"),
            FormAction::FocusNext => write!(f, "FocusNext"),
            FormAction::FocusPrevious => write!(f, "FocusPrevious"),
            FormAction::Advance => write!(f, "Advance"),
            FormAction::Submit => write!(f, "Submit"),
            FormAction::ConfirmSubmission => write!(f, "ConfirmSubmission"),
            FormAction::DismissConfirmation => write!(f, "DismissConfirmation"),
            FormAction::Cancel => write!(f, "Cancel"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_hides_payloads() {
        assert_eq!(FormAction::InsertChar('s').to_string(), "InsertChar");
        assert_eq!(
            FormAction::SetField(FieldId::Password, "hunter2".into()).to_string(),
            "SetField(password)"
        );
    }
}
