// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum::IntoEnumIterator as _;

use crate::{CommonResult, FieldId, FormOutcome, InputKind, RegistrationDraft, ui_str};

const FIRST_COLUMN_WIDTH: usize = 20;

/// Helper function to format two strings into columns.
/// The first column has a fixed width defined by `FIRST_COLUMN_WIDTH`.
fn fmt_two_col(col1: &str, col2: &str) -> String {
    format!("{col1:<FIRST_COLUMN_WIDTH$} {col2}")
}

/// What gets printed to the (restored) terminal once the form is gone. Passwords are
/// left out, in both the plain and the JSON format.
///
/// # Errors
///
/// If the draft can't be serialized to JSON.
pub fn exit_message(outcome: &FormOutcome, json: bool) -> CommonResult<String> {
    match outcome {
        FormOutcome::Cancelled => Ok(ui_str::CANCELLED_MSG.to_string()),
        FormOutcome::Submitted(draft) if json => draft.to_json_pretty(),
        FormOutcome::Submitted(draft) => Ok(plain_summary(draft)),
    }
}

fn plain_summary(draft: &RegistrationDraft) -> String {
    let mut acc = vec![ui_str::COMPLETED_MSG.to_string()];
    acc.extend(
        FieldId::iter()
            .filter(|field| field.input_kind() != InputKind::Password)
            .map(|field| fmt_two_col(&format!("   {}:", field.label()), draft.get(field))),
    );
    acc.join("\n")
}

/// # Errors
///
/// See [`exit_message()`].
pub fn show_exit_message(outcome: &FormOutcome, json: bool) -> CommonResult<()> {
    println!("{}", exit_message(outcome, json)?);
    Ok(())
}
