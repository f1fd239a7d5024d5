/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use std::fmt::{Display, Formatter, Result};

use crate::{ConfirmationView, DEBUG_SIGNUP_MOD, FieldId, FormAction, FormSignal,
            RegistrationDraft, SubmitError, check_submission, email_validity,
            password_match};

/// Whether the user is typing into the form, or looking at the confirmation modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Editing,
    Confirming,
}

/// The whole state of the form. It is created empty when the form mounts, and only
/// ever changed through [`FormState::apply()`] (or [`FormState::set_field()`], which
/// `apply` uses).
///
/// The derived flags are tri-state:
/// - `None`: the relevant fields are empty, so there is nothing to say yet.
/// - `Some(true)` / `Some(false)`: valid / invalid.
///
/// They are recomputed synchronously on every change, so they can never be stale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub draft: RegistrationDraft,
    pub email_valid: Option<bool>,
    pub passwords_match: Option<bool>,
    pub focus: FieldId,
    /// Set by a blocked submit, cleared by the next edit.
    pub maybe_submit_error: Option<SubmitError>,
    /// `Some` while the confirmation modal is open.
    pub maybe_confirmation: Option<ConfirmationView>,
}

impl FormState {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn mode(&self) -> FormMode {
        if self.maybe_confirmation.is_some() {
            FormMode::Confirming
        } else {
            FormMode::Editing
        }
    }

    /// Format `raw` with the field's mask, store it, and recompute everything that
    /// depends on the draft.
    pub fn set_field(&mut self, field: FieldId, raw: &str) {
        self.draft.set(field, raw);
        self.maybe_submit_error = None;
        self.recompute_derived();
    }

    fn recompute_derived(&mut self) {
        self.email_valid = email_validity(&self.draft.email);
        self.passwords_match =
            password_match(&self.draft.password, &self.draft.password_confirmation);
    }

    /// Opens the confirmation modal if the draft can be submitted. Otherwise the
    /// reason is stored in [`Self::maybe_submit_error`] for the user to see, and the
    /// modal stays closed.
    ///
    /// # Errors
    ///
    /// The [`SubmitError`] that blocked the submit.
    pub fn try_submit(&mut self) -> std::result::Result<(), SubmitError> {
        match check_submission(self.email_valid, self.passwords_match) {
            Ok(()) => {
                self.maybe_submit_error = None;
                self.maybe_confirmation = Some(ConfirmationView::new(&self.draft));
                Ok(())
            }
            Err(error) => {
                self.maybe_submit_error = Some(error);
                Err(error)
            }
        }
    }

    /// The reducer. While the modal is open, editing and focus actions are ignored.
    pub fn apply(&mut self, action: FormAction) -> FormSignal {
        DEBUG_SIGNUP_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "⌨️ apply action",
                action = %action,
                focus = %self.focus,
                mode = ?self.mode()
            );
        });

        match (self.mode(), action) {
            (_, FormAction::Cancel) => return FormSignal::Cancelled,

            (FormMode::Confirming, FormAction::ConfirmSubmission) => {
                self.maybe_confirmation = None;
                // % is Display, ? is Debug.
                tracing::info!(message = "✅ Registration submitted", draft = %self.draft);
                return FormSignal::Completed(self.draft.clone());
            }
            (FormMode::Confirming, FormAction::DismissConfirmation) => {
                self.maybe_confirmation = None;
            }
            (FormMode::Confirming, _) => {}

            (FormMode::Editing, FormAction::InsertChar(ch)) => {
                let mut raw = self.draft.get(self.focus).to_string();
                raw.push(ch);
                self.set_field(self.focus, &raw);
            }
            (FormMode::Editing, FormAction::InsertStr(text)) => {
                let raw = format!("{}{text}", self.draft.get(self.focus));
                self.set_field(self.focus, &raw);
            }
            (FormMode::Editing, FormAction::DeleteBackward) => {
                let mut raw = self.draft.get(self.focus).to_string();
                raw.pop();
                self.set_field(self.focus, &raw);
            }
            (FormMode::Editing, FormAction::ClearField) => {
                self.set_field(self.focus, "");
            }
            (FormMode::Editing, FormAction::SetField(field, raw)) => {
                self.set_field(field, &raw);
            }
            (FormMode::Editing, FormAction::FocusNext) => self.focus = self.focus.next(),
            (FormMode::Editing, FormAction::FocusPrevious) => {
                self.focus = self.focus.previous();
            }
            (FormMode::Editing, FormAction::Advance) => {
                if self.focus.is_last() {
                    self.submit_and_log();
                } else {
                    self.focus = self.focus.next();
                }
            }
            (FormMode::Editing, FormAction::Submit) => self.submit_and_log(),
            (
                FormMode::Editing,
                FormAction::ConfirmSubmission | FormAction::DismissConfirmation,
            ) => {}
        }

        FormSignal::Continue
    }

    fn submit_and_log(&mut self) {
        if let Err(error) = self.try_submit() {
            // % is Display, ? is Debug.
            tracing::warn!(message = "🚫 Submit blocked", reason = %error);
        }
    }
}

/// Compact, password free, for log lines.
impl Display for FormState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "FormState[focus={}, email_valid={:?}, passwords_match={:?}, mode={:?}]",
            self.focus,
            self.email_valid,
            self.passwords_match,
            self.mode()
        )
    }
}
