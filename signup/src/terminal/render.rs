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

//! Turn a [`FormState`] into plain data ([`RenderOutput`]) that [`crate::paint()`]
//! knows how to put on screen. Nothing in here touches the terminal, which makes the
//! layout easy to test.
//!
//! ```text
//! 📝 Sign up
//!
//! ▶ Name              : Ana
//!   CPF               : 123.456.789-01
//!   ...
//!   E-mail            : ana@example      ✘ invalid e-mail
//!   Password          : ******
//!   Confirm password  : ******           ✔ passwords match
//!
//!   Please enter a valid e-mail address.
//!   Tab/↓ next ...
//! ```

use smallvec::{SmallVec, smallvec};
use strum::IntoEnumIterator as _;
use unicode_width::UnicodeWidthStr as _;

use crate::{ConfirmationView, FieldId, FormMode, FormState, ui_str};

/// Stack allocated for the common case, spills to the heap if it needs to.
pub type InlineVec<T> = SmallVec<[T; 4]>;

const FIRST_COLUMN_WIDTH: usize = 18;
const FOCUS_MARKER: &str = "▶ ";
const NO_FOCUS_MARKER: &str = "  ";
const LABEL_SEPARATOR: &str = ": ";
const HINT_GAP: &str = "   ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanStyle {
    Title,
    Label,
    FocusedLabel,
    Value,
    Placeholder,
    HintOk,
    HintError,
    ErrorBanner,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

impl Span {
    pub fn new(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

pub type RenderLine = InlineVec<Span>;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderOutput {
    pub lines: Vec<RenderLine>,
    /// `(col, row)` of the text cursor, `None` hides it.
    pub maybe_cursor: Option<(u16, u16)>,
}

impl RenderOutput {
    /// Just the text, one `String` per line. Handy for tests and for logging.
    #[must_use]
    pub fn to_plain_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| line.iter().map(|span| span.text.as_str()).collect())
            .collect()
    }
}

/// The modal replaces the form while it's open.
#[must_use]
pub fn render(state: &FormState) -> RenderOutput {
    match (&state.maybe_confirmation, state.mode()) {
        (Some(view), FormMode::Confirming) => render_confirmation(view),
        _ => render_form(state),
    }
}

#[must_use]
pub fn render_form(state: &FormState) -> RenderOutput {
    let mut lines: Vec<RenderLine> = vec![
        smallvec![Span::new(ui_str::FORM_TITLE, SpanStyle::Title)],
        smallvec![],
    ];
    let mut maybe_cursor = None;

    for field in FieldId::iter() {
        let is_focused = field == state.focus;
        let value = state.draft.display_value(field);
        let mut line: RenderLine = smallvec![Span::new(
            label_column(field, is_focused),
            if is_focused {
                SpanStyle::FocusedLabel
            } else {
                SpanStyle::Label
            },
        )];

        if is_focused {
            let col = label_column(field, true).width() + value.width();
            maybe_cursor = Some((to_u16(col), to_u16(lines.len())));
        }

        if value.is_empty() {
            line.push(Span::new(field.placeholder(), SpanStyle::Placeholder));
        } else {
            line.push(Span::new(value, SpanStyle::Value));
        }

        if let Some(hint) = hint_for(state, field) {
            line.push(Span::new(HINT_GAP, SpanStyle::Value));
            line.push(hint);
        }

        lines.push(line);
    }

    lines.push(smallvec![]);
    if let Some(error) = &state.maybe_submit_error {
        lines.push(smallvec![Span::new(
            format!("{NO_FOCUS_MARKER}{error}"),
            SpanStyle::ErrorBanner
        )]);
    }
    lines.push(smallvec![Span::new(
        format!("{NO_FOCUS_MARKER}{}", ui_str::EDIT_KEYS_HELP),
        SpanStyle::Help
    )]);

    RenderOutput {
        lines,
        maybe_cursor,
    }
}

#[must_use]
pub fn render_confirmation(view: &ConfirmationView) -> RenderOutput {
    let mut lines: Vec<RenderLine> = vec![
        smallvec![Span::new(ui_str::MODAL_TITLE, SpanStyle::Title)],
        smallvec![],
    ];

    for row in &view.rows {
        lines.push(smallvec![
            Span::new(
                format!("{NO_FOCUS_MARKER}{:<FIRST_COLUMN_WIDTH$}{LABEL_SEPARATOR}", row.label),
                SpanStyle::Label
            ),
            Span::new(row.value.clone(), SpanStyle::Value),
        ]);
    }

    lines.push(smallvec![]);
    lines.push(smallvec![Span::new(
        format!("{NO_FOCUS_MARKER}{}", ui_str::MODAL_KEYS_HELP),
        SpanStyle::Help
    )]);

    RenderOutput {
        lines,
        maybe_cursor: None,
    }
}

fn label_column(field: FieldId, is_focused: bool) -> String {
    let marker = if is_focused {
        FOCUS_MARKER
    } else {
        NO_FOCUS_MARKER
    };
    format!(
        "{marker}{:<FIRST_COLUMN_WIDTH$}{LABEL_SEPARATOR}",
        field.label()
    )
}

/// Inline validity hints. Unset flags (empty fields) show nothing.
fn hint_for(state: &FormState, field: FieldId) -> Option<Span> {
    let (flag, ok_text, error_text) = match field {
        FieldId::Email => (
            state.email_valid,
            ui_str::EMAIL_VALID_HINT,
            ui_str::EMAIL_INVALID_HINT,
        ),
        FieldId::PasswordConfirmation => (
            state.passwords_match,
            ui_str::PASSWORDS_MATCH_HINT,
            ui_str::PASSWORDS_DIFFER_HINT,
        ),
        _ => return None,
    };
    flag.map(|is_ok| {
        if is_ok {
            Span::new(ok_text, SpanStyle::HintOk)
        } else {
            Span::new(error_text, SpanStyle::HintError)
        }
    })
}

fn to_u16(it: usize) -> u16 { u16::try_from(it).unwrap_or(u16::MAX) }

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::FormAction;

    fn valid_state() -> FormState {
        let mut state = FormState::new();
        state.set_field(FieldId::Name, "Ana");
        state.set_field(FieldId::TaxId, "12345678901");
        state.set_field(FieldId::Email, "ana@example.com");
        state.set_field(FieldId::Password, "s3cret");
        state.set_field(FieldId::PasswordConfirmation, "s3cret");
        state
    }

    #[test]
    fn test_empty_form_shows_placeholders_and_no_hints() {
        let output = render(&FormState::new());
        let lines = output.to_plain_lines();

        assert_eq!(lines[0], ui_str::FORM_TITLE);
        assert_eq!(lines[2], format!("▶ {:<18}: Type your name", "Name"));
        assert_eq!(lines[3], format!("  {:<18}: 000.000.000-00", "CPF"));
        assert!(lines.iter().all(|it| !it.contains('✘') && !it.contains('✔')));
        // title + blank + 9 fields + blank + help.
        assert_eq!(lines.len(), 13);
    }

    #[test]
    fn test_cursor_sits_after_focused_value() {
        let mut state = FormState::new();
        state.apply(FormAction::FocusNext);
        state.apply(FormAction::InsertStr("1234".into()));

        let output = render(&state);

        // "  " + 18 + ": " = 22 columns of label, then "123.4".
        assert_eq!(output.maybe_cursor, Some((22 + 5, 3)));
    }

    #[test]
    fn test_hints_and_masked_passwords() {
        let mut state = valid_state();
        state.set_field(FieldId::PasswordConfirmation, "nope");

        let lines = render(&state).to_plain_lines();

        let email_line = lines.iter().find(|it| it.contains("E-mail")).unwrap();
        assert!(email_line.ends_with(ui_str::EMAIL_VALID_HINT));

        let confirm_line = lines
            .iter()
            .find(|it| it.contains("Confirm password"))
            .unwrap();
        assert!(confirm_line.contains("****"));
        assert!(confirm_line.ends_with(ui_str::PASSWORDS_DIFFER_HINT));
        assert!(lines.iter().all(|it| !it.contains("s3cret")));
    }

    #[test]
    fn test_blocked_submit_shows_banner() {
        let mut state = valid_state();
        state.set_field(FieldId::Email, "foo");
        state.apply(FormAction::Submit);

        let output = render(&state);
        let banner = output
            .lines
            .iter()
            .flatten()
            .find(|span| span.style == SpanStyle::ErrorBanner)
            .unwrap();
        assert_eq!(banner.text, format!("  {}", ui_str::INVALID_EMAIL_MSG));
    }

    #[test]
    fn test_modal_replaces_form_and_hides_cursor() {
        let mut state = valid_state();
        state.apply(FormAction::Submit);

        let output = render(&state);
        let lines = output.to_plain_lines();

        assert_eq!(output.maybe_cursor, None);
        assert_eq!(lines[0], ui_str::MODAL_TITLE);
        assert!(lines.contains(&format!("  {:<18}: 123.456.789-01", "CPF")));
        assert!(lines.contains(&format!("  {:<18}: ******", "Password")));
        assert!(lines.last().unwrap().contains(ui_str::MODAL_KEYS_HELP));
    }
}
