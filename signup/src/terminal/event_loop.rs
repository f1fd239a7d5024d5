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

use std::io::{self, Write};

use crossterm::event::{Event, EventStream};
use futures_util::{Stream, StreamExt as _};

use crate::{CommonResult, DEBUG_SIGNUP_MOD, FormSignal, FormState, RawModeGuard,
            RegistrationDraft, SignupError, action_from_event, paint, render};

/// How a form session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// The user confirmed the modal.
    Submitted(RegistrationDraft),
    /// Esc, Ctrl+C, or the input stream ended.
    Cancelled,
}

/// # Mental model
///
/// One event in, at most one action applied, one frame out. There is no other source
/// of change, so there's nothing to synchronize.
///
/// ```text
/// input stream ─▶ action_from_event() ─▶ FormState::apply() ─▶ render() ─▶ paint()
/// ```
///
/// # Inputs and dependency injection
///
/// - `input`: anything that yields [`crossterm::event::Event`]s. In the binary this is
///   [`EventStream`]. In tests it's `futures_util::stream::iter(..)`.
/// - `output`: anything that implements [`Write`]. In the binary this is
///   [`std::io::stdout`]. In tests it's a `Vec<u8>`.
///
/// # Errors
///
/// - [`SignupError::Input`] if reading an event fails.
/// - [`SignupError::Render`] if writing a frame fails.
pub async fn run_form<S, W>(mut input: S, output: &mut W) -> CommonResult<FormOutcome>
where
    S: Stream<Item = io::Result<Event>> + Unpin,
    W: Write,
{
    let mut state = FormState::new();
    paint_state(&state, output)?;

    while let Some(result_event) = input.next().await {
        let event = result_event.map_err(|source| SignupError::Input { source })?;

        if let Some(action) = action_from_event(&event, state.mode()) {
            match state.apply(action) {
                FormSignal::Continue => {}
                FormSignal::Completed(draft) => {
                    return Ok(FormOutcome::Submitted(draft));
                }
                FormSignal::Cancelled => {
                    // % is Display, ? is Debug.
                    tracing::info!(message = "🚪 Form cancelled", state = %state);
                    return Ok(FormOutcome::Cancelled);
                }
            }
        }

        // Repaint even if nothing happened, the event might have been a resize.
        paint_state(&state, output)?;
    }

    // % is Display, ? is Debug.
    tracing::warn!(message = "⌨️ Input stream ended before the form was done");
    Ok(FormOutcome::Cancelled)
}

/// Take over the real terminal, run the form, and give the terminal back.
///
/// # Errors
///
/// See [`run_form()`] and [`RawModeGuard::try_new()`].
pub async fn run_form_in_terminal() -> CommonResult<FormOutcome> {
    let guard = RawModeGuard::try_new()?;
    let mut stdout = io::stdout();

    let result = run_form(EventStream::new(), &mut stdout).await;

    // Restore the terminal before anything gets printed about the outcome.
    drop(guard);
    result
}

fn paint_state(state: &FormState, output: &mut impl Write) -> CommonResult<()> {
    let render_output = render(state);
    DEBUG_SIGNUP_MOD.then(|| {
        // % is Display, ? is Debug.
        tracing::trace!(
            message = "🎨 paint",
            state = %state,
            lines = render_output.lines.len()
        );
    });
    paint(output, &render_output).map_err(|source| SignupError::Render { source })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use futures_util::stream;
    use pretty_assertions::assert_eq;

    use super::*;

    fn key(code: KeyCode) -> io::Result<Event> {
        Ok(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn type_str(text: &str) -> Vec<io::Result<Event>> {
        text.chars().map(|ch| key(KeyCode::Char(ch))).collect()
    }

    #[tokio::test]
    async fn test_empty_input_is_cancelled() {
        let mut output: Vec<u8> = vec![];
        let outcome = run_form(stream::iter(vec![]), &mut output).await.unwrap();
        assert_eq!(outcome, FormOutcome::Cancelled);
        // The initial frame is always painted.
        assert!(String::from_utf8(output).unwrap().contains("Sign up"));
    }

    #[tokio::test]
    async fn test_esc_cancels() {
        let mut output: Vec<u8> = vec![];
        let events = vec![key(KeyCode::Char('x')), key(KeyCode::Esc), key(KeyCode::Char('y'))];
        let outcome = run_form(stream::iter(events), &mut output).await.unwrap();
        assert_eq!(outcome, FormOutcome::Cancelled);
    }

    #[tokio::test]
    async fn test_input_error_is_reported() {
        let mut output: Vec<u8> = vec![];
        let events = vec![Err(io::Error::other("tty went away"))];
        let result = run_form(stream::iter(events), &mut output).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_submit_blocked_then_fixed_then_confirmed() {
        let mut events = vec![];
        // Name.
        events.extend(type_str("Ana"));
        // Jump to e-mail: tax id, phone, street, number, postal code, e-mail.
        for _ in 0..6 {
            events.push(key(KeyCode::Tab));
        }
        events.extend(type_str("ana@example"));
        // Password + confirmation.
        events.push(key(KeyCode::Enter));
        events.extend(type_str("pw"));
        events.push(key(KeyCode::Enter));
        events.extend(type_str("pw"));
        // Blocked: "ana@example" has no dot after the @.
        events.push(key(KeyCode::Enter));
        // Go back to the e-mail and fix it, then submit with Ctrl+S.
        events.push(key(KeyCode::Up));
        events.push(key(KeyCode::Up));
        events.extend(type_str(".com"));
        events.push(Ok(Event::Key(KeyEvent::new(
            KeyCode::Char('s'),
            KeyModifiers::CONTROL,
        ))));
        // Modal is open, confirm it.
        events.push(key(KeyCode::Enter));

        let mut output: Vec<u8> = vec![];
        let outcome = run_form(stream::iter(events), &mut output).await.unwrap();

        let draft = match outcome {
            FormOutcome::Submitted(draft) => draft,
            FormOutcome::Cancelled => panic!("expected a submitted draft"),
        };
        assert_eq!(draft.name, "Ana");
        assert_eq!(draft.email, "ana@example.com");
        assert_eq!(draft.password, "pw");

        let screen = String::from_utf8(output).unwrap();
        assert!(screen.contains(crate::ui_str::INVALID_EMAIL_MSG));
        assert!(screen.contains(crate::ui_str::MODAL_TITLE));
    }

    #[tokio::test]
    async fn test_dismissing_modal_goes_back_to_form() {
        let mut events = vec![];
        for _ in 0..6 {
            events.push(key(KeyCode::Tab));
        }
        events.extend(type_str("a@b.co"));
        events.push(key(KeyCode::Tab));
        events.extend(type_str("x"));
        events.push(key(KeyCode::Tab));
        events.extend(type_str("x"));
        events.push(key(KeyCode::Enter));
        // Back to editing, then quit.
        events.push(key(KeyCode::Esc));
        events.push(key(KeyCode::Esc));

        let mut output: Vec<u8> = vec![];
        let outcome = run_form(stream::iter(events), &mut output).await.unwrap();
        assert_eq!(outcome, FormOutcome::Cancelled);
    }
}
