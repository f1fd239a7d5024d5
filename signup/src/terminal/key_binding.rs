// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{FormAction, FormMode};

/// Map a terminal event to a form action. The same key means different things in the
/// form and in the modal (eg: Esc quits the form, but only closes the modal). Events
/// that don't map to anything (mouse, focus, key releases) return `None`.
#[must_use]
pub fn action_from_event(event: &Event, mode: FormMode) -> Option<FormAction> {
    match event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            action_from_key(key_event, mode)
        }
        Event::Paste(text) if mode == FormMode::Editing => {
            Some(FormAction::InsertStr(text.clone()))
        }
        _ => None,
    }
}

fn action_from_key(key_event: &KeyEvent, mode: FormMode) -> Option<FormAction> {
    let KeyEvent {
        code, modifiers, ..
    } = *key_event;

    // Ctrl+C always gets you out.
    if is_ctrl_shortcut(modifiers) {
        return match (code, mode) {
            (KeyCode::Char('c'), _) => Some(FormAction::Cancel),
            (KeyCode::Char('u'), FormMode::Editing) => Some(FormAction::ClearField),
            (KeyCode::Char('s'), FormMode::Editing) => Some(FormAction::Submit),
            _ => None,
        };
    }

    match mode {
        FormMode::Editing => match code {
            KeyCode::Char(ch)
                if is_plain_or_shifted(modifiers) || is_alt_gr(modifiers) =>
            {
                Some(FormAction::InsertChar(ch))
            }
            KeyCode::Backspace => Some(FormAction::DeleteBackward),
            KeyCode::Tab | KeyCode::Down => Some(FormAction::FocusNext),
            KeyCode::BackTab | KeyCode::Up => Some(FormAction::FocusPrevious),
            KeyCode::Enter => Some(FormAction::Advance),
            KeyCode::Esc => Some(FormAction::Cancel),
            _ => None,
        },
        FormMode::Confirming => match code {
            KeyCode::Enter | KeyCode::Char('y' | 'Y') => {
                Some(FormAction::ConfirmSubmission)
            }
            KeyCode::Esc | KeyCode::Char('n' | 'N') => {
                Some(FormAction::DismissConfirmation)
            }
            _ => None,
        },
    }
}

/// Alt+key combos are left alone, they're usually terminal or window manager shortcuts.
fn is_plain_or_shifted(modifiers: KeyModifiers) -> bool {
    modifiers.is_empty() || modifiers == KeyModifiers::SHIFT
}

/// Ctrl, or Ctrl+Shift. Ctrl+Alt is not a shortcut, see [`is_alt_gr()`].
fn is_ctrl_shortcut(modifiers: KeyModifiers) -> bool {
    modifiers.difference(KeyModifiers::SHIFT) == KeyModifiers::CONTROL
}

/// On Windows, AltGr arrives as Ctrl+Alt. On German and French layouts that's how `@`
/// gets typed, so these chars are text, not shortcuts.
fn is_alt_gr(modifiers: KeyModifiers) -> bool {
    modifiers.difference(KeyModifiers::SHIFT)
        == KeyModifiers::CONTROL | KeyModifiers::ALT
}
