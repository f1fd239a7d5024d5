// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{self, Write};

use crossterm::{QueueableCommand as _, cursor,
                style::{Attribute, Color, Print, ResetColor, SetAttribute,
                        SetForegroundColor},
                terminal::{Clear, ClearType}};

use crate::{RenderOutput, SpanStyle};

/// Queue the whole frame and flush once. The screen is cleared first: the form is small
/// enough that diffing against the previous frame isn't worth it.
///
/// # Errors
///
/// Whatever the underlying writer returns.
pub fn paint(out: &mut impl Write, output: &RenderOutput) -> io::Result<()> {
    out.queue(cursor::Hide)?;
    out.queue(Clear(ClearType::All))?;

    for (row, line) in output.lines.iter().enumerate() {
        out.queue(cursor::MoveTo(0, u16::try_from(row).unwrap_or(u16::MAX)))?;
        for span in line {
            let (color, attribute) = style_of(span.style);
            out.queue(SetForegroundColor(color))?;
            out.queue(SetAttribute(attribute))?;
            out.queue(Print(&span.text))?;
            out.queue(SetAttribute(Attribute::Reset))?;
        }
        out.queue(ResetColor)?;
    }

    if let Some((col, row)) = output.maybe_cursor {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(cursor::Show)?;
    }

    out.flush()
}

fn style_of(style: SpanStyle) -> (Color, Attribute) {
    match style {
        SpanStyle::Title => (
            Color::Rgb {
                r: 171,
                g: 204,
                b: 242,
            },
            Attribute::Bold,
        ),
        SpanStyle::Label => (Color::Grey, Attribute::NormalIntensity),
        SpanStyle::FocusedLabel => (
            Color::Rgb {
                r: 255,
                g: 216,
                b: 9,
            },
            Attribute::Bold,
        ),
        SpanStyle::Value => (Color::White, Attribute::NormalIntensity),
        SpanStyle::Placeholder => (Color::DarkGrey, Attribute::Italic),
        SpanStyle::HintOk => (Color::Green, Attribute::NormalIntensity),
        SpanStyle::HintError | SpanStyle::ErrorBanner => (Color::Red, Attribute::Bold),
        SpanStyle::Help => (
            Color::Rgb {
                r: 142,
                g: 142,
                b: 180,
            },
            Attribute::Dim,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldId, FormState, render};

    #[test]
    fn test_paint_writes_text_and_cursor() {
        let mut state = FormState::new();
        state.set_field(FieldId::Name, "Ana");
        let mut buffer: Vec<u8> = vec![];

        paint(&mut buffer, &render(&state)).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Ana"));
        assert!(text.contains("000.000.000-00"));
        // Cursor show is the last thing queued when a field is focused.
        assert!(text.ends_with("\x1b[?25h"));
    }

    #[test]
    fn test_paint_hides_cursor_in_modal() {
        let output = RenderOutput::default();
        let mut buffer: Vec<u8> = vec![];

        paint(&mut buffer, &output).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("\x1b[?25l"));
        assert!(!text.contains("\x1b[?25h"));
    }
}
