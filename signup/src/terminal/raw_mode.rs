// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{Write, stdout};

use crossterm::{ExecutableCommand as _, cursor,
                event::{DisableBracketedPaste, EnableBracketedPaste},
                terminal::{self, EnterAlternateScreen, LeaveAlternateScreen}};

use crate::{CommonResult, SignupError};

/// Puts the terminal in raw mode, on the alternate screen, with bracketed paste (so a
/// pasted CPF arrives as one [`crossterm::event::Event::Paste`] instead of 14 key
/// presses). Everything is undone on [`Drop`], including when the form exits with an
/// error or panics.
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    /// # Errors
    ///
    /// [`SignupError::TerminalSetup`] if stdout isn't a TTY, or raw mode isn't
    /// supported.
    pub fn try_new() -> CommonResult<Self> {
        terminal::enable_raw_mode()
            .map_err(|source| SignupError::TerminalSetup { source })?;

        // From here on, the guard is responsible for undoing raw mode.
        let it = Self { _private: () };

        let mut out = stdout();
        out.execute(EnterAlternateScreen)
            .and_then(|out| out.execute(EnableBracketedPaste))
            .map_err(|source| SignupError::TerminalSetup { source })?;

        Ok(it)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let mut out = stdout();
        // Best effort, there's nobody left to report these errors to.
        out.execute(DisableBracketedPaste).ok();
        out.execute(LeaveAlternateScreen).ok();
        out.execute(cursor::Show).ok();
        out.flush().ok();
        terminal::disable_raw_mode().ok();
    }
}
