// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Everything that knows about the terminal. The form logic in [`crate::form`] doesn't.
//!
//! The pieces are split so that each one can be tested without a TTY:
//! 1. [`action_from_event()`]: crossterm [`crossterm::event::Event`] -> [`crate::FormAction`].
//! 2. [`render()`]: [`crate::FormState`] -> [`RenderOutput`] (plain data).
//! 3. [`paint()`]: [`RenderOutput`] -> any [`std::io::Write`].
//! 4. [`run_form()`]: the async loop that ties them together, reading from any
//!    [`futures_util::Stream`] of events.

// Attach.
pub mod event_loop;
pub mod key_binding;
pub mod paint;
pub mod raw_mode;
pub mod render;
pub mod ui_templates;

// Re-export.
pub use event_loop::*;
pub use key_binding::*;
pub use paint::*;
pub use raw_mode::*;
pub use render::*;
pub use ui_templates::*;
