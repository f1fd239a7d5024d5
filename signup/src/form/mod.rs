// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod form_action;
pub mod form_state;
pub mod submission;

// Re-export.
pub use form_action::*;
pub use form_state::*;
pub use submission::*;
