// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod email;
pub mod password_match;

// Re-export.
pub use email::*;
pub use password_match::*;
