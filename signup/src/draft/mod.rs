// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod field_id;
pub mod registration_draft;

// Re-export.
pub use field_id::*;
pub use registration_draft::*;
