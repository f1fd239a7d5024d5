// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Live input masks. Every function in here is total: it accepts any string (typed,
//! pasted, already masked, or garbage) and never fails.

// Attach.
pub mod digits;
pub mod field_formatter;
pub mod phone;
pub mod postal_code;
pub mod tax_id;

// Re-export.
pub use digits::*;
pub use field_formatter::*;
pub use phone::*;
pub use postal_code::*;
pub use tax_id::*;
