// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod common_result_and_error;
pub mod miette_setup_global_report_handler;

// Re-export.
pub use common_result_and_error::*;
pub use miette_setup_global_report_handler::*;
