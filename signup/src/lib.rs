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

//! # r3bl-signup
//!
//! A registration form that runs in your terminal. As you type, the CPF (tax id), CEP
//! (postal code), and phone fields are masked live, the e-mail is checked against a
//! simple pattern, and the password confirmation is compared to the password. A valid
//! submit opens a read-only confirmation modal. Nothing is sent anywhere or saved to
//! disk.
//!
//! # Mental model
//!
//! ```text
//! keystroke ─▶ key binding ─▶ FormAction ─▶ FormState::apply()
//!                                              │
//!                       field formatter ◀──────┤ (identity for plain fields)
//!                    derived validity ◀────────┘ (email_valid, passwords_match)
//!                                              │
//!                                   render model ─▶ painter ─▶ terminal
//! ```
//!
//! - [`mask`] holds the pure formatters. They are total functions, any input string is
//!   accepted.
//! - [`validate`] holds the e-mail predicate and the tri-state password match.
//! - [`draft`] holds [`RegistrationDraft`] and the [`FieldId`] metadata.
//! - [`form`] holds [`FormState`], the reducer, and the submission flow.
//! - [`terminal`] turns crossterm events into actions and state into pixels (well,
//!   cells).
//!
//! # Run the binary
//!
//! ```bash
//! cargo run --bin signup -- --enable-logging
//! ```
//!
//! Use `--json` to print the submitted draft (minus passwords) as JSON on exit.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

/// Log every action the reducer sees (payloads are never logged). Only has an effect
/// when logging is enabled.
pub const DEBUG_SIGNUP_MOD: bool = true;

// Attach sources.
pub mod clap_config;
pub mod common;
pub mod draft;
pub mod form;
pub mod log;
pub mod mask;
pub mod terminal;
pub mod ui_str;
pub mod validate;

// Re-export.
pub use clap_config::*;
pub use common::*;
pub use draft::*;
pub use form::*;
pub use log::*;
pub use mask::*;
pub use terminal::*;
pub use validate::*;
