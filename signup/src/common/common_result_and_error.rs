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

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)
//!
//! Validation problems (bad e-mail, mismatched passwords) are *not* errors in this
//! sense: they are [`crate::SubmitError`] values that the form shows to the user and
//! then carries on. The types in here are for plumbing that can actually fail, like
//! putting the terminal into raw mode.

/// Type alias to make it easy to work with [miette::Result] and [miette::Report].
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`SignupError`] and any other type of error.
pub type CommonResult<T> = miette::Result<T>;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum SignupError {
    #[error("🖥️ Could not set up the terminal")]
    #[diagnostic(
        code(r3bl_signup::terminal_setup),
        help("Is stdout a TTY? The form needs an interactive terminal.")
    )]
    TerminalSetup {
        #[source]
        source: std::io::Error,
    },

    #[error("🎨 Could not draw the form")]
    #[diagnostic(code(r3bl_signup::render))]
    Render {
        #[source]
        source: std::io::Error,
    },

    #[error("⌨️ Could not read from the terminal")]
    #[diagnostic(code(r3bl_signup::input))]
    Input {
        #[source]
        source: std::io::Error,
    },

    #[error("📑 Can't use log file path: '{path}'")]
    #[diagnostic(
        code(r3bl_signup::log_file_path),
        help("Pass a file path (not a folder) via `--log-file`.")
    )]
    LogFilePath { path: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let it = SignupError::LogFilePath {
            path: "/".to_string(),
        };
        assert_eq!(it.to_string(), "📑 Can't use log file path: '/'");

        let it = SignupError::Input {
            source: std::io::Error::other("boom"),
        };
        let report = miette::Report::new(it);
        assert!(report.to_string().contains("Could not read from the terminal"));
        assert_eq!(
            report.chain().nth(1).map(ToString::to_string),
            Some("boom".to_string())
        );
    }
}
