// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::{Path, PathBuf};

use miette::IntoDiagnostic as _;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

use crate::SignupError;

/// Open (or create) the log file at `path_str`. The file is never rotated, since a form
/// session is short lived.
///
/// Note that if you wrap this up in a non blocking writer, the guard has to outlive the
/// form. It's simpler to write synchronously, logging is off by default anyway.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no file name (eg: `/` or `..`)
/// - The file can't be created (missing folder, insufficient permissions)
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let file_name = path
        .file_name()
        .and_then(|it| it.to_str())
        .ok_or_else(|| SignupError::LogFilePath {
            path: path.display().to_string(),
        })?;

    let folder = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(folder)
        .into_diagnostic()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_create_makes_file() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("signup_test_log.txt");
        let file_path = file_path.to_str().unwrap().to_string();

        let appender = try_create(&file_path);

        assert!(appender.is_ok());
        assert!(Path::new(&file_path).exists());
    }

    #[test]
    fn test_try_create_rejects_path_without_file_name() {
        let result = try_create("/");
        assert!(result.is_err());
    }
}
