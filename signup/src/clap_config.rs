// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser};

use crate::DEFAULT_LOG_FILE_NAME;

#[derive(Debug, Parser)]
#[command(bin_name = "signup")]
#[command(about = "📝 Sign up from the comfort of your terminal")]
#[command(version)]
#[command(next_line_help = true)]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  signup [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n"
)]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
pub struct CLIArg {
    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        long,
        short = 'l',
        help = "Log app output to a file for debugging (see `--log-file`)"
    )]
    pub enable_logging: bool,

    #[arg(
        long,
        value_name = "PATH",
        default_value = DEFAULT_LOG_FILE_NAME,
        help = "Where to write the log when `--enable-logging` is set"
    )]
    pub log_file: String,

    #[arg(
        long,
        short = 'j',
        help = "Print the submitted details as JSON (passwords are never printed)"
    )]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() { CLIArg::command().debug_assert(); }

    #[test]
    fn test_defaults() {
        let it = CLIArg::try_parse_from(["signup"]).unwrap();
        assert!(!it.global_options.enable_logging);
        assert!(!it.global_options.json);
        assert_eq!(it.global_options.log_file, DEFAULT_LOG_FILE_NAME);
    }

    #[test]
    fn test_all_flags() {
        let it = CLIArg::try_parse_from([
            "signup",
            "-l",
            "--log-file",
            "/tmp/signup.log",
            "--json",
        ])
        .unwrap();
        assert!(it.global_options.enable_logging);
        assert!(it.global_options.json);
        assert_eq!(it.global_options.log_file, "/tmp/signup.log");
    }
}
