/*
 *   Copyright (c) 2024-2025 R3BL LLC
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

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "signup_log.txt";

/// Configure where the logs go and how chatty they are. The form owns the terminal
/// while it runs (raw mode + alternate screen), so logs only ever go to a file.
///
/// Use [`crate::try_initialize_logging_global()`] to install this configuration.
///
/// Fields:
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level_filter`: [`LevelFilter`] - [`LevelFilter::OFF`] disables logging.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// `String` is the log file path. Eg: `/tmp/signup_log.txt` or `signup_log.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    File(String),
}

impl TracingConfig {
    #[must_use]
    pub fn new_file(maybe_file_path: Option<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(
                maybe_file_path.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::OFF,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

/// `--enable-logging` + `--log-file` from the command line.
impl From<&crate::GlobalOption> for TracingConfig {
    fn from(options: &crate::GlobalOption) -> Self {
        if options.enable_logging {
            TracingConfig::new_file(Some(options.log_file.clone()))
        } else {
            TracingConfig::disabled()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::GlobalOption;

    #[test]
    fn test_from_global_option() {
        let options = GlobalOption {
            enable_logging: false,
            log_file: "foo.txt".to_string(),
            json: false,
        };
        let it = TracingConfig::from(&options);
        assert_eq!(it.get_level_filter(), LevelFilter::OFF);
        assert_eq!(it.get_writer_config(), WriterConfig::None);

        let options = GlobalOption {
            enable_logging: true,
            ..options
        };
        let it = TracingConfig::from(&options);
        assert_eq!(it.get_level_filter(), LevelFilter::DEBUG);
        assert_eq!(
            it.get_writer_config(),
            WriterConfig::File("foo.txt".to_string())
        );
    }

    #[test]
    fn test_new_file_defaults_path() {
        let it = TracingConfig::new_file(None);
        assert_eq!(
            it.get_writer_config(),
            WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string())
        );
    }
}
