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

use clap::Parser;
use r3bl_signup::{CLIArg, CommonResult, ISSUES_URL, run_form_in_terminal,
                  setup_default_miette_global_report_handler, show_exit_message,
                  try_initialize_logging_global};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

// Note: The `tokio::main` macro internally calls `.expect("Failed building the Runtime")`
// when initializing the Tokio runtime. This is unavoidable and safe, as runtime creation
// failure is a fatal error that should panic. The lint must be suppressed here.
#[tokio::main]
#[allow(clippy::unwrap_in_result)]
async fn main() -> CommonResult<()> {
    setup_default_miette_global_report_handler(ISSUES_URL);

    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    try_initialize_logging_global(&cli_arg.global_options)?;
    enable_logging.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    match run_form_in_terminal().await {
        Ok(outcome) => {
            show_exit_message(&outcome, cli_arg.global_options.json)?;
        }
        // Handle unrecoverable / unknown errors here.
        Err(error) => {
            // % is Display, ? is Debug.
            tracing::error!(
                message = "Could not run signup due to the following problem",
                error = ?error
            );
            return Err(error);
        }
    }

    enable_logging.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    Ok(())
}
