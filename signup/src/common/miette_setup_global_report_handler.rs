// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Configure how [miette](https://docs.rs/miette/latest/miette/index.html) prints a
//! [`miette::Report`] when `main()` returns an error.
//!
//! The hook is lazy: the terminal width is only measured when a report is actually
//! printed. By that time the form has already restored the terminal (left the
//! alternate screen, disabled raw mode), so the report lands in the user's normal
//! scrollback.

use miette::MietteHandlerOpts;
use tracing::debug;

pub const ISSUES_URL: &str = "https://github.com/r3bl-org/r3bl-open-core/issues/new";

const FALLBACK_TERMINAL_WIDTH: usize = 80;

pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    miette::set_hook(Box::new(move |_report| {
        let terminal_width = {
            let it = crossterm::terminal::size()
                .map_or(FALLBACK_TERMINAL_WIDTH, |(columns, _rows)| {
                    usize::from(columns)
                });
            debug!("miette::set_hook -> terminal_width: {}", it);
            it
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .unicode(true)
                .context_lines(3)
                .with_cause_chain()
                .footer(issues_url.to_string())
                .build(),
        )
    }))
    .ok();
}
