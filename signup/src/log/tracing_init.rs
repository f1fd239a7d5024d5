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

use miette::IntoDiagnostic as _;
use tracing::subscriber::DefaultGuard;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt as _, registry::LookupSpan,
                         util::SubscriberInitExt as _};

use super::{TracingConfig, WriterConfig, rolling_file_appender_impl};

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Logging is **DISABLED** by **default**. If this isn't called with a config whose
/// level filter is something other than [`LevelFilter::OFF`], the [`tracing::info!`],
/// [`tracing::debug!`], etc. calls in this crate go nowhere.
///
/// # Errors
///
/// - The log file can't be created.
/// - A global subscriber was already installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return Ok(());
    }

    let layers = try_create_layers(&it)?;
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .into_diagnostic()
}

/// Thread local subscriber, great for tests. Drop the guard to uninstall it.
///
/// # Errors
///
/// The log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<DefaultGuard>> {
    let it: TracingConfig = options.into();

    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return Ok(None);
    }

    let layers = try_create_layers(&it)?;
    let subscriber = tracing_subscriber::registry().with(layers);
    Ok(Some(tracing::subscriber::set_default(subscriber)))
}

/// Returns the layers. This does not initialize the tracing system.
///
/// # Errors
///
/// The log file can't be created.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let mut acc: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Set the level filter from the tracing configuration. The file writer's filter
    // below only applies to that writer.
    acc.push(Box::new(tracing_config.get_level_filter()));

    if let Some(layer) = try_create_file_layer(
        tracing_config.get_level_filter(),
        &tracing_config.get_writer_config(),
    )? {
        acc.push(layer);
    }

    Ok(acc)
}

/// This erases the concrete type of the writer, and returns a boxed layer. ANSI colors
/// are turned off, so the file is readable with `less` or `tail -f`.
///
/// # Errors
///
/// The log file can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    Ok(match writer_config {
        WriterConfig::File(file_path) => {
            let file = rolling_file_appender_impl::try_create(file_path)?;
            Some(Box::new(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(file)
                    .with_filter(level_filter),
            ))
        }
        WriterConfig::None => None,
    })
}
