// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{TracingConfig, try_create_layers};
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default log file used by [`try_initialize_logging_global`].
pub const LOG_FILE_NAME: &str = "log.txt";

/// Install a global subscriber built from `tracing_config`.
///
/// # Errors
///
/// Returns an error if the layers can't be created, or a global subscriber is already
/// installed.
pub fn try_initialize_logging(tracing_config: TracingConfig) -> miette::Result<()> {
    let layers = try_create_layers(tracing_config)?;
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| miette::miette!("failed to initialize logging: {e}"))
}

/// Log to [`LOG_FILE_NAME`] in the current directory at `level_filter`. Nothing goes
/// to the display, since stdout carries the editor's redraw.
///
/// # Errors
///
/// See [`try_initialize_logging`].
pub fn try_initialize_logging_global(level_filter: LevelFilter) -> miette::Result<()> {
    try_initialize_logging(TracingConfig::new_file(LOG_FILE_NAME, level_filter))
}
