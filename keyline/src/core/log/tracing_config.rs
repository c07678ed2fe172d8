// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

/// Where the logs go, and at what level. Pass to [`crate::try_create_layers`].
///
/// An interactive line editor owns stdout for its redraw, so display output should use
/// [`DisplayPreference::Stderr`] or be skipped in favor of a file.
#[derive(Debug)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// The `String` payload is the log file path, eg: `/tmp/keyline.log` or `log.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    pub fn new_file(file_path: impl Into<String>, level_filter: LevelFilter) -> Self {
        Self {
            writer_config: WriterConfig::File(file_path.into()),
            level_filter,
        }
    }

    #[must_use]
    pub fn new_display(preference: DisplayPreference, level_filter: LevelFilter) -> Self {
        Self {
            writer_config: WriterConfig::Display(preference),
            level_filter,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}
