// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io;

/// Failures that end a [`crate::Readline::read_line`] call. All of them are fatal to
/// the session: a broken interactive stream can't be retried.
#[derive(Debug, thiserror::Error)]
pub enum ReadlineError {
    #[error("terminal I/O failed: {0}")]
    IO(#[from] io::Error),

    #[error("input closed while reading a key")]
    InputClosed,

    #[error("raw mode unavailable: {0}")]
    RawMode(String),
}

/// How a [`crate::Readline::read_line`] call ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadlineEvent {
    /// Enter was pressed. The line has no trailing newline.
    Line(String),
    /// Ctrl-D on an empty line, or end-of-file in line-buffered mode.
    Eof,
    /// Ctrl-C.
    Interrupted,
}
