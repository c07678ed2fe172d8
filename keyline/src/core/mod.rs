// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach sources.
pub mod ansi;
pub mod decl_macros;
pub mod log;
pub mod term;
pub mod terminal_raw_mode;
#[cfg(any(test, feature = "test-fixtures"))]
pub mod test_fixtures;

// Re-export.
pub use ansi::*;
pub use log::*;
pub use term::*;
pub use terminal_raw_mode::*;
#[cfg(any(test, feature = "test-fixtures"))]
pub use test_fixtures::*;
