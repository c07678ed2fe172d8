// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach sources.
pub mod app;
pub mod clap_config;
pub mod commands;

// Re-export.
pub use app::*;
pub use clap_config::*;
pub use commands::*;
