// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # keyline-cmdr
//!
//! `computer` is a small command shell that shows off the [`keyline`] line editor: tab
//! completion with a help listing (press Tab twice, or `?`), history that survives
//! restarts, and Ctrl-R reverse search.
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ > cargo run --bin computer -- --help │
//! └──────────────────────────────────────┘
//! ```

// Enforce strict error handling in production code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod computer;

// Re-export.
pub use computer::*;
