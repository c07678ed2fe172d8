// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Terminal raw mode for byte-at-a-time key input.
//!
//! ## Raw Mode vs Cooked Mode
//!
//! **Cooked Mode** (default):
//! - Input is line-buffered (waits for Enter key)
//! - Special characters are interpreted (Ctrl+C sends SIGINT, Ctrl+D sends EOF)
//! - Echoing is enabled (typed characters appear on screen)
//!
//! **Raw Mode**:
//! - `read()` returns as soon as a single byte is available, with no timeout
//! - Ctrl+C, Ctrl+Z, Ctrl+D arrive as plain bytes for the keymap to bind
//! - No echo, the editor redraws the line itself
//! - No output post-processing, so the editor must emit `\r\n` rather than `\n`
//!
//! ## Usage
//!
//! Prefer [`RawModeGuard`], which restores the saved settings when dropped. This covers
//! every way out of an edit session including `?` propagation and unwinding.
//!
//! ```no_run
//! use keyline::RawModeGuard;
//!
//! # fn main() -> miette::Result<()> {
//! let _guard = RawModeGuard::new()?;
//! // Read keys here.
//! # Ok(())
//! # }
//! ```
//!
//! [`disable_raw_mode`] is idempotent, so calling it again at process exit (after the
//! guard already ran) is harmless.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach sources.
pub mod raw_mode_core;
#[cfg(unix)]
mod raw_mode_unix;

// Re-export.
pub use raw_mode_core::*;
