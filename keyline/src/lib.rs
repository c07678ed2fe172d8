// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words keymap termios

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

//! # keyline
//!
//! A synchronous, single-threaded line editor for raw terminals. It reads one byte at a
//! time, resolves multi-byte key sequences through a prefix trie, and applies the
//! resulting [`EditAction`] to an in-memory line buffer which is redrawn on every key.
//!
//! The moving parts, leaves first:
//!
//! | Module            | What it owns                                                |
//! | :---------------- | :---------------------------------------------------------- |
//! | [`keymap`]        | [`KeyTrie`], [`InputSource`] (pushback), [`KeyDispatcher`]  |
//! | [`readline`]      | [`EditState`], edit operations, [`History`], completion     |
//! | [`core`]          | raw mode, terminal size, ANSI output, logging, fixtures     |
//!
//! # Usage
//!
//! ```no_run
//! use keyline::{EditorConfig, Readline, ReadlineEvent};
//!
//! # fn main() -> Result<(), keyline::ReadlineError> {
//! let mut readline = Readline::new_stdio(EditorConfig::default());
//! loop {
//!     match readline.read_line("> ")? {
//!         ReadlineEvent::Line(line) => println!("echo: {line}"),
//!         ReadlineEvent::Eof | ReadlineEvent::Interrupted => break,
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Terminals that can't handle escape sequences (see
//! [`EditorConfig::unsupported_terms`]) and non-interactive stdin get a plain
//! line-buffered read with no editing.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod core;
pub mod keymap;
pub mod readline;

// Re-export.
pub use core::*;
pub use keymap::*;
pub use readline::*;
