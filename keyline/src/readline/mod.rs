// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The line editor proper.
//!
//! [`Readline::read_line`] builds an [`EditState`] for the prompt, then runs the
//! [`crate::KeyDispatcher`] with an [`EditSession`] as the handler. Each resolved
//! [`EditAction`] goes through [`EditState::apply`], and the returned [`EditEffect`]
//! decides whether to redraw ([`render_line`]), ring the bell, run completion
//! ([`run_completion`]), or finish.
//!
//! While an edit is in progress the [`History`] store carries one extra transient entry
//! at its newest end for the line being typed. It is removed however the edit ends.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach sources.
pub mod completion;
pub mod config;
pub mod default_keymap;
pub mod edit_action;
pub mod edit_ops;
pub mod edit_session;
pub mod edit_state;
pub mod history;
pub mod history_file;
pub mod line_buffer;
pub mod readline_impl;
pub mod readline_error;
pub mod render;
pub mod term_probe;
pub mod yank_buffer;


// Re-export.
pub use completion::*;
pub use config::*;
pub use default_keymap::*;
pub use edit_action::*;
pub use edit_ops::*;
pub use edit_session::*;
pub use edit_state::*;
pub use history::*;
pub use history_file::*;
pub use line_buffer::*;
pub use readline_impl::*;
pub use readline_error::*;
pub use render::*;
pub use term_probe::*;
pub use yank_buffer::*;
