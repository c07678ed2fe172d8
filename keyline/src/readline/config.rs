// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::TermSize;

/// Line buffer capacity in bytes, including the slot kept free past the last byte.
pub const DEFAULT_MAX_LINE: usize = 4096;
pub const DEFAULT_HISTORY_MAX_LEN: usize = 100;
/// `$TERM` values that get line-buffered input instead of the editor.
pub const DEFAULT_UNSUPPORTED_TERMS: [&str; 3] = ["dumb", "cons25", "emacs"];

/// Knobs for [`crate::Readline`]. Start from [`EditorConfig::default`] and override
/// fields as needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Buffer capacity. A line holds at most `max_line_len - 1` bytes, the rest of the
    /// keystrokes are dropped.
    pub max_line_len: usize,
    pub history_max_len: usize,
    /// Compared against `$TERM` ignoring ASCII case.
    pub unsupported_terms: Vec<String>,
    /// Skip the window size query and the cursor position probe.
    pub term_size_override: Option<TermSize>,
    /// Bind `?` to the completion help listing. Only has an effect once a completer is
    /// installed, otherwise `?` is typed as-is.
    pub enable_completion_help: bool,
    /// Add each accepted non-empty line to the history store.
    pub auto_add_history: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_line_len: DEFAULT_MAX_LINE,
            history_max_len: DEFAULT_HISTORY_MAX_LEN,
            unsupported_terms: DEFAULT_UNSUPPORTED_TERMS
                .iter()
                .map(ToString::to_string)
                .collect(),
            term_size_override: None,
            enable_completion_help: true,
            auto_add_history: true,
        }
    }
}
