// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::LineBuffer;
use crate::TermSize;

/// State of one `read_line` call. Created when the prompt is shown, dropped when the
/// line is accepted or abandoned.
///
/// `pos <= buffer.len() < buffer.capacity()` always holds. [`LineBuffer`] enforces the
/// right half, the edit operations keep `pos` in range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    pub buffer: LineBuffer,
    /// Cursor, as a byte offset into `buffer`.
    pub pos: usize,
    pub prompt: String,
    /// Display width of `prompt` with escape sequences removed.
    pub prompt_len: usize,
    pub term_size: TermSize,
    /// Offset from the newest history entry of the line currently shown. 0 is the live
    /// line.
    pub history_index: usize,
    /// `Some` while an incremental history search is active.
    pub search: Option<HistorySearch>,
    /// `Some` once the session is done.
    pub outcome: Option<EditOutcome>,
}

/// Query and match of an incremental reverse history search. The line buffer is left
/// untouched until the search is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistorySearch {
    pub query: Vec<u8>,
    /// History offset (from newest) of the current match.
    pub found: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Accepted,
    /// Ctrl-D on an empty line.
    Eof,
    /// Ctrl-C.
    Interrupted,
}

/// What the caller has to do after an edit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditEffect {
    /// Nothing changed.
    None,
    Refresh,
    /// Ring the bell, then refresh.
    Beep,
    /// Clear the screen, then refresh.
    ClearScreen,
    /// Run the completion engine.
    Complete,
    /// Show the completion help listing.
    CompletionHelp,
    Done(EditOutcome),
}

impl EditState {
    pub fn new(prompt: impl Into<String>, capacity: usize, term_size: TermSize) -> Self {
        let prompt = prompt.into();
        let prompt_len = strip_ansi_escapes::strip(prompt.as_bytes()).len();
        Self {
            buffer: LineBuffer::with_capacity(capacity),
            pos: 0,
            prompt,
            prompt_len,
            term_size,
            history_index: 0,
            search: None,
            outcome: None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }

    #[must_use]
    pub fn line(&self) -> String { self.buffer.to_string_lossy().into_owned() }

    #[must_use]
    pub fn is_done(&self) -> bool { self.outcome.is_some() }

    #[must_use]
    pub fn is_searching(&self) -> bool { self.search.is_some() }

    /// Content length once accepted, `-1` when cancelled or at end-of-input, `0` while
    /// still editing.
    #[must_use]
    pub fn result_code(&self) -> isize {
        match self.outcome {
            Some(EditOutcome::Accepted) => isize::try_from(self.len()).unwrap_or(isize::MAX),
            Some(EditOutcome::Eof | EditOutcome::Interrupted) => -1,
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_prompt_len_ignores_styling() {
        let state = EditState::new("\x1b[1;32mcomputer>\x1b[0m ", 64, TermSize::default());
        assert_eq!(state.prompt_len, "computer> ".len());

        let plain = EditState::new("> ", 64, TermSize::default());
        assert_eq!(plain.prompt_len, 2);
    }

    #[test]
    fn test_result_code() {
        let mut state = EditState::new("> ", 64, TermSize::default());
        state.buffer.set_contents(b"abc");
        assert_eq!(state.result_code(), 0);

        state.outcome = Some(EditOutcome::Accepted);
        assert_eq!(state.result_code(), 3);

        state.outcome = Some(EditOutcome::Interrupted);
        assert_eq!(state.result_code(), -1);
    }
}
