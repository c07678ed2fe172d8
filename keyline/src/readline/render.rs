// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Single line redraw. Every refresh rewrites the whole prompt row: there is no diffing,
//! the line is short and the terminal is local.

use super::{EditState, History};
use crate::{BELL_STR, CsiSequence};
use std::io::{self, Write};

/// The part of the buffer that fits on screen next to the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleWindow {
    /// First buffer byte shown.
    pub start: usize,
    /// One past the last buffer byte shown.
    pub end: usize,
    /// Screen column of the cursor, counted from 0 at the left margin.
    pub cursor_col: usize,
}

impl VisibleWindow {
    #[must_use]
    pub fn len(&self) -> usize { self.end - self.start }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.start == self.end }
}

/// Slide the window right until the cursor fits before the right margin, then trim the
/// tail until prompt and text fit on the row. Afterwards `prompt_len + (pos - start) <
/// cols` holds whenever the prompt itself is narrower than the row.
#[must_use]
pub fn compute_visible_window(
    prompt_len: usize,
    pos: usize,
    len: usize,
    cols: usize,
) -> VisibleWindow {
    let mut start = 0;
    let mut pos = pos.min(len);
    let mut len = len;

    while prompt_len + pos >= cols && pos > 0 {
        start += 1;
        pos -= 1;
        len -= 1;
    }
    while prompt_len + len > cols && len > 0 {
        len -= 1;
    }

    VisibleWindow {
        start,
        end: start + len,
        cursor_col: prompt_len + pos,
    }
}

/// Prompt shown in place of the caller's prompt while searching history.
#[must_use]
pub fn search_prompt(history_index: usize, query: &[u8]) -> String {
    format!(
        "(reverse-i-search #{history_index})`{}': ",
        String::from_utf8_lossy(query)
    )
}

/// Redraw the prompt row for `state`.
///
/// # Errors
///
/// Returns the write error, if any.
pub fn render_line(
    term: &mut dyn Write,
    state: &EditState,
    history: &History,
) -> io::Result<()> {
    match &state.search {
        Some(search) => {
            let index = search.found.unwrap_or(state.history_index);
            let prompt = search_prompt(index, &search.query);
            let matched = state.search_match(history).unwrap_or_default();
            // The cursor sits at the end of the synthetic prompt.
            draw_row(term, &prompt, prompt.len(), matched, 0, state)
        }
        None => draw_row(
            term,
            &state.prompt,
            state.prompt_len,
            state.buffer.as_bytes(),
            state.pos,
            state,
        ),
    }
}

fn draw_row(
    term: &mut dyn Write,
    prompt: &str,
    prompt_len: usize,
    text: &[u8],
    pos: usize,
    state: &EditState,
) -> io::Result<()> {
    let window = compute_visible_window(
        prompt_len,
        pos,
        text.len(),
        usize::from(state.term_size.cols),
    );

    let mut row = Vec::with_capacity(prompt.len() + window.len() + 16);
    write!(row, "{}", CsiSequence::COLUMN_ZERO)?;
    row.extend_from_slice(prompt.as_bytes());
    row.extend_from_slice(&text[window.start..window.end]);
    write!(row, "{}", CsiSequence::ERASE_TO_END_OF_LINE)?;
    write!(row, "{}", CsiSequence::COLUMN_ZERO)?;
    if window.cursor_col > 0 {
        let cols = u16::try_from(window.cursor_col).unwrap_or(u16::MAX);
        write!(row, "{}", CsiSequence::CursorForward(cols))?;
    }

    // One write per refresh keeps the row from flickering.
    term.write_all(&row)?;
    term.flush()
}

/// Ring the terminal bell.
///
/// # Errors
///
/// Returns the write error, if any.
pub fn beep(term: &mut dyn Write) -> io::Result<()> {
    term.write_all(BELL_STR.as_bytes())?;
    term.flush()
}
