// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tab completion. The caller supplies a [`Completer`], the engine fills in the longest
//! common prefix of its candidates and can list them with their help strings.

use super::{EditState, History, ReadlineError, beep, render_line};
use crate::{ByteSource, LF_CR, TAB};
use std::io::Write;

/// Width of the token column in the help listing.
pub const HELP_TOKEN_WIDTH: usize = 20;
/// Rows kept free below the listing for the prompt and the "more" footer.
pub const HELP_RESERVED_ROWS: usize = 2;
pub const HELP_NO_MATCH: &str = "*no-match*";
pub const HELP_MORE: &str = "     ... more ...";
pub const HELP_KEY: u8 = b'?';

/// One candidate: the text to complete to, and a line of help for the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub token: String,
    pub help: String,
}

impl Completion {
    pub fn new(token: impl Into<String>, help: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            help: help.into(),
        }
    }
}

/// Source of completion candidates. Runs on the editing thread, so it must return
/// promptly.
pub trait Completer {
    /// Candidates for `line`, the whole current buffer.
    fn complete(&self, line: &str) -> Vec<Completion>;
}

impl<F> Completer for F
where
    F: Fn(&str) -> Vec<Completion>,
{
    fn complete(&self, line: &str) -> Vec<Completion> { self(line) }
}

/// Longest byte prefix shared by every candidate token. Empty when `candidates` is.
#[must_use]
pub fn longest_common_prefix(candidates: &[Completion]) -> &[u8] {
    let Some(first) = candidates.first() else {
        return &[];
    };
    let mut prefix = first.token.as_bytes();
    while !candidates
        .iter()
        .all(|it| it.token.as_bytes().starts_with(prefix))
    {
        let Some((_, rest)) = prefix.split_last() else {
            break;
        };
        prefix = rest;
    }
    prefix
}

/// Number of listing rows that fit in a terminal `rows` high. `0` rows means the height
/// is unknown, and everything is listed.
#[must_use]
pub fn help_visible_rows(rows: u16, candidate_count: usize) -> usize {
    if rows == 0 {
        return candidate_count;
    }
    usize::from(rows).saturating_sub(HELP_RESERVED_ROWS).max(1)
}

/// Write the help listing below the prompt row. The caller redraws the prompt after.
///
/// # Errors
///
/// Returns the write error, if any.
pub fn write_help_listing(
    term: &mut dyn Write,
    candidates: &[Completion],
    rows: u16,
) -> std::io::Result<()> {
    if candidates.is_empty() {
        write!(term, "\r\n {HELP_NO_MATCH}")?;
    } else {
        let visible = help_visible_rows(rows, candidates.len());
        for it in candidates.iter().take(visible) {
            write!(term, "\r\n {:<HELP_TOKEN_WIDTH$} {}", it.token, it.help)?;
        }
        if candidates.len() > visible {
            write!(term, "\r\n {HELP_MORE}")?;
        }
    }
    term.write_all(LF_CR.as_bytes())?;
    term.flush()
}

/// List the candidates for the current buffer, then redraw the prompt row below them.
///
/// # Errors
///
/// Returns the write error, if any.
pub fn show_help(
    state: &EditState,
    completer: &dyn Completer,
    history: &History,
    term: &mut dyn Write,
) -> Result<(), ReadlineError> {
    let candidates = completer.complete(&state.line());
    write_help_listing(term, &candidates, state.term_size.rows)?;
    render_line(term, state, history)?;
    Ok(())
}

/// Complete the buffer, then wait for one more key. Tab again (or `?` when
/// `help_key_enabled`) lists the candidates. Any other key is pushed back to `source`
/// for the dispatch loop.
///
/// # Errors
///
/// Returns the read error from `source` or the write error from `term`.
pub fn run_completion(
    state: &mut EditState,
    completer: &dyn Completer,
    history: &History,
    source: &mut dyn ByteSource,
    term: &mut dyn Write,
    help_key_enabled: bool,
) -> Result<(), ReadlineError> {
    let candidates = completer.complete(&state.line());
    tracing::trace!(
        message = "completion",
        line = %state.line(),
        candidates = candidates.len()
    );

    if candidates.is_empty() {
        beep(term)?;
        return Ok(());
    }

    state.buffer.set_contents(longest_common_prefix(&candidates));
    state.pos = state.len();
    render_line(term, state, history)?;

    loop {
        let byte = source.next_byte()?;
        match byte {
            TAB => {
                beep(term)?;
                show_help(state, completer, history, term)?;
            }
            HELP_KEY if help_key_enabled => show_help(state, completer, history, term)?,
            _ => {
                source.push_back(byte);
                return Ok(());
            }
        }
    }
}
