// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words winsize

//! Best-effort terminal width detection for when the window size query fails: ask the
//! terminal where the cursor is, push it against the right margin, and ask again.

use crate::{ByteSource, CPR_FINAL_BYTE, CSI_BRACKET, CSI_PARAM_SEPARATOR,
            CURSOR_TO_RIGHT_MARGIN, CsiSequence, DEFAULT_HEIGHT, DEFAULT_WIDTH,
            DSR_CURSOR_POSITION_QUERY, ESC, TermSize, get_size};
use std::io::Write;

/// Longest cursor position report read before giving up.
pub const CPR_MAX_RESPONSE_LEN: usize = 31;

/// Parse a cursor position report `ESC [ rows ; cols R` into `(row, col)`.
#[must_use]
pub fn parse_cursor_position_report(report: &[u8]) -> Option<(u16, u16)> {
    let body = report
        .strip_prefix(&[ESC, CSI_BRACKET])?
        .strip_suffix(&[CPR_FINAL_BYTE])?;
    let body = std::str::from_utf8(body).ok()?;
    let (rows, cols) = body.split_once(char::from(CSI_PARAM_SEPARATOR))?;
    Some((rows.parse().ok()?, cols.parse().ok()?))
}

/// Send a DSR query and read the report. `None` when the terminal doesn't answer with
/// a well formed report within [`CPR_MAX_RESPONSE_LEN`] bytes.
pub fn query_cursor_position(
    source: &mut dyn ByteSource,
    term: &mut dyn Write,
) -> Option<(u16, u16)> {
    term.write_all(DSR_CURSOR_POSITION_QUERY.as_bytes()).ok()?;
    term.flush().ok()?;

    let mut report = Vec::with_capacity(CPR_MAX_RESPONSE_LEN);
    while report.len() < CPR_MAX_RESPONSE_LEN {
        let byte = source.next_byte().ok()?;
        report.push(byte);
        if byte == CPR_FINAL_BYTE {
            break;
        }
    }
    parse_cursor_position_report(&report)
}

/// Column count measured with cursor position reports. The cursor is put back where it
/// was. Falls back to [`DEFAULT_WIDTH`].
pub fn probe_columns(source: &mut dyn ByteSource, term: &mut dyn Write) -> u16 {
    let Some((_, start)) = query_cursor_position(source, term) else {
        tracing::debug!(message = "cursor position probe failed", fallback = DEFAULT_WIDTH);
        return DEFAULT_WIDTH;
    };
    if term.write_all(CURSOR_TO_RIGHT_MARGIN.as_bytes()).is_err() {
        return DEFAULT_WIDTH;
    }
    let Some((_, cols)) = query_cursor_position(source, term) else {
        tracing::debug!(message = "right margin probe failed", fallback = DEFAULT_WIDTH);
        return DEFAULT_WIDTH;
    };

    if cols > start {
        // Best effort, the width is already known.
        let _unused = write!(term, "{}", CsiSequence::CursorBackward(cols - start))
            .and_then(|()| term.flush());
    }
    cols
}

/// Window size query first, cursor position probe second. Rows default to
/// [`DEFAULT_HEIGHT`] when only the probe works.
pub fn detect_term_size(source: &mut dyn ByteSource, term: &mut dyn Write) -> TermSize {
    match get_size() {
        Ok(size) => size,
        Err(report) => {
            tracing::debug!(message = "window size query failed", error = %report);
            TermSize::new(probe_columns(source, term), DEFAULT_HEIGHT)
        }
    }
}
