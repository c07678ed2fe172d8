// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ReadlineError;
use std::{collections::VecDeque,
          io::{self, Read}};

/// Blocking byte-at-a-time input with pushback.
pub trait ByteSource {
    /// Next byte: pushed back bytes first (FIFO), then the underlying reader.
    ///
    /// # Errors
    ///
    /// Returns [`ReadlineError::InputClosed`] at end-of-file, and
    /// [`ReadlineError::IO`] if the read fails. Neither is recoverable.
    fn next_byte(&mut self) -> Result<u8, ReadlineError>;

    /// Queue `byte` to be returned by a later [`ByteSource::next_byte`], after any bytes
    /// already queued.
    fn push_back(&mut self, byte: u8);
}

/// [`ByteSource`] over any [`Read`]. Tests use `&[u8]`, interactive sessions use stdin.
#[derive(Debug)]
pub struct InputSource<R> {
    reader: R,
    pushback: VecDeque<u8>,
}

impl<R: Read> InputSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pushback: VecDeque::new(),
        }
    }

    #[must_use]
    pub fn pending_len(&self) -> usize { self.pushback.len() }

    /// Like [`ByteSource::next_byte`] but end-of-file is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns any read error other than [`io::ErrorKind::Interrupted`], which is
    /// retried.
    pub fn try_next_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(byte) = self.pushback.pop_front() {
            return Ok(Some(byte));
        }
        let mut buf = [0_u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }

    /// Read up to and including the next `\n`, for the line-buffered fallback. Returns
    /// `None` at end-of-file when nothing was read. Trailing `\r`/`\n` bytes are
    /// stripped.
    ///
    /// # Errors
    ///
    /// Returns the read error, if any.
    pub fn read_line_buffered(&mut self, max_len: usize) -> io::Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        let mut saw_any = false;
        while let Some(byte) = self.try_next_byte()? {
            saw_any = true;
            if byte == b'\n' {
                break;
            }
            // Overlong input is dropped, not an error.
            if line.len() < max_len {
                line.push(byte);
            }
        }
        if !saw_any {
            return Ok(None);
        }
        while line.last().is_some_and(|it| *it == b'\r' || *it == b'\n') {
            line.pop();
        }
        Ok(Some(line))
    }
}

impl<R: Read> ByteSource for InputSource<R> {
    fn next_byte(&mut self) -> Result<u8, ReadlineError> {
        self.try_next_byte()?.ok_or(ReadlineError::InputClosed)
    }

    fn push_back(&mut self, byte: u8) { self.pushback.push_back(byte); }
}
