// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{Error, Result, Write},
          sync::{Arc, Mutex}};
use strip_ansi_escapes::strip;

/// An in-memory [`Write`] target that stands in for the terminal in tests.
///
/// You can safely clone this struct, since it only contains an `Arc<Mutex<Vec<u8>>>`.
/// Hand one clone to the editor and keep the other to inspect what was written.
#[derive(Clone, Debug, Default)]
pub struct StdoutMock {
    pub buffer: Arc<Mutex<Vec<u8>>>,
}

impl StdoutMock {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn get_copy_of_buffer(&self) -> Vec<u8> {
        self.buffer
            .lock()
            .map(|buffer| buffer.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn get_copy_of_buffer_as_string(&self) -> String {
        String::from_utf8_lossy(&self.get_copy_of_buffer()).into_owned()
    }

    #[must_use]
    pub fn get_copy_of_buffer_as_string_strip_ansi(&self) -> String {
        String::from_utf8_lossy(&strip(self.get_copy_of_buffer())).into_owned()
    }

    pub fn clear(&self) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.clear();
        }
    }
}

impl Write for StdoutMock {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.buffer
            .lock()
            .map_err(|e| Error::other(format!("stdout mock lock poisoned: {e}")))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}
