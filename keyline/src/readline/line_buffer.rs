// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{borrow::Cow, ops::Range};

/// Fixed capacity byte buffer for the line being edited.
///
/// Holds at most `capacity - 1` bytes, so `len < capacity` always. Every mutation goes
/// through a method that checks bounds, out of range requests are clamped or ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    bytes: Vec<u8>,
    capacity: usize,
}

impl LineBuffer {
    /// `capacity` is raised to 1 if given as 0, which makes a buffer that can't hold
    /// any bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            bytes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize { self.capacity }

    #[must_use]
    pub fn max_len(&self) -> usize { self.capacity - 1 }

    #[must_use]
    pub fn len(&self) -> usize { self.bytes.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.bytes.is_empty() }

    #[must_use]
    pub fn is_full(&self) -> bool { self.bytes.len() >= self.max_len() }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] { &self.bytes }

    #[must_use]
    pub fn to_string_lossy(&self) -> Cow<'_, str> { String::from_utf8_lossy(&self.bytes) }

    #[must_use]
    pub fn byte_at(&self, index: usize) -> Option<u8> { self.bytes.get(index).copied() }

    /// Shifts the tail right. Returns `false` (and does nothing) when full or when
    /// `index > len`.
    pub fn insert_at(&mut self, index: usize, byte: u8) -> bool {
        if self.is_full() || index > self.bytes.len() {
            return false;
        }
        self.bytes.insert(index, byte);
        true
    }

    /// Removes `range` (clamped to `0..len`) and returns the removed bytes.
    pub fn remove_range(&mut self, range: Range<usize>) -> Vec<u8> {
        let end = range.end.min(self.bytes.len());
        let start = range.start.min(end);
        self.bytes.drain(start..end).collect()
    }

    pub fn truncate(&mut self, len: usize) { self.bytes.truncate(len); }

    pub fn clear(&mut self) { self.bytes.clear(); }

    /// Replace the contents, keeping at most [`LineBuffer::max_len`] bytes.
    pub fn set_contents(&mut self, bytes: &[u8]) {
        self.bytes.clear();
        let keep = bytes.len().min(self.max_len());
        self.bytes.extend_from_slice(&bytes[..keep]);
    }

    /// Swap two bytes. Out of range indices are ignored.
    pub fn swap(&mut self, a: usize, b: usize) {
        if a < self.bytes.len() && b < self.bytes.len() {
            self.bytes.swap(a, b);
        }
    }
}
