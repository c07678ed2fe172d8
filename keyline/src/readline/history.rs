// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{DEFAULT_HISTORY_MAX_LEN, HistoryError};
use std::collections::VecDeque;

/// Bounded list of past lines, oldest first.
///
/// [`History::add`] evicts the oldest entry when full and drops a line equal to the
/// newest entry. While a line is being edited the store also holds a transient slot for
/// it at the newest end (see [`History::begin_session`]), so history navigation can treat
/// the live line as offset 0.
///
/// Entries are raw bytes, same as the line buffer, so a recalled line comes back
/// exactly as it was stored even when it isn't valid UTF-8.
///
/// Offsets passed to the `*_from_newest` methods count back from the newest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: VecDeque<Vec<u8>>,
    max_len: usize,
    session_open: bool,
}

impl Default for History {
    fn default() -> Self { Self::new(DEFAULT_HISTORY_MAX_LEN) }
}

impl History {
    /// A `max_len` of 0 makes a store that never records anything.
    #[must_use]
    pub fn new(max_len: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_len,
            session_open: false,
        }
    }

    #[must_use]
    pub fn max_len(&self) -> usize { self.max_len }

    /// Change the bound, keeping only the newest `max_len` entries.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::InvalidMaxLen`] when `max_len` is 0.
    pub fn set_max_len(&mut self, max_len: usize) -> Result<(), HistoryError> {
        if max_len < 1 {
            return Err(HistoryError::InvalidMaxLen(max_len));
        }
        while self.entries.len() > max_len {
            self.entries.pop_front();
        }
        self.max_len = max_len;
        Ok(())
    }

    /// Returns `true` if the line was recorded.
    pub fn add(&mut self, line: impl Into<Vec<u8>>) -> bool {
        if self.max_len == 0 {
            return false;
        }
        let line = line.into();
        if self.entries.back() == Some(&line) {
            return false;
        }
        if self.entries.len() >= self.max_len {
            self.entries.pop_front();
        }
        self.entries.push_back(line);
        true
    }

    /// Number of entries, including the transient slot while a session is open.
    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.entries.get(index).map(Vec::as_slice)
    }

    #[must_use]
    pub fn last(&self) -> Option<&[u8]> { self.entries.back().map(Vec::as_slice) }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.entries.iter().map(Vec::as_slice)
    }

    /// Append the transient slot for the line about to be edited. It bypasses the
    /// duplicate check and eviction so that [`History::end_session`] can always remove
    /// exactly it.
    pub fn begin_session(&mut self) {
        if self.session_open {
            return;
        }
        self.entries.push_back(Vec::new());
        self.session_open = true;
    }

    /// Remove the transient slot. Idempotent.
    pub fn end_session(&mut self) {
        if self.session_open {
            self.entries.pop_back();
            self.session_open = false;
        }
    }

    #[must_use]
    pub fn is_session_open(&self) -> bool { self.session_open }

    #[must_use]
    pub fn get_from_newest(&self, offset: usize) -> Option<&[u8]> {
        let index = self.entries.len().checked_sub(1 + offset)?;
        self.get(index)
    }

    /// Overwrite the entry at `offset`. No-op when out of range.
    pub fn replace_from_newest(&mut self, offset: usize, line: impl Into<Vec<u8>>) {
        let Some(index) = self.entries.len().checked_sub(1 + offset) else {
            return;
        };
        if let Some(slot) = self.entries.get_mut(index) {
            *slot = line.into();
        }
    }

    /// First entry at an offset `>= start_offset` (walking toward older entries) that
    /// contains `query`.
    #[must_use]
    pub fn search_older(&self, query: &[u8], start_offset: usize) -> Option<usize> {
        (start_offset..self.entries.len()).find(|offset| {
            self.get_from_newest(*offset)
                .is_some_and(|entry| contains_bytes(entry, query))
        })
    }
}

fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|it| it == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entries(history: &History) -> Vec<String> {
        history
            .iter()
            .map(|it| String::from_utf8_lossy(it).into_owned())
            .collect()
    }

    #[test]
    fn test_add_keeps_most_recent_max_len_oldest_first() {
        let mut history = History::new(3);
        for line in ["a", "b", "c", "d", "e"] {
            history.add(line);
        }
        assert_eq!(entries(&history), vec!["c", "d", "e"]);
    }

    #[test]
    fn test_add_suppresses_adjacent_duplicate_only() {
        let mut history = History::new(10);
        assert!(history.add("ls"));
        assert!(!history.add("ls"));
        assert_eq!(history.len(), 1);

        assert!(history.add("pwd"));
        assert!(history.add("ls"));
        assert_eq!(entries(&history), vec!["ls", "pwd", "ls"]);
    }

    #[test]
    fn test_zero_max_len_records_nothing() {
        let mut history = History::new(0);
        assert!(!history.add("ls"));
        assert!(history.is_empty());
    }

    #[test]
    fn test_set_max_len() {
        let mut history = History::new(10);
        for line in ["a", "b", "c", "d"] {
            history.add(line);
        }
        history.set_max_len(2).unwrap();
        assert_eq!(entries(&history), vec!["c", "d"]);
        assert_eq!(history.max_len(), 2);

        assert!(matches!(
            history.set_max_len(0),
            Err(HistoryError::InvalidMaxLen(0))
        ));
    }

    #[test]
    fn test_session_slot_bypasses_eviction_and_dedup() {
        let mut history = History::new(2);
        history.add("");
        history.add("x");
        history.begin_session();
        assert_eq!(entries(&history), vec!["", "x", ""]);

        history.replace_from_newest(0, "typed");
        assert_eq!(history.get_from_newest(0), Some(&b"typed"[..]));

        history.end_session();
        history.end_session();
        assert_eq!(entries(&history), vec!["", "x"]);
    }

    #[test]
    fn test_offsets_from_newest() {
        let mut history = History::new(10);
        for line in ["old", "mid", "new"] {
            history.add(line);
        }
        assert_eq!(history.get_from_newest(0), Some(&b"new"[..]));
        assert_eq!(history.get_from_newest(2), Some(&b"old"[..]));
        assert_eq!(history.get_from_newest(3), None);

        history.replace_from_newest(7, "ignored");
        assert_eq!(entries(&history), vec!["old", "mid", "new"]);
    }

    #[test]
    fn test_search_older() {
        let mut history = History::new(10);
        for line in ["git status", "cargo test", "git push", "ls"] {
            history.add(line);
        }
        assert_eq!(history.search_older(b"git", 0), Some(1));
        assert_eq!(history.search_older(b"git", 2), Some(3));
        assert_eq!(history.search_older(b"git", 4), None);
        assert_eq!(history.search_older(b"nope", 0), None);
        assert_eq!(history.search_older(b"", 2), Some(2));
    }

    #[test]
    fn test_entries_keep_invalid_utf8_bytes() {
        let mut history = History::new(10);
        history.add(&b"caf\xc3"[..]);
        history.begin_session();
        history.replace_from_newest(0, &b"\xff-draft"[..]);

        assert_eq!(history.get_from_newest(0), Some(&b"\xff-draft"[..]));
        assert_eq!(history.get_from_newest(1), Some(&b"caf\xc3"[..]));
        assert_eq!(history.search_older(b"\xc3", 0), Some(1));
    }
}
