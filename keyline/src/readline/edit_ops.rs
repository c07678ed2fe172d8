// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Edit operations. Each one is a state transition on [`EditState`] (plus the history
//! store and yank buffer it may touch) that reports what the caller must redraw. None of
//! them do I/O.

use super::{EditAction, EditEffect, EditOutcome, EditState, History, HistorySearch,
            YankBuffer};
use crate::ESC;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    Older,
    Newer,
}

/// Word characters are ASCII alphanumerics, every other byte separates words.
#[must_use]
pub fn is_word_byte(byte: u8) -> bool { byte.is_ascii_alphanumeric() }

impl EditState {
    /// Apply `action`. `byte` is the last byte of the key sequence, used by
    /// [`EditAction::Insert`].
    ///
    /// While a history search is active, any action that doesn't continue the search
    /// accepts the current match first and then runs as usual.
    pub fn apply(
        &mut self,
        action: EditAction,
        byte: u8,
        history: &mut History,
        yank: &mut YankBuffer,
    ) -> EditEffect {
        if self.is_searching() && !action.continues_search() {
            self.accept_search(history);
        }

        match action {
            EditAction::Insert => self.insert(byte, history),
            EditAction::Enter => self.finish(EditOutcome::Accepted, history),
            EditAction::Interrupt => self.finish(EditOutcome::Interrupted, history),
            EditAction::DeleteOrEof => {
                if self.is_empty() {
                    self.finish(EditOutcome::Eof, history)
                } else {
                    self.delete()
                }
            }
            EditAction::Delete => self.delete(),
            EditAction::Backspace => self.backspace(history),
            EditAction::MoveLeft => self.move_left(),
            EditAction::MoveRight => self.move_right(),
            EditAction::MoveHome => self.move_home(),
            EditAction::MoveEnd => self.move_end(),
            EditAction::WordLeft => self.move_word(Direction::Backward),
            EditAction::WordRight => self.move_word(Direction::Forward),
            EditAction::DeleteWordLeft => self.delete_word(Direction::Backward, yank),
            EditAction::DeleteWordRight => self.delete_word(Direction::Forward, yank),
            EditAction::KillToEnd => self.kill_to_end(yank),
            EditAction::KillLine => self.kill_line(yank),
            EditAction::Yank => self.yank(yank, history),
            EditAction::Transpose => self.transpose(),
            EditAction::HistoryPrev => self.history_step(HistoryDirection::Older, history),
            EditAction::HistoryNext => self.history_step(HistoryDirection::Newer, history),
            EditAction::SearchHistory => self.search_step(history),
            EditAction::ClearScreen => EditEffect::ClearScreen,
            EditAction::Complete => EditEffect::Complete,
            EditAction::CompletionHelp => EditEffect::CompletionHelp,
            EditAction::Ignore => EditEffect::None,
        }
    }

    /// Removes the transient history slot and records the outcome.
    pub fn finish(&mut self, outcome: EditOutcome, history: &mut History) -> EditEffect {
        history.end_session();
        self.outcome = Some(outcome);
        EditEffect::Done(outcome)
    }

    /// Type `byte` at the cursor. Control bytes (`<= ESC`) are rejected, and a full
    /// buffer drops the byte. During a search the byte extends the query instead.
    pub fn insert(&mut self, byte: u8, history: &History) -> EditEffect {
        if byte <= ESC {
            return EditEffect::None;
        }

        if let Some(search) = &mut self.search {
            search.query.push(byte);
            return self.restart_search(history);
        }

        if self.buffer.insert_at(self.pos, byte) {
            self.pos += 1;
            EditEffect::Refresh
        } else {
            EditEffect::None
        }
    }

    /// Remove the byte under the cursor.
    pub fn delete(&mut self) -> EditEffect {
        if self.pos >= self.len() {
            return EditEffect::None;
        }
        self.buffer.remove_range(self.pos..self.pos + 1);
        EditEffect::Refresh
    }

    /// Remove the byte left of the cursor. During a search, shortens the query.
    pub fn backspace(&mut self, history: &History) -> EditEffect {
        if let Some(search) = &mut self.search {
            if search.query.pop().is_none() {
                return EditEffect::None;
            }
            return self.restart_search(history);
        }

        if self.pos == 0 {
            return EditEffect::None;
        }
        self.buffer.remove_range(self.pos - 1..self.pos);
        self.pos -= 1;
        EditEffect::Refresh
    }

    pub fn move_left(&mut self) -> EditEffect {
        if self.pos == 0 {
            return EditEffect::None;
        }
        self.pos -= 1;
        EditEffect::Refresh
    }

    pub fn move_right(&mut self) -> EditEffect {
        if self.pos >= self.len() {
            return EditEffect::None;
        }
        self.pos += 1;
        EditEffect::Refresh
    }

    pub fn move_home(&mut self) -> EditEffect {
        if self.pos == 0 {
            return EditEffect::None;
        }
        self.pos = 0;
        EditEffect::Refresh
    }

    pub fn move_end(&mut self) -> EditEffect {
        if self.pos == self.len() {
            return EditEffect::None;
        }
        self.pos = self.len();
        EditEffect::Refresh
    }

    /// Where one word motion from the cursor lands: skip separators, then skip the run
    /// of word bytes. Stops at either end of the buffer.
    #[must_use]
    pub fn word_boundary(&self, direction: Direction) -> usize {
        let bytes = self.buffer.as_bytes();
        let mut index = self.pos;
        match direction {
            Direction::Backward => {
                while index > 0 && !is_word_byte(bytes[index - 1]) {
                    index -= 1;
                }
                while index > 0 && is_word_byte(bytes[index - 1]) {
                    index -= 1;
                }
            }
            Direction::Forward => {
                while index < bytes.len() && !is_word_byte(bytes[index]) {
                    index += 1;
                }
                while index < bytes.len() && is_word_byte(bytes[index]) {
                    index += 1;
                }
            }
        }
        index
    }

    pub fn move_word(&mut self, direction: Direction) -> EditEffect {
        let target = self.word_boundary(direction);
        if target == self.pos {
            return EditEffect::None;
        }
        self.pos = target;
        EditEffect::Refresh
    }

    /// Kill the span one word motion covers. The cursor ends at the left edge of it.
    pub fn delete_word(&mut self, direction: Direction, yank: &mut YankBuffer) -> EditEffect {
        let target = self.word_boundary(direction);
        let (start, end) = (self.pos.min(target), self.pos.max(target));
        if start == end {
            return EditEffect::None;
        }
        yank.set(self.buffer.remove_range(start..end));
        self.pos = start;
        EditEffect::Refresh
    }

    pub fn kill_to_end(&mut self, yank: &mut YankBuffer) -> EditEffect {
        if self.pos >= self.len() {
            return EditEffect::None;
        }
        yank.set(self.buffer.remove_range(self.pos..self.len()));
        EditEffect::Refresh
    }

    pub fn kill_line(&mut self, yank: &mut YankBuffer) -> EditEffect {
        if self.is_empty() {
            return EditEffect::None;
        }
        yank.set(self.buffer.remove_range(0..self.len()));
        self.pos = 0;
        EditEffect::Refresh
    }

    /// Type the killed span back in at the cursor, one [`EditState::insert`] per byte.
    pub fn yank(&mut self, yank: &YankBuffer, history: &History) -> EditEffect {
        let mut effect = EditEffect::None;
        for byte in yank.get().iter().copied() {
            if self.insert(byte, history) == EditEffect::Refresh {
                effect = EditEffect::Refresh;
            }
        }
        effect
    }

    /// Swap the bytes either side of the cursor and move past them.
    pub fn transpose(&mut self) -> EditEffect {
        if self.pos == 0 || self.pos >= self.len() {
            return EditEffect::None;
        }
        self.buffer.swap(self.pos - 1, self.pos);
        self.pos += 1;
        EditEffect::Refresh
    }

    /// Show the next older or newer history entry. The buffer is written back to the
    /// slot being left first, so edits to a recalled line survive further steps. Stops
    /// at either end without wrapping.
    pub fn history_step(
        &mut self,
        direction: HistoryDirection,
        history: &mut History,
    ) -> EditEffect {
        if history.len() <= 1 {
            return EditEffect::None;
        }

        history.replace_from_newest(self.history_index, self.buffer.as_bytes());

        let target = match direction {
            HistoryDirection::Older => self.history_index + 1,
            HistoryDirection::Newer => match self.history_index.checked_sub(1) {
                Some(it) => it,
                None => return EditEffect::None,
            },
        };
        let Some(entry) = history.get_from_newest(target) else {
            return EditEffect::None;
        };

        self.buffer.set_contents(entry);
        self.pos = self.len();
        self.history_index = target;
        EditEffect::Refresh
    }

    /// Ctrl-R. Enters search mode, or with a non-empty query moves to the next older
    /// match. A miss rings the bell and keeps the current match.
    pub fn search_step(&mut self, history: &History) -> EditEffect {
        let Some(search) = &mut self.search else {
            self.search = Some(HistorySearch::default());
            return EditEffect::Refresh;
        };
        if search.query.is_empty() {
            return EditEffect::Refresh;
        }

        let start = search.found.map_or(1, |found| found + 1);
        match history.search_older(&search.query, start) {
            Some(found) => {
                search.found = Some(found);
                EditEffect::Refresh
            }
            None => EditEffect::Beep,
        }
    }

    /// Search again from the newest entry after the query changed.
    fn restart_search(&mut self, history: &History) -> EditEffect {
        let Some(search) = &mut self.search else {
            return EditEffect::None;
        };
        search.found = None;
        if search.query.is_empty() {
            return EditEffect::Refresh;
        }

        let found = history.search_older(&search.query, 1);
        search.found = found;
        if found.is_some() {
            EditEffect::Refresh
        } else {
            EditEffect::Beep
        }
    }

    /// Leave search mode, copying the matched entry (if any) into the buffer.
    pub fn accept_search(&mut self, history: &mut History) {
        let Some(search) = self.search.take() else {
            return;
        };
        let Some(found) = search.found else {
            return;
        };

        history.replace_from_newest(self.history_index, self.buffer.as_bytes());
        if let Some(entry) = history.get_from_newest(found) {
            self.buffer.set_contents(entry);
            self.pos = self.len();
            self.history_index = found;
        }
    }

    /// Text the renderer shows in search mode: the matched entry, or nothing.
    #[must_use]
    pub fn search_match<'h>(&self, history: &'h History) -> Option<&'h [u8]> {
        self.search
            .as_ref()
            .and_then(|search| search.found)
            .and_then(|found| history.get_from_newest(found))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TermSize;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn state_with(content: &str, pos: usize) -> EditState {
        let mut state = EditState::new("> ", 64, TermSize::default());
        state.buffer.set_contents(content.as_bytes());
        state.pos = pos;
        state
    }

    fn history_with(lines: &[&str]) -> History {
        let mut history = History::new(100);
        for line in lines {
            history.add(*line);
        }
        history.begin_session();
        history
    }

    #[test]
    fn test_insert_appends_and_counts_only_printable() {
        let history = History::default();
        let mut state = state_with("", 0);
        for byte in b"he\x01l\x1bl\to" {
            state.insert(*byte, &history);
        }
        assert_eq!(state.line(), "hello");
        assert_eq!(state.len(), 5);
        assert_eq!(state.pos, 5);
    }

    #[test]
    fn test_insert_in_middle() {
        let history = History::default();
        let mut state = state_with("hllo", 1);
        assert_eq!(state.insert(b'e', &history), EditEffect::Refresh);
        assert_eq!(state.line(), "hello");
        assert_eq!(state.pos, 2);
    }

    #[test]
    fn test_insert_into_full_buffer_is_dropped() {
        let history = History::default();
        let mut state = EditState::new("> ", 4, TermSize::default());
        for byte in b"abcdef" {
            state.insert(*byte, &history);
        }
        assert_eq!(state.line(), "abc");
        assert_eq!(state.insert(b'z', &history), EditEffect::None);
        assert!(state.pos <= state.len());
        assert!(state.len() < state.buffer.capacity());
    }

    #[test]
    fn test_delete_and_backspace_edges() {
        let history = History::default();
        let mut state = state_with("abc", 3);
        assert_eq!(state.delete(), EditEffect::None);
        assert_eq!(state.backspace(&history), EditEffect::Refresh);
        assert_eq!(state.line(), "ab");
        assert_eq!(state.pos, 2);

        state.pos = 0;
        assert_eq!(state.backspace(&history), EditEffect::None);
        assert_eq!(state.delete(), EditEffect::Refresh);
        assert_eq!(state.line(), "b");
        assert_eq!(state.pos, 0);
    }

    #[test_case(1)]
    #[test_case(2)]
    #[test_case(4)]
    fn test_left_then_right_restores_pos(pos: usize) {
        let mut state = state_with("hello", pos);
        state.move_left();
        state.move_right();
        assert_eq!(state.pos, pos);
    }

    #[test]
    fn test_moves_clamp() {
        let mut state = state_with("hi", 0);
        assert_eq!(state.move_left(), EditEffect::None);
        assert_eq!(state.move_end(), EditEffect::Refresh);
        assert_eq!(state.pos, 2);
        assert_eq!(state.move_right(), EditEffect::None);
        assert_eq!(state.move_home(), EditEffect::Refresh);
        assert_eq!(state.pos, 0);
    }

    #[test_case("hello world", 11, Direction::Backward, 6)]
    #[test_case("hello world", 6, Direction::Backward, 0)]
    #[test_case("hello world", 8, Direction::Backward, 6)]
    #[test_case("hello world", 0, Direction::Forward, 5)]
    #[test_case("hello world", 5, Direction::Forward, 11)]
    #[test_case("  ls -la  ", 0, Direction::Forward, 4)]
    #[test_case("--", 2, Direction::Backward, 0)]
    #[test_case("", 0, Direction::Forward, 0)]
    fn test_word_boundary(content: &str, pos: usize, direction: Direction, expected: usize) {
        assert_eq!(state_with(content, pos).word_boundary(direction), expected);
    }

    #[test]
    fn test_delete_word_backward_scenario() {
        let mut yank = YankBuffer::new();
        let mut state = state_with("hello world", 11);
        assert_eq!(
            state.delete_word(Direction::Backward, &mut yank),
            EditEffect::Refresh
        );
        assert_eq!(state.line(), "hello ");
        assert_eq!(state.pos, 6);
        assert_eq!(yank.get(), b"world");
    }

    #[test]
    fn test_delete_word_forward_keeps_cursor() {
        let mut yank = YankBuffer::new();
        let mut state = state_with("git commit -m", 3);
        state.delete_word(Direction::Forward, &mut yank);
        assert_eq!(state.line(), "git -m");
        assert_eq!(state.pos, 3);
        assert_eq!(yank.get(), b" commit");
    }

    #[test_case("hello world", 11)]
    #[test_case("hello world", 8)]
    #[test_case("a  b", 3)]
    #[test_case("one, two; three", 9)]
    fn test_delete_word_then_yank_restores(content: &str, pos: usize) {
        let history = History::default();
        let mut yank = YankBuffer::new();
        let mut state = state_with(content, pos);
        state.delete_word(Direction::Backward, &mut yank);
        state.yank(&yank, &history);
        assert_eq!(state.line(), content);
    }

    #[test]
    fn test_kills_fill_yank_buffer() {
        let mut yank = YankBuffer::new();
        let mut state = state_with("echo hi there", 7);
        state.kill_to_end(&mut yank);
        assert_eq!(state.line(), "echo hi");
        assert_eq!(yank.get(), b" there");

        state.kill_line(&mut yank);
        assert_eq!(state.line(), "");
        assert_eq!(state.pos, 0);
        assert_eq!(yank.get(), b"echo hi");

        // Nothing to kill leaves the yank buffer alone.
        state.kill_to_end(&mut yank);
        assert_eq!(yank.get(), b"echo hi");
    }

    #[test]
    fn test_transpose() {
        let mut state = state_with("abc", 1);
        assert_eq!(state.transpose(), EditEffect::Refresh);
        assert_eq!(state.line(), "bac");
        assert_eq!(state.pos, 2);
        assert_eq!(state.transpose(), EditEffect::Refresh);
        assert_eq!(state.line(), "bca");
        assert_eq!(state.pos, 3);
        assert_eq!(state.transpose(), EditEffect::None);

        state.pos = 0;
        assert_eq!(state.transpose(), EditEffect::None);
    }

    #[test]
    fn test_history_prev_on_empty_history_is_noop() {
        let mut history = history_with(&[]);
        let mut state = state_with("draft", 2);
        assert_eq!(
            state.history_step(HistoryDirection::Older, &mut history),
            EditEffect::None
        );
        assert_eq!(state.line(), "draft");
        assert_eq!(state.pos, 2);
    }

    #[test]
    fn test_history_step_clamps_and_writes_back() {
        let mut history = history_with(&["first", "second"]);
        let mut state = state_with("draft", 5);

        state.history_step(HistoryDirection::Older, &mut history);
        assert_eq!(state.line(), "second");
        assert_eq!(state.pos, 6);

        state.history_step(HistoryDirection::Older, &mut history);
        assert_eq!(state.line(), "first");
        assert_eq!(
            state.history_step(HistoryDirection::Older, &mut history),
            EditEffect::None
        );
        assert_eq!(state.line(), "first");

        // Edit the recalled line, step away and back.
        state.insert(b'!', &history);
        state.history_step(HistoryDirection::Newer, &mut history);
        state.history_step(HistoryDirection::Older, &mut history);
        assert_eq!(state.line(), "first!");

        state.history_step(HistoryDirection::Newer, &mut history);
        state.history_step(HistoryDirection::Newer, &mut history);
        assert_eq!(state.line(), "draft");
        assert_eq!(
            state.history_step(HistoryDirection::Newer, &mut history),
            EditEffect::None
        );
    }

    #[test]
    fn test_history_step_keeps_invalid_utf8_edits() {
        let mut history = history_with(&["x"]);
        let mut state = EditState::new("> ", 64, TermSize::default());
        state.buffer.set_contents(b"caf\xc3");
        state.pos = 4;

        state.history_step(HistoryDirection::Older, &mut history);
        assert_eq!(state.buffer.as_bytes(), b"x");
        state.history_step(HistoryDirection::Newer, &mut history);

        assert_eq!(state.buffer.as_bytes(), b"caf\xc3");
        assert_eq!(state.pos, 4);
    }

    #[test]
    fn test_search_finds_older_matches_without_touching_buffer() {
        let mut history = history_with(&["git status", "cargo build", "git push"]);
        let mut state = state_with("", 0);

        assert_eq!(state.search_step(&history), EditEffect::Refresh);
        assert!(state.is_searching());

        state.insert(b'g', &history);
        state.insert(b'i', &history);
        assert_eq!(state.search.as_ref().unwrap().query, b"gi");
        assert_eq!(state.search_match(&history), Some(&b"git push"[..]));
        assert_eq!(state.line(), "");

        assert_eq!(state.search_step(&history), EditEffect::Refresh);
        assert_eq!(state.search_match(&history), Some(&b"git status"[..]));

        // No older match: bell, match unchanged.
        assert_eq!(state.search_step(&history), EditEffect::Beep);
        assert_eq!(state.search_match(&history), Some(&b"git status"[..]));

        state.accept_search(&mut history);
        assert!(!state.is_searching());
        assert_eq!(state.line(), "git status");
        assert_eq!(state.pos, 10);
        assert_eq!(state.history_index, 3);
    }

    #[test]
    fn test_search_query_edits_restart_from_newest() {
        let history = history_with(&["make", "cargo make", "cargo"]);
        let mut state = state_with("", 0);
        state.search_step(&history);

        for byte in b"mak" {
            state.insert(*byte, &history);
        }
        assert_eq!(state.search_match(&history), Some(&b"cargo make"[..]));

        assert_eq!(state.insert(b'x', &history), EditEffect::Beep);
        assert_eq!(state.search_match(&history), None);

        state.backspace(&history);
        assert_eq!(state.search_match(&history), Some(&b"cargo make"[..]));
    }

    #[test]
    fn test_non_search_key_accepts_then_applies() {
        let mut history = history_with(&["echo one"]);
        let mut yank = YankBuffer::new();
        let mut state = state_with("", 0);

        state.apply(EditAction::SearchHistory, 0x12, &mut history, &mut yank);
        state.apply(EditAction::Insert, b'o', &mut history, &mut yank);
        state.apply(EditAction::MoveHome, 0x01, &mut history, &mut yank);

        assert!(!state.is_searching());
        assert_eq!(state.line(), "echo one");
        assert_eq!(state.pos, 0);
    }

    #[test]
    fn test_enter_removes_transient_slot() {
        let mut history = history_with(&["x"]);
        let mut yank = YankBuffer::new();
        let mut state = state_with("typed", 5);

        let effect = state.apply(EditAction::Enter, b'\r', &mut history, &mut yank);
        assert_eq!(effect, EditEffect::Done(EditOutcome::Accepted));
        assert_eq!(state.result_code(), 5);
        assert_eq!(history.iter().collect::<Vec<_>>(), vec![&b"x"[..]]);
    }

    #[test]
    fn test_ctrl_d_deletes_or_ends_input() {
        let mut history = history_with(&[]);
        let mut yank = YankBuffer::new();

        let mut state = state_with("ab", 0);
        let effect = state.apply(EditAction::DeleteOrEof, 0x04, &mut history, &mut yank);
        assert_eq!(effect, EditEffect::Refresh);
        assert_eq!(state.line(), "b");

        let mut state = state_with("", 0);
        let effect = state.apply(EditAction::DeleteOrEof, 0x04, &mut history, &mut yank);
        assert_eq!(effect, EditEffect::Done(EditOutcome::Eof));
        assert_eq!(state.result_code(), -1);
        assert!(history.is_empty());
    }

    #[test]
    fn test_ctrl_c_interrupts() {
        let mut history = history_with(&[]);
        let mut yank = YankBuffer::new();
        let mut state = state_with("partial", 3);

        let effect = state.apply(EditAction::Interrupt, 0x03, &mut history, &mut yank);
        assert_eq!(effect, EditEffect::Done(EditOutcome::Interrupted));
        assert_eq!(state.result_code(), -1);
        assert!(!history.is_session_open());
    }
}
