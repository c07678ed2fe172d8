// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{AsRefStr, Display, EnumIter};

/// Every operation a key sequence can be bound to. [`crate::EditState::apply`] is the
/// single place these are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
pub enum EditAction {
    /// Type the byte that completed the key sequence.
    Insert,
    Enter,
    Interrupt,
    /// Delete forward, or end-of-input on an empty line.
    DeleteOrEof,
    Delete,
    Backspace,
    MoveLeft,
    MoveRight,
    MoveHome,
    MoveEnd,
    WordLeft,
    WordRight,
    DeleteWordLeft,
    DeleteWordRight,
    KillToEnd,
    KillLine,
    Yank,
    Transpose,
    HistoryPrev,
    HistoryNext,
    SearchHistory,
    ClearScreen,
    Complete,
    CompletionHelp,
    /// Swallow the sequence.
    Ignore,
}

impl EditAction {
    /// Keys that keep an incremental history search going. Any other key accepts the
    /// current match first.
    #[must_use]
    pub fn continues_search(self) -> bool {
        matches!(
            self,
            EditAction::Insert | EditAction::Backspace | EditAction::SearchHistory
        )
    }
}
