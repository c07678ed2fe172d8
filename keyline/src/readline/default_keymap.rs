// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The fixed key table. Registration order is significant: wildcard fallbacks are
//! registered after every exact sequence that shares their prefix (see
//! [`crate::KeyTrie`]).

use super::{EditAction, EditorConfig, HELP_KEY};
use crate::{CARRIAGE_RETURN, CSI_BRACKET, CSI_PARAM_SEPARATOR, CSI_TILDE, CTRL_A, CTRL_B,
            CTRL_C, CTRL_D, CTRL_E, CTRL_F, CTRL_H, CTRL_K, CTRL_L, CTRL_N, CTRL_P, CTRL_R,
            CTRL_T, CTRL_U, CTRL_W, CTRL_Y, DEL, ESC, KeyDispatcher, KeyPattern, LINE_FEED,
            SS3_O, TAB};

fn esc() -> KeyPattern { KeyPattern::new().byte(ESC) }

fn csi(tail: &[u8]) -> KeyPattern { esc().byte(CSI_BRACKET).bytes(tail) }

fn ss3(tail: &[u8]) -> KeyPattern { esc().byte(SS3_O).bytes(tail) }

/// Build the dispatcher for the editor.
#[must_use]
pub fn create_default_keymap(config: &EditorConfig) -> KeyDispatcher<EditAction> {
    let mut keymap = KeyDispatcher::new();

    // CSI: arrows, Home/End.
    keymap
        .register(csi(b"A"), EditAction::HistoryPrev)
        .register(csi(b"B"), EditAction::HistoryNext)
        .register(csi(b"C"), EditAction::MoveRight)
        .register(csi(b"D"), EditAction::MoveLeft)
        .register(csi(b"H"), EditAction::MoveHome)
        .register(csi(b"F"), EditAction::MoveEnd);

    // CSI: `ESC [ n ~` editing keypad, and Ctrl+arrow word motion.
    keymap
        .register(csi(&[b'1', CSI_TILDE]), EditAction::MoveHome)
        .register(csi(&[b'7', CSI_TILDE]), EditAction::MoveHome)
        .register(csi(&[b'4', CSI_TILDE]), EditAction::MoveEnd)
        .register(csi(&[b'8', CSI_TILDE]), EditAction::MoveEnd)
        .register(csi(&[b'3', CSI_TILDE]), EditAction::Delete)
        .register(csi(&[b'2', CSI_TILDE]), EditAction::Ignore)
        .register(csi(&[b'5', CSI_TILDE]), EditAction::Ignore)
        .register(csi(&[b'6', CSI_TILDE]), EditAction::Ignore)
        .register(csi(b"1;5C"), EditAction::WordRight)
        .register(csi(b"1;5D"), EditAction::WordLeft)
        .register(csi(b"1;5").any(), EditAction::Ignore)
        .register(csi(b"1;").any().any(), EditAction::Ignore);

    // CSI: modified keypad keys (`ESC [ 3 ; 5 ~`), and F5-F12 with or without a
    // modifier (`ESC [ 1 5 ~`, `ESC [ 2 4 ; 2 ~`). None have a binding, but the whole
    // sequence has to be consumed or its tail is typed as text.
    for first in b'0'..=b'9' {
        if first != b'1' {
            keymap.register(
                csi(&[first, CSI_PARAM_SEPARATOR]).any().byte(CSI_TILDE),
                EditAction::Ignore,
            );
        }
        for second in b'0'..=b'9' {
            keymap
                .register(
                    csi(&[first, second, CSI_PARAM_SEPARATOR]).any().byte(CSI_TILDE),
                    EditAction::Ignore,
                )
                .register(csi(&[first, second]).any(), EditAction::Ignore);
        }
    }

    // Fallback for any other `ESC [ digit x`.
    for digit in b'0'..=b'9' {
        keymap.register(csi(&[digit]).any(), EditAction::Ignore);
    }

    // SS3: Home/End, and F1-F4 which have no binding.
    keymap
        .register(ss3(b"H"), EditAction::MoveHome)
        .register(ss3(b"F"), EditAction::MoveEnd)
        .register(ss3(b"P"), EditAction::Ignore)
        .register(ss3(b"Q"), EditAction::Ignore);

    // Meta (ESC prefixed) word operations.
    keymap
        .register(esc().byte(b'b'), EditAction::WordLeft)
        .register(esc().byte(b'f'), EditAction::WordRight)
        .register(esc().byte(b'd'), EditAction::DeleteWordRight)
        .register(esc().byte(b'h'), EditAction::DeleteWordLeft)
        .register(esc().byte(DEL), EditAction::DeleteWordLeft);

    // Unknown escape sequences.
    keymap
        .register(ss3(&[]).any(), EditAction::Ignore)
        .register(csi(&[]).any(), EditAction::Ignore)
        .register(esc().any(), EditAction::Ignore);

    // Control keys.
    keymap
        .register(CTRL_A, EditAction::MoveHome)
        .register(CTRL_B, EditAction::MoveLeft)
        .register(CTRL_C, EditAction::Interrupt)
        .register(CTRL_D, EditAction::DeleteOrEof)
        .register(CTRL_E, EditAction::MoveEnd)
        .register(CTRL_F, EditAction::MoveRight)
        .register(CTRL_H, EditAction::Backspace)
        .register(DEL, EditAction::Backspace)
        .register(TAB, EditAction::Complete)
        .register(LINE_FEED, EditAction::Enter)
        .register(CARRIAGE_RETURN, EditAction::Enter)
        .register(CTRL_K, EditAction::KillToEnd)
        .register(CTRL_L, EditAction::ClearScreen)
        .register(CTRL_N, EditAction::HistoryNext)
        .register(CTRL_P, EditAction::HistoryPrev)
        .register(CTRL_R, EditAction::SearchHistory)
        .register(CTRL_T, EditAction::Transpose)
        .register(CTRL_U, EditAction::KillLine)
        .register(CTRL_W, EditAction::DeleteWordLeft)
        .register(CTRL_Y, EditAction::Yank);

    if config.enable_completion_help {
        keymap.register(HELP_KEY, EditAction::CompletionHelp);
    }

    // Everything else is typed as-is.
    keymap.register(KeyPattern::any_byte(), EditAction::Insert);

    keymap
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InputSource;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn resolve(input: &[u8]) -> Vec<(EditAction, u8)> {
        let keymap = create_default_keymap(&EditorConfig::default());
        let mut source = InputSource::new(input);
        let mut acc = vec![];
        while let Ok(it) = keymap.trie().resolve(&mut source) {
            if let Some(key) = it {
                acc.push((key.action, key.last_byte));
            }
        }
        acc
    }

    #[test_case(b"\x1b[A", EditAction::HistoryPrev)]
    #[test_case(b"\x1b[B", EditAction::HistoryNext)]
    #[test_case(b"\x1b[C", EditAction::MoveRight)]
    #[test_case(b"\x1b[D", EditAction::MoveLeft)]
    #[test_case(b"\x1b[H", EditAction::MoveHome)]
    #[test_case(b"\x1bOF", EditAction::MoveEnd)]
    #[test_case(b"\x1b[3~", EditAction::Delete)]
    #[test_case(b"\x1b[7~", EditAction::MoveHome)]
    #[test_case(b"\x1b[15~", EditAction::Ignore)]
    #[test_case(b"\x1b[24~", EditAction::Ignore)]
    #[test_case(b"\x1b[24;2~", EditAction::Ignore)]
    #[test_case(b"\x1b[3;5~", EditAction::Ignore)]
    #[test_case(b"\x1b[1;5C", EditAction::WordRight)]
    #[test_case(b"\x1b[1;5D", EditAction::WordLeft)]
    #[test_case(b"\x1bb", EditAction::WordLeft)]
    #[test_case(b"\x1b\x7f", EditAction::DeleteWordLeft)]
    #[test_case(b"\x1bd", EditAction::DeleteWordRight)]
    #[test_case(b"\x1b[1;3C", EditAction::Ignore)]
    #[test_case(b"\x1b[Z", EditAction::Ignore)]
    #[test_case(b"\x1b[9X", EditAction::Ignore)]
    #[test_case(b"\x1bOx", EditAction::Ignore)]
    #[test_case(b"\x1bq", EditAction::Ignore)]
    #[test_case(b"\x01", EditAction::MoveHome)]
    #[test_case(b"\x12", EditAction::SearchHistory)]
    #[test_case(b"\r", EditAction::Enter)]
    #[test_case(b"\n", EditAction::Enter)]
    #[test_case(b"\x7f", EditAction::Backspace)]
    #[test_case(b"\t", EditAction::Complete)]
    #[test_case(b"?", EditAction::CompletionHelp)]
    #[test_case(b"z", EditAction::Insert)]
    fn test_single_key(input: &[u8], expected: EditAction) {
        let resolved = resolve(input);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].0, expected);
    }

    #[test]
    fn test_sequence_of_keys() {
        assert_eq!(
            resolve(b"a\x1b[Db\r"),
            vec![
                (EditAction::Insert, b'a'),
                (EditAction::MoveLeft, b'D'),
                (EditAction::Insert, b'b'),
                (EditAction::Enter, b'\r'),
            ]
        );
    }

    #[test]
    fn test_function_keys_leave_no_tail() {
        assert_eq!(
            resolve(b"a\x1b[15~b\x1b[3;5~c"),
            vec![
                (EditAction::Insert, b'a'),
                (EditAction::Ignore, b'~'),
                (EditAction::Insert, b'b'),
                (EditAction::Ignore, b'~'),
                (EditAction::Insert, b'c'),
            ]
        );
    }

    #[test]
    fn test_question_mark_is_literal_without_help() {
        let config = EditorConfig {
            enable_completion_help: false,
            ..EditorConfig::default()
        };
        let keymap = create_default_keymap(&config);
        let mut source = InputSource::new(&b"?"[..]);
        let key = keymap.trie().resolve(&mut source).unwrap().unwrap();
        assert_eq!(key.action, EditAction::Insert);
    }
}
