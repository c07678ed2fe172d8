// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Byte and string constants for the keys the editor binds and the escape sequences it
//! emits. Input side constants are `u8` since key sequences are matched byte by byte.
//! Output side constants are `&str` since they are written straight to the terminal.

use const_format::concatcp;

/// Map a lowercase ASCII letter to the control byte the terminal sends for
/// `Ctrl+<letter>` in raw mode.
#[must_use]
pub const fn ctrl(letter: u8) -> u8 { letter & 0x1F }

// Input bytes.

pub const CTRL_A: u8 = ctrl(b'a');
pub const CTRL_B: u8 = ctrl(b'b');
pub const CTRL_C: u8 = ctrl(b'c');
pub const CTRL_D: u8 = ctrl(b'd');
pub const CTRL_E: u8 = ctrl(b'e');
pub const CTRL_F: u8 = ctrl(b'f');
pub const CTRL_H: u8 = ctrl(b'h');
pub const TAB: u8 = ctrl(b'i');
pub const LINE_FEED: u8 = ctrl(b'j');
pub const CTRL_K: u8 = ctrl(b'k');
pub const CTRL_L: u8 = ctrl(b'l');
pub const CARRIAGE_RETURN: u8 = ctrl(b'm');
pub const CTRL_N: u8 = ctrl(b'n');
pub const CTRL_P: u8 = ctrl(b'p');
pub const CTRL_R: u8 = ctrl(b'r');
pub const CTRL_T: u8 = ctrl(b't');
pub const CTRL_U: u8 = ctrl(b'u');
pub const CTRL_W: u8 = ctrl(b'w');
pub const CTRL_Y: u8 = ctrl(b'y');
pub const ESC: u8 = 0x1B;
pub const DEL: u8 = 0x7F;

/// Second byte of a CSI introducer (`ESC [`).
pub const CSI_BRACKET: u8 = b'[';
/// Second byte of an SS3 introducer (`ESC O`), sent by some terminals for Home/End.
pub const SS3_O: u8 = b'O';
pub const CSI_PARAM_SEPARATOR: u8 = b';';
pub const CSI_TILDE: u8 = b'~';
/// Final byte of a Cursor Position Report (`ESC [ rows ; cols R`).
pub const CPR_FINAL_BYTE: u8 = b'R';

// CSI final bytes for the sequences we emit.

pub const CHA_CURSOR_COLUMN: char = 'G';
pub const CUF_CURSOR_FORWARD: char = 'C';
pub const CUB_CURSOR_BACKWARD: char = 'D';
pub const CUP_CURSOR_POSITION: char = 'H';
pub const ED_ERASE_DISPLAY: char = 'J';
pub const EL_ERASE_LINE: char = 'K';
pub const DSR_DEVICE_STATUS: char = 'n';

// Output strings.

pub const ESC_STR: &str = "\x1b";
pub const CSI_START: &str = concatcp!(ESC_STR, "[");
pub const BELL_STR: &str = "\x07";
pub const CRLF: &str = "\r\n";
/// Help listing trailer. Cursor goes down first, then back to column 0.
pub const LF_CR: &str = "\n\r";

/// Home the cursor, then erase the whole display.
pub const CLEAR_SCREEN: &str = concatcp!(CSI_START, "H", CSI_START, "2J");
/// Ask the terminal to report the cursor position.
pub const DSR_CURSOR_POSITION_QUERY: &str = concatcp!(CSI_START, "6n");
/// Cursor forward far enough to hit the right margin of any real terminal.
pub const CURSOR_TO_RIGHT_MARGIN: &str = concatcp!(CSI_START, "999C");

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(b'a', 1)]
    #[test_case(b'c', 3)]
    #[test_case(b'h', 8)]
    #[test_case(b'm', 13)]
    #[test_case(b'w', 23)]
    fn test_ctrl(letter: u8, expected: u8) {
        assert_eq!(ctrl(letter), expected);
    }

    #[test]
    fn test_composed_strings() {
        assert_eq!(CLEAR_SCREEN, "\x1b[H\x1b[2J");
        assert_eq!(DSR_CURSOR_POSITION_QUERY, "\x1b[6n");
        assert_eq!(CURSOR_TO_RIGHT_MARGIN, "\x1b[999C");
    }
}
