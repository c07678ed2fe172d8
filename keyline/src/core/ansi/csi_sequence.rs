// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! CSI sequence builder for the handful of cursor and erase operations the renderer
//! needs. Serialize with [`std::fmt::Display`], e.g. `write!(term, "{seq}")`.

use super::constants::{CHA_CURSOR_COLUMN, CSI_START, CUB_CURSOR_BACKWARD,
                       CUF_CURSOR_FORWARD, CUP_CURSOR_POSITION, DSR_DEVICE_STATUS,
                       ED_ERASE_DISPLAY, EL_ERASE_LINE};
use std::fmt::{Display, Formatter, Result};

/// Builder for CSI (Control Sequence Introducer) sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsiSequence {
    /// Cursor Horizontal Absolute (CHA) - ESC [ n G. Columns are 1 based.
    CursorHorizontalAbsolute(u16),
    /// Cursor Forward (CUF) - ESC [ n C
    CursorForward(u16),
    /// Cursor Backward (CUB) - ESC [ n D
    CursorBackward(u16),
    /// Cursor Position (CUP) to the top left corner - ESC [ H
    CursorHome,
    /// Erase Display (ED) - ESC [ n J
    EraseDisplay(u16),
    /// Erase Line (EL) - ESC [ n K. `0` erases from the cursor to the end of line.
    EraseLine(u16),
    /// Device Status Report (DSR) - ESC [ n n. `6` asks for the cursor position.
    DeviceStatusReport(u16),
}

impl CsiSequence {
    /// Move to the first column of the current row.
    pub const COLUMN_ZERO: Self = Self::CursorHorizontalAbsolute(1);
    pub const ERASE_TO_END_OF_LINE: Self = Self::EraseLine(0);
}

impl Display for CsiSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(CSI_START)?;
        match self {
            CsiSequence::CursorHorizontalAbsolute(n) => {
                write!(f, "{n}{CHA_CURSOR_COLUMN}")
            }
            CsiSequence::CursorForward(n) => write!(f, "{n}{CUF_CURSOR_FORWARD}"),
            CsiSequence::CursorBackward(n) => write!(f, "{n}{CUB_CURSOR_BACKWARD}"),
            CsiSequence::CursorHome => write!(f, "{CUP_CURSOR_POSITION}"),
            CsiSequence::EraseDisplay(n) => write!(f, "{n}{ED_ERASE_DISPLAY}"),
            CsiSequence::EraseLine(n) => write!(f, "{n}{EL_ERASE_LINE}"),
            CsiSequence::DeviceStatusReport(n) => write!(f, "{n}{DSR_DEVICE_STATUS}"),
        }
    }
}
