// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Unix implementation of raw mode using rustix's safe termios API.

use miette::miette;
use rustix::{fd::{AsFd, BorrowedFd},
             termios::{self, ControlModes, InputModes, LocalModes, OptionalActions,
                       OutputModes, SpecialCodeIndex, Termios}};
use std::{fs::File,
          io,
          sync::{LazyLock, Mutex}};

/// Original terminal settings, saved by the first successful enable.
static ORIGINAL_TERMIOS: LazyLock<Mutex<Option<Termios>>> =
    LazyLock::new(|| Mutex::new(None));

/// Either stdin (when it is a tty) or `/dev/tty` (when stdin is redirected).
#[derive(Debug)]
pub enum TerminalFd {
    Stdin(io::Stdin),
    DevTty(File),
}

impl AsFd for TerminalFd {
    fn as_fd(&self) -> BorrowedFd<'_> {
        match self {
            TerminalFd::Stdin(stdin) => stdin.as_fd(),
            TerminalFd::DevTty(file) => file.as_fd(),
        }
    }
}

/// # Errors
///
/// Returns an error if stdin is not a tty and `/dev/tty` cannot be opened.
pub fn get_terminal_fd() -> io::Result<TerminalFd> {
    let stdin = io::stdin();
    if termios::isatty(&stdin) {
        Ok(TerminalFd::Stdin(stdin))
    } else {
        let file = File::options().read(true).write(true).open("/dev/tty")?;
        Ok(TerminalFd::DevTty(file))
    }
}

/// Apply the raw settings to a copy of `termios`:
/// - input: no break signal, no CR to NL, no parity check, no 8th bit strip, no XON/XOFF
/// - output: no post processing
/// - control: 8 bit chars
/// - local: no echo, no canonical mode, no extended input processing, no signal chars
/// - `read()` returns after exactly one byte with no timer
pub fn make_raw(termios: &Termios) -> Termios {
    let mut raw = termios.clone();
    raw.input_modes.remove(
        InputModes::BRKINT
            | InputModes::ICRNL
            | InputModes::INPCK
            | InputModes::ISTRIP
            | InputModes::IXON,
    );
    raw.output_modes.remove(OutputModes::OPOST);
    raw.control_modes.insert(ControlModes::CS8);
    raw.local_modes.remove(
        LocalModes::ECHO | LocalModes::ICANON | LocalModes::IEXTEN | LocalModes::ISIG,
    );
    raw.special_codes[SpecialCodeIndex::VMIN] = 1;
    raw.special_codes[SpecialCodeIndex::VTIME] = 0;
    raw
}

/// # Errors
///
/// Returns an error if the attributes can't be read or written, or the lock is
/// poisoned.
pub fn enable_raw_mode_on(fd: impl AsFd) -> miette::Result<()> {
    let current = termios::tcgetattr(&fd)
        .map_err(|e| miette!("failed to retrieve terminal attributes: {e}"))?;

    {
        let mut original = ORIGINAL_TERMIOS
            .lock()
            .map_err(|e| miette!("terminal settings lock poisoned: {e}"))?;
        if original.is_none() {
            *original = Some(current.clone());
        }
    }

    // TCSAFLUSH: input that arrived before the switch is discarded.
    termios::tcsetattr(&fd, OptionalActions::Flush, &make_raw(&current))
        .map_err(|e| miette!("failed to set terminal attributes: {e}"))?;

    Ok(())
}

/// # Errors
///
/// Returns an error if the attributes can't be written, or the lock is poisoned.
pub fn disable_raw_mode_on(fd: impl AsFd) -> miette::Result<()> {
    let mut original = ORIGINAL_TERMIOS
        .lock()
        .map_err(|e| miette!("terminal settings lock poisoned: {e}"))?;

    if let Some(ref saved) = *original {
        termios::tcsetattr(&fd, OptionalActions::Flush, saved)
            .map_err(|e| miette!("failed to set terminal attributes: {e}"))?;
        *original = None;
    }

    Ok(())
}

/// # Errors
///
/// Returns an error if the lock is poisoned.
pub fn is_raw_mode_enabled() -> miette::Result<bool> {
    let original = ORIGINAL_TERMIOS
        .lock()
        .map_err(|e| miette!("terminal settings lock poisoned: {e}"))?;
    Ok(original.is_some())
}
