// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Platform dispatch for the raw mode functions, and the `RawModeGuard` RAII wrapper.

#[cfg(unix)]
use super::raw_mode_unix;

/// Enable raw mode on the controlling terminal (stdin when it is a tty, otherwise
/// `/dev/tty`).
///
/// The original settings are saved the first time this is called and restored by
/// [`disable_raw_mode`].
///
/// # Errors
///
/// Returns miette diagnostic errors if:
/// - There is no controlling terminal
/// - Terminal attributes cannot be retrieved or set
/// - Platform is not supported
pub fn enable_raw_mode() -> miette::Result<()> {
    #[cfg(unix)]
    {
        let fd = raw_mode_unix::get_terminal_fd()
            .map_err(|e| miette::miette!("failed to get terminal file descriptor: {e}"))?;
        raw_mode_unix::enable_raw_mode_on(&fd)
    }

    #[cfg(not(unix))]
    {
        Err(miette::miette!("Platform not supported"))
    }
}

/// Restore the settings saved by [`enable_raw_mode`].
///
/// No-op when raw mode was never enabled, and safe to call any number of times.
///
/// # Errors
///
/// Returns miette diagnostic errors if:
/// - Terminal attributes cannot be set
/// - Platform is not supported
pub fn disable_raw_mode() -> miette::Result<()> {
    #[cfg(unix)]
    {
        if !raw_mode_unix::is_raw_mode_enabled()? {
            return Ok(());
        }
        let fd = raw_mode_unix::get_terminal_fd()
            .map_err(|e| miette::miette!("failed to get terminal file descriptor: {e}"))?;
        raw_mode_unix::disable_raw_mode_on(&fd)
    }

    #[cfg(not(unix))]
    {
        Ok(())
    }
}

/// Returns `true` when stdin is attached to a terminal.
#[must_use]
pub fn is_stdin_a_tty() -> bool {
    #[cfg(unix)]
    {
        rustix::termios::isatty(std::io::stdin())
    }

    #[cfg(not(unix))]
    {
        false
    }
}

/// RAII guard that enables raw mode on creation and restores the terminal when dropped.
#[derive(Debug)]
pub struct RawModeGuard;

impl RawModeGuard {
    /// Create a new guard and enable raw mode.
    ///
    /// # Errors
    ///
    /// See [`enable_raw_mode()`] for error conditions.
    pub fn new() -> miette::Result<Self> {
        enable_raw_mode()?;
        tracing::debug!(message = "raw mode enabled");
        Ok(RawModeGuard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(error) = disable_raw_mode() {
            tracing::warn!(message = "failed to restore terminal", error = %error);
        }
    }
}
