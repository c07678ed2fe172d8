// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words isatty winsize tcgetwinsize

pub const DEFAULT_WIDTH: u16 = 80;
pub const DEFAULT_HEIGHT: u16 = 24;

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermSize {
    pub cols: u16,
    pub rows: u16,
}

impl Default for TermSize {
    fn default() -> Self {
        Self {
            cols: DEFAULT_WIDTH,
            rows: DEFAULT_HEIGHT,
        }
    }
}

impl TermSize {
    #[must_use]
    pub fn new(cols: u16, rows: u16) -> Self { Self { cols, rows } }
}

/// Get the terminal size with the [`rustix`] [`tcgetwinsize`] syscall on stdout.
///
/// # Errors
///
/// Returns an error if:
/// - stdout is not a terminal
/// - The terminal reports zero columns
///
/// [`tcgetwinsize`]: fn@rustix::termios::tcgetwinsize
#[cfg(unix)]
pub fn get_size() -> miette::Result<TermSize> {
    let winsize = rustix::termios::tcgetwinsize(std::io::stdout())
        .map_err(|e| miette::miette!("tcgetwinsize failed: {}", e))?;
    if winsize.ws_col == 0 {
        return Err(miette::miette!("tcgetwinsize reported zero columns"));
    }
    Ok(TermSize::new(winsize.ws_col, winsize.ws_row))
}

/// # Errors
///
/// Always returns an error, the window size query is unix only.
#[cfg(not(unix))]
pub fn get_size() -> miette::Result<TermSize> {
    Err(miette::miette!("Platform not supported"))
}

/// Returns `true` when `term` (the value of `$TERM`) names a terminal that can't handle
/// the escape sequences the editor emits. The comparison ignores ASCII case.
#[must_use]
pub fn is_unsupported_term<S: AsRef<str>>(term: Option<&str>, denylist: &[S]) -> bool {
    match term {
        Some(term) => denylist
            .iter()
            .any(|it| it.as_ref().eq_ignore_ascii_case(term)),
        None => false,
    }
}

/// [`is_unsupported_term`] applied to the `TERM` environment variable.
#[must_use]
pub fn is_env_term_unsupported<S: AsRef<str>>(denylist: &[S]) -> bool {
    let term = std::env::var("TERM").ok();
    is_unsupported_term(term.as_deref(), denylist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use test_case::test_case;

    const DENYLIST: [&str; 3] = ["dumb", "cons25", "emacs"];

    #[test_case(Some("dumb"), true)]
    #[test_case(Some("DUMB"), true)]
    #[test_case(Some("Emacs"), true)]
    #[test_case(Some("cons25"), true)]
    #[test_case(Some("xterm-256color"), false)]
    #[test_case(Some("dumber"), false)]
    #[test_case(None, false)]
    fn test_is_unsupported_term(term: Option<&str>, expected: bool) {
        assert_eq!(is_unsupported_term(term, &DENYLIST), expected);
    }

    #[test]
    #[serial]
    fn test_is_env_term_unsupported() {
        let saved = std::env::var("TERM").ok();

        // SAFETY: serialized with the other tests that touch the environment.
        unsafe { std::env::set_var("TERM", "dumb") };
        assert!(is_env_term_unsupported(&DENYLIST));

        unsafe { std::env::set_var("TERM", "xterm") };
        assert!(!is_env_term_unsupported(&DENYLIST));

        match saved {
            Some(value) => unsafe { std::env::set_var("TERM", value) },
            None => unsafe { std::env::remove_var("TERM") },
        }
    }

    #[test]
    fn test_default_size() {
        assert_eq!(TermSize::default(), TermSize::new(80, 24));
    }
}
