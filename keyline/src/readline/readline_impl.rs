// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Completer, EditAction, EditOutcome, EditSession, EditState, EditorConfig,
            History, ReadlineError, ReadlineEvent, YankBuffer, create_default_keymap,
            detect_term_size};
use crate::{CRLF, InputSource, KeyDispatcher, RawModeGuard, TermSize,
            is_env_term_unsupported, is_stdin_a_tty};
use std::io::{self, Read, Stdin, Stdout, Write};

/// What the reader and writer of a [`Readline`] are attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalIo {
    /// The process's stdin and stdout. Raw mode is switched on for each line.
    Stdio,
    /// Anything else. The terminal is never queried or reconfigured.
    Detached,
}

/// How a [`TerminalIo::Detached`] reader is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Bytes are keystrokes, as if typed on a raw terminal.
    Interactive,
    /// Bytes are whole lines, read without editing.
    LineBuffered,
}

/// The line editor. Owns everything that lives longer than one line: the key dispatcher
/// (built once), the history store, the yank buffer and the completer.
///
/// ```no_run
/// use keyline::{Completion, EditorConfig, Readline, ReadlineEvent};
///
/// # fn main() -> Result<(), keyline::ReadlineError> {
/// let mut readline = Readline::new_stdio(EditorConfig::default());
/// readline.set_completer(|line: &str| {
///     ["status", "stop"]
///         .iter()
///         .filter(|it| it.starts_with(line))
///         .map(|it| Completion::new(*it, ""))
///         .collect::<Vec<_>>()
/// });
/// if let ReadlineEvent::Line(line) = readline.read_line("> ")? {
///     println!("{line}");
/// }
/// # Ok(())
/// # }
/// ```
pub struct Readline<R, W> {
    input: InputSource<R>,
    output: W,
    keymap: KeyDispatcher<EditAction>,
    history: History,
    yank: YankBuffer,
    completer: Option<Box<dyn Completer>>,
    config: EditorConfig,
    terminal: TerminalIo,
    input_mode: InputMode,
}

impl<R, W> std::fmt::Debug for Readline<R, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Readline")
            .field("history", &self.history)
            .field("yank", &self.yank)
            .field("has_completer", &self.completer.is_some())
            .field("config", &self.config)
            .field("terminal", &self.terminal)
            .field("input_mode", &self.input_mode)
            .finish_non_exhaustive()
    }
}

impl Readline<Stdin, Stdout> {
    /// Editor on the process's terminal. Falls back to plain line reads when stdin is
    /// not a terminal or `$TERM` is in [`EditorConfig::unsupported_terms`].
    #[must_use]
    pub fn new_stdio(config: EditorConfig) -> Self {
        Self::with_terminal(io::stdin(), io::stdout(), config, TerminalIo::Stdio)
    }
}

impl<R: Read, W: Write> Readline<R, W> {
    /// Editor over an arbitrary reader and writer, treated as a raw terminal that is
    /// [`crate::DEFAULT_WIDTH`] columns wide unless
    /// [`EditorConfig::term_size_override`] says otherwise.
    pub fn new(reader: R, writer: W, config: EditorConfig) -> Self {
        Self::with_terminal(reader, writer, config, TerminalIo::Detached)
    }

    fn with_terminal(reader: R, writer: W, config: EditorConfig, terminal: TerminalIo) -> Self {
        Self {
            input: InputSource::new(reader),
            output: writer,
            keymap: create_default_keymap(&config),
            history: History::new(config.history_max_len),
            yank: YankBuffer::new(),
            completer: None,
            config,
            terminal,
            input_mode: InputMode::Interactive,
        }
    }

    /// Only used by [`TerminalIo::Detached`] editors.
    #[must_use]
    pub fn with_input_mode(mut self, input_mode: InputMode) -> Self {
        self.input_mode = input_mode;
        self
    }

    pub fn set_completer(&mut self, completer: impl Completer + 'static) {
        self.completer = Some(Box::new(completer));
    }

    pub fn clear_completer(&mut self) { self.completer = None; }

    #[must_use]
    pub fn history(&self) -> &History { &self.history }

    pub fn history_mut(&mut self) -> &mut History { &mut self.history }

    #[must_use]
    pub fn yank_buffer(&self) -> &YankBuffer { &self.yank }

    #[must_use]
    pub fn config(&self) -> &EditorConfig { &self.config }

    #[must_use]
    pub fn terminal(&self) -> TerminalIo { self.terminal }

    pub fn output(&mut self) -> &mut W { &mut self.output }

    /// Show `prompt` and read one line.
    ///
    /// Accepted non-empty lines are added to the history when
    /// [`EditorConfig::auto_add_history`] is set.
    ///
    /// # Errors
    ///
    /// - [`ReadlineError::IO`] if reading input or writing output fails.
    /// - [`ReadlineError::InputClosed`] if input ends in the middle of an interactive
    ///   edit.
    /// - [`ReadlineError::RawMode`] if the terminal can't be switched to raw mode.
    pub fn read_line(&mut self, prompt: &str) -> Result<ReadlineEvent, ReadlineError> {
        if self.is_line_buffered() {
            return self.read_line_buffered(prompt);
        }

        let _raw_mode = match self.terminal {
            TerminalIo::Stdio => Some(
                RawModeGuard::new().map_err(|e| ReadlineError::RawMode(e.to_string()))?,
            ),
            TerminalIo::Detached => None,
        };

        let term_size = self.term_size();
        let state = EditState::new(prompt, self.config.max_line_len, term_size);
        self.history.begin_session();

        let Self {
            input,
            output,
            keymap,
            history,
            yank,
            completer,
            config,
            ..
        } = self;
        let mut session = EditSession::new(
            state,
            history,
            yank,
            completer.as_deref(),
            output,
            config.enable_completion_help,
        );
        let result = session
            .start()
            .and_then(|()| keymap.run(input, &mut session));
        let state = session.into_state();

        // Accept and cancel already closed the session slot. This covers the error
        // path, which never reaches the edit operations that close it.
        history.end_session();
        let outcome = result?;
        output.write_all(CRLF.as_bytes())?;
        output.flush()?;

        tracing::debug!(message = "read_line done", outcome = ?outcome, len = state.len());
        Ok(match outcome {
            EditOutcome::Accepted => ReadlineEvent::Line(self.accept(state.buffer.as_bytes())),
            EditOutcome::Eof => ReadlineEvent::Eof,
            EditOutcome::Interrupted => ReadlineEvent::Interrupted,
        })
    }

    fn is_line_buffered(&self) -> bool {
        match self.terminal {
            TerminalIo::Stdio => {
                is_env_term_unsupported(&self.config.unsupported_terms) || !is_stdin_a_tty()
            }
            TerminalIo::Detached => self.input_mode == InputMode::LineBuffered,
        }
    }

    fn term_size(&mut self) -> TermSize {
        if let Some(size) = self.config.term_size_override {
            return size;
        }
        match self.terminal {
            TerminalIo::Stdio => detect_term_size(&mut self.input, &mut self.output),
            TerminalIo::Detached => TermSize::default(),
        }
    }

    /// History keeps the raw bytes, the caller gets them as text.
    fn accept(&mut self, line: &[u8]) -> String {
        if self.config.auto_add_history && !line.is_empty() {
            self.history.add(line);
        }
        String::from_utf8_lossy(line).into_owned()
    }

    /// No editing: print the prompt, read up to a newline, trim it.
    fn read_line_buffered(&mut self, prompt: &str) -> Result<ReadlineEvent, ReadlineError> {
        let show_prompt = match self.terminal {
            TerminalIo::Stdio => is_stdin_a_tty(),
            TerminalIo::Detached => true,
        };
        if show_prompt {
            self.output.write_all(prompt.as_bytes())?;
            self.output.flush()?;
        }

        let max_len = self.config.max_line_len.saturating_sub(1);
        match self.input.read_line_buffered(max_len)? {
            Some(bytes) => Ok(ReadlineEvent::Line(self.accept(&bytes))),
            None => Ok(ReadlineEvent::Eof),
        }
    }
}
