// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Completer, EditAction, EditEffect, EditOutcome, EditState, HELP_KEY, History,
            ReadlineError, YankBuffer, beep, render_line, run_completion, show_help};
use crate::{ByteSource, CLEAR_SCREEN, DispatchFlow, KeyHandler, KeyMatch};
use std::io::Write;

/// One interactive edit: the per-line [`EditState`] plus borrows of everything that
/// outlives the line. Fed keys by [`crate::KeyDispatcher::run`].
pub struct EditSession<'a> {
    pub state: EditState,
    history: &'a mut History,
    yank: &'a mut YankBuffer,
    completer: Option<&'a dyn Completer>,
    output: &'a mut dyn Write,
    help_key_enabled: bool,
}

impl std::fmt::Debug for EditSession<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditSession")
            .field("state", &self.state)
            .field("history_len", &self.history.len())
            .field("has_completer", &self.completer.is_some())
            .field("help_key_enabled", &self.help_key_enabled)
            .finish_non_exhaustive()
    }
}

impl<'a> EditSession<'a> {
    pub fn new(
        state: EditState,
        history: &'a mut History,
        yank: &'a mut YankBuffer,
        completer: Option<&'a dyn Completer>,
        output: &'a mut dyn Write,
        help_key_enabled: bool,
    ) -> Self {
        Self {
            state,
            history,
            yank,
            completer,
            output,
            help_key_enabled,
        }
    }

    /// Draw the prompt.
    ///
    /// # Errors
    ///
    /// Returns the write error, if any.
    pub fn start(&mut self) -> Result<(), ReadlineError> {
        self.refresh()
    }

    #[must_use]
    pub fn into_state(self) -> EditState { self.state }

    fn refresh(&mut self) -> Result<(), ReadlineError> {
        render_line(&mut *self.output, &self.state, self.history)?;
        Ok(())
    }

    fn handle_effect(
        &mut self,
        effect: EditEffect,
        source: &mut dyn ByteSource,
    ) -> Result<DispatchFlow<EditOutcome>, ReadlineError> {
        match effect {
            EditEffect::None => {}
            EditEffect::Refresh => self.refresh()?,
            EditEffect::Beep => {
                beep(&mut *self.output)?;
                self.refresh()?;
            }
            EditEffect::ClearScreen => {
                self.output.write_all(CLEAR_SCREEN.as_bytes())?;
                self.refresh()?;
            }
            EditEffect::Complete => {
                if let Some(completer) = self.completer {
                    run_completion(
                        &mut self.state,
                        completer,
                        self.history,
                        source,
                        &mut *self.output,
                        self.help_key_enabled,
                    )?;
                }
            }
            EditEffect::CompletionHelp => match self.completer {
                Some(completer) => {
                    show_help(&self.state, completer, self.history, &mut *self.output)?;
                }
                // No completer: `?` is just a character.
                None => {
                    let effect = self.state.insert(HELP_KEY, self.history);
                    return self.handle_effect(effect, source);
                }
            },
            EditEffect::Done(outcome) => return Ok(DispatchFlow::ReturnOk(outcome)),
        }
        Ok(DispatchFlow::Continue)
    }
}

impl KeyHandler<EditAction> for EditSession<'_> {
    type Output = EditOutcome;

    fn on_key(
        &mut self,
        key: KeyMatch<EditAction>,
        source: &mut dyn ByteSource,
    ) -> Result<DispatchFlow<EditOutcome>, ReadlineError> {
        tracing::trace!(
            message = "key",
            action = %key.action,
            bytes = ?key.bytes.as_slice(),
        );
        let effect =
            self.state
                .apply(key.action, key.last_byte, self.history, self.yank);
        self.handle_effect(effect, source)
    }
}
