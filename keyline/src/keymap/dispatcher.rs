// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{ByteSource, KeyMatch, KeyPattern, KeyTrie};
use crate::ReadlineError;

/// What the dispatch loop does after a key was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchFlow<T> {
    /// Set the termination flag, and return `T` from [`KeyDispatcher::run`].
    ReturnOk(T),
    Continue,
}

/// Receives resolved keys from [`KeyDispatcher::run`].
pub trait KeyHandler<A> {
    type Output;

    /// Called once per resolved key, in input order. `source` is the same source the
    /// key was read from, so a handler may read more bytes and push them back.
    ///
    /// # Errors
    ///
    /// Any error ends the loop and is returned from [`KeyDispatcher::run`].
    fn on_key(
        &mut self,
        key: KeyMatch<A>,
        source: &mut dyn ByteSource,
    ) -> Result<DispatchFlow<Self::Output>, ReadlineError>;
}

/// Owns the [`KeyTrie`] (built once, up front) and runs the resolve loop.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyDispatcher<A> {
    trie: KeyTrie<A>,
}

impl<A: Clone> Default for KeyDispatcher<A> {
    fn default() -> Self {
        Self {
            trie: KeyTrie::new(),
        }
    }
}

impl<A: Clone> KeyDispatcher<A> {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// See [`KeyTrie::register`] for the ordering rules.
    pub fn register(&mut self, pattern: impl Into<KeyPattern>, action: A) -> &mut Self {
        self.trie.register(pattern, action);
        self
    }

    #[must_use]
    pub fn trie(&self) -> &KeyTrie<A> { &self.trie }

    /// Resolve keys and hand them to `handler` until it returns
    /// [`DispatchFlow::ReturnOk`]. Unmatched sequences are dropped.
    ///
    /// # Errors
    ///
    /// Returns the first read error from `source`, or the first error from `handler`.
    pub fn run<S, H>(&self, source: &mut S, handler: &mut H) -> Result<H::Output, ReadlineError>
    where
        S: ByteSource,
        H: KeyHandler<A>,
    {
        loop {
            let Some(key) = self.trie.resolve(source)? else {
                continue;
            };
            if let DispatchFlow::ReturnOk(output) = handler.on_key(key, source)? {
                return Ok(output);
            }
        }
    }
}
