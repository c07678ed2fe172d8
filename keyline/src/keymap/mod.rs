// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Byte-sequence key matching.
//!
//! A [`KeyTrie`] maps byte sequences (with an optional [`KeyMatcher::Any`] wildcard at
//! any depth) to actions. [`KeyTrie::resolve`] walks it one byte at a time against a
//! [`ByteSource`], and [`KeyDispatcher::run`] loops resolve and hand off to a
//! [`KeyHandler`] until the handler says it is done.
//!
//! Bytes read while probing can be handed back with [`ByteSource::push_back`]. They are
//! replayed before anything new is read from the underlying reader.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach sources.
pub mod dispatcher;
pub mod input_source;
pub mod key_pattern;
pub mod key_trie;

// Re-export.
pub use dispatcher::*;
pub use input_source::*;
pub use key_pattern::*;
pub use key_trie::*;
