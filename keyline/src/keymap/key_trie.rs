// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{ByteSource, KeyBytes, KeyMatcher, KeyPattern};
use crate::ReadlineError;

/// One trie node. Children are kept in registration order.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyNode<A> {
    pub matcher: KeyMatcher,
    pub action: Option<A>,
    pub children: Vec<KeyNode<A>>,
}

impl<A> KeyNode<A> {
    fn new(matcher: KeyMatcher) -> Self {
        Self {
            matcher,
            action: None,
            children: Vec::new(),
        }
    }
}

/// Result of a successful [`KeyTrie::resolve`].
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMatch<A> {
    pub action: A,
    /// The byte that matched the leaf. For a wildcard leaf this is the actual input.
    pub last_byte: u8,
    /// Every byte consumed for this match, `last_byte` included.
    pub bytes: KeyBytes,
}

/// Prefix tree from byte sequences to actions.
///
/// # Matching policy
///
/// At every depth the children are tried **in registration order** and the first one
/// that matches the input byte wins. A [`KeyMatcher::Any`] child registered before an
/// exact sibling shadows that sibling, so register wildcard fallbacks after the exact
/// sequences they back up. Resolution never backtracks.
///
/// A node that has children is always descended into, so an action bound to a proper
/// prefix of another sequence is never returned.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyTrie<A> {
    root: Vec<KeyNode<A>>,
}

impl<A> Default for KeyTrie<A> {
    fn default() -> Self { Self { root: Vec::new() } }
}

impl<A: Clone> KeyTrie<A> {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Bind `action` to `pattern`. Nodes are shared with earlier registrations when the
    /// matcher is identical (same byte, or both wildcards). Registering the same full
    /// pattern again replaces only the action at its last node. Empty patterns are
    /// ignored.
    pub fn register(&mut self, pattern: impl Into<KeyPattern>, action: A) {
        let pattern = pattern.into();
        let Some((last, prefix)) = pattern.matchers.split_last() else {
            tracing::warn!(message = "ignoring empty key pattern");
            return;
        };

        let mut level = &mut self.root;
        for matcher in prefix {
            level = &mut Self::find_or_insert(level, *matcher).children;
        }
        Self::find_or_insert(level, *last).action = Some(action);
    }

    fn find_or_insert(level: &mut Vec<KeyNode<A>>, matcher: KeyMatcher) -> &mut KeyNode<A> {
        let index = match level.iter().position(|node| node.matcher == matcher) {
            Some(index) => index,
            None => {
                level.push(KeyNode::new(matcher));
                level.len() - 1
            }
        };
        &mut level[index]
    }

    /// Walk the trie reading one byte per level from `source`.
    ///
    /// Returns `Ok(None)` when some byte has no matching child, or the walk ends on a
    /// leaf with no action. The bytes read so far are consumed either way, and the next
    /// call starts again from the root.
    ///
    /// # Errors
    ///
    /// Propagates read failures from `source`.
    pub fn resolve<S: ByteSource + ?Sized>(
        &self,
        source: &mut S,
    ) -> Result<Option<KeyMatch<A>>, ReadlineError> {
        let mut level = &self.root;
        let mut bytes = KeyBytes::new();

        loop {
            let byte = source.next_byte()?;
            bytes.push(byte);

            let Some(node) = level.iter().find(|node| node.matcher.matches(byte)) else {
                tracing::trace!(message = "unmatched key sequence", bytes = ?bytes.as_slice());
                return Ok(None);
            };

            if !node.children.is_empty() {
                level = &node.children;
                continue;
            }

            return Ok(node.action.clone().map(|action| KeyMatch {
                action,
                last_byte: byte,
                bytes,
            }));
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.root.is_empty() }

    /// Top level nodes, in registration order.
    #[must_use]
    pub fn roots(&self) -> &[KeyNode<A>] { &self.root }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InputSource;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Act {
        Up,
        Down,
        CsiOther,
        Literal,
        Ctrl,
    }

    fn csi_trie() -> KeyTrie<Act> {
        let mut trie = KeyTrie::new();
        trie.register(b"\x1b[A", Act::Up);
        trie.register(b"\x1b[B", Act::Down);
        trie.register(KeyPattern::from(b"\x1b[").any(), Act::CsiOther);
        trie
    }

    fn resolve_all(trie: &KeyTrie<Act>, input: &[u8]) -> Vec<Option<Act>> {
        let mut source = InputSource::new(input);
        let mut acc = vec![];
        while let Ok(it) = trie.resolve(&mut source) {
            acc.push(it.map(|m| m.action));
        }
        acc
    }

    #[test]
    fn test_exact_beats_later_wildcard() {
        let trie = csi_trie();
        assert_eq!(resolve_all(&trie, b"\x1b[A"), vec![Some(Act::Up)]);
        assert_eq!(resolve_all(&trie, b"\x1b[B"), vec![Some(Act::Down)]);
    }

    #[test]
    fn test_wildcard_catches_unclaimed_byte() {
        let trie = csi_trie();
        let mut source = InputSource::new(&b"\x1b[Z"[..]);
        let key_match = trie.resolve(&mut source).unwrap().unwrap();
        assert_eq!(key_match.action, Act::CsiOther);
        assert_eq!(key_match.last_byte, b'Z');
        assert_eq!(key_match.bytes.as_slice(), b"\x1b[Z");
    }

    #[test]
    fn test_wildcard_registered_first_shadows_exact() {
        let mut trie = KeyTrie::new();
        trie.register(KeyPattern::from(b"\x1b[").any(), Act::CsiOther);
        trie.register(b"\x1b[A", Act::Up);
        assert_eq!(resolve_all(&trie, b"\x1b[A"), vec![Some(Act::CsiOther)]);
    }

    #[test]
    fn test_unmatched_prefix_is_consumed() {
        let mut trie = csi_trie();
        trie.register(b'x', Act::Literal);

        // `ESC O` has no node, so `ESC O` is dropped and `x` resolves on the next call.
        assert_eq!(
            resolve_all(&trie, b"\x1bOx"),
            vec![None, Some(Act::Literal)]
        );
    }

    #[test]
    fn test_root_wildcard_is_lowest_priority() {
        let mut trie = KeyTrie::new();
        trie.register(0x01_u8, Act::Ctrl);
        trie.register(KeyPattern::any_byte(), Act::Literal);

        let mut source = InputSource::new(&b"\x01q"[..]);
        assert_eq!(trie.resolve(&mut source).unwrap().unwrap().action, Act::Ctrl);
        let literal = trie.resolve(&mut source).unwrap().unwrap();
        assert_eq!(literal.action, Act::Literal);
        assert_eq!(literal.last_byte, b'q');
    }

    #[test]
    fn test_reregister_replaces_action_only() {
        let mut trie = csi_trie();
        trie.register(b"\x1b[A", Act::Down);

        assert_eq!(trie.roots().len(), 1);
        assert_eq!(trie.roots()[0].children.len(), 1);
        assert_eq!(trie.roots()[0].children[0].children.len(), 3);
        assert_eq!(resolve_all(&trie, b"\x1b[A"), vec![Some(Act::Down)]);
    }

    #[test]
    fn test_empty_pattern_is_ignored() {
        let mut trie: KeyTrie<Act> = KeyTrie::new();
        trie.register(KeyPattern::new(), Act::Up);
        assert!(trie.is_empty());
    }

    #[test]
    fn test_pushback_is_resolved_before_reader() {
        let trie = csi_trie();
        let mut source = InputSource::new(&b"A"[..]);
        source.push_back(0x1b);
        source.push_back(b'[');
        assert_eq!(trie.resolve(&mut source).unwrap().unwrap().action, Act::Up);
    }

    #[test]
    fn test_eof_mid_sequence_is_an_error() {
        let trie = csi_trie();
        let mut source = InputSource::new(&b"\x1b["[..]);
        assert!(matches!(
            trie.resolve(&mut source),
            Err(ReadlineError::InputClosed)
        ));
    }
}
