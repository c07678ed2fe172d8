// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::SmallVec;

/// Key sequences are short, `ESC [ 1 ; 5 C` is the longest in the default keymap.
pub const KEY_PATTERN_INLINE_CAPACITY: usize = 8;

pub type KeyMatcherStorage = SmallVec<[KeyMatcher; KEY_PATTERN_INLINE_CAPACITY]>;
pub type KeyBytes = SmallVec<[u8; KEY_PATTERN_INLINE_CAPACITY]>;

/// One position in a [`KeyPattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMatcher {
    Byte(u8),
    /// Matches any byte at this depth.
    Any,
}

impl KeyMatcher {
    #[must_use]
    pub fn matches(self, byte: u8) -> bool {
        match self {
            KeyMatcher::Byte(it) => it == byte,
            KeyMatcher::Any => true,
        }
    }
}

/// A byte sequence to bind in a [`crate::KeyTrie`].
///
/// ```
/// use keyline::{KeyMatcher, KeyPattern};
///
/// let csi_any = KeyPattern::from(b"\x1b[").any();
/// assert_eq!(csi_any.len(), 3);
/// assert_eq!(csi_any.matchers[2], KeyMatcher::Any);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPattern {
    pub matchers: KeyMatcherStorage,
}

impl KeyPattern {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// The wildcard on its own: matches any single byte.
    #[must_use]
    pub fn any_byte() -> Self { Self::new().any() }

    #[must_use]
    pub fn byte(mut self, byte: u8) -> Self {
        self.matchers.push(KeyMatcher::Byte(byte));
        self
    }

    #[must_use]
    pub fn bytes(mut self, bytes: &[u8]) -> Self {
        self.matchers
            .extend(bytes.iter().copied().map(KeyMatcher::Byte));
        self
    }

    #[must_use]
    pub fn any(mut self) -> Self {
        self.matchers.push(KeyMatcher::Any);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize { self.matchers.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.matchers.is_empty() }
}

impl From<&[u8]> for KeyPattern {
    fn from(bytes: &[u8]) -> Self { Self::new().bytes(bytes) }
}

impl<const N: usize> From<&[u8; N]> for KeyPattern {
    fn from(bytes: &[u8; N]) -> Self { Self::new().bytes(bytes) }
}

impl From<u8> for KeyPattern {
    fn from(byte: u8) -> Self { Self::new().byte(byte) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder() {
        let pattern = KeyPattern::new().byte(0x1b).bytes(b"[1;5").any();
        assert_eq!(pattern.len(), 6);
        assert_eq!(pattern.matchers[0], KeyMatcher::Byte(0x1b));
        assert_eq!(pattern.matchers[4], KeyMatcher::Byte(b'5'));
        assert_eq!(pattern.matchers[5], KeyMatcher::Any);
        assert!(KeyPattern::new().is_empty());
    }

    #[test]
    fn test_matcher() {
        assert!(KeyMatcher::Byte(b'A').matches(b'A'));
        assert!(!KeyMatcher::Byte(b'A').matches(b'B'));
        assert!(KeyMatcher::Any.matches(0));
        assert!(KeyMatcher::Any.matches(0xff));
    }
}
