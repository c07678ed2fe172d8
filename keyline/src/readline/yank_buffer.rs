// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Single slot holding the most recently killed span. Each kill replaces it, yank
/// copies out of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YankBuffer {
    contents: Vec<u8>,
}

impl YankBuffer {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn set(&mut self, killed: impl Into<Vec<u8>>) { self.contents = killed.into(); }

    #[must_use]
    pub fn get(&self) -> &[u8] { &self.contents }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.contents.is_empty() }
}
