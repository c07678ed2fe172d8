// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use std::{fmt::{Display, Formatter},
          ops::Deref,
          path::{Path, PathBuf}};

/// A uniquely named directory under [`std::env::temp_dir`] that is deleted (with
/// everything in it) when dropped.
#[derive(Debug)]
pub struct TempDir {
    pub inner: PathBuf,
}

impl TempDir {
    /// Join a path to the temporary directory.
    pub fn join<P: AsRef<Path>>(&self, path: P) -> PathBuf { self.inner.join(path) }
}

/// Create a temporary directory.
///
/// # Errors
///
/// Returns an error if the directory cannot be created (permissions, full disk, etc).
pub fn try_create_temp_dir() -> miette::Result<TempDir> {
    let root = std::env::temp_dir();
    let new_temp_dir = root.join(format!("keyline_{}", uuid::Uuid::new_v4().simple()));
    std::fs::create_dir(&new_temp_dir).into_diagnostic()?;
    Ok(TempDir {
        inner: new_temp_dir,
    })
}

impl Drop for TempDir {
    fn drop(&mut self) { std::fs::remove_dir_all(&self.inner).ok(); }
}

impl Deref for TempDir {
    type Target = Path;

    fn deref(&self) -> &Self::Target { &self.inner }
}

impl AsRef<Path> for TempDir {
    fn as_ref(&self) -> &Path { &self.inner }
}

impl Display for TempDir {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner.display())
    }
}
