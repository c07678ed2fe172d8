// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Plain text history persistence, one entry per line.
//!
//! Entries are not escaped, so an entry containing a newline comes back as two entries.

use super::History;
use std::{fs::File,
          io::{self, BufRead, BufReader, BufWriter, Write},
          path::{Path, PathBuf}};

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("failed to load history from {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to save history to {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("history max length must be at least 1, got {0}")]
    InvalidMaxLen(usize),
}

impl History {
    /// Feed each line of `path` through [`History::add`], with trailing `\r`/`\n`
    /// removed. Returns the number of lines read. A missing file reads as empty.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::Load`] if the file exists but can't be read.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<usize, HistoryError> {
        let path = path.as_ref();
        let load_error = |source| HistoryError::Load {
            path: path.to_path_buf(),
            source,
        };

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(message = "no history file", path = %path.display());
                return Ok(0);
            }
            Err(e) => return Err(load_error(e)),
        };

        let mut reader = BufReader::new(file);
        let mut line = Vec::new();
        let mut count = 0;
        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line).map_err(load_error)? == 0 {
                break;
            }
            while line.last().is_some_and(|it| *it == b'\n' || *it == b'\r') {
                line.pop();
            }
            self.add(line.as_slice());
            count += 1;
        }

        tracing::debug!(message = "history loaded", path = %path.display(), count);
        Ok(count)
    }

    /// Write every entry as one `\n` terminated line, replacing `path`.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::Save`] if the file can't be created or written.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), HistoryError> {
        let path = path.as_ref();
        let save_error = |source| HistoryError::Save {
            path: path.to_path_buf(),
            source,
        };

        let mut writer = BufWriter::new(File::create(path).map_err(save_error)?);
        for entry in self.iter() {
            writer.write_all(entry).map_err(save_error)?;
            writer.write_all(b"\n").map_err(save_error)?;
        }
        writer.flush().map_err(save_error)?;

        tracing::debug!(message = "history saved", path = %path.display(), count = self.len());
        Ok(())
    }
}
