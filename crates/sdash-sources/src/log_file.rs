//! Event log reader.
//!
//! The whole file is read on every call. Bytes that are not valid UTF-8 are
//! replaced (lossy), and a missing file reads as empty: before the first
//! alert fires the daemon has not created it yet.

use crate::SourceError;
use sdash_core::{parser, Event};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct EventLog {
    path: PathBuf,
}

impl EventLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current file contents, or an empty string if the file does not exist.
    pub fn read(&self) -> Result<String, SourceError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(SourceError::new(&self.path, e)),
        }
    }

    /// Current lines in file order.
    pub fn lines(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.read()?.lines().map(str::to_owned).collect())
    }

    /// Every line that parses as an event, in file order. Malformed lines are
    /// dropped silently.
    pub fn events(&self) -> Result<Vec<Event>, SourceError> {
        let content = self.read()?;
        Ok(parser::parse_lines(content.lines()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
