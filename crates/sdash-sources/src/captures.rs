//! Capture directory lister.
//!
//! Filenames follow `<TYPE>_<TIMESTAMP>.jpg`, with a timestamp that sorts
//! lexicographically in time order, so newest-first is a reverse filename
//! sort. Modification times are never consulted.
//!
//! Listing is cheap and touches no file contents. Validation (size and image
//! header) happens in [`CaptureDir::displayable`], lazily, and stops as soon
//! as enough captures have passed.

use crate::SourceError;
use sdash_core::{Capture, Thumbnail};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_MIN_BYTES: u64 = 500;

/// Why a listed capture is not displayed.
#[derive(Debug, Error)]
pub enum Rejected {
    #[error("filename has no `_` timestamp segment")]
    NoTimestamp,
    #[error("not a regular file")]
    NotAFile,
    #[error("{0} bytes is too small to be a capture")]
    TooSmall(u64),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("undecodable image: {0}")]
    Undecodable(#[from] image::ImageError),
}

#[derive(Debug, Clone)]
pub struct CaptureDir {
    dir: PathBuf,
    min_bytes: u64,
}

impl CaptureDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), min_bytes: DEFAULT_MIN_BYTES }
    }

    /// Captures of `min_bytes` or fewer are rejected as corrupt.
    pub fn min_bytes(mut self, min_bytes: u64) -> Self {
        self.min_bytes = min_bytes;
        self
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// All `.jpg` entries, newest first by filename. A missing directory
    /// lists as empty. Names that are not valid UTF-8 are skipped.
    pub fn list(&self) -> Result<Vec<Capture>, SourceError> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(SourceError::new(&self.dir, e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SourceError::new(&self.dir, e))?;
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        names.sort_unstable_by(|a, b| b.cmp(a));

        Ok(names.iter().filter_map(|n| Capture::from_filename(n)).collect())
    }

    /// Check that one capture can be shown.
    pub fn validate(&self, capture: Capture) -> Result<Thumbnail, Rejected> {
        if capture.timestamp.is_none() {
            return Err(Rejected::NoTimestamp);
        }
        let path = self.dir.join(&capture.filename);
        let meta = std::fs::metadata(&path)?;
        if !meta.is_file() {
            return Err(Rejected::NotAFile);
        }
        if meta.len() <= self.min_bytes {
            return Err(Rejected::TooSmall(meta.len()));
        }
        let (width, height) = image::ImageReader::open(&path)?
            .with_guessed_format()?
            .into_dimensions()?;

        Ok(Thumbnail { capture, size_bytes: meta.len(), width, height })
    }

    /// Validate `captures` in order, returning at most `cap` that pass.
    /// Candidates after the `cap`-th success are never opened.
    pub fn displayable<I>(&self, captures: I, cap: usize) -> Vec<Thumbnail>
    where
        I: IntoIterator<Item = Capture>,
    {
        captures
            .into_iter()
            .filter_map(|c| {
                let name = c.filename.clone();
                self.validate(c)
                    .map_err(|reason| tracing::trace!(capture = %name, %reason, "capture skipped"))
                    .ok()
            })
            .take(cap)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
