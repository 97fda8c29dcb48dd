//! sdash-sources: filesystem adapters for sdash.
//!
//! The sensor daemon owns two resources: an append-only event log and a flat
//! directory of JPEG captures. [`EventLog`] and [`CaptureDir`] read them fresh
//! on every call; no handle, offset, or listing is kept between calls.
//! [`refresh`] runs one full refresh cycle and never fails.

pub mod captures;
pub mod log_file;

pub use captures::{CaptureDir, Rejected};
pub use log_file::EventLog;

use sdash_core::{config::Config, Dashboard};
use std::path::PathBuf;
use thiserror::Error;

/// I/O failure on a source other than "it does not exist yet".
#[derive(Debug, Error)]
#[error("cannot read {}: {source}", path.display())]
pub struct SourceError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl SourceError {
    pub(crate) fn new(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self { path: path.into(), source }
    }
}

/// One refresh cycle: read the log, list and validate captures, derive the
/// dashboard. Source errors are logged and treated as empty.
pub fn refresh(config: &Config) -> Dashboard {
    let log = EventLog::new(&config.sources.log_file);
    let events = log.events().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "event log unreadable, showing no events");
        Vec::new()
    });

    let dir = CaptureDir::new(&config.sources.captures_dir)
        .min_bytes(config.dashboard.min_capture_bytes);
    let listed = dir.list().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "capture directory unreadable, showing no captures");
        Vec::new()
    });
    let thumbnails = dir.displayable(listed, config.dashboard.capture_cap);

    tracing::debug!(
        events = events.len(),
        captures = thumbnails.len(),
        "refresh complete"
    );
    Dashboard::build(&events, thumbnails, &config.dashboard)
}
