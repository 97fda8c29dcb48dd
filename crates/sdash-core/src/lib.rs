//! sdash-core: event model and derivations for the sensor dashboard.
//!
//! # Architecture
//!
//! ```text
//! log file ──► parser ──► aggregate ──┐
//!                                     ├──► Dashboard ──► UI / headless
//! capture dir ──► (sdash-sources) ────┘
//! ```
//!
//! Everything here is pure. Reading the log file and the capture directory
//! lives in `sdash-sources`; this crate only turns what they read into a
//! [`Dashboard`].

pub mod aggregate;
pub mod config;
pub mod dashboard;
pub mod parser;
pub mod types;

pub use dashboard::{Dashboard, Metrics};
pub use types::{classify, AlertKind, Capture, Event, Field, Thumbnail};
