//! Core types for sdash-core.
//!
//! This module defines the records shared across every layer: the parsed
//! [`Event`], the [`Capture`] file reference, the numeric [`Field`] selector,
//! and the two-way [`AlertKind`] produced by [`classify`].

use serde::Serialize;

/// Alert category. There are only two: anything that is not a fire is
/// reported as an intruder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertKind {
    Fire,
    Intruder,
}

impl AlertKind {
    pub const ALL: [AlertKind; 2] = [AlertKind::Fire, AlertKind::Intruder];
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertKind::Fire => write!(f, "FIRE"),
            AlertKind::Intruder => write!(f, "INTRUDER"),
        }
    }
}

/// Infer an [`AlertKind`] from free text (a log header or a filename).
///
/// Containment of the literal `FIRE` selects [`AlertKind::Fire`]; everything
/// else is [`AlertKind::Intruder`]. The match is case-sensitive.
pub fn classify(raw: &str) -> AlertKind {
    if raw.contains("FIRE") {
        AlertKind::Fire
    } else {
        AlertKind::Intruder
    }
}

/// One numeric reading carried by every [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Temp,
    Humidity,
    Distance,
}

impl Field {
    /// Fields in the order they appear on a log line.
    pub const ALL: [Field; 3] = [Field::Temp, Field::Humidity, Field::Distance];

    /// Label prefix used in the log format, e.g. `Temp:`.
    pub fn label(self) -> &'static str {
        match self {
            Field::Temp => "Temp:",
            Field::Humidity => "Humidity:",
            Field::Distance => "Distance:",
        }
    }

    /// Unit suffix used in the log format, e.g. `C`.
    pub fn unit(self) -> &'static str {
        match self {
            Field::Temp => "C",
            Field::Humidity => "%",
            Field::Distance => "cm",
        }
    }

    /// Unit as shown to humans.
    pub fn display_unit(self) -> &'static str {
        match self {
            Field::Temp => "°C",
            Field::Humidity => "%",
            Field::Distance => "cm",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Temp => write!(f, "temp"),
            Field::Humidity => write!(f, "humidity"),
            Field::Distance => write!(f, "distance"),
        }
    }
}

/// One parsed alert record. Either every field is present or the line it came
/// from was discarded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    /// Verbatim contents of the header brackets. Never parsed as a date.
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    /// Degrees Celsius.
    pub temp: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
    /// Centimetres.
    pub distance: f64,
}

impl Event {
    pub fn value(&self, field: Field) -> f64 {
        match field {
            Field::Temp => self.temp,
            Field::Humidity => self.humidity,
            Field::Distance => self.distance,
        }
    }
}

/// Extension a capture file must carry to be listed.
pub const CAPTURE_EXTENSION: &str = ".jpg";

/// One image file in the capture directory. Everything here is inferred from
/// the filename; the file itself is only opened when it is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Capture {
    pub filename: String,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    /// Text after the first `_`, extension stripped. `None` when the filename
    /// has no separator.
    pub timestamp: Option<String>,
}

impl Capture {
    /// Build a capture from a bare filename, or `None` if it does not carry
    /// the capture extension.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let stem = filename.strip_suffix(CAPTURE_EXTENSION)?;
        Some(Self {
            filename: filename.to_string(),
            kind: classify(filename),
            timestamp: stem.split_once('_').map(|(_, ts)| ts.to_string()),
        })
    }
}

/// A capture that passed display validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thumbnail {
    #[serde(flatten)]
    pub capture: Capture,
    pub size_bytes: u64,
    pub width: u32,
    pub height: u32,
}

impl Thumbnail {
    /// Display timestamp. Validation guarantees one exists.
    pub fn timestamp(&self) -> &str {
        self.capture.timestamp.as_deref().unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
