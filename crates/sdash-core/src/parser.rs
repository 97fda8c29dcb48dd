//! Parser: turns raw log lines into [`Event`] values.
//!
//! The log format is one alert per line:
//!
//! ```text
//! [TIMESTAMP <FIRE-marker-optional>] | Temp:<float>C | Humidity:<float>% | Distance:<float>cm
//! ```
//!
//! A line that does not fit is discarded whole. [`parse_lines`] drops those
//! lines without reporting them, so a truncated trailing write from the
//! producer never hides the events before it.

use crate::types::{classify, Event, Field};
use thiserror::Error;

/// Segment delimiter on a log line.
pub const DELIMITER: char = '|';

/// Why a line did not produce an [`Event`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Discarded {
    #[error("expected 4 `|`-separated segments, found {0}")]
    MissingSegment(usize),
    #[error("header has no `[...]` timestamp")]
    MissingBracket,
    #[error("{field} value {raw:?} is not a number")]
    BadNumber { field: Field, raw: String },
}

/// Parse a single line.
pub fn parse_line(line: &str) -> Result<Event, Discarded> {
    let mut segments = line.trim().split(DELIMITER);

    // `split` always yields at least one item.
    let header = segments.next().unwrap_or_default();
    let readings: Vec<&str> = segments.take(Field::ALL.len()).collect();
    if readings.len() < Field::ALL.len() {
        return Err(Discarded::MissingSegment(readings.len() + 1));
    }

    let timestamp = bracketed(header).ok_or(Discarded::MissingBracket)?;

    let mut values = [0.0; 3];
    for ((field, raw), slot) in Field::ALL.iter().zip(&readings).zip(values.iter_mut()) {
        *slot = reading(*field, raw)?;
    }
    let [temp, humidity, distance] = values;

    Ok(Event {
        timestamp: timestamp.trim().to_string(),
        kind: classify(header),
        temp,
        humidity,
        distance,
    })
}

/// Parse every line, keeping only the ones that produced an event. Source
/// order is preserved.
pub fn parse_lines<'a, I>(lines: I) -> Vec<Event>
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter().filter_map(|l| parse_line(l).ok()).collect()
}

/// Text between the first `[` and the first `]` after it.
fn bracketed(header: &str) -> Option<&str> {
    let (_, rest) = header.split_once('[')?;
    let (inner, _) = rest.split_once(']')?;
    Some(inner)
}

/// Strip label and unit from one reading segment and parse the number.
fn reading(field: Field, raw: &str) -> Result<f64, Discarded> {
    let s = raw.trim();
    let s = s.strip_prefix(field.label()).unwrap_or(s).trim();
    let s = s.strip_suffix(field.unit()).unwrap_or(s).trim();
    s.parse().map_err(|_| Discarded::BadNumber {
        field,
        raw: raw.trim().to_string(),
    })
}

/// Render an event the way the sensor daemon writes it. The kind goes after
/// the brackets so the timestamp survives a parse unchanged.
pub fn format_line(event: &Event) -> String {
    format!(
        "[{}] ALERT: {} | Temp: {}C | Humidity: {}% | Distance: {}cm",
        event.timestamp, event.kind, event.temp, event.humidity, event.distance
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
