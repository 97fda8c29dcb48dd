//! Aggregator: summary views over a parsed event sequence.
//!
//! Every function is pure and recomputes from the full slice. Events are
//! taken in source order and never re-sorted: if the producer writes lines
//! out of order, the feed and chart show that order as-is.

use crate::types::{AlertKind, Event, Field};
use serde::Serialize;

/// Number of events of the given kind.
pub fn count_by_kind(events: &[Event], kind: AlertKind) -> usize {
    events.iter().filter(|e| e.kind == kind).count()
}

/// `field` of the last event, or `0.0` when there are no events yet.
pub fn last_value(events: &[Event], field: Field) -> f64 {
    events.last().map_or(0.0, |e| e.value(field))
}

/// The last `n` events, most recent first.
pub fn recent_window(events: &[Event], n: usize) -> impl Iterator<Item = &Event> {
    events[events.len().saturating_sub(n)..].iter().rev()
}

/// Chronological values of one field, ready for charting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub field: Field,
    pub values: Vec<f64>,
}

impl Series {
    /// `(index, value)` pairs, the shape chart widgets expect.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f64, *v))
            .collect()
    }

    /// `(min, max)` of the values, or `None` for an empty series.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.values.iter().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

/// Minimum number of events for a chart to carry any information.
pub const MIN_CHART_EVENTS: usize = 2;

/// One [`Series`] per requested field, in chronological order. `None` when
/// there are fewer than [`MIN_CHART_EVENTS`] events.
pub fn time_series(events: &[Event], fields: &[Field]) -> Option<Vec<Series>> {
    if events.len() < MIN_CHART_EVENTS {
        return None;
    }
    Some(
        fields
            .iter()
            .map(|&field| Series {
                field,
                values: events.iter().map(|e| e.value(field)).collect(),
            })
            .collect(),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
