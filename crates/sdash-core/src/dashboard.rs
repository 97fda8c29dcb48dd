//! Dashboard: the snapshot one refresh cycle produces.
//!
//! Built from scratch every refresh and handed to the presentation layer
//! (the TUI, or the headless printer) as a whole. Nothing in it is updated
//! in place.

use crate::aggregate::{self, Series};
use crate::config::DashboardConfig;
use crate::types::{AlertKind, Event, Field, Thumbnail};
use chrono::{DateTime, Local};
use serde::Serialize;

/// Fields plotted on the dashboard chart.
pub const CHART_FIELDS: [Field; 2] = [Field::Temp, Field::Humidity];

/// The four headline numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub fire_alerts: usize,
    pub intruder_alerts: usize,
    pub last_temp: f64,
    pub last_humidity: f64,
}

impl Metrics {
    pub fn from_events(events: &[Event]) -> Self {
        Self {
            fire_alerts: aggregate::count_by_kind(events, AlertKind::Fire),
            intruder_alerts: aggregate::count_by_kind(events, AlertKind::Intruder),
            last_temp: aggregate::last_value(events, Field::Temp),
            last_humidity: aggregate::last_value(events, Field::Humidity),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub refreshed_at: DateTime<Local>,
    pub metrics: Metrics,
    pub total_events: usize,
    /// Most recent first.
    pub feed: Vec<Event>,
    /// `None` until there are enough events to draw a line.
    pub chart: Option<Vec<Series>>,
    /// Newest first, already validated for display.
    pub captures: Vec<Thumbnail>,
}

impl Dashboard {
    pub fn build(events: &[Event], captures: Vec<Thumbnail>, cfg: &DashboardConfig) -> Self {
        Self {
            refreshed_at: Local::now(),
            metrics: Metrics::from_events(events),
            total_events: events.len(),
            feed: aggregate::recent_window(events, cfg.feed_len).cloned().collect(),
            chart: aggregate::time_series(events, &CHART_FIELDS),
            captures,
        }
    }

    /// The zero state shown before the first refresh completes.
    pub fn empty() -> Self {
        Self::build(&[], Vec::new(), &DashboardConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
