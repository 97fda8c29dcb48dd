//! Test builders: ergonomic constructors for `Event` fixtures.
//!
//! These panic rather than return `Result`; they exist to keep assertions
//! readable.

use sdash_core::{AlertKind, Event};

/// Fluent builder for [`Event`] test fixtures.
///
/// ```rust
/// let event = EventBuilder::new("20240115_100000").fire().temp(57.9).build();
/// ```
pub struct EventBuilder {
    event: Event,
}

impl EventBuilder {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self {
            event: Event {
                timestamp: timestamp.into(),
                kind: AlertKind::Intruder,
                temp: 22.0,
                humidity: 45.0,
                distance: 100.0,
            },
        }
    }

    pub fn fire(mut self) -> Self {
        self.event.kind = AlertKind::Fire;
        self
    }

    pub fn temp(mut self, v: f64) -> Self {
        self.event.temp = v;
        self
    }

    pub fn humidity(mut self, v: f64) -> Self {
        self.event.humidity = v;
        self
    }

    pub fn distance(mut self, v: f64) -> Self {
        self.event.distance = v;
        self
    }

    pub fn build(self) -> Event {
        self.event
    }
}

/// `n` events stamped `t000`, `t001`, ... with every third one a fire.
pub fn event_run(n: usize) -> Vec<Event> {
    (0..n)
        .map(|i| {
            let b = EventBuilder::new(format!("t{i:03}")).temp(20.0 + i as f64);
            let b = if i % 3 == 0 { b.fire() } else { b };
            b.build()
        })
        .collect()
}
