//! Metric cards: the four headline numbers across the top.

use crate::theme::Theme;
use crate::widgets::reading;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, Paragraph, Widget},
};
use sdash_core::{Field, Metrics};

pub struct MetricCards<'a> {
    metrics: &'a Metrics,
    theme: &'a Theme,
}

impl<'a> MetricCards<'a> {
    pub fn new(metrics: &'a Metrics, theme: &'a Theme) -> Self {
        Self { metrics, theme }
    }

    fn cards(&self) -> [(&'static str, String); 4] {
        let m = self.metrics;
        [
            ("Fire Alerts", m.fire_alerts.to_string()),
            ("Intruder Alerts", m.intruder_alerts.to_string()),
            ("Last Temp", reading(m.last_temp, Field::Temp)),
            ("Last Humidity", reading(m.last_humidity, Field::Humidity)),
        ]
    }
}

impl Widget for MetricCards<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cols = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
        for ((label, value), col) in self.cards().into_iter().zip(cols.iter()) {
            let block = Block::bordered()
                .title(Line::styled(format!(" {label} "), self.theme.label))
                .border_style(self.theme.border_unfocused);
            Paragraph::new(Line::styled(value, self.theme.value).centered())
                .block(block)
                .render(*col, buf);
        }
    }
}
