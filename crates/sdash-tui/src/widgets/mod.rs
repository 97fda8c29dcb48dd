//! Dashboard widgets. Each one renders a slice of the current
//! [`Dashboard`](sdash_core::Dashboard) and holds no state of its own.

pub mod captures;
pub mod chart;
pub mod event_feed;
pub mod header;
pub mod help;
pub mod metrics;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget, Wrap},
};

/// Render a centred "no data yet" message.
pub(crate) fn placeholder(msg: &str, style: Style, area: Rect, buf: &mut Buffer) {
    let offset = area.height.saturating_sub(1) / 2;
    let rest = Rect { y: area.y + offset, height: area.height - offset, ..area };
    Paragraph::new(Line::styled(msg, style).centered())
        .wrap(Wrap { trim: true })
        .render(rest, buf);
}

/// `45.5°C`, `30.0%`, `120.0cm`.
pub(crate) fn reading(value: f64, field: sdash_core::Field) -> String {
    format!("{value:.1}{}", field.display_unit())
}
