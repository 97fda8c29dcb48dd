//! Header bar: title, last refresh time, and key hints on one line.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use sdash_core::Dashboard;

pub const TITLE: &str = "Smart Security System";

pub struct Header<'a> {
    dashboard: &'a Dashboard,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(dashboard: &'a Dashboard, theme: &'a Theme) -> Self {
        Self { dashboard, theme }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dim = Style::default().add_modifier(Modifier::DIM);
        Line::from(vec![
            Span::styled(format!(" {TITLE} "), self.theme.title),
            Span::styled(
                format!(
                    " refreshed {} ",
                    self.dashboard.refreshed_at.format("%H:%M:%S")
                ),
                dim,
            ),
        ])
        .render(area, buf);

        // Keybinding hints at the right edge
        let hint = " r:refresh  t:theme  ?:help  q:quit ";
        let hint_x = area.right().saturating_sub(hint.len() as u16);
        buf.set_string(hint_x, area.y, hint, dim);
    }
}
