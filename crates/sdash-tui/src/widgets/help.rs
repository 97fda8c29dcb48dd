//! Help popup: centred floating overlay listing all keybindings.
//!
//! Toggle with `?`; close with `?` or `Escape`.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("q  /  Ctrl+c", "Quit"),
    ("r", "Refresh now"),
    ("Tab", "Cycle focus: captures / event log"),
    ("↑ k  /  ↓ j", "Move selection in focused pane"),
    ("g  /  Home", "Jump to newest"),
    ("t", "Switch theme"),
    ("?", "Toggle this help popup"),
    ("Escape", "Close this help popup"),
];

pub struct HelpPopup<'a> {
    theme: &'a Theme,
    refresh_secs: u64,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme, refresh_secs: u64) -> Self {
        Self { theme, refresh_secs }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(64, BINDINGS.len() as u16 + 4, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" sdash - keybindings (? to close) ")
            .border_style(self.theme.border_focused);

        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<18}", key),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*desc),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.push(Line::styled(
            format!("  Auto-refresh every {}s", self.refresh_secs),
            self.theme.label,
        ));

        Paragraph::new(lines).render(inner, buf);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
