//! Recent captures pane: one row per validated capture, newest first.

use crate::theme::Theme;
use crate::widgets::placeholder;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, StatefulWidget, Widget},
};
use sdash_core::Thumbnail;

pub const EMPTY_MESSAGE: &str = "No captures yet - trigger an alert!";

pub struct CaptureList<'a> {
    captures: &'a [Thumbnail],
    selected: usize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> CaptureList<'a> {
    pub fn new(captures: &'a [Thumbnail], selected: usize, focused: bool, theme: &'a Theme) -> Self {
        Self { captures, selected, focused, theme }
    }

    fn item(&self, t: &'a Thumbnail) -> ListItem<'a> {
        ListItem::new(Line::from(vec![
            Span::styled(format!("{:<8}", t.capture.kind.to_string()), self.theme.kind_style(t.capture.kind)),
            Span::raw(" "),
            Span::raw(t.timestamp()),
            Span::styled(
                format!("  {}x{}  {}", t.width, t.height, human_size(t.size_bytes)),
                self.theme.label,
            ),
        ]))
    }
}

impl Widget for CaptureList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(format!(" Recent Captures ({}) ", self.captures.len()))
            .border_style(self.theme.border(self.focused));

        if self.captures.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            placeholder(EMPTY_MESSAGE, self.theme.placeholder, inner, buf);
            return;
        }

        let items: Vec<ListItem> = self.captures.iter().map(|t| self.item(t)).collect();
        let list = List::new(items).block(block);
        let list = if self.focused {
            list.highlight_style(self.theme.highlight)
        } else {
            list
        };
        let mut state = ListState::default().with_selected(Some(self.selected));
        StatefulWidget::render(list, area, buf, &mut state);
    }
}

/// `512 B`, `34.2 KB`, `1.5 MB`.
fn human_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    let b = bytes as f64;
    if b < KB {
        format!("{bytes} B")
    } else if b < KB * KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / (KB * KB))
    }
}
