//! Event log pane: the recent window, newest first, two lines per event.

use crate::theme::Theme;
use crate::widgets::{placeholder, reading};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, List, ListItem, ListState, StatefulWidget, Widget},
};
use sdash_core::{Event, Field};

pub const EMPTY_MESSAGE: &str = "No events yet";

pub struct EventFeed<'a> {
    feed: &'a [Event],
    total: usize,
    selected: usize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> EventFeed<'a> {
    pub fn new(
        feed: &'a [Event],
        total: usize,
        selected: usize,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self { feed, total, selected, focused, theme }
    }

    fn item(&self, e: &'a Event) -> ListItem<'a> {
        let readings = Field::ALL
            .iter()
            .map(|f| {
                let label = f.label().trim_end_matches(':');
                format!("{label}: {}", reading(e.value(*f), *f))
            })
            .collect::<Vec<_>>()
            .join(" | ");

        ListItem::new(Text::from(vec![
            Line::from(vec![
                Span::styled(e.kind.to_string(), self.theme.kind_style(e.kind)),
                Span::raw("  "),
                Span::raw(e.timestamp.as_str()),
            ]),
            Line::styled(format!("  {readings}"), self.theme.label),
        ]))
    }
}

impl Widget for EventFeed<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(format!(" Event Log ({} of {}) ", self.feed.len(), self.total))
            .border_style(self.theme.border(self.focused));

        if self.feed.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            placeholder(EMPTY_MESSAGE, self.theme.placeholder, inner, buf);
            return;
        }

        let items: Vec<ListItem> = self.feed.iter().map(|e| self.item(e)).collect();
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
