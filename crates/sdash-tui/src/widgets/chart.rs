//! Time-series chart of temperature and humidity over event index.
//!
//! Only drawn when the dashboard carries series, i.e. once at least two
//! events exist.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols::Marker,
    text::Line,
    widgets::{Axis, Block, Chart, Dataset, GraphType, Widget},
};
use sdash_core::aggregate::Series;

pub const TITLE: &str = " Temperature Over Time ";

pub struct TrendChart<'a> {
    series: &'a [Series],
    theme: &'a Theme,
}

impl<'a> TrendChart<'a> {
    pub fn new(series: &'a [Series], theme: &'a Theme) -> Self {
        Self { series, theme }
    }

    /// Shared y bounds across every series, padded so flat lines stay visible.
    fn y_bounds(&self) -> [f64; 2] {
        let (lo, hi) = self
            .series
            .iter()
            .filter_map(Series::bounds)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (a, b)| {
                (lo.min(a), hi.max(b))
            });
        if !lo.is_finite() || !hi.is_finite() {
            return [0.0, 1.0];
        }
        let pad = ((hi - lo) * 0.1).max(1.0);
        [lo - pad, hi + pad]
    }
}

impl Widget for TrendChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let points: Vec<Vec<(f64, f64)>> = self.series.iter().map(Series::points).collect();
        let len = self.series.first().map_or(0, |s| s.values.len());
        let x_max = len.saturating_sub(1).max(1) as f64;
        let [y_lo, y_hi] = self.y_bounds();

        let datasets: Vec<Dataset> = self
            .series
            .iter()
            .zip(&points)
            .map(|(s, pts)| {
                Dataset::default()
                    .name(format!("{} ({})", s.field, s.field.display_unit()))
                    .marker(Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(self.theme.series_color(s.field)))
                    .data(pts)
            })
            .collect();

        let axis_style = self.theme.label;
        Chart::new(datasets)
            .block(
                Block::bordered()
                    .title(Line::styled(TITLE, self.theme.title))
                    .border_style(self.theme.border_unfocused),
            )
            .x_axis(
                Axis::default()
                    .title("event")
                    .style(axis_style)
                    .bounds([0.0, x_max])
                    .labels(["1".to_string(), len.to_string()]),
            )
            .y_axis(
                Axis::default()
                    .style(axis_style)
                    .bounds([y_lo, y_hi])
                    .labels([format!("{y_lo:.0}"), format!("{y_hi:.0}")]),
            )
            .render(area, buf);
    }
}
