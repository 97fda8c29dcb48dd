//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. The loop polls for input
//! only until the next refresh is due, then re-reads both sources from
//! scratch.

use crate::{
    event::{self, AppEvent, Direction},
    theme::Theme,
    widgets::{
        captures::CaptureList, chart::TrendChart, event_feed::EventFeed, header::Header,
        help::HelpPopup, metrics::MetricCards,
    },
};
use crossterm::{
    event as ct_event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Frame, Terminal,
};
use sdash_core::{config::Config, Dashboard};
use std::{
    io,
    time::{Duration, Instant},
};

/// Upper bound on a single input poll so resizes and quits stay responsive.
const MAX_POLL: Duration = Duration::from_millis(250);

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Captures,
    Feed,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Captures => Focus::Feed,
            Focus::Feed => Focus::Captures,
        }
    }
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub config: Config,
    pub dashboard: Dashboard,
    pub theme: Theme,
    pub focus: Focus,
    /// Selected row in the capture list.
    pub capture_sel: usize,
    /// Selected row in the event feed.
    pub feed_sel: usize,
    pub show_help: bool,
    pub quit: bool,
}

impl AppState {
    pub fn new(config: Config, theme: Theme) -> Self {
        Self {
            config,
            dashboard: Dashboard::empty(),
            theme,
            focus: Focus::Feed,
            capture_sel: 0,
            feed_sel: 0,
            show_help: false,
            quit: false,
        }
    }

    /// Replace the dashboard with a freshly derived one. Selections are kept
    /// where possible and clamped to the new lengths.
    pub fn apply(&mut self, dashboard: Dashboard) {
        self.dashboard = dashboard;
        self.capture_sel = clamp(self.capture_sel, self.dashboard.captures.len());
        self.feed_sel = clamp(self.feed_sel, self.dashboard.feed.len());
    }

    /// Run one refresh cycle against the configured sources.
    pub fn refresh(&mut self) {
        self.apply(sdash_sources::refresh(&self.config));
    }

    pub fn handle(&mut self, event: AppEvent) {
        // Help popup intercepts all events; only close keys pass through.
        if self.show_help {
            match event {
                AppEvent::ToggleHelp | AppEvent::Escape => {
                    tracing::debug!("help popup closed");
                    self.show_help = false;
                }
                AppEvent::Quit => self.quit = true,
                _ => {}
            }
            return;
        }

        match event {
            AppEvent::Quit => {
                tracing::debug!("quit");
                self.quit = true;
            }
            AppEvent::Refresh => {
                tracing::debug!("manual refresh");
                self.refresh();
            }
            AppEvent::FocusNext => {
                let next = self.focus.next();
                tracing::debug!(from = ?self.focus, to = ?next, "focus cycle");
                self.focus = next;
            }
            AppEvent::Nav(dir) => self.navigate(dir),
            AppEvent::CycleTheme => {
                self.theme = self.theme.next();
                tracing::debug!(theme = self.theme.name, "theme switched");
            }
            AppEvent::ToggleHelp => {
                tracing::debug!("help popup opened");
                self.show_help = true;
            }
            // Terminal resize is handled automatically by ratatui
            AppEvent::Escape | AppEvent::Resize(_, _) => {}
        }
    }

    fn navigate(&mut self, dir: Direction) {
        let (sel, len) = match self.focus {
            Focus::Captures => (&mut self.capture_sel, self.dashboard.captures.len()),
            Focus::Feed => (&mut self.feed_sel, self.dashboard.feed.len()),
        };
        *sel = match dir {
            Direction::Up => sel.saturating_sub(1),
            Direction::Down => clamp(*sel + 1, len),
            Direction::Top => 0,
        };
    }
}

fn clamp(sel: usize, len: usize) -> usize {
    sel.min(len.saturating_sub(1))
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
    last_refresh: Instant,
}

impl App {
    /// Build the app and run the first refresh cycle.
    pub fn new(config: Config, theme: Theme) -> Self {
        let mut state = AppState::new(config, theme);
        state.refresh();
        App { state, last_refresh: Instant::now() }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let interval = self.state.config.dashboard.refresh_interval();
        loop {
            terminal.draw(|frame| draw(frame, &self.state))?;

            if self.state.quit {
                break;
            }

            let timeout = interval.saturating_sub(self.last_refresh.elapsed()).min(MAX_POLL);
            if ct_event::poll(timeout)? {
                if let Some(ev) = event::to_app_event(ct_event::read()?) {
                    tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                    if ev == AppEvent::Refresh {
                        self.last_refresh = Instant::now();
                    }
                    self.state.handle(ev);
                }
            }

            if self.last_refresh.elapsed() >= interval {
                self.state.refresh();
                self.last_refresh = Instant::now();
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

pub fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let dash = &state.dashboard;
    let theme = &state.theme;

    // Vertical: 1-line header | 3-line metrics | body | chart (when drawable)
    let mut rows = vec![
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ];
    if dash.chart.is_some() {
        rows.push(Constraint::Percentage(35));
    }
    let vert = Layout::vertical(rows).split(area);
    let body = Layout::horizontal([Constraint::Percentage(50), Constraint::Fill(1)]).split(vert[2]);

    frame.render_widget(Header::new(dash, theme), vert[0]);
    frame.render_widget(MetricCards::new(&dash.metrics, theme), vert[1]);
    frame.render_widget(
        CaptureList::new(
            &dash.captures,
            state.capture_sel,
            state.focus == Focus::Captures,
            theme,
        ),
        body[0],
    );
    frame.render_widget(
        EventFeed::new(
            &dash.feed,
            dash.total_events,
            state.feed_sel,
            state.focus == Focus::Feed,
            theme,
        ),
        body[1],
    );
    if let Some(series) = &dash.chart {
        frame.render_widget(TrendChart::new(series, theme), vert[3]);
    }

    if state.show_help {
        frame.render_widget(
            HelpPopup::new(theme, state.config.dashboard.refresh_interval().as_secs()),
            area,
        );
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
