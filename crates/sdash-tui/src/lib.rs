//! sdash TUI: ratatui application shell.
//!
//! Layout, top to bottom: header bar, four metric cards, captures and event
//! log side by side, and the temperature/humidity chart once there are at
//! least two events.

pub mod app;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

/// Start the TUI with an already-resolved configuration.
pub fn run(config: sdash_core::config::Config) -> anyhow::Result<()> {
    let theme = theme::Theme::by_name(&config.ui.theme);
    tracing::info!(
        log_file = %config.sources.log_file.display(),
        captures_dir = %config.sources.captures_dir.display(),
        theme = theme.name,
        "starting dashboard"
    );
    App::new(config, theme).run()
}
