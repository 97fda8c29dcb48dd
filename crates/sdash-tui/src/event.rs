//! Semantic application events: crossterm key events mapped to a
//! widget-agnostic vocabulary so widgets never touch crossterm directly.
//!
//! # Keybindings
//!
//! | Key(s)                  | Event                      |
//! |-------------------------|----------------------------|
//! | `q`, `Ctrl+c`           | `Quit`                     |
//! | `r`                     | `Refresh`                  |
//! | `Tab`                   | `FocusNext`                |
//! | `↑` / `k`               | `Nav(Up)`                  |
//! | `↓` / `j`               | `Nav(Down)`                |
//! | `g` / `Home`            | `Nav(Top)`                 |
//! | `t`                     | `CycleTheme`               |
//! | `?`                     | `ToggleHelp`               |
//! | `Esc`                   | `Escape`                   |
//! | terminal resize         | `Resize(w, h)`             |

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Movement within the focused list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Top,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Exit the application.
    Quit,
    /// Re-read the log and capture directory now instead of waiting.
    Refresh,
    /// Move keyboard focus to the next pane.
    FocusNext,
    /// Move the selection in the focused pane.
    Nav(Direction),
    /// Switch to the next built-in theme.
    CycleTheme,
    /// Show or hide the help popup.
    ToggleHelp,
    /// Dismiss the help popup.
    Escape,
    /// The terminal was resized to the given (width, height).
    Resize(u16, u16),
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`].
///
/// Returns `None` for events with no meaning to the dashboard (mouse events,
/// key releases, unbound keys).
pub fn to_app_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        Char('q') if key.modifiers == Mod::NONE => Some(AppEvent::Quit),
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Char('r') if key.modifiers == Mod::NONE => Some(AppEvent::Refresh),
        Tab if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),

        Up | Char('k') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Up)),
        Down | Char('j') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Down)),
        Home | Char('g') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Top)),

        Char('t') if key.modifiers == Mod::NONE => Some(AppEvent::CycleTheme),

        // `?` arrives with SHIFT on most terminals; match on the code alone
        Char('?') => Some(AppEvent::ToggleHelp),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
