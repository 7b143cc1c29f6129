//! Key bindings for the settings list.
//!
//! - **Navigation**: `↑/k`, `↓/j`
//! - **Toggle**: `space/x`
//! - **Reorder**: `m` picks the row up, `↑/↓` drag it, `enter/m` drops it,
//!   `esc` puts it back
//! - **Help and quit**: `?`, `q`, `ctrl+c`

use crate::key::{self, Binding};
use crossterm::event::{KeyCode, KeyModifiers};

/// Key bindings for [`Model`](super::Model).
#[derive(Debug, Clone)]
pub struct SettingsKeyMap {
    /// Move the cursor, or the dragged row, up.
    pub cursor_up: Binding,
    /// Move the cursor, or the dragged row, down.
    pub cursor_down: Binding,
    /// Switch the row under the cursor on or off.
    pub toggle: Binding,
    /// Pick up the row under the cursor.
    pub grab: Binding,
    /// Commit the drag.
    pub drop: Binding,
    /// Abandon the drag.
    pub cancel: Binding,
    /// Expand or collapse the help.
    pub show_full_help: Binding,
    /// Quit. The component reports it; the host decides.
    pub quit: Binding,
    /// Quit immediately.
    pub force_quit: Binding,
}

impl Default for SettingsKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]).with_help("↑/k", "up"),
            cursor_down: Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            toggle: Binding::new(vec![KeyCode::Char(' '), KeyCode::Char('x')])
                .with_help("space", "toggle"),
            grab: Binding::new(vec![KeyCode::Char('m')]).with_help("m", "move"),
            drop: Binding::new(vec![KeyCode::Enter, KeyCode::Char('m')]).with_help("enter", "drop"),
            cancel: Binding::new(vec![KeyCode::Esc]).with_help("esc", "cancel"),
            show_full_help: Binding::new(vec![KeyCode::Char('?')]).with_help("?", "more"),
            quit: Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit"),
            force_quit: Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)])
                .with_help("ctrl+c", "force quit"),
        }
    }
}

impl key::KeyMap for SettingsKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.cursor_up,
            &self.cursor_down,
            &self.toggle,
            &self.grab,
            &self.quit,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.cursor_up, &self.cursor_down],
            vec![&self.toggle, &self.grab, &self.drop, &self.cancel],
            vec![&self.show_full_help, &self.quit, &self.force_quit],
        ]
    }
}
