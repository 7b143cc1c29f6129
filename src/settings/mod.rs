//! A sectioned settings list for bubbletea-rs.
//!
//! Rows show a checkbox, a title and a reorder handle. The list is backed by
//! a [`SectionedSelectableList`](crate::sectioned::SectionedSelectableList)
//! and talks to its host through two messages:
//!
//! - [`ToggledMsg`] after a row was switched on or off
//! - [`MovedMsg`] after a drag was committed
//!
//! ## Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑/k`, `↓/j` | move the cursor, or the picked-up row |
//! | `space`, `x` | toggle the row under the cursor |
//! | `m` | pick up the row under the cursor |
//! | `enter`, `m` | drop the picked-up row |
//! | `esc` | put the picked-up row back |
//! | `?` | expand or collapse help |
//!
//! A picked-up row never leaves its section. Dragging past the last row of
//! its section keeps it on that last row, and dragging above row 0 keeps it
//! on row 0.
//!
//! ```rust
//! use sectioned_list::prelude::*;
//! use sectioned_list::sectioned::sample;
//! use bubbletea_rs::Model as _;
//!
//! let mut settings = Settings::new(sample::sections()).with_title("Settings");
//! settings.focus();
//! assert!(settings.view().contains("TOPICS"));
//! ```

pub mod keys;
pub mod style;

mod model;
mod rendering;

pub use keys::SettingsKeyMap;
pub use model::{Drag, Model};
pub use style::SettingsStyles;

use crate::key::{self, Binding};
use crate::sectioned::{sample, IndexPath};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg, WindowSizeMsg};
use lipgloss_extras::lipgloss;

/// Sent after a row was toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggledMsg {
    /// The row.
    pub path: IndexPath,
    /// Its new state.
    pub enabled: bool,
}

/// Sent after a drag was committed and the row changed position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovedMsg {
    /// Where the row was.
    pub from: IndexPath,
    /// Where it is now. Always in the same section as `from`.
    pub to: IndexPath,
}

impl Model {
    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.drag.is_some() {
            if self.keymap.cursor_up.matches(key_msg) {
                self.drag_up();
            } else if self.keymap.cursor_down.matches(key_msg) {
                self.drag_down();
            } else if self.keymap.drop.matches(key_msg) {
                return self.drop_row();
            } else if self.keymap.cancel.matches(key_msg) {
                self.cancel_drag();
            }
            return None;
        }

        if self.keymap.cursor_up.matches(key_msg) {
            self.cursor_up();
        } else if self.keymap.cursor_down.matches(key_msg) {
            self.cursor_down();
        } else if self.keymap.toggle.matches(key_msg) {
            return self.toggle_current();
        } else if self.keymap.grab.matches(key_msg) {
            self.grab();
        } else if self.keymap.show_full_help.matches(key_msg) {
            self.help.show_all = !self.help.show_all;
            self.fit_to_window();
        }
        None
    }

    // Lines taken by the title and the help as currently rendered.
    fn chrome_height(&self) -> usize {
        let title = self.view_title();
        let title = if title.is_empty() {
            0
        } else {
            lipgloss::height(&title) + 1
        };
        let help = self.view_help();
        let help = if help.is_empty() {
            0
        } else {
            lipgloss::height(&help)
        };
        title + help
    }

    // Gives the body whatever the last window leaves after the chrome.
    fn fit_to_window(&mut self) {
        if let Some(window) = self.window_height {
            let height = window.saturating_sub(self.chrome_height());
            self.set_height(height.max(1));
        }
    }
}

impl key::KeyMap for Model {
    /// While a row is picked up only the drag keys are offered.
    fn short_help(&self) -> Vec<&Binding> {
        if self.drag.is_some() {
            return vec![
                &self.keymap.cursor_up,
                &self.keymap.cursor_down,
                &self.keymap.drop,
                &self.keymap.cancel,
            ];
        }
        vec![
            &self.keymap.cursor_up,
            &self.keymap.cursor_down,
            &self.keymap.toggle,
            &self.keymap.grab,
            &self.keymap.quit,
            &self.keymap.show_full_help,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        key::KeyMap::full_help(&self.keymap)
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
        self.cancel_drag();
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

impl BubbleTeaModel for Model {
    /// Starts focused on the Topics/Markets sample data.
    fn init() -> (Self, Option<Cmd>) {
        let mut model = Self::new(sample::sections());
        model.focus = true;
        (model, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.set_width(size.width as usize);
            self.window_height = Some(size.height as usize);
            self.fit_to_window();
            return None;
        }
        if !self.focus {
            return None;
        }
        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        self.handle_key(key_msg)
    }

    fn view(&self) -> String {
        let mut parts = Vec::with_capacity(3);
        let title = self.view_title();
        if !title.is_empty() {
            parts.push(format!("{title}\n"));
        }
        parts.push(self.view_body());
        let help = self.view_help();
        if !help.is_empty() {
            parts.push(help);
        }
        parts.join("\n")
    }
}
