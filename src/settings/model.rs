//! The settings list component: state, construction and the edit operations
//! bound to keys.

use super::keys::SettingsKeyMap;
use super::style::SettingsStyles;
use super::{MovedMsg, ToggledMsg};
use crate::help;
use crate::sectioned::{IndexPath, Section, SectionedSelectableList};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::time::Duration;

/// A drag in progress.
///
/// `origin` is where the row was picked up. `target` is where it would land
/// if dropped now, and is always in the origin's section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drag {
    /// Position the row was picked up from.
    pub origin: IndexPath,
    /// Current, already clamped, destination.
    pub target: IndexPath,
}

/// A sectioned settings list whose rows can be toggled and reordered with the
/// keyboard.
///
/// Rows are reordered with a keyboard drag. `m` picks up the row under the
/// cursor. Each `↑`/`↓` proposes the neighboring position, which may lie in
/// the neighboring section, and resolves it through
/// [`SectionedSelectableList::clamp_target`], so the row stops at the edge of
/// its own section. `enter` commits the move and `esc` puts the row back
/// without touching the model.
///
/// # Examples
///
/// ```rust
/// use sectioned_list::settings::Model;
/// use sectioned_list::sectioned::{sample, IndexPath};
///
/// let mut settings = Model::new(sample::sections()).with_title("Settings");
/// settings.toggle_current();
/// assert!(!settings.list().is_enabled(IndexPath::new(0, 0)));
///
/// settings.grab();
/// settings.drag_down();
/// settings.drop_row();
/// assert_eq!(settings.cursor(), IndexPath::new(0, 1));
/// assert!(!settings.list().is_enabled(IndexPath::new(0, 1)));
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    pub(super) title: String,
    pub(super) list: SectionedSelectableList,
    pub(super) cursor: IndexPath,
    pub(super) drag: Option<Drag>,
    pub(super) editing: bool,

    pub(super) width: usize,
    pub(super) height: usize,
    /// First body line shown when the list is taller than `height`.
    pub(super) viewport_start: usize,
    /// Terminal height from the last resize, if one was seen.
    pub(super) window_height: Option<usize>,
    pub(super) focus: bool,

    pub(super) show_help: bool,
    pub(super) help: help::Model,
    pub(super) keymap: SettingsKeyMap,
    pub(super) styles: SettingsStyles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            title: String::new(),
            list: SectionedSelectableList::default(),
            cursor: IndexPath::default(),
            drag: None,
            editing: false,
            width: 48,
            height: 0,
            viewport_start: 0,
            window_height: None,
            focus: false,
            show_help: true,
            help: help::Model::new(),
            keymap: SettingsKeyMap::default(),
            styles: SettingsStyles::default(),
        }
    }
}

impl Model {
    /// Creates a list showing `sections`.
    pub fn new(sections: Vec<Section>) -> Self {
        let mut model = Self::default();
        model.set_sections(sections);
        model
    }

    /// Sets the title shown above the list. An empty title hides it.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the width rows are laid out in.
    pub fn with_width(mut self, width: usize) -> Self {
        self.set_width(width);
        self
    }

    /// Sets the number of body lines shown at once. 0 shows everything.
    ///
    /// ```rust
    /// use sectioned_list::settings::Model;
    /// use sectioned_list::sectioned::sample;
    /// use bubbletea_rs::Model as _;
    ///
    /// let settings = Model::new(sample::sections())
    ///     .with_show_help(false)
    ///     .with_height(3);
    /// assert_eq!(settings.view().lines().count(), 3);
    /// ```
    pub fn with_height(mut self, height: usize) -> Self {
        self.set_height(height);
        self
    }

    /// Replaces the key bindings.
    ///
    /// ```rust
    /// use sectioned_list::key::Binding;
    /// use sectioned_list::settings::{Model, SettingsKeyMap};
    /// use crossterm::event::KeyCode;
    ///
    /// let keymap = SettingsKeyMap {
    ///     grab: Binding::new(vec![KeyCode::Char('g')]).with_help("g", "move"),
    ///     ..SettingsKeyMap::default()
    /// };
    /// let settings = Model::new(vec![]).with_keymap(keymap);
    /// assert_eq!(settings.keymap().grab.help().key, "g");
    /// ```
    pub fn with_keymap(mut self, keymap: SettingsKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Replaces the styles.
    ///
    /// ```rust
    /// use sectioned_list::settings::{Model, SettingsStyles};
    /// use lipgloss_extras::prelude::*;
    ///
    /// let styles = SettingsStyles {
    ///     title: Style::new().bold(true),
    ///     ..SettingsStyles::default()
    /// };
    /// let settings = Model::new(vec![]).with_styles(styles);
    /// assert!(settings.styles().title.clone().render("Settings").contains("Settings"));
    /// ```
    pub fn with_styles(mut self, styles: SettingsStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Shows or hides the help line.
    pub fn with_show_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    /// Replaces the rows.
    ///
    /// Reorder mode is switched on before the enabled state is loaded, and
    /// any drag in progress is dropped without moving anything.
    pub fn set_sections(&mut self, sections: Vec<Section>) {
        self.editing = true;
        self.drag = None;
        self.list.load(sections);
        self.cursor = self.first_row().unwrap_or_default();
        self.viewport_start = 0;
        self.sync_viewport();
    }

    /// Sets the layout width.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
        self.help.width = width;
    }

    /// Sets the number of body lines shown at once.
    pub fn set_height(&mut self, height: usize) {
        self.height = height;
        self.sync_viewport();
    }

    /// The underlying model.
    pub fn list(&self) -> &SectionedSelectableList {
        &self.list
    }

    /// The row under the cursor.
    pub fn cursor(&self) -> IndexPath {
        self.cursor
    }

    /// The drag in progress, if any.
    pub fn drag(&self) -> Option<Drag> {
        self.drag
    }

    /// Whether a row is currently picked up.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether rows show the reorder handle.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// The key bindings.
    pub fn keymap(&self) -> &SettingsKeyMap {
        &self.keymap
    }

    /// The styles.
    pub fn styles(&self) -> &SettingsStyles {
        &self.styles
    }

    /// Moves the cursor to the previous row, crossing into earlier sections.
    pub fn cursor_up(&mut self) {
        if let Some(prev) = self.row_before(self.cursor) {
            self.cursor = prev;
            self.sync_viewport();
        }
    }

    /// Moves the cursor to the next row, crossing into later sections.
    pub fn cursor_down(&mut self) {
        if let Some(next) = self.row_after(self.cursor) {
            self.cursor = next;
            self.sync_viewport();
        }
    }

    /// Flips the row under the cursor.
    ///
    /// Returns a command delivering [`ToggledMsg`], or `None` if the list is
    /// empty.
    pub fn toggle_current(&mut self) -> Option<Cmd> {
        let path = self.cursor;
        match self.list.toggle(path.section, path.row) {
            Ok(enabled) => Some(emit(ToggledMsg { path, enabled })),
            Err(err) => {
                log::warn!("toggle ignored: {err}");
                None
            }
        }
    }

    /// Picks up the row under the cursor.
    pub fn grab(&mut self) {
        if self.list.item(self.cursor).is_none() || !self.list.can_move(self.cursor) {
            return;
        }
        self.drag = Some(Drag {
            origin: self.cursor,
            target: self.cursor,
        });
    }

    /// Drags the picked-up row one position up.
    pub fn drag_up(&mut self) {
        if let Some(drag) = self.drag {
            let proposed = self.neighbor_above(drag.target);
            self.drag_to(drag, proposed);
        }
    }

    /// Drags the picked-up row one position down.
    pub fn drag_down(&mut self) {
        if let Some(drag) = self.drag {
            let proposed = self.neighbor_below(drag.target);
            self.drag_to(drag, proposed);
        }
    }

    /// Commits the drag.
    ///
    /// Returns a command delivering [`MovedMsg`] when the row actually moved.
    pub fn drop_row(&mut self) -> Option<Cmd> {
        let drag = self.drag.take()?;
        if let Err(err) = self.list.move_row(drag.origin, drag.target) {
            log::warn!("move ignored: {err}");
            self.cursor = drag.origin;
            self.sync_viewport();
            return None;
        }
        self.cursor = drag.target;
        self.sync_viewport();
        if drag.origin == drag.target {
            return None;
        }
        Some(emit(MovedMsg {
            from: drag.origin,
            to: drag.target,
        }))
    }

    /// Abandons the drag and puts the cursor back on the row's origin.
    pub fn cancel_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            self.cursor = drag.origin;
            self.sync_viewport();
        }
    }

    fn drag_to(&mut self, drag: Drag, proposed: IndexPath) {
        let target = self.list.clamp_target(drag.origin, proposed);
        self.drag = Some(Drag { target, ..drag });
        self.cursor = target;
        self.sync_viewport();
    }

    // Raw neighbors: they step into the adjacent section at its edge and
    // are meant to be clamped.
    fn neighbor_above(&self, path: IndexPath) -> IndexPath {
        if path.row > 0 {
            IndexPath::new(path.section, path.row - 1)
        } else if path.section > 0 {
            let section = path.section - 1;
            IndexPath::new(section, self.list.row_count(section).saturating_sub(1))
        } else {
            path
        }
    }

    fn neighbor_below(&self, path: IndexPath) -> IndexPath {
        if path.row + 1 < self.list.row_count(path.section) {
            IndexPath::new(path.section, path.row + 1)
        } else if path.section + 1 < self.list.section_count() {
            IndexPath::new(path.section + 1, 0)
        } else {
            path
        }
    }

    fn first_row(&self) -> Option<IndexPath> {
        (0..self.list.section_count())
            .find(|&s| self.list.row_count(s) > 0)
            .map(|s| IndexPath::new(s, 0))
    }

    fn row_before(&self, path: IndexPath) -> Option<IndexPath> {
        if path.row > 0 {
            return Some(IndexPath::new(path.section, path.row - 1));
        }
        (0..path.section)
            .rev()
            .find(|&s| self.list.row_count(s) > 0)
            .map(|s| IndexPath::new(s, self.list.row_count(s) - 1))
    }

    fn row_after(&self, path: IndexPath) -> Option<IndexPath> {
        if path.row + 1 < self.list.row_count(path.section) {
            return Some(IndexPath::new(path.section, path.row + 1));
        }
        (path.section + 1..self.list.section_count())
            .find(|&s| self.list.row_count(s) > 0)
            .map(|s| IndexPath::new(s, 0))
    }

    /// Scrolls so the cursor line is inside the visible window.
    pub(super) fn sync_viewport(&mut self) {
        if self.height == 0 {
            self.viewport_start = 0;
            return;
        }
        let line = self.body_line_of(self.cursor);
        // Row 0 brings its section header into view when both fit.
        let top = if self.cursor.row == 0 && self.height > 1 {
            let header = self
                .list
                .section(self.cursor.section)
                .map_or(0, |s| usize::from(s.header_title.is_some()));
            line.saturating_sub(header)
        } else {
            line
        };
        if top < self.viewport_start {
            self.viewport_start = top;
        } else if line >= self.viewport_start + self.height {
            self.viewport_start = line + 1 - self.height;
        }
    }
}

fn emit<M: Clone + Send + Sync + 'static>(msg: M) -> Cmd {
    bubbletea_tick(Duration::from_nanos(1), move |_| Box::new(msg.clone()) as Msg)
}
