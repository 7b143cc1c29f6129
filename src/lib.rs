#![warn(missing_docs)]

//! # sectioned-list
//!
//! A settings list for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! made of fixed sections whose rows can be switched on and off and
//! reordered, but never dragged from one section into another.
//!
//! The crate has two layers:
//!
//! - [`sectioned`]: the in-memory model, [`SectionedSelectableList`]. It
//!   holds the sections, one enabled set per section, and the rule that pins
//!   a drag to the edge of its own section. It has no terminal dependencies.
//! - [`settings`]: a bubbletea-rs component that renders the model with
//!   lipgloss and drives it from the keyboard.
//!
//! ## Model
//!
//! ```rust
//! use sectioned_list::sectioned::{IndexPath, Section, SectionedSelectableList, SettingsItem};
//!
//! let mut list = SectionedSelectableList::new(vec![
//!     Section::new(vec![
//!         SettingsItem::new("1", "World News", true),
//!         SettingsItem::new("2", "USWire", false),
//!     ])
//!     .with_header("TOPICS"),
//!     Section::new(vec![SettingsItem::new("1", "a", true)]).with_header("MARKETS"),
//! ]);
//!
//! // A drag from the first section toward the second stays in the first.
//! let from = IndexPath::new(0, 0);
//! let to = list.clamp_target(from, IndexPath::new(1, 0));
//! assert_eq!(to, IndexPath::new(0, 1));
//!
//! list.move_row(from, to).unwrap();
//! assert_eq!(list.item(to).unwrap().title, "World News");
//! assert!(list.is_enabled(to));
//! ```
//!
//! ## Component
//!
//! ```rust
//! use sectioned_list::prelude::*;
//! use sectioned_list::sectioned::sample;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     settings: Settings,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut settings = Settings::new(sample::sections()).with_title("Settings");
//!         let cmd = settings.focus();
//!         (Self { settings }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(toggled) = msg.downcast_ref::<ToggledMsg>() {
//!             let _ = (toggled.path, toggled.enabled);
//!             return None;
//!         }
//!         self.settings.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.settings.view()
//!     }
//! }
//! ```

pub mod help;
pub mod key;
pub mod sectioned;
pub mod settings;

use bubbletea_rs::Cmd;

/// Components that can take and give up keyboard focus.
///
/// An unfocused component ignores key messages but still reacts to window
/// resizes.
pub trait Component {
    /// Focuses the component. May return a command to run.
    fn focus(&mut self) -> Option<Cmd>;

    /// Removes focus.
    fn blur(&mut self);

    /// Whether the component is focused.
    fn focused(&self) -> bool;
}

pub use help::Model as HelpModel;
pub use key::{Binding, KeyMap, KeyPress};
pub use sectioned::{
    EnabledIndexSet, IndexPath, ListError, Section, SectionedSelectableList, SettingsItem,
};
pub use settings::{
    Drag, Model as Settings, MovedMsg, SettingsKeyMap, SettingsStyles, ToggledMsg,
};

/// Common imports.
///
/// ```rust
/// use sectioned_list::prelude::*;
///
/// let list = SectionedSelectableList::default();
/// assert!(list.is_empty());
/// ```
pub mod prelude {
    pub use crate::help::Model as HelpModel;
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::sectioned::{
        EnabledIndexSet, IndexPath, ListError, Section, SectionedSelectableList, SettingsItem,
    };
    pub use crate::settings::{
        Model as Settings, MovedMsg, SettingsKeyMap, SettingsStyles, ToggledMsg,
    };
    pub use crate::Component;
}
