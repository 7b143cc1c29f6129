//! Type-safe key bindings.
//!
//! A [`Binding`] groups one or more [`KeyPress`]es with the help text shown
//! for them. Components keep their bindings in a struct that implements
//! [`KeyMap`], which the [`help`](crate::help) view knows how to render.
//!
//! ```rust
//! use sectioned_list::key::Binding;
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let toggle = Binding::new(vec![KeyCode::Char(' '), KeyCode::Enter]).with_help("space", "toggle");
//! let msg = KeyMsg { key: KeyCode::Enter, modifiers: KeyModifiers::NONE };
//! assert!(toggle.matches(&msg));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key together with the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Required modifiers. Shift is ignored when matching.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

impl KeyPress {
    fn matches(&self, msg: &KeyMsg) -> bool {
        // Uppercase characters arrive with SHIFT set; the char itself already carries it.
        let wanted = self.modifiers.difference(KeyModifiers::SHIFT);
        let got = msg.modifiers.difference(KeyModifiers::SHIFT);
        self.code == msg.key && wanted == got
    }
}

/// Help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"↑/k"`.
    pub key: String,
    /// What the key does, e.g. `"up"`.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding for the given keys with empty help text.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help label and description.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the keys this binding responds to.
    ///
    /// ```rust
    /// use sectioned_list::key::{Binding, KeyPress};
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let quit = Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)]);
    /// assert_eq!(
    ///     quit.keys(),
    ///     &[KeyPress { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL }]
    /// );
    /// ```
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Returns the binding's help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether the binding is active. Disabled bindings never match and are
    /// hidden from help.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Reports whether `msg` triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Reports whether `msg` triggers any of `bindings`.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Collections of bindings that can describe themselves in a help view.
pub trait KeyMap {
    /// Bindings shown in the single-line help.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings shown in the expanded help, one inner `Vec` per column.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
