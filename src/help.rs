//! Key binding help for the settings list.
//!
//! Renders any [`KeyMap`] either as a single line (`↑/k up • space toggle`)
//! or as aligned columns. Disabled bindings are skipped, and when a width is
//! set the output is cut short with an ellipsis.
//!
//! ```rust
//! use sectioned_list::help::Model;
//! use sectioned_list::settings::SettingsKeyMap;
//!
//! let help = Model::new();
//! let line = help.view(&SettingsKeyMap::default());
//! assert!(!line.is_empty());
//! ```

use crate::key::{Binding, KeyMap};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Styles for the help view.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Truncation marker.
    pub ellipsis: Style,
    /// Key label in the single-line view.
    pub short_key: Style,
    /// Description in the single-line view.
    pub short_desc: Style,
    /// Separator between entries in the single-line view.
    pub short_separator: Style,
    /// Key label in the column view.
    pub full_key: Style,
    /// Description in the column view.
    pub full_desc: Style,
    /// Gap between columns.
    pub full_separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let key_style = Style::new().foreground(AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        });
        let desc_style = Style::new().foreground(AdaptiveColor {
            Light: "#B2B2B2",
            Dark: "#4A4A4A",
        });
        let sep_style = Style::new().foreground(AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        });

        Self {
            ellipsis: sep_style.clone(),
            short_key: key_style.clone(),
            short_desc: desc_style.clone(),
            short_separator: sep_style.clone(),
            full_key: key_style,
            full_desc: desc_style,
            full_separator: sep_style,
        }
    }
}

/// The help view.
#[derive(Debug, Clone)]
pub struct Model {
    /// Render columns instead of a single line.
    pub show_all: bool,
    /// Maximum width in cells. 0 means unlimited.
    pub width: usize,
    /// Separator between single-line entries.
    pub short_separator: String,
    /// Gap between columns.
    pub full_separator: String,
    /// Truncation marker.
    pub ellipsis: String,
    /// Colors.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            show_all: false,
            width: 0,
            short_separator: " • ".to_string(),
            full_separator: "    ".to_string(),
            ellipsis: "…".to_string(),
            styles: Styles::default(),
        }
    }
}

impl Model {
    /// Creates a help view with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits the rendered width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders `keymap` in the current mode.
    pub fn view<K: KeyMap>(&self, keymap: &K) -> String {
        if self.show_all {
            self.full_help_view(keymap.full_help())
        } else {
            self.short_help_view(keymap.short_help())
        }
    }

    /// Renders bindings on one line.
    pub fn short_help_view(&self, bindings: Vec<&Binding>) -> String {
        let separator = self
            .styles
            .short_separator
            .clone()
            .inline(true)
            .render(&self.short_separator);

        let mut out = String::new();
        let mut total_width = 0;
        for binding in bindings.into_iter().filter(|b| b.enabled()) {
            let help = binding.help();
            let entry = format!(
                "{}{} {}",
                if total_width > 0 { separator.as_str() } else { "" },
                self.styles.short_key.clone().inline(true).render(&help.key),
                self.styles.short_desc.clone().inline(true).render(&help.desc),
            );
            let entry_width = lipgloss::width_visible(&entry);

            if let Some(tail) = self.overflow_tail(total_width, entry_width) {
                out.push_str(&tail);
                break;
            }
            total_width += entry_width;
            out.push_str(&entry);
        }
        out
    }

    /// Renders each group of bindings as a column.
    pub fn full_help_view(&self, groups: Vec<Vec<&Binding>>) -> String {
        let separator = self
            .styles
            .full_separator
            .clone()
            .inline(true)
            .render(&self.full_separator);
        let separator_width = lipgloss::width_visible(&separator);

        let mut columns: Vec<String> = Vec::new();
        let mut total_width = 0;
        for group in groups {
            let rows: Vec<String> = group
                .iter()
                .filter(|b| b.enabled())
                .map(|b| {
                    let help = b.help();
                    format!(
                        "{} {}",
                        self.styles.full_key.clone().inline(true).render(&help.key),
                        self.styles.full_desc.clone().inline(true).render(&help.desc),
                    )
                })
                .collect();
            if rows.is_empty() {
                continue;
            }

            let column = rows.join("\n");
            let gap = if columns.is_empty() { 0 } else { separator_width };
            let column_width = lipgloss::width_visible(&column) + gap;
            if let Some(tail) = self.overflow_tail(total_width, column_width) {
                if !tail.is_empty() {
                    columns.push(tail);
                }
                break;
            }
            total_width += column_width;
            columns.push(column);
        }

        if columns.is_empty() {
            return String::new();
        }
        let mut parts: Vec<&str> = Vec::with_capacity(columns.len() * 2);
        for (i, column) in columns.iter().enumerate() {
            if i > 0 {
                parts.push(separator.as_str());
            }
            parts.push(column.as_str());
        }
        lipgloss::join_horizontal(lipgloss::TOP, &parts)
    }

    // Some(tail) when the next entry would not fit; the tail is the ellipsis
    // if that still fits, otherwise empty.
    fn overflow_tail(&self, total_width: usize, next_width: usize) -> Option<String> {
        if self.width == 0 || total_width + next_width <= self.width {
            return None;
        }
        let tail = format!(
            " {}",
            self.styles.ellipsis.clone().inline(true).render(&self.ellipsis)
        );
        if total_width + lipgloss::width_visible(&tail) <= self.width {
            Some(tail)
        } else {
            Some(String::new())
        }
    }
}
