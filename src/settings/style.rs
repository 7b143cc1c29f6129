//! Styles and glyphs for the settings list.
//!
//! All colors are adaptive, so the defaults read well on both light and dark
//! terminals.
//!
//! ```rust
//! use sectioned_list::settings::style::SettingsStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = SettingsStyles::default();
//! styles.header = Style::new().bold(true);
//! ```

use lipgloss_extras::prelude::*;

/// Checkbox of a row that is on.
pub const CHECKED: &str = "[x]";
/// Checkbox of a row that is off.
pub const UNCHECKED: &str = "[ ]";
/// Reorder handle drawn at the end of each row.
pub const HANDLE: &str = "≡";
/// Marker in front of the cursor row.
pub const CURSOR: &str = "›";

/// Styles for [`Model`](super::Model).
#[derive(Debug, Clone)]
pub struct SettingsStyles {
    /// List title.
    pub title: Style,
    /// Section header titles.
    pub header: Style,
    /// Section footer titles.
    pub footer: Style,
    /// Ordinary rows.
    pub row: Style,
    /// The row under the cursor.
    pub cursor_row: Style,
    /// The row being dragged.
    pub dragging_row: Style,
    /// Checkbox of a row that is on.
    pub checked: Style,
    /// Checkbox of a row that is off.
    pub unchecked: Style,
    /// Reorder handle.
    pub handle: Style,
    /// Message shown when there are no rows.
    pub no_items: Style,
    /// Help area.
    pub help: Style,
}

impl Default for SettingsStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            header: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
            footer: Style::new().foreground(subdued.clone()).italic(true),
            row: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            cursor_row: Style::new().foreground(AdaptiveColor {
                Light: "#EE6FF8",
                Dark: "#EE6FF8",
            }),
            dragging_row: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#04B575",
                    Dark: "#ECFD65",
                })
                .bold(true),
            checked: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#04B575",
            }),
            unchecked: Style::new().foreground(subdued.clone()),
            handle: Style::new().foreground(subdued),
            no_items: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            help: Style::new().padding(1, 0, 0, 0),
        }
    }
}
