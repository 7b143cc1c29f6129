//! Value types shared by the sectioned list model and its presentation.

use std::collections::BTreeSet;
use std::fmt;

/// Row positions within one section that are currently switched on.
pub type EnabledIndexSet = BTreeSet<usize>;

/// Address of a row: which section, and which row inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct IndexPath {
    /// Section index.
    pub section: usize,
    /// Row index inside the section.
    pub row: usize,
}

impl IndexPath {
    /// Creates an index path.
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.section, self.row)
    }
}

impl From<(usize, usize)> for IndexPath {
    fn from((section, row): (usize, usize)) -> Self {
        Self::new(section, row)
    }
}

/// One toggleable preference.
///
/// `enabled` only seeds the initial state when the item is loaded. After
/// that the list's enabled set is authoritative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsItem {
    /// Identifier, unique within its section.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Initial toggle state.
    pub enabled: bool,
}

impl SettingsItem {
    /// Creates an item.
    pub fn new(id: impl Into<String>, title: impl Into<String>, enabled: bool) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            enabled,
        }
    }
}

impl fmt::Display for SettingsItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// An ordered group of items with optional header and footer titles.
///
/// ```rust
/// use sectioned_list::sectioned::{Section, SettingsItem};
///
/// let markets = Section::new(vec![SettingsItem::new("1", "a", true)])
///     .with_header("MARKETS");
/// assert_eq!(markets.header_title.as_deref(), Some("MARKETS"));
/// assert!(markets.footer_title.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Section {
    /// Items in user-visible order.
    pub items: Vec<SettingsItem>,
    /// Title rendered above the section.
    pub header_title: Option<String>,
    /// Title rendered below the section.
    pub footer_title: Option<String>,
}

impl Section {
    /// Creates a section without header or footer.
    pub fn new(items: Vec<SettingsItem>) -> Self {
        Self {
            items,
            header_title: None,
            footer_title: None,
        }
    }

    /// Sets the header title.
    pub fn with_header(mut self, title: impl Into<String>) -> Self {
        self.header_title = Some(title.into());
        self
    }

    /// Sets the footer title.
    pub fn with_footer(mut self, title: impl Into<String>) -> Self {
        self.footer_title = Some(title.into());
        self
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the section has no rows.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Errors returned by [`SectionedSelectableList`](super::SectionedSelectableList).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// The section or row does not exist.
    #[error("index path ({section}, {row}) is out of range")]
    OutOfRange {
        /// Requested section.
        section: usize,
        /// Requested row.
        row: usize,
    },
}

impl ListError {
    pub(crate) fn out_of_range(path: IndexPath) -> Self {
        Self::OutOfRange {
            section: path.section,
            row: path.row,
        }
    }
}
