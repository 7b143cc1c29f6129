//! In-memory model behind a sectioned, toggleable, reorderable list.
//!
//! A [`SectionedSelectableList`] owns an ordered list of [`Section`]s. Each
//! section holds [`SettingsItem`]s in user-visible order and an
//! [`EnabledIndexSet`] of the rows that are switched on.
//!
//! ## Operations
//!
//! - [`load`](SectionedSelectableList::load) replaces everything and seeds
//!   the enabled sets from each item's `enabled` flag
//! - [`toggle`](SectionedSelectableList::toggle) flips one row
//! - [`clamp_target`](SectionedSelectableList::clamp_target) keeps a drag
//!   inside its own section
//! - [`move_row`](SectionedSelectableList::move_row) commits a reorder and
//!   carries the row's state along
//!
//! Sections themselves never move. Rows never leave their section: a drag
//! that wanders past the edge of its section is pinned to that edge.

mod model;
pub mod sample;
mod types;

pub use model::SectionedSelectableList;
pub use types::{EnabledIndexSet, IndexPath, ListError, Section, SettingsItem};
