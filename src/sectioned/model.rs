//! The list model: sections plus one enabled set per section.

use super::types::{EnabledIndexSet, IndexPath, ListError, Section, SettingsItem};

/// An ordered list of sections whose rows can be toggled and reordered.
///
/// Rows are addressed by [`IndexPath`]. Each section carries an
/// [`EnabledIndexSet`] holding the row positions that are currently on. The
/// set is kept aligned with the items, so a row's state follows the row when
/// it is moved.
///
/// Rows may only be reordered inside their own section. A drag handler calls
/// [`clamp_target`](Self::clamp_target) on every position update and commits
/// with [`move_row`](Self::move_row) using the clamped destination.
///
/// # Examples
///
/// ```rust
/// use sectioned_list::sectioned::{IndexPath, SectionedSelectableList, sample};
///
/// let mut list = SectionedSelectableList::new(sample::sections());
/// assert_eq!(list.toggle(0, 0), Ok(false));
///
/// let from = IndexPath::new(0, 0);
/// let to = list.clamp_target(from, IndexPath::new(1, 2));
/// assert_eq!(to, IndexPath::new(0, 19));
///
/// list.move_row(from, to).unwrap();
/// assert!(!list.is_enabled(to));
/// assert_eq!(list.enabled_rows(0).map(|s| s.len()), Some(19));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionedSelectableList {
    sections: Vec<Section>,
    enabled: Vec<EnabledIndexSet>,
}

impl SectionedSelectableList {
    /// Creates a list and loads `sections` into it.
    pub fn new(sections: Vec<Section>) -> Self {
        let mut list = Self::default();
        list.load(sections);
        list
    }

    /// Replaces all state with `sections`.
    ///
    /// Every item whose `enabled` flag is set contributes its position to its
    /// section's enabled set.
    pub fn load(&mut self, sections: Vec<Section>) {
        self.enabled = sections
            .iter()
            .map(|section| {
                section
                    .items
                    .iter()
                    .enumerate()
                    .filter(|(_, item)| item.enabled)
                    .map(|(row, _)| row)
                    .collect()
            })
            .collect();
        self.sections = sections;
        log::debug!(
            "loaded {} sections with {} rows",
            self.sections.len(),
            self.sections.iter().map(Section::len).sum::<usize>()
        );
    }

    /// Flips the enabled state of a row and returns the new state.
    pub fn toggle(&mut self, section: usize, row: usize) -> Result<bool, ListError> {
        let path = IndexPath::new(section, row);
        if row >= self.row_count(section) {
            return Err(ListError::out_of_range(path));
        }
        let set = &mut self.enabled[section];
        let enabled = if set.remove(&row) {
            false
        } else {
            set.insert(row);
            true
        };
        log::debug!("toggled {} -> {}", path, enabled);
        Ok(enabled)
    }

    /// Every row can be moved.
    pub fn can_move(&self, _path: IndexPath) -> bool {
        true
    }

    /// Resolves the destination a drag from `source` may actually use.
    ///
    /// A destination in the source section is returned unchanged. A
    /// destination in a later section pins to the last row of the source
    /// section, and one in an earlier section pins to row 0.
    pub fn clamp_target(&self, source: IndexPath, proposed: IndexPath) -> IndexPath {
        if source.section == proposed.section {
            return proposed;
        }
        let row = if source.section < proposed.section {
            self.row_count(source.section).saturating_sub(1)
        } else {
            0
        };
        IndexPath::new(source.section, row)
    }

    /// Moves the row at `source` to `destination`, carrying its enabled state.
    ///
    /// `destination` must come from [`clamp_target`](Self::clamp_target),
    /// i.e. lie in the source section. This is not re-checked in release
    /// builds.
    ///
    /// Rows between the two positions shift by one toward `source`, as an
    /// array remove followed by an insert would leave them.
    pub fn move_row(&mut self, source: IndexPath, destination: IndexPath) -> Result<(), ListError> {
        if source.row >= self.row_count(source.section) {
            return Err(ListError::out_of_range(source));
        }
        debug_assert_eq!(
            source.section, destination.section,
            "move_row called across sections; clamp the destination first"
        );
        if destination.section >= self.sections.len() {
            return Err(ListError::out_of_range(destination));
        }
        let same_section = source.section == destination.section;
        let last_row = if same_section {
            self.row_count(destination.section) - 1
        } else {
            self.row_count(destination.section)
        };
        if destination.row > last_row {
            return Err(ListError::out_of_range(destination));
        }
        if source == destination {
            return Ok(());
        }

        let mut source_flags = self.flags(source.section);
        let item = self.sections[source.section].items.remove(source.row);
        let flag = source_flags.remove(source.row);

        if same_section {
            source_flags.insert(destination.row, flag);
        } else {
            log::warn!("cross-section move {} -> {}", source, destination);
            let mut destination_flags = self.flags(destination.section);
            destination_flags.insert(destination.row, flag);
            self.enabled[destination.section] = rows_from_flags(&destination_flags);
        }
        self.sections[destination.section]
            .items
            .insert(destination.row, item);
        self.enabled[source.section] = rows_from_flags(&source_flags);

        log::debug!("moved {} -> {}", source, destination);
        Ok(())
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Number of rows in `section`, or 0 if it does not exist.
    pub fn row_count(&self, section: usize) -> usize {
        self.sections.get(section).map_or(0, Section::len)
    }

    /// Whether the list has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(Section::is_empty)
    }

    /// All sections in order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// One section.
    pub fn section(&self, section: usize) -> Option<&Section> {
        self.sections.get(section)
    }

    /// The item at `path`.
    pub fn item(&self, path: IndexPath) -> Option<&SettingsItem> {
        self.sections
            .get(path.section)
            .and_then(|s| s.items.get(path.row))
    }

    /// Whether the row at `path` is on. Rows that do not exist are off.
    pub fn is_enabled(&self, path: IndexPath) -> bool {
        self.enabled
            .get(path.section)
            .is_some_and(|set| set.contains(&path.row))
    }

    /// The enabled set of `section`.
    pub fn enabled_rows(&self, section: usize) -> Option<&EnabledIndexSet> {
        self.enabled.get(section)
    }

    /// The enabled items of `section`, in their current order.
    pub fn enabled_items(&self, section: usize) -> Vec<&SettingsItem> {
        match (self.sections.get(section), self.enabled.get(section)) {
            (Some(s), Some(set)) => set.iter().filter_map(|&row| s.items.get(row)).collect(),
            _ => Vec::new(),
        }
    }

    fn flags(&self, section: usize) -> Vec<bool> {
        (0..self.row_count(section))
            .map(|row| self.enabled[section].contains(&row))
            .collect()
    }
}

fn rows_from_flags(flags: &[bool]) -> EnabledIndexSet {
    flags
        .iter()
        .enumerate()
        .filter(|&(_, &on)| on)
        .map(|(row, _)| row)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sectioned::sample;

    fn path(section: usize, row: usize) -> IndexPath {
        IndexPath::new(section, row)
    }

    fn ids(list: &SectionedSelectableList, section: usize) -> Vec<String> {
        list.section(section)
            .map(|s| s.items.iter().map(|i| i.id.clone()).collect())
            .unwrap_or_default()
    }

    fn enabled_ids(list: &SectionedSelectableList, section: usize) -> Vec<String> {
        let mut ids: Vec<String> = list
            .enabled_items(section)
            .into_iter()
            .map(|i| i.id.clone())
            .collect();
        ids.sort();
        ids
    }

    fn mixed() -> SectionedSelectableList {
        SectionedSelectableList::new(vec![
            Section::new(vec![
                SettingsItem::new("a", "A", true),
                SettingsItem::new("b", "B", false),
                SettingsItem::new("c", "C", true),
                SettingsItem::new("d", "D", false),
                SettingsItem::new("e", "E", true),
            ]),
            Section::new(vec![SettingsItem::new("x", "X", false)]),
        ])
    }

    #[test]
    fn test_load_seeds_enabled_sets_from_flags() {
        let list = mixed();
        assert_eq!(list.section_count(), 2);
        assert_eq!(list.enabled_rows(0), Some(&EnabledIndexSet::from([0, 2, 4])));
        assert_eq!(list.enabled_rows(1).map(|s| s.is_empty()), Some(true));
    }

    #[test]
    fn test_load_replaces_previous_state() {
        let mut list = mixed();
        list.toggle(0, 1).unwrap();
        list.load(vec![Section::new(vec![SettingsItem::new("z", "Z", false)])]);
        assert_eq!(list.section_count(), 1);
        assert_eq!(list.row_count(0), 1);
        assert!(!list.is_enabled(path(0, 0)));
        assert!(list.enabled_rows(1).is_none());
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let mut list = mixed();
        for section in 0..list.section_count() {
            for row in 0..list.row_count(section) {
                let before = list.is_enabled(path(section, row));
                assert_eq!(list.toggle(section, row), Ok(!before));
                assert_eq!(list.toggle(section, row), Ok(before));
            }
        }
        assert_eq!(list, mixed());
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut list = mixed();
        assert_eq!(
            list.toggle(0, 5),
            Err(ListError::OutOfRange { section: 0, row: 5 })
        );
        assert_eq!(
            list.toggle(2, 0),
            Err(ListError::OutOfRange { section: 2, row: 0 })
        );
    }

    #[test]
    fn test_can_move_is_always_true() {
        let list = mixed();
        assert!(list.can_move(path(0, 0)));
        assert!(list.can_move(path(1, 0)));
    }

    #[test]
    fn test_clamp_same_section_is_unchanged() {
        let list = mixed();
        assert_eq!(list.clamp_target(path(0, 4), path(0, 1)), path(0, 1));
    }

    #[test]
    fn test_clamp_pins_to_section_edges() {
        let list = SectionedSelectableList::new(sample::sections());
        assert_eq!(list.clamp_target(path(0, 3), path(1, 2)), path(0, 19));
        assert_eq!(list.clamp_target(path(1, 3), path(0, 7)), path(1, 0));
    }

    #[test]
    fn test_clamp_never_leaves_source_section() {
        let list = SectionedSelectableList::new(sample::sections());
        for source_section in 0..2 {
            for proposed_section in 0..3 {
                for row in 0..25 {
                    let clamped =
                        list.clamp_target(path(source_section, 0), path(proposed_section, row));
                    assert_eq!(clamped.section, source_section);
                }
            }
        }
    }

    #[test]
    fn test_clamp_on_empty_section_saturates() {
        let list = SectionedSelectableList::new(vec![Section::default(), Section::default()]);
        assert_eq!(list.clamp_target(path(0, 0), path(1, 0)), path(0, 0));
    }

    #[test]
    fn test_scenario_toggle_then_clamped_move_to_last_row() {
        let mut list = SectionedSelectableList::new(sample::sections());
        assert_eq!(list.row_count(0), 20);
        assert_eq!(list.row_count(1), 4);

        assert_eq!(list.toggle(0, 0), Ok(false));
        assert!(!list.enabled_rows(0).unwrap().contains(&0));

        let moved_id = list.item(path(0, 0)).unwrap().id.clone();
        let target = list.clamp_target(path(0, 0), path(1, 2));
        assert_eq!(target, path(0, 19));

        list.move_row(path(0, 0), target).unwrap();
        assert_eq!(list.item(path(0, 19)).unwrap().id, moved_id);
        assert!(!list.is_enabled(path(0, 19)));
        let expected: EnabledIndexSet = (0..19).collect();
        assert_eq!(list.enabled_rows(0), Some(&expected));
        assert_eq!(list.enabled_rows(1).map(|s| s.len()), Some(4));
    }

    #[test]
    fn test_scenario_move_up_within_section_shifts_rows() {
        let mut list = mixed();
        list.load(vec![Section::new(
            (0..8)
                .map(|i| SettingsItem::new(i.to_string(), format!("item {i}"), i % 2 == 0))
                .collect(),
        )]);
        let target = list.clamp_target(path(0, 5), path(0, 2));
        assert_eq!(target, path(0, 2));

        list.move_row(path(0, 5), target).unwrap();
        assert_eq!(ids(&list, 0), ["0", "1", "5", "2", "3", "4", "6", "7"]);
        // 5 was off; 2 and 4 were on and keep their state after shifting.
        assert!(!list.is_enabled(path(0, 2)));
        assert!(list.is_enabled(path(0, 3)));
        assert!(!list.is_enabled(path(0, 4)));
        assert!(list.is_enabled(path(0, 5)));
        assert_eq!(enabled_ids(&list, 0), ["0", "2", "4", "6"]);
    }

    #[test]
    fn test_move_and_back_round_trips() {
        let original = mixed();
        for from in 0..5 {
            for to in 0..5 {
                let mut list = original.clone();
                list.move_row(path(0, from), path(0, to)).unwrap();
                list.move_row(path(0, to), path(0, from)).unwrap();
                assert_eq!(list, original, "moving {from} -> {to} and back");
            }
        }
    }

    #[test]
    fn test_enabled_set_tracks_identity_over_many_moves() {
        let mut list = mixed();
        list.toggle(0, 1).unwrap(); // b on
        let moves = [(0, 4), (3, 1), (2, 2), (4, 0), (1, 3), (0, 2)];
        for (from, to) in moves {
            list.move_row(path(0, from), path(0, to)).unwrap();
        }
        assert_eq!(enabled_ids(&list, 0), ["a", "b", "c", "e"]);
        for row in 0..list.row_count(0) {
            let id = list.item(path(0, row)).unwrap().id.as_str();
            assert_eq!(list.is_enabled(path(0, row)), id != "d", "row {row} ({id})");
        }
    }

    #[test]
    fn test_move_to_same_position_is_noop() {
        let mut list = mixed();
        list.move_row(path(0, 2), path(0, 2)).unwrap();
        assert_eq!(list, mixed());

        list.move_row(path(1, 0), path(1, 0)).unwrap();
        assert_eq!(list, mixed());
    }

    #[test]
    fn test_move_out_of_range() {
        let mut list = mixed();
        assert_eq!(
            list.move_row(path(0, 5), path(0, 0)),
            Err(ListError::OutOfRange { section: 0, row: 5 })
        );
        assert_eq!(
            list.move_row(path(0, 0), path(0, 5)),
            Err(ListError::OutOfRange { section: 0, row: 5 })
        );
        assert_eq!(
            list.move_row(path(3, 0), path(3, 0)),
            Err(ListError::OutOfRange { section: 3, row: 0 })
        );
        assert_eq!(list, mixed());
    }

    #[test]
    fn test_accessors() {
        let list = mixed();
        assert!(!list.is_empty());
        assert_eq!(list.row_count(9), 0);
        assert_eq!(list.item(path(0, 2)).map(|i| i.title.as_str()), Some("C"));
        assert!(list.item(path(1, 1)).is_none());
        assert!(!list.is_enabled(path(7, 0)));
        assert!(list.enabled_items(7).is_empty());
        assert_eq!(list.sections().len(), 2);
        assert!(SectionedSelectableList::default().is_empty());
    }
}
