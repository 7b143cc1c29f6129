//! View rendering for the settings list.
//!
//! The body is built line by line: per section an optional header, the rows
//! in display order, an optional footer, and a blank line between sections.
//! While a row is picked up its section is shown in the order the drop would
//! produce, so the row visibly travels with the drag before the model is
//! touched.

use super::style::{CHECKED, CURSOR, HANDLE, UNCHECKED};
use super::Model;
use crate::sectioned::{IndexPath, SettingsItem};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

impl Model {
    pub(super) fn view_title(&self) -> String {
        if self.title.is_empty() {
            return String::new();
        }
        self.styles.title.clone().render(&self.title)
    }

    pub(super) fn view_body(&self) -> String {
        if self.list.is_empty() {
            return self.styles.no_items.clone().render("No settings.");
        }
        let lines = self.body_lines();
        let visible: Vec<String> = if self.height == 0 {
            lines
        } else {
            lines
                .into_iter()
                .skip(self.viewport_start)
                .take(self.height)
                .collect()
        };
        visible.join("\n")
    }

    pub(super) fn view_help(&self) -> String {
        if !self.show_help {
            return String::new();
        }
        let help = self.help.view(self);
        if help.is_empty() {
            return help;
        }
        self.styles.help.clone().render(&help)
    }

    /// Row order of `section` as currently displayed, as indices into the
    /// model's order.
    pub(super) fn display_order(&self, section: usize) -> Vec<usize> {
        let mut rows: Vec<usize> = (0..self.list.row_count(section)).collect();
        if let Some(drag) = self.drag {
            if drag.origin.section == section
                && drag.target.section == section
                && drag.origin.row < rows.len()
                && drag.target.row < rows.len()
            {
                let row = rows.remove(drag.origin.row);
                rows.insert(drag.target.row, row);
            }
        }
        rows
    }

    /// Index of the body line that shows the row at `path`.
    pub(super) fn body_line_of(&self, path: IndexPath) -> usize {
        let sections = self.list.sections();
        let before: usize = sections
            .iter()
            .take(path.section)
            .map(|s| {
                usize::from(s.header_title.is_some())
                    + s.len()
                    + usize::from(s.footer_title.is_some())
                    + 1
            })
            .sum();
        let header = sections
            .get(path.section)
            .map_or(0, |s| usize::from(s.header_title.is_some()));
        before + header + path.row
    }

    fn body_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (index, section) in self.list.sections().iter().enumerate() {
            if index > 0 {
                lines.push(String::new());
            }
            if let Some(header) = &section.header_title {
                lines.push(self.styles.header.clone().render(header));
            }
            for (position, row) in self.display_order(index).into_iter().enumerate() {
                let shown_at = IndexPath::new(index, position);
                let source = IndexPath::new(index, row);
                if let Some(item) = self.list.item(source) {
                    lines.push(self.render_row(item, self.list.is_enabled(source), shown_at));
                }
            }
            if let Some(footer) = &section.footer_title {
                lines.push(self.styles.footer.clone().render(footer));
            }
        }
        lines
    }

    fn render_row(&self, item: &SettingsItem, enabled: bool, shown_at: IndexPath) -> String {
        let dragging = self.drag.is_some_and(|d| d.target == shown_at);
        let at_cursor = self.cursor == shown_at;

        let marker = if at_cursor { CURSOR } else { " " };
        let checkbox = if enabled {
            self.styles.checked.clone().render(CHECKED)
        } else {
            self.styles.unchecked.clone().render(UNCHECKED)
        };

        // marker + space + checkbox + space, and " ≡" when reordering
        let chrome = 2 + UNCHECKED.width() + 1 + if self.editing { 1 + HANDLE.width() } else { 0 };
        let title = fit(&item.title, self.width.saturating_sub(chrome));
        let title_style = if dragging {
            &self.styles.dragging_row
        } else if at_cursor {
            &self.styles.cursor_row
        } else {
            &self.styles.row
        };
        let mut line = format!(
            "{} {} {}",
            marker,
            checkbox,
            title_style.clone().render(&title)
        );
        if self.editing {
            line.push(' ');
            line.push_str(&self.styles.handle.clone().render(HANDLE));
        }
        line
    }
}

/// Pads or truncates `text` to exactly `width` terminal cells.
pub(super) fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        return format!("{}{}", text, " ".repeat(width - text.width()));
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_pads_short_text() {
        assert_eq!(fit("abc", 6), "abc   ");
        assert_eq!(fit("abc", 3), "abc");
    }

    #[test]
    fn test_fit_truncates_long_text() {
        assert_eq!(fit("World News", 6), "World…");
        assert_eq!(fit("World News", 1), "…");
        assert_eq!(fit("World News", 0), "");
    }

    #[test]
    fn test_fit_counts_wide_characters() {
        // Each CJK character is two cells wide.
        assert_eq!(fit("日本語", 6), "日本語");
        assert_eq!(fit("日本語", 5), "日本…");
    }
}
