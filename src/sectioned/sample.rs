//! The demo data set: a "Topics" section with twenty rows and a "Markets"
//! section with four, every row switched on.

use super::types::{Section, SettingsItem};

const TOPICS: [&str; 20] = [
    "World News", "USWire", "c", "d", "e", "f", "g", "h", "i", "k", "k", "l", "m", "n", "o", "p",
    "q", "r", "s", "t",
];

const MARKETS: [&str; 4] = ["a", "b", "c", "d"];

fn section(titles: &[&str], header: &str) -> Section {
    let items = titles
        .iter()
        .enumerate()
        .map(|(i, title)| SettingsItem::new((i + 1).to_string(), *title, true))
        .collect();
    Section::new(items).with_header(header)
}

/// Returns the Topics and Markets sections.
pub fn sections() -> Vec<Section> {
    vec![section(&TOPICS, "TOPICS"), section(&MARKETS, "MARKETS")]
}
