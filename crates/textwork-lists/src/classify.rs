use std::sync::LazyLock;

use regex::Regex;

/// Indentation, marker, required separator, content.
static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*)([*\-•▪▫◦‣⁃]|[0-9]+\.|[ivxlcdmIVXLCDM]+\.|[a-zA-Z]+\.)\s+(.*)$")
        .expect("list item pattern is valid")
});

/// A line recognised as a list item. Borrowed from the line it came from and
/// recomputed on every edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ListLine<'a> {
    /// Leading whitespace, in characters.
    pub indent: usize,
    /// The raw leading whitespace.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub indent_text: &'a str,
    /// Marker including its trailing period, e.g. `"iv."` or `"•"`.
    pub marker: &'a str,
    /// Everything after the separator. May be empty.
    pub content: &'a str,
}

impl ListLine<'_> {
    /// Whether the item has nothing but whitespace after its marker.
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// Classify a single line. `None` means the line is not a list item and the
/// caller should fall back to its default behavior.
pub fn classify(line: &str) -> Option<ListLine<'_>> {
    let caps = LIST_ITEM.captures(line)?;
    let indent_text = caps.get(1).map_or("", |m| m.as_str());
    let marker = caps.get(2)?.as_str();
    let content = caps.get(3).map_or("", |m| m.as_str());

    Some(ListLine {
        indent: indent_text.chars().count(),
        indent_text,
        marker,
        content,
    })
}

/// Empty or whitespace-only.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
