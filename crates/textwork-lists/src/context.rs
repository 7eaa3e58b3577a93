use crate::classify::{classify, is_blank};

/// The nearest earlier list item at a given depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sibling<'a> {
    pub line_index: usize,
    pub marker: &'a str,
}

/// Walk upward from `line_index` (exclusive) looking for the closest list item
/// indented exactly `target_indent` characters.
///
/// Blank lines, prose, and deeper-nested items are skipped. A list item with a
/// smaller indent ends the search: the scan has left the nesting level.
pub fn find_sibling_marker<S: AsRef<str>>(
    lines: &[S],
    line_index: usize,
    target_indent: usize,
) -> Option<Sibling<'_>> {
    let end = line_index.min(lines.len());
    for (idx, line) in lines[..end].iter().enumerate().rev() {
        let line = line.as_ref();
        if is_blank(line) {
            continue;
        }
        let Some(item) = classify(line) else {
            continue;
        };
        if item.indent == target_indent {
            log::trace!("sibling {:?} at line {} (indent {})", item.marker, idx, target_indent);
            return Some(Sibling {
                line_index: idx,
                marker: item.marker,
            });
        }
        if item.indent < target_indent {
            log::trace!("nesting boundary at line {} (indent {})", idx, item.indent);
            return None;
        }
    }
    None
}
