//! Line-level list operations behind Enter, Tab, and Shift+Tab.
//!
//! Each operation takes the whole document as a slice of lines plus the index
//! of the line being edited and describes the edit; applying it is up to the
//! host.

use crate::classify::classify;
use crate::context::find_sibling_marker;
use crate::marker::{MarkerKind, ROUND_BULLET};
use crate::resolve::resolve_kind;
use crate::step::{Direction, step};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContinueOptions {
    /// Rewrite a typed `*` to `•` on both the current and the new item.
    pub normalize_asterisk: bool,
}

impl Default for ContinueOptions {
    fn default() -> Self {
        Self {
            normalize_asterisk: true,
        }
    }
}

/// In-place replacement of a bullet glyph on the current line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphReplacement {
    /// Character column of the glyph.
    pub column: usize,
    pub text: String,
}

/// What Enter does on a list line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Continuation {
    /// Insert `insert` at the cursor and apply `glyph`, if any, to the
    /// current line.
    Continue {
        insert: String,
        marker: String,
        glyph: Option<GlyphReplacement>,
    },
    /// The item was empty: clear the line and insert a blank line, ending the
    /// list.
    Terminate,
}

/// Plan the Enter keypress on `lines[line_index]`. `None` when the line is not
/// a list item.
///
/// The host inserts the continuation at its cursor, so text after the cursor
/// moves into the new item.
pub fn continue_item<S: AsRef<str>>(
    lines: &[S],
    line_index: usize,
    options: ContinueOptions,
) -> Option<Continuation> {
    let line = lines.get(line_index)?.as_ref();
    let item = classify(line)?;

    if item.is_empty() {
        return Some(Continuation::Terminate);
    }

    let kind = resolve_kind(item.marker, item.indent, line_index, lines);
    let marker = if kind == MarkerKind::Bullet && !options.normalize_asterisk {
        item.marker.to_string()
    } else {
        step(item.marker, kind, Direction::Next)
    };

    let glyph = (kind == MarkerKind::Bullet && item.marker == "*" && options.normalize_asterisk)
        .then(|| GlyphReplacement {
            column: item.indent,
            text: ROUND_BULLET.to_string(),
        });

    log::debug!(
        "continue {} item {:?} -> {:?} at line {}",
        kind,
        item.marker,
        marker,
        line_index
    );

    Some(Continuation::Continue {
        insert: format!("\n{}{} ", item.indent_text, marker),
        marker,
        glyph,
    })
}

/// Plan the Tab keypress: the replacement text for the whole line, indented by
/// `tab_size` spaces and switched to the next kind down.
pub fn demote_item<S: AsRef<str>>(
    lines: &[S],
    line_index: usize,
    tab_size: usize,
) -> Option<String> {
    let line = lines.get(line_index)?.as_ref();
    let item = classify(line)?;

    let kind = resolve_kind(item.marker, item.indent, line_index, lines);
    let marker = step(item.marker, kind, Direction::DemoteChild);

    Some(format!(
        "{}{}{} {}",
        " ".repeat(tab_size),
        item.indent_text,
        marker,
        item.content
    ))
}

/// Plan the Shift+Tab keypress: the replacement text for the whole line. `None`
/// when the line is not a list item or is indented less than `tab_size`.
///
/// When an item already exists at the parent depth, the outdented line
/// continues that item's sequence; otherwise its kind cycles back up.
pub fn promote_item<S: AsRef<str>>(
    lines: &[S],
    line_index: usize,
    tab_size: usize,
) -> Option<String> {
    let line = lines.get(line_index)?.as_ref();
    let item = classify(line)?;

    if item.indent < tab_size {
        return None;
    }
    let target_indent = item.indent - tab_size;

    let marker = match find_sibling_marker(lines, line_index, target_indent) {
        Some(parent) => {
            let kind = resolve_kind(parent.marker, target_indent, parent.line_index, lines);
            step(parent.marker, kind, Direction::Next)
        }
        None => {
            let kind = resolve_kind(item.marker, item.indent, line_index, lines);
            step(item.marker, kind, Direction::PromoteParent)
        }
    };

    let remaining_indent: String = item.indent_text.chars().skip(tab_size).collect();
    Some(format!("{}{} {}", remaining_indent, marker, item.content))
}
