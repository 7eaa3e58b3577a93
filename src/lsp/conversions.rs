use tower_lsp_server::ls_types::*;

use crate::editing;

/// Helper to convert LSP UTF-16 position to byte offset in UTF-8 string
pub(crate) fn position_to_offset(text: &str, position: Position) -> Option<usize> {
    let mut offset = 0;

    for (current_line, line) in text.split('\n').enumerate() {
        if current_line == position.line as usize {
            // LSP uses UTF-16 code units, Rust uses UTF-8 bytes
            let mut utf16_offset = 0;
            for (byte_idx, ch) in line.char_indices() {
                if utf16_offset >= position.character as usize {
                    return Some(offset + byte_idx);
                }
                utf16_offset += ch.len_utf16();
            }
            // Position is at or past end of line
            return Some(offset + line.len());
        }
        // +1 for newline character
        offset += line.len() + 1;
    }

    None
}

/// Character column on `line` for an LSP UTF-16 column, clamped to the line end.
pub(crate) fn char_column(line: &str, character: u32) -> usize {
    let mut utf16_offset = 0;
    for (idx, ch) in line.chars().enumerate() {
        if utf16_offset >= character as usize {
            return idx;
        }
        utf16_offset += ch.len_utf16();
    }
    line.chars().count()
}

pub(crate) fn from_lsp_position(lines: &[&str], position: Position) -> editing::Position {
    let line = position.line as usize;
    let column = lines
        .get(line)
        .map_or(0, |text| char_column(text, position.character));
    editing::Position::new(line, column)
}

pub(crate) fn to_lsp_position(lines: &[&str], position: editing::Position) -> Position {
    let character = lines.get(position.line).map_or(0, |text| {
        text.chars()
            .take(position.column)
            .map(char::len_utf16)
            .sum::<usize>()
    });
    Position {
        line: position.line as u32,
        character: character as u32,
    }
}

/// Convert an edit planned against `lines` to an LSP edit.
pub(crate) fn to_lsp_edit(lines: &[&str], edit: &editing::TextEdit) -> TextEdit {
    TextEdit {
        range: Range {
            start: to_lsp_position(lines, edit.range.start),
            end: to_lsp_position(lines, edit.range.end),
        },
        new_text: edit.new_text.clone(),
    }
}

/// Apply a single content change to text
pub(crate) fn apply_content_change(text: &str, change: &TextDocumentContentChangeEvent) -> String {
    match &change.range {
        Some(range) => {
            let start_offset = position_to_offset(text, range.start).unwrap_or(text.len());
            let end_offset = position_to_offset(text, range.end)
                .unwrap_or(text.len())
                .max(start_offset);

            let mut result =
                String::with_capacity(text.len() - (end_offset - start_offset) + change.text.len());
            result.push_str(&text[..start_offset]);
            result.push_str(&change.text);
            result.push_str(&text[end_offset..]);
            result
        }
        None => {
            // Full document update (fallback)
            change.text.clone()
        }
    }
}
